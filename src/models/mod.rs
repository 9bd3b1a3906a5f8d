// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod place;
pub mod position;
pub mod restaurant;

pub use place::*;
pub use position::*;
pub use restaurant::*;
