// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod google_places_client;
pub mod location;
pub mod random;
pub mod relay_client;
pub mod selector;
pub mod storage;

pub use google_places_client::*;
pub use location::*;
pub use random::*;
pub use relay_client::*;
pub use selector::*;
pub use storage::*;
