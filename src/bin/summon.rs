// src/bin/summon.rs
// DOCUMENTATION: Terminal front-end for the lunch selector
// PURPOSE: Summon one restaurant through a running relay and show the history

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use lunchlord::errors::LocationError;
use lunchlord::models::{canonical_cuisine, Position, RecentResults, Restaurant, CUISINE_TYPES};
use lunchlord::services::{
    FixedLocation, JsonFileStore, RelayClient, SeededRandom, Selector, SelectorOptions,
    DEFAULT_RELAY_URL,
};
use std::env;
use std::process;
use std::time::Duration;

// --- ANSI colors ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";

fn print_header() {
    println!("{}╔══════════════════════════════════════╗{}", MAGENTA, RESET);
    println!("{}║   🍴 Fork It!                        ║{}", MAGENTA, RESET);
    println!("{}║   Because someone has to decide.     ║{}", MAGENTA, RESET);
    println!("{}╚══════════════════════════════════════╝{}", MAGENTA, RESET);
}

fn print_restaurant(tag: &str, restaurant: &Restaurant) {
    println!("\n{}{}{}", CYAN, tag, RESET);
    println!("{}{}{}", BOLD, restaurant.name, RESET);
    println!("{}", restaurant.type_field);
    println!("{}{}{}", DIM, restaurant.address, RESET);
    if let Some(rating) = restaurant.rating {
        println!("Rating: {} ⭐", rating);
    }
}

fn print_recent(recent: &RecentResults) {
    if recent.is_empty() {
        return;
    }

    println!("\n{}📋 Recent Results{}", BOLD, RESET);
    println!("──────────────────────────────────────");
    for restaurant in recent.iter() {
        println!("  • {} {}({}){}", restaurant.name, DIM, restaurant.type_field, RESET);
    }
}

fn location_from_env() -> Result<FixedLocation> {
    match env::var("LUNCH_LOCATION") {
        Ok(raw) => {
            let position: Position = raw
                .parse()
                .map_err(anyhow::Error::msg)
                .context("LUNCH_LOCATION must look like 'lat,lng'")?;
            Ok(FixedLocation::at(position))
        }
        Err(_) => Ok(FixedLocation::failing(LocationError::PositionUnavailable)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let requested = env::args()
        .nth(1)
        .or_else(|| env::var("LUNCH_CUISINE").ok())
        .unwrap_or_default();

    if requested == "--list" {
        for cuisine in CUISINE_TYPES {
            println!("{}", cuisine);
        }
        return Ok(());
    }

    let Some(cuisine) = canonical_cuisine(&requested) else {
        bail!(
            "Unknown cuisine '{}'. Choose one of: {}",
            requested,
            CUISINE_TYPES.join(", ")
        );
    };

    let relay_url = env::var("RELAY_URL").unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string());
    let relay_timeout: u64 = env::var("RELAY_TIMEOUT_SECS")
        .unwrap_or_else(|_| "15".to_string())
        .parse()
        .unwrap_or(15);
    let store_dir = env::var("RECENT_RESULTS_DIR").unwrap_or_else(|_| ".lunchlord".to_string());

    let relay = RelayClient::new(relay_url, Duration::from_secs(relay_timeout))
        .context("Failed to build relay HTTP client")?;

    print_header();

    if !relay.check_health().await {
        println!("{}❌ Relay unavailable at {}.{}", RED, relay.base_url(), RESET);
        println!("{}Please ensure the relay is running (cargo run){}", YELLOW, RESET);
        process::exit(1);
    }

    let selector = Selector::new(
        location_from_env()?,
        relay,
        JsonFileStore::new(store_dir),
        SeededRandom::from_entropy(),
        SelectorOptions::default(),
    );

    println!("\n{}✨ Summoning {} lunch...{}", GREEN, cuisine, RESET);

    let cancel = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    match selector.summon_until(cuisine, cancel).await {
        Ok(restaurant) => {
            print_restaurant(selector.oracle_tag(), &restaurant);
            print_recent(&selector.recent());
            Ok(())
        }
        Err(e) => {
            println!("\n{}{}{}", RED, e.user_message(), RESET);
            print_recent(&selector.recent());
            process::exit(1);
        }
    }
}
