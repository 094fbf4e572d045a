mod lot;
mod types;
mod upload;

use crate::lot::ParkingLot;
use crate::types::Vehicle;
use env_logger::Env;
use failure::Error;
use log::{error, info};
use std::env;
use std::io::{self, BufRead, Lines, StdinLock, Write};

#[macro_use]
extern crate failure;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    info!("Starting parking-sim");
    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("Exiting main");
}

async fn run() -> Result<(), Error> {
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    let square_footage = prompt_integer(&mut input, "Enter parking lot size (square footage): ")?;
    let mut lot = ParkingLot::new(square_footage);
    info!("Lot holds {} spots", lot.spot_count());

    let car_count = prompt_integer(&mut input, "Enter number of cars: ")?;
    let mut rng = rand::thread_rng();
    let cars: Vec<Vehicle> = (0..car_count)
        .map(|_| Vehicle::with_random_plate(&mut rng))
        .collect();

    let outcome = lot.assign_randomly(cars, &mut rng);
    for ticket in &outcome.tickets {
        println!("{}", ticket);
    }
    if outcome.unplaced.is_empty() {
        println!("All cars parked, {} cars in total.", outcome.tickets.len());
    } else {
        println!(
            "Parking lot full, only {} cars parked; {} cars left unplaced.",
            outcome.tickets.len(),
            outcome.unplaced.len()
        );
    }
    println!("Vehicle map: {:?}", lot.snapshot());

    let path = env::args().nth(1).unwrap_or_else(|| "default.json".to_string());
    lot.save_to_file(&path)?;
    info!("Snapshot written to {}", path);

    if env::var("OBJECT_STORE_URL").is_ok() {
        let bucket =
            env::var("OBJECT_STORE_BUCKET").unwrap_or_else(|_| "default_bucket".to_string());
        upload::put_object(&path, &bucket).await?;
        info!("Snapshot uploaded to bucket {}", bucket);
    } else {
        info!("OBJECT_STORE_URL unset; skipping upload");
    }
    Ok(())
}

fn prompt_integer(input: &mut Lines<StdinLock<'_>>, prompt: &str) -> Result<u64, Error> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let line = input
        .next()
        .ok_or_else(|| format_err!("No input on stdin"))??;
    let line = line.trim();
    line.parse::<u64>()
        .map_err(|_| format_err!("Expected an integer, got {:?}", line))
}
