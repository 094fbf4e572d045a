use crate::types::Vehicle;
use failure::{Error, Fail};
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::path::Path;

/// Default spot dimensions; one spot covers 96 square feet.
const DEFAULT_SPOT_LENGTH: u64 = 8;
const DEFAULT_SPOT_WIDTH: u64 = 12;

/// A fixed-capacity lot. The lot is the sole owner of its slots; all
/// mutation goes through `park`.
pub struct ParkingLot {
    slots: Vec<Option<Vehicle>>,
}

#[derive(Debug, Fail)]
pub enum ParkError {
    /// The rejected vehicle is handed back to the caller.
    #[fail(display = "{} could not park in spot {}, already occupied", vehicle, spot)]
    SpotOccupied { vehicle: Vehicle, spot: usize },
    #[fail(display = "spot {} does not exist, the lot has {} spots", spot, spot_count)]
    NoSuchSpot {
        vehicle: Vehicle,
        spot: usize,
        spot_count: usize,
    },
}

/// Proof that a vehicle was placed; displays as the status line the
/// driver prints.
#[derive(Debug)]
pub struct ParkTicket {
    pub spot: usize,
    pub plate: String,
}

impl fmt::Display for ParkTicket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Car with license plate {} parked successfully in spot {}",
            self.plate, self.spot
        )
    }
}

pub struct AssignmentOutcome {
    pub tickets: Vec<ParkTicket>,
    pub unplaced: Vec<Vehicle>,
}

impl ParkingLot {
    /// A lot sized by square footage with the default spot dimensions.
    /// Anything smaller than one spot's area yields a zero-slot lot.
    pub fn new(square_footage: u64) -> ParkingLot {
        ParkingLot::with_spot_size(square_footage, DEFAULT_SPOT_LENGTH, DEFAULT_SPOT_WIDTH)
    }

    pub fn with_spot_size(square_footage: u64, spot_length: u64, spot_width: u64) -> ParkingLot {
        let spot_count = (square_footage / (spot_length * spot_width)) as usize;
        ParkingLot {
            slots: vec![None; spot_count],
        }
    }

    pub fn spot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    pub fn is_occupied(&self, spot: usize) -> bool {
        matches!(self.slots.get(spot), Some(Some(_)))
    }

    /// Places the vehicle in the given spot if it is vacant. An occupied
    /// or out-of-range spot leaves the lot untouched and returns the
    /// vehicle inside the error.
    pub fn park(&mut self, spot: usize, vehicle: Vehicle) -> Result<ParkTicket, ParkError> {
        let spot_count = self.slots.len();
        match self.slots.get_mut(spot) {
            None => Err(ParkError::NoSuchSpot {
                vehicle,
                spot,
                spot_count,
            }),
            Some(Some(_)) => Err(ParkError::SpotOccupied { vehicle, spot }),
            Some(slot) => {
                let ticket = ParkTicket {
                    spot,
                    plate: vehicle.plate().to_string(),
                };
                *slot = Some(vehicle);
                Ok(ticket)
            }
        }
    }

    /// Assigns cars to uniformly random vacant spots until every car is
    /// placed or the lot is full. Cars are taken last-generated first;
    /// occupied draws are redrawn until a vacant spot comes up.
    pub fn assign_randomly<R: Rng>(
        &mut self,
        mut cars: Vec<Vehicle>,
        rng: &mut R,
    ) -> AssignmentOutcome {
        let mut tickets = Vec::new();
        loop {
            // Re-scan occupancy every iteration; a zero-slot lot counts
            // as full and parks nothing.
            if self.is_full() {
                break;
            }
            let car = match cars.pop() {
                Some(car) => car,
                None => break,
            };
            let spot = loop {
                let candidate = rng.gen_range(0..self.slots.len());
                if !self.is_occupied(candidate) {
                    break candidate;
                }
            };
            match self.park(spot, car) {
                Ok(ticket) => tickets.push(ticket),
                // The spot was vacant and in range, so park cannot have
                // rejected it; hold on to the car if it ever does.
                Err(ParkError::SpotOccupied { vehicle, .. })
                | Err(ParkError::NoSuchSpot { vehicle, .. }) => cars.push(vehicle),
            }
        }
        AssignmentOutcome {
            tickets,
            unplaced: cars,
        }
    }

    /// Spot index to license plate, occupied slots only, ascending.
    pub fn snapshot(&self) -> BTreeMap<usize, String> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(spot, slot)| slot.as_ref().map(|car| (spot, car.plate().to_string())))
            .collect()
    }

    /// Writes `snapshot()` as a JSON object (decimal-string keys) to
    /// `path`, overwriting any existing file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| format_err!("Unable to create {}: {}", path.display(), e))?;
        serde_json::to_writer(file, &self.snapshot())
            .map_err(|e| format_err!("Unable to write snapshot to {}: {}", path.display(), e))?;
        Ok(())
    }
}
