use rand::Rng;
use std::fmt;

/// A car, identified by its license plate alone. Plates are not
/// guaranteed unique; collisions are possible and unhandled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    plate: String,
}

impl Vehicle {
    pub fn new(plate: String) -> Vehicle {
        Vehicle { plate }
    }

    /// Generates a vehicle with a random plate: three uppercase letters
    /// followed by seven digits, e.g. "KQZ4418306".
    pub fn with_random_plate<R: Rng>(rng: &mut R) -> Vehicle {
        let mut plate = String::with_capacity(10);
        for _ in 0..3 {
            plate.push(char::from(rng.gen_range(b'A'..=b'Z')));
        }
        for _ in 0..7 {
            plate.push(char::from(b'0' + rng.gen_range(0u8..10)));
        }
        Vehicle::new(plate)
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Car with license plate {}", self.plate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_plate_has_fixed_format() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let car = Vehicle::with_random_plate(&mut rng);
            let plate = car.plate();
            assert_eq!(plate.len(), 10, "unexpected plate {:?}", plate);
            assert!(plate[..3].chars().all(|c| c.is_ascii_uppercase()));
            assert!(plate[3..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn displays_with_plate() {
        let car = Vehicle::new("XYZ0000001".to_string());
        assert_eq!(car.to_string(), "Car with license plate XYZ0000001");
    }
}
