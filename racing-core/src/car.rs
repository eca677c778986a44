//! Car - a named racer with a position on the track

use serde::{Deserialize, Serialize};

use crate::error::{RaceError, Result};

/// Longest allowed car name, in characters
pub const MAX_NAME_LENGTH: usize = 5;

/// Minimum power needed to move one step forward
pub const MOVE_THRESHOLD: u8 = 4;

/// A single racer
///
/// Deserializing goes through the same name validation as [`Car::new`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredCar")]
pub struct Car {
    name: String,
    position: u32,
}

impl Car {
    /// Create a car at the start line
    ///
    /// The name is trimmed, must not be blank and must be at most
    /// [`MAX_NAME_LENGTH`] characters long.
    pub fn new(raw_name: &str) -> Result<Self> {
        Self::with_position(raw_name, 0)
    }

    /// Create a car at a known position (e.g. restored from a stored game)
    pub fn with_position(raw_name: &str, position: u32) -> Result<Self> {
        let name = validate_name(raw_name)?;
        Ok(Self { name, position })
    }

    /// Move one step if `power` reaches [`MOVE_THRESHOLD`]
    pub fn advance(&mut self, power: u8) {
        if power >= MOVE_THRESHOLD {
            self.position = self.position.saturating_add(1);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn is_at(&self, position: u32) -> bool {
        self.position == position
    }
}

/// Unvalidated wire form of a car
#[derive(Deserialize)]
struct StoredCar {
    name: String,
    position: u32,
}

impl TryFrom<StoredCar> for Car {
    type Error = RaceError;

    fn try_from(stored: StoredCar) -> Result<Self> {
        Car::with_position(&stored.name, stored.position)
    }
}

fn validate_name(raw_name: &str) -> Result<String> {
    let name = raw_name.trim();
    if name.is_empty() {
        return Err(RaceError::BlankName);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(RaceError::NameTooLong {
            name: name.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(name.to_string())
}
