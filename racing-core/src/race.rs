//! Race driver - runs a full game from validated inputs
//!
//! ## Flow
//!
//! 1. Build the lineup ([`Cars`]) from names
//! 2. Parse the turn count ([`GameCount`])
//! 3. Each turn: every car draws once, then the turn is recorded
//! 4. Report final positions and winners

use serde::{Deserialize, Serialize};

use crate::car::Car;
use crate::cars::Cars;
use crate::error::Result;
use crate::game_count::GameCount;
use crate::names::{split_names, NAME_DELIMITER};
use crate::power::PowerSource;

/// Final position of one car
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarPosition {
    pub name: String,
    pub position: u32,
}

impl From<&Car> for CarPosition {
    fn from(car: &Car) -> Self {
        Self {
            name: car.name().to_string(),
            position: car.position(),
        }
    }
}

/// Result of a finished race
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceOutcome {
    /// Number of turns played
    pub turns: u32,
    /// Final positions in lineup order
    pub positions: Vec<CarPosition>,
    /// Names of every car at the furthest position, in lineup order
    pub winners: Vec<String>,
}

impl RaceOutcome {
    /// Winner names joined with the name delimiter (e.g. `"pobi,woni"`)
    pub fn winners_joined(&self) -> String {
        self.winners.join(NAME_DELIMITER.to_string().as_str())
    }

    /// Final position of the named car
    pub fn position_of(&self, name: &str) -> Option<u32> {
        self.positions
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.position)
    }
}

/// Run a race over already split names
///
/// All validation happens before the first turn; once the lineup and count
/// are built the race itself cannot fail.
pub fn simulate<S, P>(names: &[S], raw_count: &str, source: &mut P) -> Result<RaceOutcome>
where
    S: AsRef<str>,
    P: PowerSource + ?Sized,
{
    let mut cars = Cars::new(names)?;
    let mut count = GameCount::parse(raw_count)?;

    tracing::debug!("Starting race: {} cars, {} turns", cars.len(), count.total());

    while count.has_remaining() {
        cars.advance_all(source);
        count.advance_once();
        tracing::debug!(
            "Turn {}/{}: leader at {}",
            count.completed(),
            count.total(),
            cars.max_position()
        );
    }

    let outcome = RaceOutcome {
        turns: count.total(),
        positions: cars.iter().map(CarPosition::from).collect(),
        winners: cars.winners().iter().map(|c| c.name().to_string()).collect(),
    };

    tracing::info!(
        "Race finished after {} turns, winners: {}",
        outcome.turns,
        outcome.winners_joined()
    );

    Ok(outcome)
}

/// Run a race from raw comma-separated names
pub fn play<P>(raw_names: &str, raw_count: &str, source: &mut P) -> Result<RaceOutcome>
where
    P: PowerSource + ?Sized,
{
    let names = split_names(raw_names);
    simulate(names.as_slice(), raw_count, source)
}
