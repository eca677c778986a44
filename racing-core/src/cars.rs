//! Cars - the ordered lineup of a race

use rustc_hash::FxHashSet;

use crate::car::Car;
use crate::error::{RaceError, Result};
use crate::power::PowerSource;

/// Ordered, non-empty lineup of uniquely named cars
///
/// Insertion order is the reporting order for positions and winners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cars {
    cars: Vec<Car>,
}

impl Cars {
    /// Build a lineup from raw names
    ///
    /// Each name goes through [`Car::new`]; the first invalid or duplicate name
    /// aborts construction.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut cars = Vec::new();

        for raw in names {
            let car = Car::new(raw.as_ref())?;
            if !seen.insert(car.name().to_string()) {
                return Err(RaceError::DuplicateName(car.name().to_string()));
            }
            cars.push(car);
        }

        if cars.is_empty() {
            return Err(RaceError::EmptyParticipants);
        }

        Ok(Self { cars })
    }

    /// Run one turn: every car takes its own draw, in lineup order
    pub fn advance_all<P: PowerSource + ?Sized>(&mut self, source: &mut P) {
        for car in &mut self.cars {
            car.advance(source.draw());
        }
    }

    /// Furthest position reached by any car
    pub fn max_position(&self) -> u32 {
        self.cars.iter().map(Car::position).max().unwrap_or(0)
    }

    /// All cars sharing the furthest position, in lineup order
    pub fn winners(&self) -> Vec<&Car> {
        let max = self.max_position();
        self.cars.iter().filter(|car| car.is_at(max)).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Car> {
        self.cars.iter()
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    /// Always false for a constructed lineup
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

impl<'a> IntoIterator for &'a Cars {
    type Item = &'a Car;
    type IntoIter = std::slice::Iter<'a, Car>;

    fn into_iter(self) -> Self::IntoIter {
        self.cars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::ScriptedPower;

    fn names(cars: &[&Car]) -> Vec<String> {
        cars.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn test_lineup_preserves_order() {
        let cars = Cars::new(["pobi", "crong", "honux"]).unwrap();
        let order: Vec<&str> = cars.iter().map(Car::name).collect();
        assert_eq!(order, vec!["pobi", "crong", "honux"]);
        assert_eq!(cars.len(), 3);
    }

    #[test]
    fn test_empty_lineup_rejected() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(Cars::new(empty), Err(RaceError::EmptyParticipants));
    }

    #[test]
    fn test_duplicate_rejected() {
        assert_eq!(
            Cars::new(["ann", "ann"]),
            Err(RaceError::DuplicateName("ann".to_string()))
        );
    }

    #[test]
    fn test_duplicate_detected_after_trim() {
        assert_eq!(
            Cars::new(["ann", " ann "]),
            Err(RaceError::DuplicateName("ann".to_string()))
        );
    }

    #[test]
    fn test_invalid_name_short_circuits() {
        assert!(matches!(
            Cars::new(["123456"]),
            Err(RaceError::NameTooLong { .. })
        ));
        // First failure wins, later duplicates are never reached
        assert_eq!(Cars::new(["ok", "", "ok"]), Err(RaceError::BlankName));
    }

    #[test]
    fn test_advance_all_uses_one_draw_per_car() {
        let mut cars = Cars::new(["a", "b", "c"]).unwrap();
        let mut power = ScriptedPower::new(vec![9, 0, 4]);

        cars.advance_all(&mut power);

        assert_eq!(power.draws(), 3);
        let positions: Vec<u32> = cars.iter().map(Car::position).collect();
        assert_eq!(positions, vec![1, 0, 1]);
    }

    #[test]
    fn test_single_winner() {
        let mut cars = Cars::new(["a", "b"]).unwrap();
        cars.advance_all(&mut ScriptedPower::new(vec![9, 1]));
        assert_eq!(names(&cars.winners()), vec!["a"]);
        assert_eq!(cars.max_position(), 1);
    }

    #[test]
    fn test_tied_winners_keep_order() {
        let mut cars = Cars::new(["a", "b", "c"]).unwrap();
        cars.advance_all(&mut ScriptedPower::new(vec![5, 2, 7]));
        assert_eq!(names(&cars.winners()), vec!["a", "c"]);
    }

    #[test]
    fn test_everyone_wins_at_zero() {
        let mut cars = Cars::new(["a", "b"]).unwrap();
        cars.advance_all(&mut ScriptedPower::constant(0));
        assert_eq!(names(&cars.winners()), vec!["a", "b"]);
    }
}
