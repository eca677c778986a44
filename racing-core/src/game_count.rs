//! GameCount - how many turns a race runs

use crate::error::{RaceError, Result};

/// Configured turn total and how many turns have been played
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameCount {
    total: u32,
    completed: u32,
}

impl GameCount {
    /// Parse a raw turn count; must be a positive integer
    pub fn parse(raw: &str) -> Result<Self> {
        let total = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| RaceError::InvalidCount(raw.to_string()))?;

        u32::try_from(total)
            .ok()
            .and_then(|total| Self::new(total).ok())
            .ok_or_else(|| RaceError::InvalidCount(raw.to_string()))
    }

    /// Create from an already numeric total
    pub fn new(total: u32) -> Result<Self> {
        if total == 0 {
            return Err(RaceError::InvalidCount(total.to_string()));
        }
        Ok(Self { total, completed: 0 })
    }

    pub fn has_remaining(&self) -> bool {
        self.completed < self.total
    }

    /// Record one played turn
    ///
    /// Callers must check [`has_remaining`](Self::has_remaining) first.
    pub fn advance_once(&mut self) {
        assert!(
            self.has_remaining(),
            "advance_once called after all {} turns were played",
            self.total
        );
        self.completed += 1;
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn remaining(&self) -> u32 {
        self.total - self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let count = GameCount::parse("3").unwrap();
        assert_eq!(count.total(), 3);
        assert_eq!(count.completed(), 0);
        assert!(count.has_remaining());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(GameCount::parse(" 10 ").unwrap().total(), 10);
    }

    #[test]
    fn test_parse_accepts_explicit_plus_sign() {
        assert_eq!(GameCount::parse("+5").unwrap().total(), 5);
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert_eq!(GameCount::parse("0"), Err(RaceError::InvalidCount("0".to_string())));
        assert_eq!(GameCount::parse("-1"), Err(RaceError::InvalidCount("-1".to_string())));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(GameCount::parse("abc"), Err(RaceError::InvalidCount("abc".to_string())));
        assert!(GameCount::parse("").is_err());
        assert!(GameCount::parse("1.5").is_err());
        assert!(GameCount::parse("99999999999").is_err());
    }

    #[test]
    fn test_counts_down_to_zero() {
        let mut count = GameCount::new(2).unwrap();
        count.advance_once();
        assert_eq!(count.remaining(), 1);
        count.advance_once();
        assert!(!count.has_remaining());
        assert_eq!(count.completed(), 2);
    }

    #[test]
    #[should_panic(expected = "advance_once called after all 1 turns")]
    fn test_advance_past_total_panics() {
        let mut count = GameCount::new(1).unwrap();
        count.advance_once();
        count.advance_once();
    }
}
