//! Fiber length brackets and distance classification

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Discrete fiber cable length category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum FiberBracket {
    M5,
    M50,
    M80,
    M100,
    M120,
    M150,
    M200,
    M250,
    M300,
    M350,
    M600,
}

impl FiberBracket {
    /// All brackets, shortest first
    pub const ALL: [FiberBracket; 11] = [
        FiberBracket::M5,
        FiberBracket::M50,
        FiberBracket::M80,
        FiberBracket::M100,
        FiberBracket::M120,
        FiberBracket::M150,
        FiberBracket::M200,
        FiberBracket::M250,
        FiberBracket::M300,
        FiberBracket::M350,
        FiberBracket::M600,
    ];

    pub const LONGEST: FiberBracket = FiberBracket::M600;

    /// Smallest bracket whose length covers `distance` meters.
    ///
    /// Distances beyond the longest bracket are clamped to it.
    pub fn classify(distance: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|bracket| distance <= bracket.meters())
            .unwrap_or(Self::LONGEST)
    }

    pub const fn rank(self) -> usize {
        self as usize
    }

    pub const fn meters(self) -> f64 {
        match self {
            FiberBracket::M5 => 5.0,
            FiberBracket::M50 => 50.0,
            FiberBracket::M80 => 80.0,
            FiberBracket::M100 => 100.0,
            FiberBracket::M120 => 120.0,
            FiberBracket::M150 => 150.0,
            FiberBracket::M200 => 200.0,
            FiberBracket::M250 => 250.0,
            FiberBracket::M300 => 300.0,
            FiberBracket::M350 => 350.0,
            FiberBracket::M600 => 600.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FiberBracket::M5 => "Fibra 5m",
            FiberBracket::M50 => "Fibra 50m",
            FiberBracket::M80 => "Fibra 80m",
            FiberBracket::M100 => "Fibra 100m",
            FiberBracket::M120 => "Fibra 120m",
            FiberBracket::M150 => "Fibra 150m",
            FiberBracket::M200 => "Fibra 200m",
            FiberBracket::M250 => "Fibra 250m",
            FiberBracket::M300 => "Fibra 300m",
            FiberBracket::M350 => "Fibra 350m",
            FiberBracket::M600 => "Fibra 600m",
        }
    }

    /// Color used for this bracket in diagrams and map exports
    pub const fn color(self) -> &'static str {
        match self {
            FiberBracket::M5 => "red",
            FiberBracket::M50 => "orange",
            FiberBracket::M80 => "yellow",
            FiberBracket::M100 => "green",
            FiberBracket::M120 => "blue",
            FiberBracket::M150 => "purple",
            FiberBracket::M200 => "brown",
            FiberBracket::M250 => "pink",
            FiberBracket::M300 => "gray",
            FiberBracket::M350 => "cyan",
            FiberBracket::M600 => "magenta",
        }
    }
}

impl fmt::Display for FiberBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FiberBracket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|bracket| bracket.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::ConfigurationError(format!("unknown fiber bracket '{wanted}'")))
    }
}

impl From<FiberBracket> for &'static str {
    fn from(bracket: FiberBracket) -> Self {
        bracket.label()
    }
}

impl TryFrom<String> for FiberBracket {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_smallest_covering_bracket() {
        assert_eq!(FiberBracket::classify(0.0), FiberBracket::M5);
        assert_eq!(FiberBracket::classify(5.0), FiberBracket::M5);
        assert_eq!(FiberBracket::classify(5.01), FiberBracket::M50);
        assert_eq!(FiberBracket::classify(99.9), FiberBracket::M100);
        assert_eq!(FiberBracket::classify(350.0), FiberBracket::M350);
        assert_eq!(FiberBracket::classify(350.5), FiberBracket::M600);
    }

    #[test]
    fn clamps_long_spans_to_longest_bracket() {
        assert_eq!(FiberBracket::classify(600_000.0), FiberBracket::M600);
        assert_eq!(FiberBracket::classify(600_000.0).label(), "Fibra 600m");
    }

    #[test]
    fn classification_is_monotonic() {
        let mut previous = FiberBracket::classify(0.0);
        for step in 0..2_000 {
            let current = FiberBracket::classify(f64::from(step) * 0.5);
            assert!(previous.rank() <= current.rank());
            previous = current;
        }
    }

    #[test]
    fn ranks_follow_table_order() {
        for (idx, bracket) in FiberBracket::ALL.iter().enumerate() {
            assert_eq!(bracket.rank(), idx);
        }
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        assert_eq!("fibra 80M".parse::<FiberBracket>().unwrap(), FiberBracket::M80);
        assert!(matches!(
            "Fibra 75m".parse::<FiberBracket>(),
            Err(Error::ConfigurationError(_))
        ));
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&FiberBracket::M120).unwrap();
        assert_eq!(json, "\"Fibra 120m\"");
        let back: FiberBracket = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FiberBracket::M120);
    }
}
