//! Heuristic evaluation functions.
//!
//! All heuristics are pure functions of the four board counters. Positive
//! scores favor White under `Standard`, Red under `Bad`; `Equalize` rewards
//! material parity regardless of side; `Combined` blends all three with
//! weights picked from a nine-cell table keyed on who leads in pieces and
//! who leads in kings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::error::ParseHeuristicError;
use super::state::Board;

/// Named scoring functions selectable at search time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Piece differential for White, kings worth an extra half piece
    Standard,
    /// Mirror of `Standard`: piece differential for Red
    Bad,
    /// Rewards keeping the piece counts close
    Equalize,
    /// Weighted blend of the other three (also parses as "average")
    Combined,
}

impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Heuristic::Standard),
            "bad" => Ok(Heuristic::Bad),
            "equalize" => Ok(Heuristic::Equalize),
            "combined" | "average" => Ok(Heuristic::Combined),
            _ => Err(ParseHeuristicError {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Standard => write!(f, "standard"),
            Heuristic::Bad => write!(f, "bad"),
            Heuristic::Equalize => write!(f, "equalize"),
            Heuristic::Combined => write!(f, "combined"),
        }
    }
}

impl Board {
    /// Score the position under the given heuristic.
    #[must_use]
    pub fn evaluate(&self, heuristic: Heuristic) -> f64 {
        match heuristic {
            Heuristic::Standard => self.standard_score(),
            Heuristic::Bad => self.bad_score(),
            Heuristic::Equalize => self.equalize_score(),
            Heuristic::Combined => {
                let (w_standard, w_equalize, w_bad) = self.blend_weights();
                w_standard * self.standard_score()
                    + w_equalize * self.equalize_score()
                    + w_bad * self.bad_score()
            }
        }
    }

    /// High piece differential for White is better
    fn standard_score(&self) -> f64 {
        f64::from(self.white_left()) - f64::from(self.red_left())
            + 0.5 * (f64::from(self.white_kings()) - f64::from(self.red_kings()))
    }

    /// High piece differential for Red is better
    fn bad_score(&self) -> f64 {
        f64::from(self.red_left()) - f64::from(self.white_left())
            + 0.5 * (f64::from(self.red_kings()) - f64::from(self.white_kings()))
    }

    /// Piece differential close to zero is better
    fn equalize_score(&self) -> f64 {
        10.0 - (f64::from(self.red_left()) - f64::from(self.white_left())).abs()
    }

    /// Blend weights (standard, equalize, bad) for `Combined`.
    ///
    /// When White trails in pieces, `standard` dominates; when White leads,
    /// `bad` dominates; at parity `equalize` dominates. Within each case the
    /// king balance nudges the dominant weight up or down.
    fn blend_weights(&self) -> (f64, f64, f64) {
        let pieces = self.white_left().cmp(&self.red_left());
        let kings = self.white_kings().cmp(&self.red_kings());
        match (pieces, kings) {
            (Ordering::Less, Ordering::Less) => (0.65, 0.30, 0.05),
            (Ordering::Less, Ordering::Greater) => (0.45, 0.35, 0.15),
            (Ordering::Less, Ordering::Equal) => (0.55, 0.35, 0.10),
            (Ordering::Greater, Ordering::Less) => (0.15, 0.40, 0.45),
            (Ordering::Greater, Ordering::Greater) => (0.05, 0.30, 0.65),
            (Ordering::Greater, Ordering::Equal) => (0.10, 0.35, 0.55),
            (Ordering::Equal, Ordering::Less) => (0.40, 0.55, 0.05),
            (Ordering::Equal, Ordering::Greater) => (0.225, 0.55, 0.225),
            (Ordering::Equal, Ordering::Equal) => (0.32, 0.50, 0.18),
        }
    }
}
