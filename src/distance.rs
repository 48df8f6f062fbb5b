//! Shortest-path distances with an explicit "no path" marker.
//!
//! Potential arithmetic (`d + h(v) - h(u)`) is only ever applied to finite values, so there is
//! no floating-point infinity to turn into NaN along the way.
//!
//! Edge weights are `i64`, path lengths are `i128`. A path visited by Bellman-Ford has fewer than
//! `|V| * |E|` edges, so its length stays below `|V| * |E| * 2^63` in magnitude and fits in
//! `i128` for any graph that fits in memory. Relaxation therefore always sees the exact length,
//! and a negative cycle keeps producing strict improvements no matter how heavy its edges are.

use std::fmt;
use std::ops::Add;

use serde_derive::{Deserialize, Serialize};

/// Edge weights.
pub type Weight = i64;

/// Path lengths and vertex potentials.
pub type Length = i128;

/// A distance between two vertices.
///
/// The derived ordering puts every `Finite` value below `Unreachable`, which is exactly the
/// order relaxation needs. Serialized as a number, or `null` when unreachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Option<Length>", into = "Option<Length>")]
pub enum Distance {
    Finite(Length),
    Unreachable,
}

impl Distance {
    pub fn zero() -> Distance {
        Distance::Finite(0)
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(self) -> Option<Length> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }

    /// Shifts a finite distance by `h(to) - h(from)`. `Unreachable` is absorbing.
    pub fn shift(self, from: Length, to: Length) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(to).saturating_sub(from)),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Distance::Unreachable
    }
}

impl From<Length> for Distance {
    fn from(value: Length) -> Self {
        Distance::Finite(value)
    }
}

impl From<Option<Length>> for Distance {
    fn from(value: Option<Length>) -> Self {
        value.map_or(Distance::Unreachable, Distance::Finite)
    }
}

impl From<Distance> for Option<Length> {
    fn from(distance: Distance) -> Self {
        distance.finite()
    }
}

/// Extends a path by one edge.
impl Add<Length> for Distance {
    type Output = Distance;

    fn add(self, weight: Length) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(weight)),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreachable => f.pad("inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_orders_below_unreachable() {
        assert!(Distance::Finite(Length::MAX) < Distance::Unreachable);
        assert!(Distance::Finite(-5) < Distance::Finite(3));
        assert_eq!(
            std::cmp::min(Distance::Unreachable, Distance::Finite(7)),
            Distance::Finite(7)
        );
    }

    #[test]
    fn unreachable_absorbs_arithmetic() {
        assert_eq!(Distance::Unreachable + 4, Distance::Unreachable);
        assert_eq!(Distance::Unreachable + -4, Distance::Unreachable);
        assert_eq!(Distance::Unreachable.shift(-3, 10), Distance::Unreachable);
    }

    #[test]
    fn shift_applies_potential_difference() {
        // d + h(to) - h(from)
        assert_eq!(Distance::Finite(4).shift(-2, -5), Distance::Finite(1));
        assert_eq!(Distance::zero().shift(-1, -1), Distance::zero());
    }

    #[test]
    fn weight_sums_beyond_i64_stay_exact() {
        let min = Length::from(Weight::MIN);
        let twice_min = Distance::Finite(min) + min;
        assert_eq!(twice_min, Distance::Finite(2 * min));
        assert!(twice_min + -1 < twice_min);
        assert_eq!(Distance::from(Length::from(Weight::MAX)) + 1, Distance::Finite(Length::from(Weight::MAX) + 1));
    }

    #[test]
    fn display_and_json() {
        assert_eq!(Distance::Finite(-2).to_string(), "-2");
        assert_eq!(Distance::Unreachable.to_string(), "inf");
        assert_eq!(serde_json::to_string(&Distance::Finite(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Distance::Unreachable).unwrap(), "null");
        let back: Vec<Distance> = serde_json::from_str("[1, null]").unwrap();
        assert_eq!(back, vec![Distance::Finite(1), Distance::Unreachable]);
        let huge = Distance::Finite(2 * Length::from(Weight::MIN));
        let json = serde_json::to_string(&huge).unwrap();
        assert_eq!(json, "-18446744073709551616");
        assert_eq!(serde_json::from_str::<Distance>(&json).unwrap(), huge);
    }
}
