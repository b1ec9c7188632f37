//! The three cyclic attributes carried by pieces and zones.

use std::fmt;

use hexzone_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};

/// Attribute of a piece or zone.
///
/// Dominance is cyclic: red beats green, green beats blue, blue beats red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Beats green.
    Red,
    /// Beats red.
    Blue,
    /// Beats blue.
    Green,
}

/// What happens when a piece enters a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneContact {
    /// Same attribute: the piece passes and the zone stays.
    Safe,
    /// The piece dominates: the zone is removed for good.
    Neutralize,
    /// The zone dominates: the piece goes back to start.
    Defeat,
}

impl Attribute {
    /// All attributes, in draw order.
    pub const ALL: [Attribute; 3] = [Attribute::Red, Attribute::Blue, Attribute::Green];

    /// Draws an attribute uniformly at random.
    pub fn random(rng: &mut dyn DeterministicRng) -> Self {
        Self::ALL[rng.next_index(Self::ALL.len())]
    }

    /// Returns `true` if `self` dominates `other`.
    #[must_use]
    pub fn beats(self, other: Attribute) -> bool {
        matches!(
            (self, other),
            (Attribute::Red, Attribute::Green)
                | (Attribute::Green, Attribute::Blue)
                | (Attribute::Blue, Attribute::Red)
        )
    }

    /// Classifies a piece with attribute `self` entering a zone of `zone`.
    #[must_use]
    pub fn contact(self, zone: Attribute) -> ZoneContact {
        if self == zone {
            ZoneContact::Safe
        } else if self.beats(zone) {
            ZoneContact::Neutralize
        } else {
            ZoneContact::Defeat
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::Red => "red",
            Attribute::Blue => "blue",
            Attribute::Green => "green",
        };
        f.write_str(name)
    }
}
