//! Board model: the tile track, its zones and the final tile.

use std::collections::BTreeMap;

use hexzone_core::TileIndex;
use hexzone_core::error::DomainError;
use hexzone_core::rng::DeterministicRng;
use serde::{Deserialize, Serialize};

use super::attribute::Attribute;

/// Number of tiles on a standard board.
pub const DEFAULT_NUM_TILES: u32 = 50;

/// Largest board a session may be configured with.
pub const MAX_NUM_TILES: u32 = 10_000;

/// Chance that any given tile starts as a zone.
pub const DEFAULT_ZONE_PROBABILITY: f64 = 0.2;

/// Number of items kept on the board.
pub const DEFAULT_ITEM_COUNT: u32 = 3;

/// Static board parameters fixed at session creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of tiles; the last one is the final tile.
    pub num_tiles: u32,
    /// Probability that a tile is generated as a zone.
    pub zone_probability: f64,
    /// Number of items on the board at all times.
    pub item_count: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            num_tiles: DEFAULT_NUM_TILES,
            zone_probability: DEFAULT_ZONE_PROBABILITY,
            item_count: DEFAULT_ITEM_COUNT,
        }
    }
}

impl BoardConfig {
    /// Checks that the parameters describe a playable board.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the board has fewer than two
    /// or more than `MAX_NUM_TILES` tiles, no items, more items than tiles, or a zone probability
    /// outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.num_tiles < 2 {
            return Err(DomainError::Validation(format!(
                "board needs at least 2 tiles, got {}",
                self.num_tiles
            )));
        }
        if self.num_tiles > MAX_NUM_TILES {
            return Err(DomainError::Validation(format!(
                "board may have at most {MAX_NUM_TILES} tiles, got {}",
                self.num_tiles
            )));
        }
        if self.item_count == 0 {
            return Err(DomainError::Validation(
                "board needs at least one item".to_owned(),
            ));
        }
        if self.item_count > self.num_tiles {
            return Err(DomainError::Validation(format!(
                "cannot place {} items on {} tiles",
                self.item_count, self.num_tiles
            )));
        }
        if !(0.0..=1.0).contains(&self.zone_probability) {
            return Err(DomainError::Validation(format!(
                "zone probability must be within [0, 1], got {}",
                self.zone_probability
            )));
        }
        Ok(())
    }

    /// The unique win tile.
    #[must_use]
    pub fn final_tile(&self) -> TileIndex {
        self.num_tiles - 1
    }
}

/// The track plus the zones that have not been neutralized yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    config: BoardConfig,
    zones: BTreeMap<TileIndex, Attribute>,
}

impl Board {
    /// Lays out zones: every tile independently becomes a zone with
    /// `config.zone_probability`, with a uniformly drawn attribute.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `config` is not playable.
    pub fn generate(
        config: BoardConfig,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Self, DomainError> {
        config.validate()?;
        let mut zones = BTreeMap::new();
        for tile in 0..config.num_tiles {
            if rng.next_f64() < config.zone_probability {
                zones.insert(tile, Attribute::random(rng));
            }
        }
        Ok(Self { config, zones })
    }

    /// Builds a board with an explicit zone layout.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `config` is not playable and
    /// `DomainError::InvalidTile` if a zone lies off the board.
    pub fn with_zones(
        config: BoardConfig,
        zones: BTreeMap<TileIndex, Attribute>,
    ) -> Result<Self, DomainError> {
        config.validate()?;
        let board = Self {
            config,
            zones: BTreeMap::new(),
        };
        for &tile in zones.keys() {
            board.check_tile(tile)?;
        }
        Ok(Self { zones, ..board })
    }

    /// Board parameters.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Number of tiles on the track.
    #[must_use]
    pub fn num_tiles(&self) -> u32 {
        self.config.num_tiles
    }

    /// The unique win tile.
    #[must_use]
    pub fn final_tile(&self) -> TileIndex {
        self.config.final_tile()
    }

    /// Rejects tiles outside `[0, num_tiles)`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTile` for an out-of-range index.
    pub fn check_tile(&self, tile: TileIndex) -> Result<(), DomainError> {
        if tile < self.config.num_tiles {
            Ok(())
        } else {
            Err(DomainError::InvalidTile {
                tile,
                num_tiles: self.config.num_tiles,
            })
        }
    }

    /// Returns `true` if `tile` is still a zone.
    #[must_use]
    pub fn is_zone(&self, tile: TileIndex) -> bool {
        self.zones.contains_key(&tile)
    }

    /// Attribute of the zone on `tile`, if any.
    #[must_use]
    pub fn zone_attribute(&self, tile: TileIndex) -> Option<Attribute> {
        self.zones.get(&tile).copied()
    }

    /// Turns `tile` into a plain tile for the rest of the game.
    /// Neutralizing a plain tile is a no-op.
    pub fn neutralize(&mut self, tile: TileIndex) {
        self.zones.remove(&tile);
    }

    /// Remaining zones by tile.
    #[must_use]
    pub fn zones(&self) -> &BTreeMap<TileIndex, Attribute> {
        &self.zones
    }

    /// Clamped neighbours of `position`; informational only.
    #[must_use]
    pub fn adjacent_tiles(&self, position: TileIndex) -> [TileIndex; 2] {
        [
            position.saturating_sub(1),
            position.saturating_add(1).min(self.final_tile()),
        ]
    }
}
