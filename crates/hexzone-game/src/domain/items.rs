//! Item pool: the tiles currently holding an uncollected item.

use std::collections::BTreeSet;

use hexzone_core::TileIndex;
use hexzone_core::error::DomainError;
use hexzone_core::rng::DeterministicRng;

/// Fixed-size set of item positions.
///
/// The pool always holds exactly `count` distinct tiles; a pickup is
/// immediately followed by a respawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPool {
    num_tiles: u32,
    tiles: BTreeSet<TileIndex>,
}

impl ItemPool {
    /// Places `count` items on distinct tiles drawn uniformly without
    /// replacement from `[0, num_tiles)`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `count > num_tiles`.
    pub fn scatter(
        num_tiles: u32,
        count: u32,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Self, DomainError> {
        if count > num_tiles {
            return Err(DomainError::Validation(format!(
                "cannot place {count} items on {num_tiles} tiles"
            )));
        }
        let mut candidates: Vec<TileIndex> = (0..num_tiles).collect();
        let mut tiles = BTreeSet::new();
        for _ in 0..count {
            let pick = rng.next_index(candidates.len());
            tiles.insert(candidates.swap_remove(pick));
        }
        Ok(Self { num_tiles, tiles })
    }

    /// Builds a pool from explicit positions.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTile` if a position lies off the board
    /// and `DomainError::Validation` if positions repeat.
    pub fn from_tiles(num_tiles: u32, positions: &[TileIndex]) -> Result<Self, DomainError> {
        let mut tiles = BTreeSet::new();
        for &tile in positions {
            if tile >= num_tiles {
                return Err(DomainError::InvalidTile { tile, num_tiles });
            }
            if !tiles.insert(tile) {
                return Err(DomainError::Validation(format!(
                    "two items on tile {tile}"
                )));
            }
        }
        Ok(Self { num_tiles, tiles })
    }

    /// Size of the board the pool respawns over.
    #[must_use]
    pub fn num_tiles(&self) -> u32 {
        self.num_tiles
    }

    /// Returns `true` if an item lies on `tile`.
    #[must_use]
    pub fn is_item_at(&self, tile: TileIndex) -> bool {
        self.tiles.contains(&tile)
    }

    /// Picks up the item on `tile` and respawns it on a uniformly chosen
    /// tile that holds no item (the emptied tile included). Returns the
    /// respawn tile.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if no item lies on `tile`; the
    /// pool is left untouched.
    pub fn collect(
        &mut self,
        tile: TileIndex,
        rng: &mut dyn DeterministicRng,
    ) -> Result<TileIndex, DomainError> {
        if !self.tiles.remove(&tile) {
            return Err(DomainError::Validation(format!("no item on tile {tile}")));
        }
        let free: Vec<TileIndex> = (0..self.num_tiles)
            .filter(|t| !self.tiles.contains(t))
            .collect();
        let respawn = free[rng.next_index(free.len())];
        self.tiles.insert(respawn);
        Ok(respawn)
    }

    /// Item positions in ascending order.
    #[must_use]
    pub fn positions(&self) -> Vec<TileIndex> {
        self.tiles.iter().copied().collect()
    }

    /// Number of items on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns `true` if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
