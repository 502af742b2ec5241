use crate::config::GameConfig;
use crate::game::tile::{Tile, TileColor};
use rand::rngs::StdRng;
use rand::RngExt;
use std::time::Instant;

/// Index into `GameState::tiles`.
pub type TileId = usize;

/// The turn-taking state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Turn {
    /// No tile revealed.
    Idle,
    /// Exactly one tile revealed, awaiting its partner. The named tile is
    /// non-blank while its partner is still blank.
    OneRevealed(TileId),
    /// Both revealed and compared; colors stay on screen until the
    /// deadline, then flip back. Clicks are dropped until then.
    Resolving { until: Instant },
}

#[derive(Debug)]
pub struct GameState {
    pub config: GameConfig,
    pub tiles: [Tile; 2],
    pub score_match: u32,
    pub score_mismatch: u32,
    pub turn: Turn,
    /// False once the mismatch limit is reached; tile clicks stop being
    /// handled but the event loop keeps running.
    pub playing: bool,
    pub should_quit: bool,
    pub dirty: bool,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::make_rng())
    }

    /// Construct with a caller-supplied rng so color selection can be
    /// seeded deterministically in tests.
    pub fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let tiles = config.tile_rects.map(Tile::new);
        Self {
            config,
            tiles,
            score_match: 0,
            score_mismatch: 0,
            turn: Turn::Idle,
            playing: true,
            should_quit: false,
            dirty: false,
            rng,
        }
    }

    /// The tile under the given cell, if any. The two tiles never overlap.
    pub fn tile_at(&self, column: u16, row: u16) -> Option<TileId> {
        self.tiles.iter().position(|t| t.is_selected(column, row))
    }

    /// Uniformly random palette color.
    pub fn random_color(&mut self) -> TileColor {
        TileColor::ALL[self.rng.random_range(0..TileColor::ALL.len())]
    }
}
