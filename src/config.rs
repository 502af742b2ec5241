//! Construction-time game constants.
//!
//! There is no config file and no CLI flags; everything tunable is fixed
//! here and threaded through [`GameConfig`].

use ratatui::layout::Rect;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Cadence of the tick task.
    pub tick_rate: Duration,
    /// How long both revealed colors stay on screen after a comparison.
    pub reveal_pause: Duration,
    /// Mismatch count that ends the game.
    pub mismatch_limit: u32,
    /// Fixed geometry of the two tiles, in terminal cells.
    pub tile_rects: [Rect; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // 60 FPS = ~16ms
            tick_rate: Duration::from_millis(16),
            reveal_pause: Duration::from_secs(1),
            mismatch_limit: 5,
            // Two tall tiles flanking the center of a ~64x24 surface
            tile_rects: [Rect::new(15, 7, 10, 8), Rect::new(38, 7, 10, 8)],
        }
    }
}
