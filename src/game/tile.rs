//! Tile: a clickable rectangular region with a mutable color state.

use ratatui::layout::{Position, Rect};

/// The palette a revealed tile can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileColor {
    Red,
    Yellow,
    Blue,
    Green,
}

impl TileColor {
    pub const ALL: [TileColor; 4] = [
        TileColor::Red,
        TileColor::Yellow,
        TileColor::Blue,
        TileColor::Green,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TileColor::Red => "red",
            TileColor::Yellow => "yellow",
            TileColor::Blue => "blue",
            TileColor::Green => "green",
        }
    }
}

/// A clickable rectangle with a color state. `None` is the blank
/// ("not yet revealed") state; blank tiles render white.
///
/// Geometry is fixed at construction. Drawing is done by the ui layer
/// from `rect()` and `color()`.
#[derive(Debug, Clone)]
pub struct Tile {
    rect: Rect,
    color: Option<TileColor>,
}

impl Tile {
    /// Create a blank tile with fixed geometry.
    pub fn new(rect: Rect) -> Self {
        Self { rect, color: None }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn color(&self) -> Option<TileColor> {
        self.color
    }

    /// Hit test over [left, left+width) x [top, top+height).
    pub fn is_selected(&self, column: u16, row: u16) -> bool {
        self.rect.contains(Position::new(column, row))
    }

    pub fn is_blank(&self) -> bool {
        self.color.is_none()
    }

    pub fn set_color(&mut self, color: TileColor) {
        self.color = Some(color);
    }

    /// Flip back to blank. Idempotent.
    pub fn reset(&mut self) {
        self.color = None;
    }

    /// True iff both tiles are revealed and show the same color.
    pub fn matches(&self, other: &Tile) -> bool {
        match (self.color, other.color) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(x: u16, y: u16, w: u16, h: u16) -> Tile {
        Tile::new(Rect::new(x, y, w, h))
    }

    #[test]
    fn test_hit_test_bounds() {
        let t = tile(10, 5, 4, 3);
        // left/top edges are inside, right/bottom edges are not
        assert!(t.is_selected(10, 5));
        assert!(t.is_selected(13, 7));
        assert!(!t.is_selected(14, 5));
        assert!(!t.is_selected(10, 8));
        assert!(!t.is_selected(9, 5));
        assert!(!t.is_selected(10, 4));
    }

    #[test]
    fn test_matches_is_symmetric() {
        let mut a = tile(0, 0, 2, 2);
        let mut b = tile(4, 0, 2, 2);
        for ca in TileColor::ALL {
            for cb in TileColor::ALL {
                a.set_color(ca);
                b.set_color(cb);
                assert_eq!(a.matches(&b), b.matches(&a));
                assert_eq!(a.matches(&b), ca == cb);
            }
        }
    }

    #[test]
    fn test_blank_never_matches() {
        let mut a = tile(0, 0, 2, 2);
        let b = tile(4, 0, 2, 2);
        assert!(!a.matches(&b));
        a.set_color(TileColor::Blue);
        assert!(!a.matches(&b));
        assert!(!b.matches(&a));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut t = tile(0, 0, 2, 2);
        t.set_color(TileColor::Red);
        t.reset();
        assert!(t.is_blank());
        t.reset();
        assert!(t.is_blank());
    }
}
