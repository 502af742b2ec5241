use crate::app::state::GameState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Block;

/// Draw both tiles as filled rectangles at their fixed geometry, clipped
/// to the board area on small terminals.
pub fn render(frame: &mut Frame, area: Rect, state: &GameState) {
    for tile in &state.tiles {
        let face = tile.rect().intersection(area);
        if face.is_empty() {
            continue;
        }
        frame.render_widget(Block::default().style(Theme::tile(tile.color())), face);
    }
}
