mod board;
mod layout;
mod score_bar;
mod status_bar;
mod theme;

use crate::app::state::GameState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &GameState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    // Background fill first, everything else on top
    frame.render_widget(Block::default().style(theme::Theme::background()), area);
    score_bar::render(frame, app_layout.score_bar, state);
    board::render(frame, app_layout.board, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
