use crate::app::state::GameState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// "Match: N" at the left edge, "Mismatch: N" right-aligned to its own
/// rendered width at the right edge.
pub fn render(frame: &mut Frame, area: Rect, state: &GameState) {
    let match_label = format!("Match: {}", state.score_match);
    let mismatch_label = format!("Mismatch: {}", state.score_mismatch);

    frame.render_widget(
        Paragraph::new(match_label).style(Theme::score_text()),
        area,
    );

    let width = (mismatch_label.width() as u16).min(area.width);
    let x = area.right().saturating_sub(width).max(area.x);
    let right = Rect::new(x, area.y, width, area.height);
    frame.render_widget(
        Paragraph::new(mismatch_label).style(Theme::score_text()),
        right,
    );
}
