use crate::app::state::GameState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &GameState) {
    let (text, style) = if state.playing {
        (
            " Click two tiles to reveal their colors | q to quit ",
            Theme::status_bar(),
        )
    } else {
        (" Game over! Press q to quit ", Theme::game_over())
    };

    let line = Line::from(Span::styled(text, style));
    frame.render_widget(Paragraph::new(line).style(Theme::status_bar()), area);
}
