use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub score_bar: Rect,
    pub board: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Score bar
            Constraint::Min(1),    // Board
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        score_bar: chunks[0],
        board: chunks[1],
        status_bar: chunks[2],
    }
}
