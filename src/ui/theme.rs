use crate::game::tile::TileColor;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    /// Surface fill behind everything.
    pub fn background() -> Style {
        Style::default().bg(Color::Black)
    }

    /// Face of a tile. Blank tiles show white.
    pub fn tile(color: Option<TileColor>) -> Style {
        let bg = match color {
            None => Color::White,
            Some(TileColor::Red) => Color::Red,
            Some(TileColor::Yellow) => Color::Yellow,
            Some(TileColor::Blue) => Color::Blue,
            Some(TileColor::Green) => Color::Green,
        };
        Style::default().bg(bg)
    }

    pub fn score_text() -> Style {
        Style::default().fg(Color::White).bg(Color::Black)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn game_over() -> Style {
        Style::default()
            .fg(Color::Red)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }
}
