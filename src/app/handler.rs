use crate::app::event::AppEvent;
use crate::app::state::{GameState, Turn};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Instant;
use tracing::{debug, info};

/// Apply one event to the game state. All turn-machine transitions live
/// here; unrecognized events are silent no-ops.
pub fn handle_event(state: &mut GameState, event: AppEvent) {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent);
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_terminal(state: &mut GameState, event: CEvent) {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) if state.playing => handle_mouse(state, mouse),
        _ => {}
    }
}

fn handle_key(state: &mut GameState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            info!("quit requested");
            state.should_quit = true;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            info!("quit requested");
            state.should_quit = true;
        }
        _ => {}
    }
}

/// A pointer release over a blank tile reveals it, then advances the turn
/// machine. Releases outside both tiles or over a revealed tile do nothing.
fn handle_mouse(state: &mut GameState, mouse: MouseEvent) {
    // Any button counts, release only.
    if !matches!(mouse.kind, MouseEventKind::Up(_)) {
        return;
    }
    // The pause after a comparison consumes no input.
    if matches!(state.turn, Turn::Resolving { .. }) {
        return;
    }
    let Some(id) = state.tile_at(mouse.column, mouse.row) else {
        return;
    };
    if !state.tiles[id].is_blank() {
        return;
    }

    let color = state.random_color();
    state.tiles[id].set_color(color);
    debug!(tile = id, color = color.name(), "tile revealed");

    match state.turn {
        Turn::Idle => state.turn = Turn::OneRevealed(id),
        Turn::OneRevealed(first) if first != id => {
            // Equal colors count as a match even though both were assigned
            // at random.
            if state.tiles[id].matches(&state.tiles[first]) {
                state.score_match += 1;
                info!(matches = state.score_match, "colors match");
            } else {
                state.score_mismatch += 1;
                info!(mismatches = state.score_mismatch, "colors differ");
            }
            state.turn = Turn::Resolving {
                until: Instant::now() + state.config.reveal_pause,
            };
        }
        // The pending tile is never blank, so a second reveal of the same
        // tile cannot land here.
        _ => {}
    }
}

/// Per-tick bookkeeping: resolve an expired reveal pause, flip tiles back
/// while idle, and check the end-of-game condition.
fn handle_tick(state: &mut GameState) {
    if !state.playing {
        return;
    }

    if let Turn::Resolving { until } = state.turn {
        if Instant::now() >= until {
            state.turn = Turn::Idle;
        }
    }

    // A revealed pair stays on screen through the whole pause; the
    // flip-back and the end-of-game check both wait for it.
    if state.turn != Turn::Idle {
        return;
    }

    let revealed = state.tiles.iter().any(|t| !t.is_blank());
    for tile in state.tiles.iter_mut() {
        tile.reset();
    }
    if revealed {
        state.dirty = true;
    }

    if state.score_mismatch >= state.config.mismatch_limit {
        info!(mismatches = state.score_mismatch, "mismatch limit reached");
        state.playing = false;
        state.dirty = true;
    }
}
