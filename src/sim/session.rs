//! Event-driven session state machine
//!
//! StartScreen -> Playing -> Won, with wall contact dropping straight back to
//! StartScreen over a regenerated maze. All mutations funnel through here;
//! the platform layer only feeds pointer events and drains [`GameEvent`]s.

use glam::Vec2;

use super::collision::{hits_wall, reached_end};
use super::maze::MazeStyle;
use super::state::{GameEvent, GameState, SessionPhase};
use crate::consts::MAX_LEVEL;

/// Begin an attempt from the start screen.
///
/// The player snaps to the pointer coordinate that fired the start action so
/// it never jumps from a stale position; when the action carried no pointer
/// coordinate (e.g. keyboard activation) it falls back to the maze's start
/// position.
pub fn start_attempt(state: &mut GameState, pointer: Option<Vec2>) {
    if state.phase != SessionPhase::StartScreen {
        return;
    }
    state.finale_fired = false;
    state.player.pos = pointer.unwrap_or(state.layout.start);
    state.phase = SessionPhase::Playing;
    state.push_event(GameEvent::AttemptStarted);
    log::info!(
        "attempt started at ({:.1}, {:.1})",
        state.player.pos.x,
        state.player.pos.y
    );
}

/// Feed one pointer/touch position, already mapped into maze pixel space.
///
/// Ignored outside the Playing phase. A wall hit (or out-of-bounds pointer)
/// aborts the attempt and regenerates; otherwise the position is committed
/// and the two win triggers are checked in order.
pub fn pointer_moved(state: &mut GameState, pos: Vec2) {
    if state.phase != SessionPhase::Playing {
        return;
    }

    if hits_wall(&state.layout.grid, pos, state.player.half_extent()) {
        fail_attempt(state);
        return;
    }

    state.player.pos = pos;

    // Trigger (a): crossing the vertical midpoint of the recorded final
    // obstacle counts as a win before the geometric check gets a chance
    if let Some(row) = state.layout.finale_row {
        if !state.finale_fired {
            let cs = state.layout.grid.cell_size();
            // Obstacle spans rows [row, row+2]; midpoint of its band
            let trigger_y = (row as f32 + 1.0) * cs;
            if pos.y > trigger_y {
                mark_won(state);
                return;
            }
        }
    }

    // Trigger (b): geometric proximity to the end position
    if !state.finale_fired
        && reached_end(pos, state.layout.end, state.layout.grid.cell_size())
    {
        mark_won(state);
    }
}

/// Restart action: back to the start screen over a fresh maze. A restart
/// from Won advances the level in the leveled variant, capped at the
/// maximum defined level.
pub fn restart(state: &mut GameState) {
    if state.phase == SessionPhase::Won && state.style == MazeStyle::Leveled {
        state.level = (state.level + 1).min(MAX_LEVEL);
        log::info!("advancing to level {}", state.level);
    }
    state.phase = SessionPhase::StartScreen;
    state.finale_fired = false;
    state.regenerate();
}

/// Viewport resize. Regenerates only while the start screen is up; a resize
/// mid-attempt leaves the live grid intact until the next natural restart so
/// the player's collision geometry stays consistent.
pub fn handle_resize(state: &mut GameState, width: u32, height: u32) {
    state.width = width;
    state.height = height;
    if state.phase == SessionPhase::StartScreen {
        state.regenerate();
        log::info!("resized to {width}x{height}, maze regenerated");
    }
}

fn fail_attempt(state: &mut GameState) {
    log::info!("wall contact, restarting attempt");
    state.phase = SessionPhase::StartScreen;
    state.finale_fired = false;
    state.regenerate();
    state.push_event(GameEvent::WallHit);
}

fn mark_won(state: &mut GameState) {
    state.finale_fired = true;
    state.phase = SessionPhase::Won;
    state.push_event(GameEvent::Won);
    log::info!("maze completed");
}
