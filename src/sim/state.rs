//! Session state and core types
//!
//! One `GameState` owns everything an attempt needs: the generated layout,
//! the player marker, the phase, and the per-attempt one-shot flags. Nothing
//! here touches the DOM; terminal effects surface as drained [`GameEvent`]s.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::maze::{MazeLayout, MazeStyle, generate};
use crate::consts::{CELL_SIZE, PLAYER_SIZE};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Start overlay is up; pointer input is ignored
    StartScreen,
    /// Pointer tracking is live
    Playing,
    /// Attempt finished; movement is ignored until restart
    Won,
}

/// The moving marker: a position set directly from pointer input plus a
/// fixed square extent. No velocity, no physics.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
}

impl Player {
    pub fn half_extent(&self) -> f32 {
        self.size / 2.0
    }
}

/// One-shot notifications for the platform layer (audio, overlay, status
/// text). Drained once per frame; the sim never blocks on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An attempt began
    AttemptStarted,
    /// Wall contact aborted the attempt; a fresh layout is already in place
    WallHit,
    /// Terminal effect: fired at most once per attempt
    Won,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Generation strategy for this session
    pub style: MazeStyle,
    /// Level counter (only advances in the leveled variant)
    pub level: u32,
    /// Session seed; each regeneration derives a fresh stream from it
    pub seed: u64,
    /// Monotonic attempt counter, mixed into the per-attempt RNG stream
    pub attempt: u64,
    /// Current viewport extent in pixels
    pub width: u32,
    pub height: u32,
    /// The maze for the current attempt
    pub layout: MazeLayout,
    pub player: Player,
    pub phase: SessionPhase,
    /// At-most-once guard for the terminal effect within an attempt
    pub finale_fired: bool,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session showing the start screen over a freshly generated maze
    pub fn new(style: MazeStyle, seed: u64, width: u32, height: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let layout = generate(style, 1, width, height, CELL_SIZE, &mut rng);
        let start = layout.start;
        Self {
            style,
            level: 1,
            seed,
            attempt: 0,
            width,
            height,
            layout,
            player: Player {
                pos: start,
                size: PLAYER_SIZE,
            },
            phase: SessionPhase::StartScreen,
            finale_fired: false,
            events: Vec::new(),
        }
    }

    /// Replace the layout with a freshly generated one for the current level
    /// and viewport, resetting the player to the new start position.
    pub(crate) fn regenerate(&mut self) {
        self.attempt += 1;
        // Distinct stream per attempt so restarts reshuffle the random levels
        // while staying reproducible from the session seed
        let mut rng = Pcg32::seed_from_u64(self.seed ^ self.attempt.wrapping_mul(0x9E37_79B9));
        self.layout = generate(
            self.style,
            self.level,
            self.width,
            self.height,
            CELL_SIZE,
            &mut rng,
        );
        self.player.pos = self.layout.start;
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
