//! Deterministic game core
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - Side effects surface as drained events, never as callbacks
//!
//! The platform layer owns the event loop; the core is scheduling-agnostic
//! and only reacts to pointer positions and discrete start/restart intents.

pub mod collision;
pub mod grid;
pub mod maze;
pub mod session;
pub mod state;

pub use collision::{hits_wall, reached_end};
pub use grid::{Cell, Grid};
pub use maze::{MazeLayout, MazeStyle, generate};
pub use session::{handle_resize, pointer_moved, restart, start_attempt};
pub use state::{GameEvent, GameState, Player, SessionPhase};
