//! Core game module containing shared components, options, messages, the state machine and the frame driver.

mod components;
mod constants;
mod driver;
mod events;
mod options;
mod state;

pub use components::*;
pub use components::Axis;
pub use constants::*;
pub use driver::*;
pub use events::*;
pub use options::*;
pub use state::*;

use bevy::prelude::*;

/// Per-frame ordering: input is decoded, the game advances, then the canvas is presented.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Simulate,
    Present,
}
