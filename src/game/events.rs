//! Game messages.

use bevy::prelude::*;

use super::Control;

/// A control decoded by the input layer, consumed by the state machine.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlEvent(pub Control);
