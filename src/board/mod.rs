//! The game board: element layers, change notifications, save format.

pub mod grid;
pub mod events;
pub mod serial;

pub use grid::Board;
pub use events::{GameEvent, Notifier};
pub use serial::SaveError;
