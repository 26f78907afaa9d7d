//! Change notifications for presentation layers.
//!
//! The engine never renders anything; instead, every board mutation and
//! every turn-state change emits a [`GameEvent`] to registered callbacks.
//! A UI subscribes once and mirrors the events into sprites, labels, or
//! whatever else it maintains. Events are purely informational; nothing
//! a subscriber does can feed back into game state.

use crate::core::{Faction, Position, Team};
use serde::{Deserialize, Serialize};

/// A single observable state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An element appeared on the board.
    ElementAdded {
        is_host: bool,
        team: Team,
        pos: Position,
    },
    /// An element left the board.
    ElementRemoved {
        is_host: bool,
        team: Team,
        pos: Position,
    },
    /// An element relocated from one cell to another.
    ElementMoved {
        is_host: bool,
        team: Team,
        from: Position,
        to: Position,
    },
    /// The active faction changed.
    TurnChanged { faction: Faction, turn_index: i32 },
    /// The active faction's remaining move budget changed.
    MovesLeftChanged { left: u32 },
}

type Callback = Box<dyn FnMut(&GameEvent)>;

/// Callback registry for [`GameEvent`]s.
///
/// Subscribers are invoked synchronously, in registration order, at the
/// point the change happens. There is no unsubscription: observers live
/// as long as the object they observe, which matches how a game session
/// and its UI are torn down together.
#[derive(Default)]
pub struct Notifier {
    subscribers: Vec<Callback>,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for all future events.
    pub fn subscribe(&mut self, callback: impl FnMut(&GameEvent) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Deliver an event to every subscriber.
    pub(crate) fn emit(&mut self, event: &GameEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
