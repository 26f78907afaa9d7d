//! Turn order, move budgets, and win evaluation.

pub mod controller;
pub mod win;

pub use controller::TurnController;
pub use win::{curse_won, evaluate, humans_won};
