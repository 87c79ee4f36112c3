//! Terminal UI components for the liftdesk system.

pub mod money;
pub mod styles;
pub mod terminal;
