//! Domain layer: core entities and business rules.

pub mod email;
pub mod events;
pub mod expansion;
pub mod grouping;
pub mod notice;
pub mod panel;
pub mod recipient;
pub mod shell_state;
pub mod store;
pub mod suggestions;
