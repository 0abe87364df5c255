//! UI layer: line-oriented terminal shell and plain-text rendering.

mod event_source;
mod notifier;
pub mod shell;
pub mod view;

pub(crate) use event_source::LineEventSource;
pub(crate) use notifier::TerminalNotifier;
