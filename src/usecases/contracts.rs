use anyhow::Result;

use crate::domain::{events::AppEvent, notice::Notice, shell_state::ShellState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Surfaces user-facing notices (the error/success toasts of the shell).
pub trait Notifier {
    fn notify(&mut self, notice: Notice) -> Result<()>;
}
