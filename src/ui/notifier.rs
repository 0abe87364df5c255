use std::io::Write;

use anyhow::Result;

use crate::{domain::notice::Notice, usecases::contracts::Notifier};

/// Prints notices as `[level] message` lines.
pub struct TerminalNotifier<W> {
    out: W,
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn notify(&mut self, notice: Notice) -> Result<()> {
        writeln!(self.out, "[{}] {}", notice.level.as_label(), notice.message)?;
        self.out.flush()?;
        Ok(())
    }
}
