use std::io::Write;

use anyhow::Result;

use crate::{
    domain::events::AppEvent,
    usecases::contracts::{AppEventSource, ShellOrchestrator},
};

use super::view;

pub fn start(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    out: &mut dyn Write,
) -> Result<()> {
    tracing::info!(
        recipients = orchestrator.state().store().len(),
        "starting recipient shell"
    );

    draw(out, &*orchestrator)?;

    while orchestrator.state().is_running() {
        let Some(event) = event_source.next_event()? else {
            continue;
        };

        let redraw = changes_view(&event);
        orchestrator.handle_event(event)?;

        if redraw && orchestrator.state().is_running() {
            draw(out, &*orchestrator)?;
        }
    }

    tracing::info!("recipient shell stopped");
    Ok(())
}

fn changes_view(event: &AppEvent) -> bool {
    !matches!(
        event,
        AppEvent::QuitRequested | AppEvent::Suggest(_) | AppEvent::UnknownCommand(_)
    )
}

fn draw(out: &mut dyn Write, orchestrator: &dyn ShellOrchestrator) -> Result<()> {
    for line in view::render(orchestrator.state()) {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
