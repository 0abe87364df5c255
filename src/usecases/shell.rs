use anyhow::Result;

use crate::{
    domain::{
        events::{AppEvent, GroupRef, RecipientTarget},
        notice::Notice,
        panel::Panel,
        shell_state::ShellState,
        store::{AddOutcome, RecipientStore},
        suggestions::suggest,
    },
    infra::config::NotificationConfig,
    usecases::manage_recipients::{
        choose_suggestion, deselect_target, select_target, submit_email,
    },
};

use super::contracts::{Notifier, ShellOrchestrator};

pub struct DefaultShellOrchestrator<N>
where
    N: Notifier,
{
    state: ShellState,
    notifier: N,
    notifications: NotificationConfig,
}

impl<N> DefaultShellOrchestrator<N>
where
    N: Notifier,
{
    pub fn new(store: RecipientStore, notifier: N, notifications: NotificationConfig) -> Self {
        Self {
            state: ShellState::new(store),
            notifier,
            notifications,
        }
    }

    #[cfg(test)]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn handle_submit(&mut self, text: &str) -> Result<()> {
        match submit_email(self.state.store_mut(), text) {
            Ok(submitted) => {
                tracing::info!(
                    email = %submitted.email,
                    outcome = ?submitted.outcome,
                    "email submitted"
                );
                if self.notifications.announce_success {
                    let message = match submitted.outcome {
                        AddOutcome::Added => format!("Added {}", submitted.email),
                        AddOutcome::Selected => format!("Selected {}", submitted.email),
                    };
                    self.notifier.notify(Notice::success(message))?;
                }
            }
            Err(error) => {
                tracing::debug!(input = text, "rejected email submission");
                self.notifier.notify(Notice::error(error.to_string()))?;
            }
        }

        Ok(())
    }

    fn handle_choice(&mut self, value: &str) -> Result<()> {
        let chosen = choose_suggestion(self.state.store_mut(), value);
        tracing::debug!(value, chosen = chosen.len(), "suggestion chosen");

        if chosen.is_empty() {
            self.notifier
                .notify(Notice::info(format!("No recipients match {value}")))?;
        }

        Ok(())
    }

    fn handle_suggest(&mut self, query: &str) -> Result<()> {
        let options = suggest(self.state.store().recipients(), query);
        if options.is_empty() {
            return self
                .notifier
                .notify(Notice::info(format!("No suggestions for {query:?}")));
        }

        for option in options {
            self.notifier.notify(Notice::info(format!(
                "{}  ->  pick {}",
                option.label(),
                option.value()
            )))?;
        }

        Ok(())
    }

    fn handle_toggle(&mut self, panel: Panel, group: GroupRef) -> Result<()> {
        let groups = panel.groups(self.state.store());
        let expansion = self.state.expansion_mut(panel);
        let toggled = match group {
            GroupRef::Domain(domain) => expansion
                .toggle_shown(&groups, &domain)
                .map(|expanded| (domain, expanded)),
            GroupRef::Index(index) => expansion.toggle_at(&groups, index),
        };

        match toggled {
            Some((domain, expanded)) => {
                tracing::debug!(?panel, %domain, expanded, "group toggled");
            }
            None => {
                self.notifier
                    .notify(Notice::info(format!("No such group in {}", panel.title())))?;
            }
        }

        Ok(())
    }

    fn handle_selection(&mut self, target: &RecipientTarget, select: bool) -> Result<()> {
        let store = self.state.store_mut();
        let changed = if select {
            select_target(store, target)
        } else {
            deselect_target(store, target)
        };
        tracing::debug!(?target, select, changed, "selection changed");

        Ok(())
    }
}

impl<N> ShellOrchestrator for DefaultShellOrchestrator<N>
where
    N: Notifier,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::Redraw => {}
            AppEvent::SubmitEmail(text) => self.handle_submit(&text)?,
            AppEvent::ChooseSuggestion(value) => self.handle_choice(&value)?,
            AppEvent::Suggest(query) => self.handle_suggest(&query)?,
            AppEvent::Select(target) => self.handle_selection(&target, true)?,
            AppEvent::Deselect(target) => self.handle_selection(&target, false)?,
            AppEvent::ToggleGroup { panel, group } => self.handle_toggle(panel, group)?,
            AppEvent::UnknownCommand(command) => {
                self.notifier
                    .notify(Notice::error(format!("Unknown command: {command}")))?;
            }
        }

        Ok(())
    }
}
