//! Test doubles for the infra and usecase seams.

use anyhow::Result;

use crate::{
    domain::{notice::Notice, recipient::Recipient},
    infra::{
        config::AppConfig,
        contracts::{ConfigAdapter, SeedSource},
    },
    usecases::contracts::Notifier,
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StubSeedSource {
    pub recipients: Vec<Recipient>,
}

impl SeedSource for StubSeedSource {
    fn load(&self) -> Result<Vec<Recipient>> {
        Ok(self.recipients.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<&str> {
        self.notices.iter().map(|n| n.message.as_str()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: Notice) -> Result<()> {
        self.notices.push(notice);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn recording_notifier_keeps_order() {
        let mut notifier = RecordingNotifier::default();

        notifier.notify(Notice::info("first")).expect("notify");
        notifier.notify(Notice::error("second")).expect("notify");

        assert_eq!(notifier.messages(), ["first", "second"]);
    }
}
