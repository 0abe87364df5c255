use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, LogConfig, NotificationConfig, RecipientsConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub recipients: Option<FileRecipientsConfig>,
    pub notifications: Option<FileNotificationConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(recipients) = self.recipients {
            recipients.merge_into(&mut config.recipients);
        }

        if let Some(notifications) = self.notifications {
            notifications.merge_into(&mut config.notifications);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileRecipientsConfig {
    pub seed_file: Option<PathBuf>,
}

impl FileRecipientsConfig {
    fn merge_into(self, config: &mut RecipientsConfig) {
        if let Some(seed_file) = self.seed_file {
            config.seed_file = Some(seed_file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileNotificationConfig {
    pub announce_success: Option<bool>,
}

impl FileNotificationConfig {
    fn merge_into(self, config: &mut NotificationConfig) {
        if let Some(announce_success) = self.announce_success {
            config.announce_success = announce_success;
        }
    }
}
