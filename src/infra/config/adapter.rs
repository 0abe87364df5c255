use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::infra::{
    config::{load, AppConfig},
    contracts::ConfigAdapter,
};

/// Loads `AppConfig` from a TOML file, `./config.toml` when no path is given.
#[derive(Debug, Clone, Default)]
pub struct FileConfigAdapter {
    path: Option<PathBuf>,
}

impl FileConfigAdapter {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
        }
    }
}

impl ConfigAdapter for FileConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        let config = load(self.path.as_deref())?;
        tracing::trace!(path = ?self.path, seed_file = ?config.recipients.seed_file, "config resolved");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let adapter = FileConfigAdapter::new(Some(Path::new("./missing-config.toml")));

        assert_eq!(adapter.load().expect("config must load"), AppConfig::default());
    }
}
