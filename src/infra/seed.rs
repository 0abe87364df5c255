//! Initial recipient data: the built-in sample list or a TOML seed file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use serde::Deserialize;

use crate::{
    domain::recipient::Recipient,
    infra::{contracts::SeedSource, error::AppError},
};

const SAMPLE_RECIPIENTS: [(&str, bool); 7] = [
    ("ann@timescale.com", false),
    ("bob@timescale.com", false),
    ("brian@qwerty.com", true),
    ("james@qwerty.com", false),
    ("jane@awesome.com", false),
    ("kate@qwerty.com", true),
    ("mike@hello.com", true),
];

/// The demo list used when no seed file is configured.
pub fn sample_recipients() -> Vec<Recipient> {
    SAMPLE_RECIPIENTS
        .iter()
        .map(|(email, selected)| Recipient::new(*email, *selected))
        .collect()
}

#[derive(Debug, Deserialize, Default)]
struct SeedFile {
    #[serde(default)]
    recipients: Vec<Recipient>,
}

pub fn load_seed(path: &Path) -> Result<Vec<Recipient>, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;

    let seed: SeedFile = toml::from_str(&raw).map_err(|source| AppError::SeedParse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count = seed.recipients.len(), "seed file loaded");
    Ok(seed.recipients)
}

/// Reads the configured seed file, falling back to the sample list.
#[derive(Debug, Clone, Default)]
pub struct FileSeedSource {
    path: Option<PathBuf>,
}

impl FileSeedSource {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
        }
    }
}

impl SeedSource for FileSeedSource {
    fn load(&self) -> Result<Vec<Recipient>> {
        match self.path.as_deref() {
            Some(path) => Ok(load_seed(path)?),
            None => Ok(sample_recipients()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_list_covers_four_domains() {
        let recipients = sample_recipients();

        assert_eq!(recipients.len(), 7);
        assert_eq!(recipients.iter().filter(|r| r.is_selected).count(), 3);

        let mut domains: Vec<&str> = recipients.iter().map(Recipient::domain).collect();
        domains.dedup();
        assert_eq!(
            domains,
            ["timescale.com", "qwerty.com", "awesome.com", "qwerty.com", "hello.com"]
        );
    }

    #[test]
    fn source_without_path_yields_sample_list() {
        let recipients = FileSeedSource::new(None).load().expect("sample seed");

        assert_eq!(recipients, sample_recipients());
    }

    #[test]
    fn reads_recipients_from_toml_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("seed.toml");
        fs::write(
            &path,
            r#"[[recipients]]
email = "ops@example.com"
selected = true

[[recipients]]
email = "dev@example.com"
"#,
        )
        .expect("must write seed");

        let recipients = FileSeedSource::new(Some(&path)).load().expect("seed must load");

        assert_eq!(
            recipients,
            [
                Recipient::selected("ops@example.com"),
                Recipient::unselected("dev@example.com"),
            ]
        );
    }

    #[test]
    fn empty_seed_file_yields_no_recipients() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("seed.toml");
        fs::write(&path, "").expect("must write seed");

        assert!(load_seed(&path).expect("seed must load").is_empty());
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        let error = load_seed(Path::new("./missing-seed.toml")).expect_err("must fail");

        assert!(matches!(error, AppError::SeedRead { .. }));
    }

    #[test]
    fn malformed_seed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("seed.toml");
        fs::write(&path, "[[recipients]]\nselected = true\n").expect("must write seed");

        let error = load_seed(&path).expect_err("must fail");

        assert!(matches!(error, AppError::SeedParse { .. }));
    }
}
