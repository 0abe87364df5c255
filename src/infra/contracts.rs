use anyhow::Result;

use crate::{domain::recipient::Recipient, infra::config::AppConfig};

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;
}

/// Supplies the recipients the store starts with.
pub trait SeedSource {
    fn load(&self) -> Result<Vec<Recipient>>;
}
