use crate::{domain::store::RecipientStore, infra::config::AppConfig};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub store: RecipientStore,
}

impl AppContext {
    pub fn new(config: AppConfig, store: RecipientStore) -> Self {
        Self { config, store }
    }
}
