use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    domain::{email::is_valid_email, recipient::Recipient, store::RecipientStore},
    infra::{
        self,
        config::FileConfigAdapter,
        contracts::{ConfigAdapter, SeedSource},
        error::AppError,
        seed::FileSeedSource,
    },
    usecases::context::AppContext,
};

/// Loaded context plus the log writer guard, which must outlive the run.
pub struct Bootstrapped {
    pub context: AppContext,
    pub log_guard: Option<WorkerGuard>,
}

pub fn bootstrap(config_path: Option<&Path>) -> Result<Bootstrapped, AppError> {
    let config = FileConfigAdapter::new(config_path)
        .load()
        .map_err(recover_app_error)?;
    let log_guard = infra::logging::init(&config.logging)?;

    let seed = FileSeedSource::new(config.recipients.seed_file.as_deref());
    let context = build_context(config, &seed)?;

    Ok(Bootstrapped { context, log_guard })
}

fn build_context(
    config: infra::config::AppConfig,
    seed: &dyn SeedSource,
) -> Result<AppContext, AppError> {
    let recipients = seed.load().map_err(recover_app_error)?;
    let store = seed_store(recipients);

    tracing::debug!(
        recipients = store.len(),
        selected = store.selected_recipients().count(),
        "recipient store seeded"
    );

    Ok(AppContext::new(config, store))
}

/// Adapters report through `anyhow`; hand back the typed error when that is
/// what they wrapped.
fn recover_app_error(error: anyhow::Error) -> AppError {
    error.downcast::<AppError>().unwrap_or_else(AppError::Other)
}

/// Drops seed records that fail email validation before building the store.
fn seed_store(recipients: Vec<Recipient>) -> RecipientStore {
    let valid = recipients.into_iter().filter(|recipient| {
        let keep = is_valid_email(&recipient.email);
        if !keep {
            tracing::warn!(email = %recipient.email, "skipping seed record with invalid email");
        }
        keep
    });

    RecipientStore::from_seed(valid)
}
