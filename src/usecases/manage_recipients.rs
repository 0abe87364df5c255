//! Recipient workflows behind the input events: submitting a typed
//! address, picking an autocomplete value, and (de)selecting by email or
//! by domain.

use crate::domain::{
    email::{validate_email, RecipientError},
    events::RecipientTarget,
    recipient::Recipient,
    store::{AddOutcome, RecipientStore},
    suggestions::resolve_choice,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub email: String,
    pub outcome: AddOutcome,
}

/// Validates the typed text and adds it to the store.
///
/// Surrounding whitespace is ignored. Invalid text leaves the store
/// untouched.
pub fn submit_email(store: &mut RecipientStore, text: &str) -> Result<SubmitOutcome, RecipientError> {
    let email = validate_email(text.trim())?;
    let outcome = store.add_email(email);

    Ok(SubmitOutcome {
        email: email.to_owned(),
        outcome,
    })
}

/// Selects the recipients behind an autocomplete value and returns them.
pub fn choose_suggestion(store: &mut RecipientStore, value: &str) -> Vec<Recipient> {
    let chosen = resolve_choice(store.recipients(), value.trim());
    store.select_recipients(&chosen);
    chosen
}

/// Returns how many recipients became selected.
pub fn select_target(store: &mut RecipientStore, target: &RecipientTarget) -> usize {
    let matched = matching(store, target, false);
    store.select_recipients(&matched)
}

/// Returns how many recipients became unselected.
pub fn deselect_target(store: &mut RecipientStore, target: &RecipientTarget) -> usize {
    let matched = matching(store, target, true);
    store.remove_recipients(&matched)
}

/// Recipients addressed by `target` whose selection flag equals
/// `currently_selected`.
fn matching(
    store: &RecipientStore,
    target: &RecipientTarget,
    currently_selected: bool,
) -> Vec<Recipient> {
    let candidates: Vec<&Recipient> = match target {
        RecipientTarget::Email(email) => store.get(email).into_iter().collect(),
        RecipientTarget::Domain(domain) => store.recipients_in_domain(domain).collect(),
    };

    candidates
        .into_iter()
        .filter(|r| r.is_selected == currently_selected)
        .cloned()
        .collect()
}
