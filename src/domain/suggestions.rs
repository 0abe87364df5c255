//! Autocomplete options for the email input.

use super::{email::domain_of, recipient::Recipient};

const DOMAIN_PREFIX: char = '@';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    Recipient { email: String },
    Domain { domain: String },
}

impl Suggestion {
    /// The value fed back into [`resolve_choice`] when picked.
    pub fn value(&self) -> String {
        match self {
            Self::Recipient { email } => email.clone(),
            Self::Domain { domain } => format!("{DOMAIN_PREFIX}{domain}"),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Recipient { email } => email.clone(),
            Self::Domain { domain } => format!("All emails from {domain}"),
        }
    }
}

/// Lists matching emails, then one "all emails from" option per matching
/// domain. Matching is a case-insensitive substring test.
pub fn suggest<'a, I>(recipients: I, query: &str) -> Vec<Suggestion>
where
    I: IntoIterator<Item = &'a Recipient>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut emails = Vec::new();
    let mut domains: Vec<&str> = Vec::new();
    for recipient in recipients {
        if recipient.email.to_lowercase().contains(&needle) {
            emails.push(Suggestion::Recipient {
                email: recipient.email.clone(),
            });
        }

        let domain = recipient.domain();
        if !domain.is_empty()
            && domain.to_lowercase().contains(&needle)
            && !domains.contains(&domain)
        {
            domains.push(domain);
        }
    }

    emails.extend(domains.into_iter().map(|domain| Suggestion::Domain {
        domain: domain.to_owned(),
    }));
    emails
}

/// Maps a picked value back to recipients: `@domain` yields every
/// recipient of that domain, anything else the exact email match.
pub fn resolve_choice(recipients: &[Recipient], value: &str) -> Vec<Recipient> {
    match value.strip_prefix(DOMAIN_PREFIX) {
        Some(domain) => recipients
            .iter()
            .filter(|r| domain_of(&r.email) == domain)
            .cloned()
            .collect(),
        None => recipients
            .iter()
            .filter(|r| r.email == value)
            .cloned()
            .collect(),
    }
}
