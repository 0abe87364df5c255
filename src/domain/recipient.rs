use serde::{Deserialize, Serialize};

use super::email::domain_of;

/// An email address plus its selection flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub email: String,
    #[serde(default, rename = "selected")]
    pub is_selected: bool,
}

impl Recipient {
    pub fn new(email: impl Into<String>, is_selected: bool) -> Self {
        Self {
            email: email.into(),
            is_selected,
        }
    }

    pub fn selected(email: impl Into<String>) -> Self {
        Self::new(email, true)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn unselected(email: impl Into<String>) -> Self {
        Self::new(email, false)
    }

    pub fn domain(&self) -> &str {
        domain_of(&self.email)
    }
}

/// Recipients sharing a domain, plus view expansion state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyGroup {
    pub domain: String,
    pub emails: Vec<Recipient>,
    pub is_expanded: bool,
}

impl CompanyGroup {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            emails: Vec::new(),
            is_expanded: false,
        }
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}
