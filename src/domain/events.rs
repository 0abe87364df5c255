use super::panel::Panel;

/// Target of a select/deselect request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipientTarget {
    Email(String),
    Domain(String),
}

impl RecipientTarget {
    /// `@domain` targets a whole domain; anything else a single email.
    pub fn parse(value: &str) -> Self {
        match value.strip_prefix('@') {
            Some(domain) => Self::Domain(domain.to_owned()),
            None => Self::Email(value.to_owned()),
        }
    }
}

/// Which group to toggle within a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupRef {
    Domain(String),
    Index(usize),
}

impl GroupRef {
    pub fn parse(value: &str) -> Self {
        match value.parse::<usize>() {
            Ok(index) => Self::Index(index),
            Err(_) => Self::Domain(value.to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    QuitRequested,
    Redraw,
    SubmitEmail(String),
    ChooseSuggestion(String),
    Suggest(String),
    Select(RecipientTarget),
    Deselect(RecipientTarget),
    ToggleGroup { panel: Panel, group: GroupRef },
    UnknownCommand(String),
}
