//! In-memory recipient list with selection transitions.

use super::{
    grouping::group_by_company,
    recipient::{CompanyGroup, Recipient},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was appended, already selected.
    Added,
    /// The email was known; its record is now selected.
    Selected,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipientStore {
    recipients: Vec<Recipient>,
}

impl RecipientStore {
    /// Builds a store keeping the first record per email.
    ///
    /// A later duplicate that is selected marks the kept record selected.
    pub fn from_seed<I>(seed: I) -> Self
    where
        I: IntoIterator<Item = Recipient>,
    {
        let mut store = Self::default();
        for recipient in seed {
            match store.position(&recipient.email) {
                Some(index) => {
                    if recipient.is_selected {
                        store.recipients[index].is_selected = true;
                    }
                }
                None => store.recipients.push(recipient),
            }
        }

        store
    }

    pub fn recipients(&self) -> &[Recipient] {
        &self.recipients
    }

    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }

    pub fn get(&self, email: &str) -> Option<&Recipient> {
        self.position(email).map(|index| &self.recipients[index])
    }

    /// Selects `email`, appending a new record when it is unknown.
    ///
    /// Syntax is not checked here; callers validate before adding.
    pub fn add_email(&mut self, email: &str) -> AddOutcome {
        match self.position(email) {
            Some(index) => {
                self.recipients[index].is_selected = true;
                AddOutcome::Selected
            }
            None => {
                self.recipients.push(Recipient::selected(email));
                AddOutcome::Added
            }
        }
    }

    /// Marks every given recipient selected. Unknown emails are ignored.
    pub fn select_recipients(&mut self, recipients: &[Recipient]) -> usize {
        self.set_selected(recipients, true)
    }

    /// Marks every given recipient unselected. Records stay in the store.
    pub fn remove_recipients(&mut self, recipients: &[Recipient]) -> usize {
        self.set_selected(recipients, false)
    }

    pub fn selected_recipients(&self) -> impl Iterator<Item = &Recipient> {
        self.recipients.iter().filter(|r| r.is_selected)
    }

    pub fn available_recipients(&self) -> impl Iterator<Item = &Recipient> {
        self.recipients.iter().filter(|r| !r.is_selected)
    }

    pub fn recipients_in_domain<'a>(
        &'a self,
        domain: &'a str,
    ) -> impl Iterator<Item = &'a Recipient> + 'a {
        self.recipients.iter().filter(move |r| r.domain() == domain)
    }

    pub fn grouped_selected(&self) -> Vec<CompanyGroup> {
        group_by_company(self.selected_recipients())
    }

    pub fn grouped_available(&self) -> Vec<CompanyGroup> {
        group_by_company(self.available_recipients())
    }

    fn position(&self, email: &str) -> Option<usize> {
        self.recipients.iter().position(|r| r.email == email)
    }

    /// Returns how many records changed state.
    fn set_selected(&mut self, recipients: &[Recipient], selected: bool) -> usize {
        let mut changed = 0;
        for recipient in recipients {
            let Some(index) = self.position(&recipient.email) else {
                continue;
            };

            let stored = &mut self.recipients[index];
            if stored.is_selected != selected {
                stored.is_selected = selected;
                changed += 1;
            }
        }

        changed
    }
}
