use std::collections::HashMap;

use super::recipient::CompanyGroup;

/// Expand/collapse flags for one panel, keyed by domain.
///
/// Keys survive regrouping, so a group keeps its state when other groups
/// appear or vanish ahead of it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpansionState {
    expanded: HashMap<String, bool>,
}

impl ExpansionState {
    pub fn is_expanded(&self, domain: &str) -> bool {
        self.expanded.get(domain).copied().unwrap_or(false)
    }

    /// Flips the flag for `domain` and returns the new value.
    pub fn toggle(&mut self, domain: &str) -> bool {
        let flag = self.expanded.entry(domain.to_owned()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Toggles the group shown at `index`. Returns the domain and its new
    /// flag, or `None` when the index is out of range.
    pub fn toggle_at(&mut self, groups: &[CompanyGroup], index: usize) -> Option<(String, bool)> {
        let domain = groups.get(index)?.domain.clone();
        let expanded = self.toggle(&domain);
        Some((domain, expanded))
    }

    /// Toggles `domain` only when one of `groups` carries it. Returns the
    /// new flag, or `None` when no such group is shown.
    pub fn toggle_shown(&mut self, groups: &[CompanyGroup], domain: &str) -> Option<bool> {
        if !groups.iter().any(|group| group.domain == domain) {
            return None;
        }

        Some(self.toggle(domain))
    }

    /// Stamps the current flags onto a grouping result.
    pub fn apply(&self, mut groups: Vec<CompanyGroup>) -> Vec<CompanyGroup> {
        for group in &mut groups {
            group.is_expanded = self.is_expanded(&group.domain);
        }

        groups
    }
}
