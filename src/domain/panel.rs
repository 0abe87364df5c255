use super::{expansion::ExpansionState, recipient::CompanyGroup, store::RecipientStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Available,
    Selected,
}

impl Panel {
    pub fn title(self) -> &'static str {
        match self {
            Self::Available => "Available Recipients",
            Self::Selected => "Selected Recipients",
        }
    }

    pub fn empty_text(self) -> &'static str {
        match self {
            Self::Available => "No available recipients",
            Self::Selected => "No selected recipients",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "available" | "a" => Some(Self::Available),
            "selected" | "s" => Some(Self::Selected),
            _ => None,
        }
    }

    /// Groups of this panel's recipients, without expansion flags.
    pub fn groups(self, store: &RecipientStore) -> Vec<CompanyGroup> {
        match self {
            Self::Available => store.grouped_available(),
            Self::Selected => store.grouped_selected(),
        }
    }
}

/// One panel's projection of the store, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub panel: Panel,
    pub groups: Vec<CompanyGroup>,
}

impl PanelView {
    pub fn build(panel: Panel, store: &RecipientStore, expansion: &ExpansionState) -> Self {
        Self {
            panel,
            groups: expansion.apply(panel.groups(store)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn recipient_count(&self) -> usize {
        self.groups.iter().map(CompanyGroup::len).sum()
    }
}
