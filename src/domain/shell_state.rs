use super::{
    expansion::ExpansionState,
    panel::{Panel, PanelView},
    store::RecipientStore,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    store: RecipientStore,
    available_expansion: ExpansionState,
    selected_expansion: ExpansionState,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(RecipientStore::default())
    }
}

impl ShellState {
    pub fn new(store: RecipientStore) -> Self {
        Self {
            running: true,
            store,
            available_expansion: ExpansionState::default(),
            selected_expansion: ExpansionState::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn store(&self) -> &RecipientStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecipientStore {
        &mut self.store
    }

    pub fn expansion(&self, panel: Panel) -> &ExpansionState {
        match panel {
            Panel::Available => &self.available_expansion,
            Panel::Selected => &self.selected_expansion,
        }
    }

    pub fn expansion_mut(&mut self, panel: Panel) -> &mut ExpansionState {
        match panel {
            Panel::Available => &mut self.available_expansion,
            Panel::Selected => &mut self.selected_expansion,
        }
    }

    pub fn panel_view(&self, panel: Panel) -> PanelView {
        PanelView::build(panel, &self.store, self.expansion(panel))
    }
}
