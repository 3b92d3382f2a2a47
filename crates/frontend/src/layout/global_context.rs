use leptos::prelude::*;
use std::collections::HashSet;

/// Shell-wide UI state shared through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Sidebar visibility.
    pub left_open: RwSignal<bool>,
    /// Ids of expanded sidebar menu groups.
    pub open_groups: RwSignal<HashSet<&'static str>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let mut open_groups = HashSet::new();
        open_groups.insert("registers");
        Self {
            left_open: RwSignal::new(true),
            open_groups: RwSignal::new(open_groups),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn toggle_group(&self, id: &'static str) {
        self.open_groups.update(|groups| {
            if !groups.remove(id) {
                groups.insert(id);
            }
        });
    }

    pub fn is_group_open(&self, id: &str) -> bool {
        self.open_groups.with(|groups| groups.contains(id))
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
