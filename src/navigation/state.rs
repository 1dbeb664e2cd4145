//! Coordinator state snapshot.

use serde::Serialize;

use crate::mvi::State;
use crate::navigation::stack::{NavigationStack, TabStacks};
use crate::route::TabId;

/// Selected tab plus one history stack per tab.
///
/// Renderers receive this by value (snapshot read). It only changes
/// through [`NavReducer`](crate::navigation::NavReducer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavState {
    pub(crate) selected_tab: TabId,
    pub(crate) stacks: TabStacks,
}

impl State for NavState {}

impl NavState {
    pub fn selected_tab(&self) -> TabId {
        self.selected_tab
    }

    pub fn stacks(&self) -> &TabStacks {
        &self.stacks
    }

    pub fn stack(&self, tab: TabId) -> &NavigationStack {
        self.stacks.get(tab)
    }

    /// Stack of the focused tab.
    pub fn active_stack(&self) -> &NavigationStack {
        self.stacks.get(self.selected_tab)
    }

    pub fn depth(&self, tab: TabId) -> usize {
        self.stacks.get(tab).depth()
    }

    pub(crate) fn active_stack_mut(&mut self) -> &mut NavigationStack {
        self.stacks.get_mut(self.selected_tab)
    }
}
