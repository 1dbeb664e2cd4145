//! Per-tab navigation history.

use serde::ser::{Serialize, Serializer};

use crate::route::{Route, TabId};

/// Ordered history of one tab, root excluded.
///
/// Never holds a [`Route::TabSelection`]. An empty stack means the tab
/// is showing its root content.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct NavigationStack {
    routes: Vec<Route>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of routes pushed above the root.
    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The route currently on screen, or `None` at the root.
    pub fn top(&self) -> Option<&Route> {
        self.routes.last()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    /// Push a destination.
    ///
    /// Tab selections are commands, not destinations. Passing one is a
    /// defect in the caller: it panics in debug builds and is dropped in
    /// release builds.
    pub(crate) fn push(&mut self, route: Route) {
        debug_assert!(
            !route.is_tab_selection(),
            "tab selection pushed onto a navigation stack"
        );
        if route.is_tab_selection() {
            tracing::error!(route = %route, "Refusing to push tab selection onto stack");
            return;
        }
        self.routes.push(route);
    }

    /// Pop the top route; `None` when already at the root.
    pub(crate) fn pop(&mut self) -> Option<Route> {
        self.routes.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.routes.clear();
    }
}

impl<'a> IntoIterator for &'a NavigationStack {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// One [`NavigationStack`] per [`TabId`], all present from construction.
///
/// Backed by a fixed array indexed by [`TabId::index`], so a lookup can
/// never miss.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabStacks {
    stacks: [NavigationStack; TabId::COUNT],
}

impl TabStacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tab: TabId) -> &NavigationStack {
        &self.stacks[tab.index()]
    }

    pub(crate) fn get_mut(&mut self, tab: TabId) -> &mut NavigationStack {
        &mut self.stacks[tab.index()]
    }

    /// Always [`TabId::COUNT`].
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Tabs and their stacks, in tab-bar order.
    pub fn iter(&self) -> impl Iterator<Item = (TabId, &NavigationStack)> + '_ {
        TabId::ALL.into_iter().map(move |tab| (tab, self.get(tab)))
    }
}

impl Serialize for TabStacks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
