//! Process-wide navigation coordinator.
//!
//! Owns the single [`NavState`] of the application. Every mutation goes
//! through [`NavReducer`]; observers are notified synchronously on the
//! calling thread once the transition is applied.

use std::collections::VecDeque;
use std::sync::{Arc, Weak};
use std::time::SystemTime;

use parking_lot::Mutex;

use crate::config::CoordinatorConfig;
use crate::deep_link;
use crate::mvi::Reducer;
use crate::route::{Route, TabId};

use super::intent::NavIntent;
use super::reducer::NavReducer;
use super::stack::NavigationStack;
use super::state::NavState;

type Observer = Arc<dyn Fn(&NavState) + Send + Sync>;

/// Audit record of one state-changing transition.
#[derive(Debug, Clone)]
pub struct TransitionLogEntry {
    /// When the transition was applied.
    pub timestamp: SystemTime,
    /// The intent that caused it.
    pub intent: NavIntent,
    /// Focused tab after the transition.
    pub selected_tab: TabId,
    /// Depth of the focused tab's stack after the transition.
    pub depth: usize,
}

/// Shared handle to the navigation state.
///
/// Cloning is cheap and every clone drives the same state. All
/// operations complete immediately and never fail; state is guarded by
/// a single mutex so calls from different threads are serialized.
#[derive(Clone)]
pub struct NavigationCoordinator {
    inner: Arc<Mutex<CoordinatorInner>>,
}

struct CoordinatorInner {
    state: NavState,
    observers: Vec<(u64, Observer)>,
    next_observer_id: u64,
    transition_log: VecDeque<TransitionLogEntry>,
    log_capacity: usize,
}

impl NavigationCoordinator {
    /// Coordinator focused on the feed tab with every stack at its root.
    pub fn new() -> Self {
        Self::with_config(&CoordinatorConfig::default())
    }

    pub fn with_config(config: &CoordinatorConfig) -> Self {
        let inner = CoordinatorInner {
            state: NavState::default(),
            observers: Vec::new(),
            next_observer_id: 0,
            transition_log: VecDeque::with_capacity(config.transition_log_capacity),
            log_capacity: config.transition_log_capacity,
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Switch tabs for [`Route::TabSelection`], otherwise push `route`
    /// onto the focused tab's stack.
    pub fn navigate(&self, route: Route) {
        self.dispatch(NavIntent::Navigate(route));
    }

    /// Pop the focused tab's top route. Does nothing at the root.
    pub fn navigate_back(&self) {
        self.dispatch(NavIntent::Back);
    }

    /// Return the focused tab to its root. Other tabs are untouched.
    pub fn navigate_to_root(&self) {
        self.dispatch(NavIntent::ToRoot);
    }

    /// Resolve `uri` and navigate to it.
    ///
    /// Malformed, unrecognized or incomplete links are ignored with a
    /// warning; callers observe the outcome only through state.
    pub fn handle_deep_link(&self, uri: &str) {
        match deep_link::resolve(uri) {
            Ok(route) => {
                tracing::info!(uri = %uri, route = %route, "Deep link resolved");
                self.navigate(route);
            }
            Err(err) => {
                tracing::warn!(uri = %uri, error = %err, "Ignoring deep link");
            }
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> NavState {
        self.inner.lock().state.clone()
    }

    pub fn selected_tab(&self) -> TabId {
        self.inner.lock().state.selected_tab()
    }

    pub fn stack(&self, tab: TabId) -> NavigationStack {
        self.inner.lock().state.stack(tab).clone()
    }

    pub fn depth(&self, tab: TabId) -> usize {
        self.inner.lock().state.depth(tab)
    }

    /// Register `observer` to receive a snapshot after every state change.
    ///
    /// The observer runs on the thread that performed the change, outside
    /// the coordinator's lock, so it may call back into the coordinator.
    /// Notifications stop when the returned [`Subscription`] is dropped.
    ///
    /// An observer that owns a clone of this coordinator forms an `Arc`
    /// cycle: the shared state stays alive until its `Subscription` is
    /// dropped, even after every other handle is gone.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&NavState) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock();
        let id = inner.next_observer_id;
        inner.next_observer_id += 1;
        inner.observers.push((id, Arc::new(observer)));
        Subscription {
            coordinator: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of live subscriptions.
    pub fn observer_count(&self) -> usize {
        self.inner.lock().observers.len()
    }

    /// Recent transitions, oldest first.
    pub fn transition_log(&self) -> Vec<TransitionLogEntry> {
        self.inner.lock().transition_log.iter().cloned().collect()
    }

    fn dispatch(&self, intent: NavIntent) {
        let (snapshot, observers) = {
            let mut inner = self.inner.lock();
            let next = NavReducer::reduce(inner.state.clone(), intent.clone());
            if next == inner.state {
                tracing::trace!(intent = ?intent, "Navigation intent left state unchanged");
                return;
            }
            inner.state = next;

            let selected_tab = inner.state.selected_tab();
            let depth = inner.state.depth(selected_tab);
            tracing::debug!(
                intent = ?intent,
                tab = %selected_tab,
                depth,
                "Navigation state changed"
            );
            inner.record(TransitionLogEntry {
                timestamp: SystemTime::now(),
                intent,
                selected_tab,
                depth,
            });

            let observers: Vec<Observer> =
                inner.observers.iter().map(|(_, o)| Arc::clone(o)).collect();
            (inner.state.clone(), observers)
        };

        for observer in observers {
            observer(&snapshot);
        }
    }
}

impl Default for NavigationCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinatorInner {
    fn record(&mut self, entry: TransitionLogEntry) {
        if self.log_capacity == 0 {
            return;
        }
        while self.transition_log.len() >= self.log_capacity {
            self.transition_log.pop_front();
        }
        self.transition_log.push_back(entry);
    }
}

/// Keeps an observer registered; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    coordinator: Weak<Mutex<CoordinatorInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.coordinator.upgrade() {
            inner.lock().observers.retain(|(id, _)| *id != self.id);
        }
    }
}
