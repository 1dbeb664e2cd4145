//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;

use tabnav::mvi::Reducer;
use tabnav::navigation::{NavIntent, NavReducer, NavState, NavigationCoordinator};
use tabnav::route::{Route, TabId};
use tempfile::TempDir;

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Fold `intents` through the reducer starting from the initial state.
pub fn reduce_all(intents: impl IntoIterator<Item = NavIntent>) -> NavState {
    intents
        .into_iter()
        .fold(NavState::default(), NavReducer::reduce)
}

/// One of every destination that can sit on a stack.
pub fn destinations() -> Vec<Route> {
    vec![
        Route::Home,
        Route::profile("123"),
        Route::Settings,
        Route::detail(456),
    ]
}

/// Depth of every tab, in tab-bar order.
pub fn depths(coordinator: &NavigationCoordinator) -> Vec<usize> {
    TabId::ALL
        .iter()
        .map(|tab| coordinator.depth(*tab))
        .collect()
}
