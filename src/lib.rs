//! Client-side navigation coordinator for a multi-tab application.
//!
//! Owns per-tab navigation history, exposes imperative navigation
//! operations (push, pop, reset-to-root, tab switch) and resolves
//! deep-link URIs into navigation actions. Rendering is left to
//! collaborators that observe [`navigation::NavigationCoordinator`].

pub mod config;
pub mod deep_link;
pub mod logging;
pub mod mvi;
pub mod navigation;
pub mod route;
pub mod shell;
