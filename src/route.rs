//! Route vocabulary: tab identifiers and navigable destinations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One independent navigation context in the tab bar.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TabId {
    #[default]
    Feed,
    Messages,
    Notifications,
}

impl TabId {
    /// Number of tabs in the closed set.
    pub const COUNT: usize = 3;

    /// Every tab, in tab-bar order.
    pub const ALL: [TabId; Self::COUNT] = [TabId::Feed, TabId::Messages, TabId::Notifications];

    /// Position of this tab in [`TabId::ALL`].
    pub fn index(self) -> usize {
        match self {
            TabId::Feed => 0,
            TabId::Messages => 1,
            TabId::Notifications => 2,
        }
    }

    /// Lowercase identifier used in commands and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            TabId::Feed => "feed",
            TabId::Messages => "messages",
            TabId::Notifications => "notifications",
        }
    }

    /// Label shown by a tab switcher.
    pub fn title(self) -> &'static str {
        match self {
            TabId::Feed => "Feed",
            TabId::Messages => "Messages",
            TabId::Notifications => "Notifications",
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tab '{name}' (expected one of: feed, messages, notifications)")]
pub struct ParseTabError {
    pub name: String,
}

impl FromStr for TabId {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabId::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTabError {
                name: s.to_string(),
            })
    }
}

/// A navigable destination.
///
/// `TabSelection` is a command to move focus between tabs. It is never
/// pushed onto a [`NavigationStack`](crate::navigation::NavigationStack).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Profile { user_id: String },
    Settings,
    Detail { item_id: i64 },
    TabSelection(TabId),
}

impl Route {
    pub fn profile(user_id: impl Into<String>) -> Self {
        Route::Profile {
            user_id: user_id.into(),
        }
    }

    pub fn detail(item_id: i64) -> Self {
        Route::Detail { item_id }
    }

    pub fn is_tab_selection(&self) -> bool {
        matches!(self, Route::TabSelection(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("home"),
            Route::Profile { user_id } => write!(f, "profile({})", user_id),
            Route::Settings => f.write_str("settings"),
            Route::Detail { item_id } => write!(f, "detail({})", item_id),
            Route::TabSelection(tab) => write!(f, "tab({})", tab),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_tab_is_feed() {
        assert_eq!(TabId::default(), TabId::Feed);
    }

    #[test]
    fn all_tabs_are_indexed_in_order() {
        for (position, tab) in TabId::ALL.iter().enumerate() {
            assert_eq!(tab.index(), position);
        }
    }

    #[test]
    fn tab_parses_case_insensitively() {
        assert_eq!("messages".parse::<TabId>(), Ok(TabId::Messages));
        assert_eq!("Notifications".parse::<TabId>(), Ok(TabId::Notifications));
        assert_eq!(" feed ".parse::<TabId>(), Ok(TabId::Feed));
    }

    #[test]
    fn unknown_tab_is_rejected() {
        let err = "inbox".parse::<TabId>().unwrap_err();
        assert_eq!(err.name, "inbox");
        assert!(err.to_string().contains("inbox"));
    }

    #[test]
    fn routes_with_same_payload_are_equal_and_hash_alike() {
        let mut seen = HashSet::new();
        seen.insert(Route::profile("42"));
        seen.insert(Route::profile("42"));
        seen.insert(Route::detail(7));
        seen.insert(Route::detail(8));
        assert_eq!(seen.len(), 3);
        assert_ne!(Route::profile("42"), Route::profile("43"));
    }

    #[test]
    fn only_tab_selection_is_a_tab_selection() {
        assert!(Route::TabSelection(TabId::Messages).is_tab_selection());
        assert!(!Route::Home.is_tab_selection());
        assert!(!Route::Settings.is_tab_selection());
        assert!(!Route::detail(1).is_tab_selection());
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(Route::Home.to_string(), "home");
        assert_eq!(Route::profile("abc").to_string(), "profile(abc)");
        assert_eq!(Route::detail(-3).to_string(), "detail(-3)");
        assert_eq!(
            Route::TabSelection(TabId::Notifications).to_string(),
            "tab(notifications)"
        );
    }

    #[test]
    fn serializes_to_snake_case_json() {
        let json = serde_json::to_string(&Route::detail(789)).unwrap();
        assert_eq!(json, r#"{"detail":{"item_id":789}}"#);
        let json = serde_json::to_string(&Route::Home).unwrap();
        assert_eq!(json, r#""home""#);
    }
}
