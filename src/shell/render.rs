//! Text and JSON rendering of navigation state.

use std::fmt::Write as _;

use crate::navigation::{NavState, TransitionLogEntry};

/// One line per tab, focused tab marked with `*`:
///
/// ```text
/// * feed (2): root > profile(456) > detail(789)
///   messages (0): root
///   notifications (0): root
/// ```
pub fn render_state(state: &NavState) -> String {
    let mut out = String::new();
    for (tab, stack) in state.stacks().iter() {
        let marker = if tab == state.selected_tab() { '*' } else { ' ' };
        let _ = write!(out, "{} {} ({}): root", marker, tab, stack.depth());
        for route in stack {
            let _ = write!(out, " > {}", route);
        }
        out.push('\n');
    }
    out
}

/// Compact single-line JSON of the whole state.
pub fn render_state_json(state: &NavState) -> serde_json::Result<String> {
    serde_json::to_string(state)
}

/// Numbered transition list, oldest first.
pub fn render_log(entries: &[TransitionLogEntry]) -> String {
    if entries.is_empty() {
        return "no transitions\n".to_string();
    }
    let mut out = String::new();
    for (n, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} -> {} ({})",
            n + 1,
            entry.intent,
            entry.selected_tab,
            entry.depth
        );
    }
    out
}
