//! Reducer for navigation state.

use crate::mvi::Reducer;
use crate::route::Route;

use super::intent::NavIntent;
use super::state::NavState;

/// Pure transition table for [`NavState`].
///
/// | intent                      | effect                         |
/// |-----------------------------|--------------------------------|
/// | `Navigate(TabSelection(t))` | `selected_tab = t`             |
/// | `Navigate(route)`           | push onto focused stack        |
/// | `Back`                      | pop focused stack, clamped     |
/// | `ToRoot`                    | clear focused stack            |
pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::Navigate(Route::TabSelection(tab)) => {
                state.selected_tab = tab;
            }
            NavIntent::Navigate(route) => {
                state.active_stack_mut().push(route);
            }
            NavIntent::Back => {
                state.active_stack_mut().pop();
            }
            NavIntent::ToRoot => {
                state.active_stack_mut().clear();
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::TabId;

    fn reduce_all(intents: impl IntoIterator<Item = NavIntent>) -> NavState {
        intents
            .into_iter()
            .fold(NavState::default(), NavReducer::reduce)
    }

    #[test]
    fn push_lands_on_selected_tab() {
        let state = reduce_all([
            NavIntent::Navigate(Route::TabSelection(TabId::Notifications)),
            NavIntent::Navigate(Route::Settings),
        ]);
        assert_eq!(state.depth(TabId::Notifications), 1);
        assert_eq!(state.depth(TabId::Feed), 0);
    }

    #[test]
    fn tab_selection_never_enters_a_stack() {
        let state = reduce_all([
            NavIntent::Navigate(Route::TabSelection(TabId::Messages)),
            NavIntent::Navigate(Route::TabSelection(TabId::Feed)),
        ]);
        assert!(state.stacks().iter().all(|(_, stack)| stack.is_empty()));
        assert_eq!(state.selected_tab(), TabId::Feed);
    }

    #[test]
    fn back_at_root_leaves_state_unchanged() {
        let state = NavReducer::reduce(NavState::default(), NavIntent::Back);
        assert_eq!(state, NavState::default());
    }

    #[test]
    fn to_root_only_clears_focused_tab() {
        let state = reduce_all([
            NavIntent::Navigate(Route::Home),
            NavIntent::Navigate(Route::TabSelection(TabId::Messages)),
            NavIntent::Navigate(Route::detail(1)),
            NavIntent::Navigate(Route::detail(2)),
            NavIntent::ToRoot,
        ]);
        assert_eq!(state.depth(TabId::Messages), 0);
        assert_eq!(state.depth(TabId::Feed), 1);
        assert_eq!(state.selected_tab(), TabId::Messages);
    }
}
