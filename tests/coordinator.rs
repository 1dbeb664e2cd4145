mod common;

use common::{depths, destinations};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tabnav::navigation::NavigationCoordinator;
use tabnav::route::{Route, TabId};

#[test]
fn initial_state_focuses_feed_with_empty_stacks() {
    let coordinator = NavigationCoordinator::new();
    assert_eq!(coordinator.selected_tab(), TabId::Feed);
    assert_eq!(coordinator.snapshot().stacks().len(), 3);
    assert_eq!(depths(&coordinator), vec![0, 0, 0]);
}

#[test]
fn navigate_to_tab_changes_focus() {
    let coordinator = NavigationCoordinator::new();
    coordinator.navigate(Route::TabSelection(TabId::Messages));
    assert_eq!(coordinator.selected_tab(), TabId::Messages);
}

#[test]
fn push_increases_active_depth_by_one() {
    for route in destinations() {
        let coordinator = NavigationCoordinator::new();
        coordinator.navigate(Route::TabSelection(TabId::Notifications));
        coordinator.navigate(Route::Home);
        let before = depths(&coordinator);

        coordinator.navigate(route.clone());

        let after = depths(&coordinator);
        assert_eq!(after[TabId::Notifications.index()], before[2] + 1);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[1]);
        assert_eq!(coordinator.stack(TabId::Notifications).top(), Some(&route));
    }
}

#[test]
fn tab_switch_leaves_every_stack_unchanged() {
    let coordinator = NavigationCoordinator::new();
    coordinator.navigate(Route::profile("123"));
    coordinator.navigate(Route::Settings);
    let before = coordinator.snapshot();

    coordinator.navigate(Route::TabSelection(TabId::Messages));

    let after = coordinator.snapshot();
    assert_eq!(after.selected_tab(), TabId::Messages);
    assert_eq!(after.stacks(), before.stacks());
}

#[test]
fn reselecting_active_tab_is_harmless() {
    let coordinator = NavigationCoordinator::new();
    coordinator.navigate(Route::Home);
    let before = coordinator.snapshot();

    coordinator.navigate(Route::TabSelection(TabId::Feed));

    assert_eq!(coordinator.snapshot(), before);
}

#[test]
fn navigate_back_pops_one() {
    let coordinator = NavigationCoordinator::new();
    coordinator.navigate(Route::profile("123"));
    coordinator.navigate(Route::Settings);
    assert_eq!(coordinator.depth(TabId::Feed), 2);

    coordinator.navigate_back();
    assert_eq!(coordinator.depth(TabId::Feed), 1);
    assert_eq!(
        coordinator.stack(TabId::Feed).top(),
        Some(&Route::profile("123"))
    );
}

#[test]
fn push_then_back_restores_prior_stack() {
    let coordinator = NavigationCoordinator::new();
    coordinator.navigate(Route::TabSelection(TabId::Messages));
    coordinator.navigate(Route::detail(1));
    for route in destinations() {
        let before = coordinator.snapshot();
        coordinator.navigate(route);
        coordinator.navigate_back();
        assert_eq!(coordinator.snapshot(), before);
    }
}

#[test]
fn navigate_back_on_empty_stack_is_noop() {
    let coordinator = NavigationCoordinator::new();
    let before = coordinator.snapshot();

    coordinator.navigate_back();
    coordinator.navigate_back();

    assert_eq!(coordinator.snapshot(), before);
}

#[test]
fn navigate_to_root_clears_only_active_tab() {
    let coordinator = NavigationCoordinator::new();
    coordinator.navigate(Route::profile("123"));
    coordinator.navigate(Route::TabSelection(TabId::Messages));
    coordinator.navigate(Route::Settings);
    coordinator.navigate(Route::detail(9));

    coordinator.navigate_to_root();

    assert_eq!(coordinator.selected_tab(), TabId::Messages);
    assert_eq!(depths(&coordinator), vec![1, 0, 0]);
}

#[test]
fn navigation_across_tabs_is_isolated() {
    let coordinator = NavigationCoordinator::new();
    coordinator.navigate(Route::profile("123"));
    assert_eq!(coordinator.depth(TabId::Feed), 1);

    coordinator.navigate(Route::TabSelection(TabId::Messages));
    assert_eq!(coordinator.selected_tab(), TabId::Messages);
    assert_eq!(coordinator.depth(TabId::Messages), 0);

    coordinator.navigate(Route::detail(456));
    assert_eq!(coordinator.depth(TabId::Messages), 1);

    // Feed keeps its history while another tab is focused
    assert_eq!(coordinator.depth(TabId::Feed), 1);

    coordinator.navigate(Route::TabSelection(TabId::Feed));
    assert_eq!(
        coordinator.stack(TabId::Feed).routes(),
        &[Route::profile("123")]
    );
}

#[test]
fn clones_share_state() {
    let coordinator = NavigationCoordinator::new();
    let handle = coordinator.clone();
    handle.navigate(Route::Settings);
    assert_eq!(coordinator.depth(TabId::Feed), 1);
}

#[test]
fn observers_are_notified_synchronously() {
    let coordinator = NavigationCoordinator::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let _sub = coordinator.subscribe(move |state| {
        assert_eq!(state.depth(TabId::Feed), counter.load(Ordering::SeqCst) + 1);
        counter.fetch_add(1, Ordering::SeqCst);
    });

    coordinator.navigate(Route::Home);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    coordinator.handle_deep_link("app://settings");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn concurrent_pushes_are_serialized() {
    let coordinator = NavigationCoordinator::new();
    let threads: Vec<_> = (0..4)
        .map(|n| {
            let handle = coordinator.clone();
            std::thread::spawn(move || {
                for i in 0..25 {
                    handle.navigate(Route::detail(n * 100 + i));
                }
            })
        })
        .collect();
    for thread in threads {
        thread.join().unwrap();
    }
    assert_eq!(coordinator.depth(TabId::Feed), 100);
}
