//! End-to-end flows over the public API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chooser::prelude::*;

fn settings_items() -> Vec<Item> {
    vec![
        Item::new("Wi-Fi Settings", "Wireless networks"),
        Item::new("Battery Saver", ""),
        Item::new("Dark Mode", "Night theme").selected(true),
        Item::new("Airplane Mode", ""),
    ]
}

#[test]
fn multiple_mode_flow_from_construction_to_confirm() {
    let confirmed = Arc::new(AtomicUsize::new(0));
    let confirmed_clone = confirmed.clone();

    let mut session = ChooserSession::new(
        settings_items(),
        SelectMode::Multiple,
        Box::new(move |output| {
            confirmed_clone.fetch_add(1, Ordering::SeqCst);
            // Backing order after the selected-first sort:
            // [Dark Mode, Wi-Fi Settings, Battery Saver, Airplane Mode]
            assert_eq!(output.mask, vec![true, false, false, true]);
            let titles: Vec<_> = output.items.iter().map(|i| i.title.as_str()).collect();
            assert_eq!(titles, vec!["Dark Mode", "Airplane Mode"]);
        }),
    );

    session.query_changed("mode");
    while session.filtering() {
        std::thread::sleep(Duration::from_millis(5));
    }

    let rows = session.visible_rows();
    let titles: Vec<_> = rows.iter().map(|r| r.item.title.as_str()).collect();
    assert_eq!(titles, vec!["Dark Mode", "Airplane Mode"]);

    // Toggle "Airplane Mode" through its backing index.
    session.item_activated(rows[1].index).unwrap();
    session.confirm();
    assert_eq!(confirmed.load(Ordering::SeqCst), 1);
}

#[test]
fn single_mode_never_shows_two_selections() {
    let model = SelectionModel::new(settings_items(), SelectMode::Single);
    for index in 0..model.len() {
        model.toggle(index).unwrap();
        let selected = model.selection_mask().into_iter().filter(|&s| s).count();
        assert_eq!(selected, 1, "after toggling index {index}");
    }
}

#[test]
fn filtering_is_non_destructive() {
    let model = SelectionModel::new(settings_items(), SelectMode::Multiple);
    let narrowed = model.query("battery");
    assert_eq!(narrowed.len(), 1);

    // The backing collection is untouched; the empty query shows all of
    // it again in the same order.
    let all = model.query("");
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].item.title, "Dark Mode");
    assert_eq!(model.len(), 4);
}

#[test]
fn toggles_through_a_filtered_view_are_visible_everywhere() {
    let model = SelectionModel::new(settings_items(), SelectMode::Multiple);
    let rows = model.query("battery");
    model.toggle(rows[0].index).unwrap();

    // A fresh unfiltered view reflects the toggle.
    let all = model.query("");
    let battery = all.iter().find(|r| r.item.title == "Battery Saver").unwrap();
    assert!(battery.item.selected);
    assert!(model.selection_mask()[battery.index]);
}

#[test]
fn cancel_discards_the_session_silently() {
    let confirmed = Arc::new(AtomicUsize::new(0));
    let confirmed_clone = confirmed.clone();
    let mut session = ChooserSession::new(
        settings_items(),
        SelectMode::Multiple,
        Box::new(move |_| {
            confirmed_clone.fetch_add(1, Ordering::SeqCst);
        }),
    );

    session.item_activated(1).unwrap();
    session.cancel();
    assert!(session.finished());
    assert_eq!(confirmed.load(Ordering::SeqCst), 0);
}

#[test]
fn icon_cache_default_capacity_evicts_in_lru_order() {
    let icons: IconCache<usize> = IconCache::new();
    for n in 0..DEFAULT_ICON_CAPACITY.get() {
        icons.put(format!("icon-{n}"), n);
    }
    // Touch the oldest entry so the second-oldest becomes the victim.
    assert_eq!(icons.get("icon-0"), Some(0));
    icons.put("one-too-many", usize::MAX);

    assert_eq!(icons.len(), DEFAULT_ICON_CAPACITY.get());
    assert_eq!(icons.get("icon-0"), Some(0));
    assert_eq!(icons.get("icon-1"), None);
    assert_eq!(icons.get("one-too-many"), Some(usize::MAX));
}

#[test]
fn rapid_requeries_apply_only_the_newest_result() {
    let mut session = ChooserSession::new(settings_items(), SelectMode::Multiple, Box::new(|_| {}));

    // Simulates a user typing faster than filters complete; every
    // intermediate request is superseded before the next keystroke.
    for query in ["m", "mo", "mod", "mode"] {
        session.query_changed(query);
    }
    while session.filtering() {
        std::thread::sleep(Duration::from_millis(5));
    }
    // Give any straggler worker a moment; stale results must not land.
    std::thread::sleep(Duration::from_millis(50));

    let titles: Vec<_> = session
        .visible_rows()
        .iter()
        .map(|r| r.item.title.clone())
        .collect();
    assert_eq!(titles, vec!["Dark Mode", "Airplane Mode"]);
}
