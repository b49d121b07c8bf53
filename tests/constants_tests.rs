// Host-side tests for the selector table.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use cord_core::Target;

#[test]
fn every_named_target_has_a_selector() {
    let named = [
        Target::Door,
        Target::Bear,
        Target::Arms,
        Target::Paw,
        Target::Knuckles,
        Target::Brows,
        Target::Bulb,
        Target::DummyCord,
        Target::DummyCordLine,
        Target::HitSpot,
    ];
    for target in named {
        let sel = selector(target).unwrap_or_else(|| panic!("{target:?} has no selector"));
        assert!(sel.starts_with('.') || sel.starts_with('#'), "{sel}");
    }
}

#[test]
fn handle_targets_are_not_selectors() {
    assert_eq!(selector(Target::Cord(0)), None);
    assert_eq!(selector(Target::Cord(3)), None);
    assert_eq!(selector(Target::Proxy), None);
    assert_eq!(selector(Target::Root), None);
}

#[test]
fn dummy_line_lives_inside_the_dummy_cord() {
    let group = selector(Target::DummyCord).unwrap();
    let line = selector(Target::DummyCordLine).unwrap();
    assert!(line.starts_with(group));
    assert_eq!(line, DUMMY_LINE_SELECTOR);
}

#[test]
fn hit_spot_selector_is_shared_with_drag_binding() {
    assert_eq!(selector(Target::HitSpot), Some(HIT_SELECTOR));
}
