// Host-side tests for scroll tracking and page state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
}

use crate::core::scroll::*;
use crate::core::state::PageState;

#[test]
fn progress_at_top_is_zero() {
    let s = ScrollState::from_geometry(0.0, 5000.0, 1000.0);
    assert_eq!(s.progress, 0.0);
    assert_eq!(s.section_index, 0);
    assert_eq!(s.section(), Section::Landing);
}

#[test]
fn progress_at_bottom_is_one() {
    let s = ScrollState::from_geometry(4000.0, 5000.0, 1000.0);
    assert_eq!(s.progress, 1.0);
    assert_eq!(s.section_index, 4);
    assert_eq!(s.section(), Section::Contact);
}

#[test]
fn progress_stays_in_unit_range_over_scrollable_span() {
    let (doc, view) = (5300.0, 900.0);
    let scrollable = doc - view;
    let mut top = 0.0;
    while top <= scrollable {
        let p = scroll_progress(top, doc, view);
        assert!((0.0..=1.0).contains(&p), "top={top} p={p}");
        top += 37.0;
    }
}

#[test]
fn overscroll_is_clamped() {
    // Rubber-band scrolling reports offsets outside the scrollable span
    assert_eq!(scroll_progress(-120.0, 5000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(4200.0, 5000.0, 1000.0), 1.0);
}

#[test]
fn short_content_yields_zero_progress() {
    assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(50.0, 1000.0, 1000.0), 0.0);
    let s = ScrollState::from_geometry(10.0, 600.0, 600.0);
    assert_eq!(s.progress, 0.0);
    assert_eq!(s.section_index, 0);
}

#[test]
fn non_finite_geometry_yields_zero_progress() {
    assert_eq!(scroll_progress(f64::NAN, 5000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(100.0, f64::NAN, 1000.0), 0.0);
    assert_eq!(section_index_for_progress(f32::NAN), 0);
}

#[test]
fn section_index_follows_floor_rule() {
    for i in 0..=1000 {
        let p = i as f32 / 1000.0;
        let expected = ((p * 5.0).floor() as usize).min(4);
        assert_eq!(section_index_for_progress(p), expected, "p={p}");
    }
}

#[test]
fn section_boundaries() {
    assert_eq!(section_index_for_progress(0.0), 0);
    assert_eq!(section_index_for_progress(0.19), 0);
    assert_eq!(section_index_for_progress(0.2), 1);
    assert_eq!(section_index_for_progress(0.45), 2);
    assert_eq!(section_index_for_progress(0.79), 3);
    assert_eq!(section_index_for_progress(0.8), 4);
    assert_eq!(section_index_for_progress(1.0), 4);
}

#[test]
fn section_lookup_falls_back_to_landing() {
    assert_eq!(Section::from_index(2), Section::Projects);
    assert_eq!(Section::from_index(7), Section::Landing);
    for (i, s) in Section::ALL.iter().enumerate() {
        assert_eq!(s.index(), i);
    }
    assert_eq!(Section::Skills.title(), "Skills");
}

#[test]
fn section_scroll_top_is_one_viewport_per_section() {
    assert_eq!(section_scroll_top(0, 900.0), 0.0);
    assert_eq!(section_scroll_top(3, 900.0), 2700.0);
    // Out of range clamps to the last section
    assert_eq!(section_scroll_top(9, 900.0), 3600.0);
}

#[test]
fn digit_keys_map_to_sections() {
    assert_eq!(section_for_digit("1"), Some(0));
    assert_eq!(section_for_digit("3"), Some(2));
    assert_eq!(section_for_digit("5"), Some(4));
    assert_eq!(section_for_digit("0"), None);
    assert_eq!(section_for_digit("6"), None);
    assert_eq!(section_for_digit("12"), None);
    assert_eq!(section_for_digit("e"), None);
    assert_eq!(section_for_digit(""), None);
}

#[test]
fn page_state_reports_section_changes_only() {
    let mut page = PageState::default();
    assert_eq!(page.update_scroll(0.0, 5000.0, 1000.0), None);
    assert_eq!(page.update_scroll(100.0, 5000.0, 1000.0), None);
    assert_eq!(
        page.update_scroll(1700.0, 5000.0, 1000.0),
        Some(Section::Projects)
    );
    assert_eq!(page.scroll.section_index, 2);
    assert_eq!(page.update_scroll(1750.0, 5000.0, 1000.0), None);
    assert_eq!(page.update_scroll(0.0, 5000.0, 1000.0), Some(Section::Landing));
}

#[test]
fn page_state_setters() {
    let mut page = PageState::default();
    assert!(!page.exploded);
    assert!(page.toggle_exploded());
    assert!(!page.toggle_exploded());
    page.toggle_exploded();
    assert!(page.exploded);

    assert!(page.set_hovered(Some(3)));
    assert!(!page.set_hovered(Some(3)));
    assert!(page.set_hovered(None));
}
