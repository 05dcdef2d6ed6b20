// Host-side tests for label wrapping and font fitting.
// A fixed-advance measure stands in for the canvas `measureText`.

use bubbles_core::constants::{LABEL_HEIGHT_FACTOR, LABEL_MAX_LINES, LABEL_MIN_FONT_PX};
use bubbles_core::{
    fit_label, font_upper_bound, radius_for_votes, wrap_into_lines, LabelBox, TextMeasure, GENRES,
};
use glam::Vec2;

/// Every character is 0.6 em wide.
struct FixedAdvance;

impl TextMeasure for FixedAdvance {
    fn text_width(&self, text: &str, font_px: u32) -> f32 {
        text.chars().count() as f32 * font_px as f32 * 0.6
    }
}

#[test]
fn short_label_stays_on_one_line() {
    let lines = wrap_into_lines(&FixedAdvance, "Drum & Bass", 10, 200.0);
    assert_eq!(lines, vec!["Drum & Bass"]);
}

#[test]
fn words_wrap_greedily() {
    // 6px per char: "Industrial" = 60px, "Hard Techno" = 66px
    let lines = wrap_into_lines(&FixedAdvance, "Industrial Hard Techno", 10, 70.0);
    assert_eq!(lines, vec!["Industrial", "Hard Techno"]);
}

#[test]
fn long_word_is_hard_split() {
    // 5 chars = 30px (plus f32 rounding), so the half pixel keeps 5 per line
    let lines = wrap_into_lines(&FixedAdvance, "Supercalifragilistic", 10, 30.5);
    assert_eq!(lines, vec!["Super", "calif", "ragil", "istic"]);
    for line in &lines {
        assert!(FixedAdvance.text_width(line, 10) <= 30.5);
    }
}

#[test]
fn extra_whitespace_is_collapsed() {
    let lines = wrap_into_lines(&FixedAdvance, "  Hard   House ", 10, 500.0);
    assert_eq!(lines, vec!["Hard House"]);
}

#[test]
fn base_bubble_uses_the_upper_bound_when_it_fits() {
    let r = radius_for_votes(0);
    let layout = fit_label(&FixedAdvance, "House", r, 0);
    assert!(!layout.overflow);
    assert_eq!(layout.font_px, font_upper_bound(r, 0));
    assert_eq!(layout.lines.as_slice(), ["House"]);
}

#[test]
fn votes_raise_the_font_cap() {
    let r = 60.0;
    assert!(font_upper_bound(r, 12) > font_upper_bound(r, 0));
    assert_eq!(font_upper_bound(r, 12), font_upper_bound(r, 40));
}

#[test]
fn tiny_bubble_falls_back_to_single_overflowing_line() {
    let layout = fit_label(&FixedAdvance, "Industrial Hard Techno", 5.0, 0);
    assert!(layout.overflow);
    assert_eq!(layout.font_px, LABEL_MIN_FONT_PX);
    assert_eq!(layout.lines.as_slice(), ["Industrial Hard Techno"]);
}

#[test]
fn fitted_labels_respect_line_and_height_budgets() {
    for g in GENRES {
        for votes in 0..=60 {
            let r = radius_for_votes(votes);
            let layout = fit_label(&FixedAdvance, g.label, r, votes);
            if layout.overflow {
                assert_eq!(layout.lines.len(), 1);
                continue;
            }
            let bounds = LabelBox::for_radius(r);
            assert!(layout.lines.len() <= LABEL_MAX_LINES, "{} at {votes}", g.key);
            assert!(
                layout.block_height() <= bounds.max_height,
                "{} at {votes}: {} > {}",
                g.key,
                layout.block_height(),
                bounds.max_height
            );
            assert!(layout.font_px >= LABEL_MIN_FONT_PX);
            for line in &layout.lines {
                assert!(FixedAdvance.text_width(line, layout.font_px) <= bounds.max_width);
            }
        }
    }
}

#[test]
fn larger_bubbles_never_get_smaller_fonts() {
    for g in GENRES {
        let small = fit_label(&FixedAdvance, g.label, radius_for_votes(1), 1);
        let large = fit_label(&FixedAdvance, g.label, radius_for_votes(30), 30);
        assert!(large.font_px >= small.font_px, "{}", g.key);
    }
}

#[test]
fn lines_are_vertically_centred() {
    let r = 80.0;
    let layout = fit_label(&FixedAdvance, "Industrial Hard Techno", r, 0);
    assert!(!layout.overflow);
    let center = Vec2::new(100.0, 200.0);
    let ys: Vec<f32> = layout.line_positions(center).map(|(_, p)| p.y).collect();
    let mean = ys.iter().sum::<f32>() / ys.len() as f32;
    assert!((mean - center.y).abs() < 1e-3);
    for pair in ys.windows(2) {
        assert!((pair[1] - pair[0] - layout.line_height()).abs() < 1e-4);
    }
    assert!(layout.line_positions(center).all(|(_, p)| p.x == center.x));
    assert!(LABEL_HEIGHT_FACTOR * r >= layout.block_height());
}
