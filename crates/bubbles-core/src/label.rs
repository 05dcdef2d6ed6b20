//! Label fitting: pick the largest font and wrap layout that keeps a genre
//! label inside its bubble.
//!
//! Fitting is a pure function of the label text, the bubble radius, its vote
//! count and a [`TextMeasure`], so it is recomputed per body on every frame.

use crate::constants::{
    EARLY_BOOST_CAP, LABEL_FONT_RATIO, LABEL_FONT_VOTE_BOOST, LABEL_HEIGHT_FACTOR,
    LABEL_LINE_GAP_PX, LABEL_MAX_LINES, LABEL_MIN_FONT_PX, LABEL_WIDTH_FACTOR,
};
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

pub type Lines = SmallVec<[String; LABEL_MAX_LINES]>;

/// Text width query, the `measureText` of the rendering surface.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font_px: u32) -> f32;
}

#[derive(Clone, Debug, PartialEq)]
pub struct LabelLayout {
    pub font_px: u32,
    pub lines: Lines,
    /// Set when no font size fit and the raw label is drawn on one line.
    pub overflow: bool,
}

impl LabelLayout {
    #[inline]
    pub fn line_height(&self) -> f32 {
        (self.font_px + LABEL_LINE_GAP_PX) as f32
    }

    #[inline]
    pub fn block_height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height()
    }

    /// Baseline-centre position for each line, block centred on `center`.
    pub fn line_positions(&self, center: Vec2) -> impl Iterator<Item = (&str, Vec2)> + '_ {
        let lh = self.line_height();
        let start_y = center.y - (self.lines.len().saturating_sub(1) as f32 * lh) / 2.0;
        self.lines
            .iter()
            .enumerate()
            .map(move |(i, line)| (line.as_str(), Vec2::new(center.x, start_y + i as f32 * lh)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelBox {
    pub max_width: f32,
    pub max_height: f32,
}

impl LabelBox {
    pub fn for_radius(radius: f32) -> Self {
        Self {
            max_width: radius * LABEL_WIDTH_FACTOR,
            max_height: radius * LABEL_HEIGHT_FACTOR,
        }
    }
}

/// Largest font tried for a bubble, before the downward search.
#[inline]
pub fn font_upper_bound(radius: f32, votes: u32) -> u32 {
    let boost = LABEL_FONT_VOTE_BOOST * votes.min(EARLY_BOOST_CAP) as f32;
    (radius * LABEL_FONT_RATIO + boost).floor().max(0.0) as u32
}

/// Break a single word into chunks no wider than `max_width`.
///
/// A chunk always holds at least one character, even when that character
/// alone is wider than the budget.
fn hard_split(measure: &impl TextMeasure, word: &str, font_px: u32, max_width: f32) -> Vec<String> {
    let mut out = Vec::new();
    let mut chunk = String::new();
    for ch in word.chars() {
        let mut test = chunk.clone();
        test.push(ch);
        if !chunk.is_empty() && measure.text_width(&test, font_px) > max_width {
            out.push(std::mem::take(&mut chunk));
            chunk.push(ch);
        } else {
            chunk = test;
        }
    }
    if !chunk.is_empty() {
        out.push(chunk);
    }
    out
}

/// Greedy whitespace wrap with hard splitting of over-long words.
pub fn wrap_into_lines(
    measure: &impl TextMeasure,
    text: &str,
    font_px: u32,
    max_width: f32,
) -> Vec<String> {
    let pieces = text
        .split_whitespace()
        .flat_map(|word| hard_split(measure, word, font_px, max_width));

    let mut lines = Vec::new();
    let mut cur = String::new();
    for piece in pieces {
        let test = if cur.is_empty() {
            piece.clone()
        } else {
            format!("{} {}", cur, piece)
        };
        if measure.text_width(&test, font_px) <= max_width {
            cur = test;
        } else {
            if !cur.is_empty() {
                lines.push(std::mem::take(&mut cur));
            }
            cur = piece;
        }
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

pub fn fit_label(measure: &impl TextMeasure, label: &str, radius: f32, votes: u32) -> LabelLayout {
    let bounds = LabelBox::for_radius(radius);
    let upper = font_upper_bound(radius, votes);

    for font_px in (LABEL_MIN_FONT_PX..=upper).rev() {
        let lines = wrap_into_lines(measure, label, font_px, bounds.max_width);
        let block_height = lines.len() as f32 * (font_px + LABEL_LINE_GAP_PX) as f32;
        if lines.len() <= LABEL_MAX_LINES && block_height <= bounds.max_height {
            return LabelLayout {
                font_px,
                lines: lines.into_iter().collect(),
                overflow: false,
            };
        }
    }

    LabelLayout {
        font_px: LABEL_MIN_FONT_PX,
        lines: smallvec![label.to_owned()],
        overflow: true,
    }
}
