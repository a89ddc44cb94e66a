use std::collections::VecDeque;

use crate::error::IconError;
use crate::font::TextMeasure;
use crate::units::Px;
use tracing::trace;

use super::hyphenate::hyphenate;

/// Horizontal breathing room, in pixels, between the packed text block and
/// the edges of the square canvas. The usable line width when squarifying is
/// the canvas width minus this margin.
pub const TEXT_MARGIN: Px = Px(50.0);

/// Split text into lines with optional hyphenation.
///
/// Ensures that each line fits within the width budget derived from
/// `max_size` (the canvas width) less [TEXT_MARGIN], taking a new line and
/// hyphenating where necessary. Whitespace between words is collapsed;
/// fragments on a line are joined with single spaces and lines are joined
/// with newlines.
///
/// A line is never emitted empty: the first fragment of a line is accepted
/// unconditionally, so a fragment wider than the budget occupies a line by
/// itself rather than pushing out an empty one. When hyphenation reduces the
/// whole label to a single fragment it is returned as-is, even when over
/// budget.
///
/// Labels that contain no words at all are an error
/// ([IconError::InvalidLabel]) rather than an empty layout.
pub fn squarify(text: &str, measure: &impl TextMeasure, max_size: Px) -> Result<String, IconError> {
    let max_length = max_size - TEXT_MARGIN;

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Err(IconError::InvalidLabel);
    }

    let mut fragments: VecDeque<String> = hyphenate(&words, measure, max_length).into();
    if fragments.len() == 1 {
        return Ok(fragments.pop_front().expect("fragment exists"));
    }

    let mut lines: Vec<String> = Vec::new();
    let mut line = fragments.pop_front().expect("hyphenation of a word is never empty");
    while let Some(fragment) = fragments.pop_front() {
        let mut attempt = line.clone();
        attempt.push(' ');
        attempt.push_str(&fragment);

        if measure.width_of(&attempt) <= max_length {
            line = attempt;
        } else {
            trace!(line = %line, "line full, wrapping");
            lines.push(line);
            line = fragment;
        }
    }
    lines.push(line);

    Ok(lines.join("\n"))
}
