//! Exact-fit trimming of line boxes to the glyphs' ink bounds.

use fontpaint_config::Padding;
use fontpaint_path::BoundingRect;

use super::{GlyphPositioning, LinePositioning};
use crate::copy::CopyProps;

/// Glyph placements of a line paired with their bounding rects, skipping
/// glyphs without geometry (spaces, missing glyphs).
fn inked<'a>(
    line: &'a LinePositioning,
    copy: &'a CopyProps,
) -> impl Iterator<Item = (&'a GlyphPositioning, BoundingRect)> + 'a {
    line.glyphs.iter().filter_map(|placement| {
        copy.glyph(placement.character_index)
            .and_then(|glyph| glyph.bounding_rect())
            .map(|rect| (placement, rect))
    })
}

/// Shrink line boxes so they hug the ink, keeping `padding` room on every side.
///
/// - Top: `ascent + min(min_y)` over the first line is removed from every
///   line's `y` and from the first line's height
/// - Bottom: `line_height - ascent - max(max_y)` over the last line is removed
///   from the last line's height
/// - Horizontal: each line is shifted and narrowed to span from its first
///   inked glyph's `min_x - padding.left` to its last inked glyph's
///   `max_x + padding.right`
///
/// The line boxes from positioning already hold `padding.top` above the
/// ascent and `padding.bottom` below the descent, so the vertical gaps leave
/// that room in place.
///
/// Lines (or edges) without any inked glyph are left untouched.
pub fn trim_to_ink(
    lines: &mut [LinePositioning],
    copy: &CopyProps,
    ascent: f64,
    line_height: f64,
    padding: &Padding,
) {
    let Some(first_line) = lines.first() else {
        return;
    };

    let top_min_y = inked(first_line, copy)
        .map(|(_, rect)| rect.min_y)
        .reduce(f64::min);
    if let Some(min_y) = top_min_y {
        let top_gap = ascent + min_y;
        for line in lines.iter_mut() {
            line.y -= top_gap;
        }
        lines[0].height -= top_gap;
    }

    let last_index = lines.len() - 1;
    let bottom_max_y = inked(&lines[last_index], copy)
        .map(|(_, rect)| rect.max_y)
        .reduce(f64::max);
    if let Some(max_y) = bottom_max_y {
        lines[last_index].height -= line_height - ascent - max_y;
    }

    for line in lines.iter_mut() {
        let mut ink = inked(line, copy);
        let Some((first, first_rect)) = ink.next() else {
            continue;
        };
        let (last, last_rect) = ink.last().unwrap_or((first, first_rect));

        let left = first.x + first_rect.min_x - padding.left;
        let right = last.x + last_rect.max_x + padding.right;
        line.x = -left;
        line.width = right - left;
    }
}
