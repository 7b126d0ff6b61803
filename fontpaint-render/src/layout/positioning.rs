//! Line and glyph placement.

use fontpaint_config::Padding;

use super::{GlyphPositioning, LineBreak, LinePositioning};

/// Place every character on its line.
///
/// The baseline of line `n` is `ascent + top + n * (line_height + top + bottom)`
/// and every line box is `line_height + top + bottom` tall. Within a line the
/// cursor moves by `left`, records the glyph, then moves by
/// `advance - kerning + right`. A line's width is the cursor position after
/// its last glyph. Removed break characters are not placed; a line that ends
/// up with no glyphs is still emitted with its baseline so line indices stay
/// contiguous.
pub fn position_lines(
    len: usize,
    advances: &[f64],
    kernings: &[f64],
    breaks: &[LineBreak],
    ascent: f64,
    line_height: f64,
    padding: &Padding,
) -> Vec<LinePositioning> {
    let box_height = line_height + padding.vertical();
    let baseline = |line: usize| ascent + padding.top + line as f64 * box_height;
    let empty_line = |line: usize| LinePositioning {
        x: 0.0,
        y: baseline(line),
        width: 0.0,
        height: box_height,
        glyphs: Vec::new(),
    };

    let mut lines: Vec<LinePositioning> = Vec::new();
    let mut current_line = 0;
    let mut cursor = 0.0;

    for index in 0..len {
        if let Some(line_break) = breaks.iter().find(|b| b.character_index == index) {
            current_line += 1;
            cursor = 0.0;
            if line_break.remove_character {
                continue;
            }
        }

        while lines.len() <= current_line {
            lines.push(empty_line(lines.len()));
        }
        let line = &mut lines[current_line];

        cursor += padding.left;
        line.glyphs.push(GlyphPositioning {
            character_index: index,
            x: cursor,
            y: 0.0,
        });
        cursor += advances[index] - kernings.get(index).copied().unwrap_or(0.0) + padding.right;
        line.width = cursor;
    }

    lines
}
