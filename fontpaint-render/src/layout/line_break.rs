//! Greedy line breaking at spaces and hyphens.

use fontpaint_config::Padding;

use super::LineBreak;

/// Compute line breaks for `characters` against a bound `width` font units wide.
///
/// Single pass, no lookahead. A space or hyphen becomes the pending break
/// candidate; the candidate is committed only once the running width has
/// overflowed by the time the next candidate (or the end of the text) is
/// reached. Spaces are removed at a break; hyphens stay at the end of the
/// earlier line. A token wider than the bound with no earlier candidate
/// overflows instead of being split.
pub fn line_breaks(
    characters: &[char],
    advances: &[f64],
    kernings: &[f64],
    width: f64,
    padding: &Padding,
) -> Vec<LineBreak> {
    let mut breaks = Vec::new();
    let mut cx = 0.0;
    let mut token_width = 0.0;
    let mut candidate: Option<LineBreak> = None;

    for (index, &character) in characters.iter().enumerate() {
        let glyph_width = advances[index] + padding.horizontal();
        let kerning = kernings.get(index).copied().unwrap_or(0.0);

        match character {
            ' ' => {
                if cx > width
                    && let Some(pending) = candidate.take()
                {
                    breaks.push(pending);
                    cx = token_width;
                }
                candidate = Some(LineBreak {
                    character_index: index,
                    remove_character: true,
                    inserted_character: None,
                });
                token_width = 0.0;
            }
            '-' => {
                if cx + glyph_width - kerning > width
                    && let Some(pending) = candidate.take()
                {
                    breaks.push(pending);
                    cx = token_width;
                }
                candidate = Some(LineBreak {
                    character_index: index + 1,
                    remove_character: false,
                    inserted_character: None,
                });
                token_width = 0.0;
            }
            _ => token_width += glyph_width,
        }

        cx += glyph_width - kerning;
    }

    if cx > width
        && let Some(pending) = candidate
        && pending.character_index < characters.len()
    {
        breaks.push(pending);
    }

    breaks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breaks_for(text: &str, advance: f64, width: f64) -> Vec<usize> {
        let characters: Vec<char> = text.chars().collect();
        let advances = vec![advance; characters.len()];
        let kernings = vec![0.0; characters.len()];
        line_breaks(&characters, &advances, &kernings, width, &Padding::default())
            .iter()
            .map(|b| b.character_index)
            .collect()
    }

    #[test]
    fn test_no_break_when_fitting() {
        assert!(breaks_for("aa aa", 100.0, 500.0).is_empty());
    }

    #[test]
    fn test_break_at_space() {
        // "aaa bbb": cx reaches 700 at the end; the space at 3 is committed
        let characters: Vec<char> = "aaa bbb".chars().collect();
        let breaks = line_breaks(
            &characters,
            &[100.0; 7],
            &[0.0; 7],
            500.0,
            &Padding::default(),
        );
        assert_eq!(
            breaks,
            vec![LineBreak {
                character_index: 3,
                remove_character: true,
                inserted_character: None,
            }]
        );
    }

    #[test]
    fn test_break_after_hyphen() {
        let characters: Vec<char> = "aaa-bbb".chars().collect();
        let breaks = line_breaks(
            &characters,
            &[100.0; 7],
            &[0.0; 7],
            500.0,
            &Padding::default(),
        );
        assert_eq!(
            breaks,
            vec![LineBreak {
                character_index: 4,
                remove_character: false,
                inserted_character: None,
            }]
        );
    }

    #[test]
    fn test_long_token_overflows() {
        assert!(breaks_for("aaaaaaaaaa", 100.0, 300.0).is_empty());
    }

    #[test]
    fn test_multiple_lines() {
        // each word is 300 wide, bound 500: every space breaks
        assert_eq!(breaks_for("aaa bbb ccc ddd", 100.0, 500.0), vec![3, 7, 11]);
    }

    #[test]
    fn test_trailing_hyphen_does_not_break_past_end() {
        assert!(breaks_for("aaaaaa-", 100.0, 300.0).is_empty());
    }

    #[test]
    fn test_padding_counts_towards_width() {
        let characters: Vec<char> = "aa aa".chars().collect();
        let advances = [100.0; 5];
        let kernings = [0.0; 5];
        assert!(line_breaks(&characters, &advances, &kernings, 500.0, &Padding::default()).is_empty());
        let padded = Padding::new(0.0, 10.0, 0.0, 10.0);
        assert_eq!(
            line_breaks(&characters, &advances, &kernings, 500.0, &padded).len(),
            1
        );
    }

    #[test]
    fn test_kerning_reduces_width() {
        let characters: Vec<char> = "aa aaa".chars().collect();
        let advances = [100.0; 6];
        assert_eq!(
            line_breaks(&characters, &advances, &[0.0; 6], 550.0, &Padding::default()).len(),
            1
        );
        assert!(line_breaks(&characters, &advances, &[10.0; 6], 550.0, &Padding::default()).is_empty());
    }
}
