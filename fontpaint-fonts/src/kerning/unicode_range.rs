//! Expansion of `<hkern>` `u`/`g` attribute lists into inclusive code point ranges.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use super::entities::entity_code_point;

/// An inclusive code point range; single characters have `low == high`.
pub type UnicodeRange = (u32, u32);

fn explicit_range_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?i)U\+([0-9A-F]{1,6})-([0-9A-F]{1,6})$")
            .expect("regex pattern is valid and should always compile")
    })
}

fn wildcard_range_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?i)U\+([0-9A-F?]{1,6})$")
            .expect("regex pattern is valid and should always compile")
    })
}

/// Expand the `u` (characters / unicode ranges) and `g` (glyph names) lists of
/// one side of an `<hkern>` element into code point ranges, sorted by low bound.
///
/// Glyph names resolve through the font's own `glyph-name` table first and the
/// HTML entity table second. Tokens that resolve to nothing are skipped.
pub fn unicode_ranges(
    u: &[String],
    g: &[String],
    glyph_names: &HashMap<String, String>,
) -> Vec<UnicodeRange> {
    let mut result = Vec::with_capacity(u.len() + g.len());

    for name in g {
        match resolve_glyph_name(name, glyph_names) {
            Some(code) => result.push((code, code)),
            None => log::debug!("Skipping unresolvable kerning glyph name '{}'", name),
        }
    }

    for token in u {
        match parse_unicode_token(token) {
            Some(range) => result.push(range),
            None => log::debug!("Skipping unrecognized kerning unicode token '{}'", token),
        }
    }

    result.sort_by_key(|&(low, _)| low);
    result
}

fn resolve_glyph_name(name: &str, glyph_names: &HashMap<String, String>) -> Option<u32> {
    if let Some(code) = single_char(name) {
        return Some(code);
    }
    if let Some(code) = glyph_names.get(name).and_then(|unicode| single_char(unicode)) {
        return Some(code);
    }
    entity_code_point(name)
}

fn parse_unicode_token(token: &str) -> Option<UnicodeRange> {
    if let Some(code) = single_char(token) {
        return Some((code, code));
    }

    if let Some(caps) = explicit_range_regex().captures(token) {
        let low = u32::from_str_radix(&caps[1], 16).ok()?;
        let high = u32::from_str_radix(&caps[2], 16).ok()?;
        return (low <= high).then_some((low, high));
    }

    let caps = wildcard_range_regex().captures(token)?;
    let low = u32::from_str_radix(&caps[1].replace('?', "0"), 16).ok()?;
    let high = u32::from_str_radix(&caps[1].replace('?', "F"), 16).ok()?;
    Some((low, high))
}

fn single_char(value: &str) -> Option<u32> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c as u32),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_single_characters() {
        let ranges = unicode_ranges(&strings(&["b", "a"]), &[], &HashMap::new());
        assert_eq!(ranges, vec![(97, 97), (98, 98)]);
    }

    #[test]
    fn test_unicode_forms() {
        let names = HashMap::new();
        assert_eq!(
            unicode_ranges(&strings(&["U+20A7"]), &[], &names),
            vec![(0x20A7, 0x20A7)]
        );
        assert_eq!(
            unicode_ranges(&strings(&["U+20A?"]), &[], &names),
            vec![(0x20A0, 0x20AF)]
        );
        assert_eq!(
            unicode_ranges(&strings(&["U+2315-2437"]), &[], &names),
            vec![(0x2315, 0x2437)]
        );
        assert_eq!(
            unicode_ranges(&strings(&["u+00e9"]), &[], &names),
            vec![(0xE9, 0xE9)]
        );
    }

    #[test]
    fn test_glyph_names() {
        let names = HashMap::from([("alpha".to_string(), "α".to_string())]);
        let ranges = unicode_ranges(&[], &strings(&["plusmn", "alpha", "x", "nope"]), &names);
        assert_eq!(ranges, vec![(120, 120), (177, 177), (0x3B1, 0x3B1)]);
    }

    #[test]
    fn test_invalid_tokens_are_skipped() {
        let ranges = unicode_ranges(
            &strings(&["U+ZZZZ", "abc", "U+2437-2315"]),
            &[],
            &HashMap::new(),
        );
        assert!(ranges.is_empty());
    }
}
