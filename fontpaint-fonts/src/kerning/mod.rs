//! Range-based kerning tables built from `<hkern>` declarations.

mod entities;
pub mod unicode_range;

use std::collections::HashMap;

pub use entities::entity_code_point;
pub use unicode_range::{UnicodeRange, unicode_ranges};

use crate::svg_font::KerningDeclaration;

/// All kerning pairs whose first character falls in `u1`.
#[derive(Debug, Clone, PartialEq)]
pub struct KerningEntry {
    /// Inclusive range of first-character code points
    pub u1: UnicodeRange,
    /// `(u2_low, u2_high, k)` for succeeding characters, in declaration order
    pub pairs: Vec<(u32, u32, f64)>,
}

/// Sorted list of kerning entries.
///
/// Entries are ordered by `u1.low` ascending, then `u1.high` descending, so
/// the widest range starting at a code point comes first.
#[derive(Debug, Clone, Default)]
pub struct KerningTable {
    entries: Vec<KerningEntry>,
}

impl KerningTable {
    /// Build a table from parsed declarations. Declarations with an identical
    /// `u1` range are merged into one entry.
    pub fn from_declarations(
        declarations: &[KerningDeclaration],
        glyph_names: &HashMap<String, String>,
    ) -> Self {
        let mut entries: Vec<KerningEntry> = Vec::new();

        for declaration in declarations {
            let u1_ranges = unicode_ranges(&declaration.u1, &declaration.g1, glyph_names);
            let u2_ranges = unicode_ranges(&declaration.u2, &declaration.g2, glyph_names);
            let pairs: Vec<(u32, u32, f64)> = u2_ranges
                .iter()
                .map(|&(low, high)| (low, high, declaration.k))
                .collect();

            for u1 in u1_ranges {
                match entries.iter_mut().find(|entry| entry.u1 == u1) {
                    Some(entry) => entry.pairs.extend_from_slice(&pairs),
                    None => entries.push(KerningEntry {
                        u1,
                        pairs: pairs.clone(),
                    }),
                }
            }
        }

        entries.sort_by(|a, b| a.u1.0.cmp(&b.u1.0).then(b.u1.1.cmp(&a.u1.1)));
        log::debug!("Built kerning table with {} entries", entries.len());
        Self { entries }
    }

    pub fn entries(&self) -> &[KerningEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Kerning between code points `a` and `b`, or `0.0` if no pair matches.
    ///
    /// Every entry whose range contains `a` is a candidate, even when the
    /// candidate ranges are not contiguous in the sorted order.
    pub fn lookup(&self, a: u32, b: u32) -> f64 {
        self.entries
            .iter()
            .take_while(|entry| entry.u1.0 <= a)
            .filter(|entry| entry.u1.1 >= a)
            .flat_map(|entry| entry.pairs.iter())
            .find(|&&(low, high, _)| low <= b && b <= high)
            .map_or(0.0, |&(_, _, k)| k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration(u1: &[&str], u2: &[&str], k: f64) -> KerningDeclaration {
        KerningDeclaration {
            u1: u1.iter().map(|s| s.to_string()).collect(),
            u2: u2.iter().map(|s| s.to_string()).collect(),
            k,
            ..Default::default()
        }
    }

    #[test]
    fn test_entries_are_sorted_and_merged() {
        let table = KerningTable::from_declarations(
            &[
                declaration(&["B"], &["C"], 10.0),
                declaration(&["U+0041-0043"], &["D"], 20.0),
                declaration(&["A"], &["E"], 30.0),
                declaration(&["B"], &["F"], 40.0),
            ],
            &HashMap::new(),
        );
        let u1: Vec<UnicodeRange> = table.entries().iter().map(|e| e.u1).collect();
        assert_eq!(u1, vec![(65, 67), (65, 65), (66, 66)]);
        assert_eq!(table.entries()[2].pairs, vec![(67, 67, 10.0), (70, 70, 40.0)]);
    }

    #[test]
    fn test_lookup() {
        let table = KerningTable::from_declarations(
            &[
                declaration(&["A"], &["V", "W"], 80.0),
                declaration(&["U+0041-005A"], &["U+0061-007A"], 5.0),
            ],
            &HashMap::new(),
        );
        assert_eq!(table.lookup('A' as u32, 'V' as u32), 80.0);
        assert_eq!(table.lookup('A' as u32, 'a' as u32), 5.0);
        assert_eq!(table.lookup('Q' as u32, 'z' as u32), 5.0);
        assert_eq!(table.lookup('a' as u32, 'A' as u32), 0.0);
    }

    #[test]
    fn test_lookup_across_non_contiguous_ranges() {
        // sorted order: (65..=90), (66..=66), (70..=70); a lookup for 'F'
        // must skip the non-matching 'B' entry and still find the 'F' entry
        let table = KerningTable::from_declarations(
            &[
                declaration(&["U+0041-005A"], &["x"], 1.0),
                declaration(&["B"], &["y"], 2.0),
                declaration(&["F"], &["y"], 3.0),
            ],
            &HashMap::new(),
        );
        assert_eq!(table.lookup('F' as u32, 'y' as u32), 3.0);
        assert_eq!(table.lookup('F' as u32, 'x' as u32), 1.0);
        assert_eq!(table.lookup('G' as u32, 'y' as u32), 0.0);
    }
}
