mod html4;
mod html5;

use log::debug;
use std::sync::LazyLock;

use crate::types::ReferenceSet;

static HTML4: LazyLock<SymbolTable> = LazyLock::new(|| {
    let table = SymbolTable::build(html4_references(), |reference| {
        UNESCAPE.characters_of(reference.name) == Some(reference.characters)
    });
    debug!(
        "built HTML4 symbol table: {} names, {} escapable code points",
        table.len(),
        table.by_codepoint.len()
    );
    table
});

static HTML5: LazyLock<SymbolTable> = LazyLock::new(|| {
    let table = SymbolTable::new(html5_references());
    debug!(
        "built HTML5 symbol table: {} names, {} escapable code points",
        table.len(),
        table.by_codepoint.len()
    );
    table
});

static UNESCAPE: LazyLock<SymbolTable> = LazyLock::new(|| {
    let table = SymbolTable::new(html4_references().chain(html5_references()));
    debug!("built unescape symbol table: {} names", table.len());
    table
});

fn html4_references() -> impl Iterator<Item = (&'static str, &'static str)> {
    html4::REFERENCES.iter().copied()
}

fn html5_references() -> impl Iterator<Item = (&'static str, &'static str)> {
    let terminated: Vec<(&'static str, &'static str)> = html4::REFERENCES
        .iter()
        .chain(html5::REFERENCES)
        .copied()
        .collect();

    let unterminated: Vec<(&'static str, &'static str)> = html5::LEGACY_UNTERMINATED
        .iter()
        .filter_map(|&legacy| {
            terminated
                .iter()
                .rev()
                .find(|(name, _)| name.strip_suffix(';') == Some(legacy))
                .map(|&(_, characters)| (legacy, characters))
        })
        .collect();

    terminated.into_iter().chain(unterminated)
}

/// One named character reference. `name` carries its trailing `;` when the
/// reference is terminated; `characters` holds one or two code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reference {
    pub name: &'static str,
    pub characters: &'static str,
}

impl Reference {
    /// The code point this reference expands to, if it is exactly one.
    pub fn codepoint(&self) -> Option<char> {
        let mut characters = self.characters.chars();
        match (characters.next(), characters.next()) {
            (Some(codepoint), None) => Some(codepoint),
            _ => None,
        }
    }
}

/// Immutable two-way index between reference names and code points.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    by_codepoint: Vec<(char, &'static str)>,
    by_name: Vec<Reference>,
}

impl SymbolTable {
    pub fn html4() -> &'static SymbolTable {
        &HTML4
    }

    pub fn html5() -> &'static SymbolTable {
        &HTML5
    }

    pub fn for_set(references: ReferenceSet) -> &'static SymbolTable {
        match references {
            ReferenceSet::Html4 => Self::html4(),
            ReferenceSet::Html5 => Self::html5(),
        }
    }

    /// Union of every HTML4 and HTML5 name, with HTML5 meanings winning.
    pub fn unescape() -> &'static SymbolTable {
        &UNESCAPE
    }

    /// Later entries replace earlier ones with the same name.
    pub fn new(entries: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
        Self::build(entries, |_| true)
    }

    /// Merges `tables` by name; later tables win.
    pub fn union<'a>(tables: impl IntoIterator<Item = &'a SymbolTable>) -> Self {
        Self::new(tables.into_iter().flat_map(|table| {
            table
                .iter()
                .map(|reference| (reference.name, reference.characters))
        }))
    }

    fn build(
        entries: impl IntoIterator<Item = (&'static str, &'static str)>,
        escapable: impl Fn(&Reference) -> bool,
    ) -> Self {
        let mut by_name: Vec<Reference> = Vec::new();
        for (name, characters) in entries {
            by_name.push(Reference { name, characters });
        }

        by_name.reverse();
        by_name.sort_by(|left, right| left.name.as_bytes().cmp(right.name.as_bytes()));
        by_name.dedup_by(|duplicate, kept| duplicate.name == kept.name);

        let mut by_codepoint: Vec<(char, &'static str)> = by_name
            .iter()
            .filter(|reference| reference.name.ends_with(';') && escapable(reference))
            .filter_map(|reference| Some((reference.codepoint()?, reference.name)))
            .collect();
        by_codepoint.sort_by(|left, right| {
            left.0
                .cmp(&right.0)
                .then_with(|| canonical_rank(left.1).cmp(&canonical_rank(right.1)))
        });
        by_codepoint.dedup_by_key(|&mut (codepoint, _)| codepoint);

        Self {
            by_codepoint,
            by_name,
        }
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reference> {
        self.by_name.iter()
    }

    /// Canonical name used when escaping `codepoint`, `;` included.
    pub fn name_of(&self, codepoint: char) -> Option<&'static str> {
        self.by_codepoint
            .binary_search_by(|&(candidate, _)| candidate.cmp(&codepoint))
            .ok()
            .map(|index| self.by_codepoint[index].1)
    }

    /// What `name` expands to, `;` included in the name when terminated.
    pub fn characters_of(&self, name: &str) -> Option<&'static str> {
        self.get(name).map(|reference| reference.characters)
    }

    /// Like `characters_of`, for names that expand to a single code point.
    pub fn codepoint_of(&self, name: &str) -> Option<char> {
        self.get(name).and_then(|reference| reference.codepoint())
    }

    fn get(&self, name: &str) -> Option<&Reference> {
        self.by_name
            .binary_search_by(|reference| reference.name.as_bytes().cmp(name.as_bytes()))
            .ok()
            .map(|index| &self.by_name[index])
    }

    /// Longest name that is a prefix of `text[position..]`.
    ///
    /// Narrows a range of the name-sorted index one byte at a time. Every
    /// name in the range shares the bytes consumed so far, so a name whose
    /// length equals that depth sorts first and is a complete match.
    pub fn longest_match(&self, text: &str, position: usize) -> Option<Reference> {
        let bytes = text.as_bytes().get(position..)?;
        let mut low = 0;
        let mut high = self.by_name.len();
        let mut longest = None;

        for (depth, &byte) in bytes.iter().enumerate() {
            let candidates = &self.by_name[low..high];
            let start = candidates.partition_point(|reference| {
                reference
                    .name
                    .as_bytes()
                    .get(depth)
                    .is_none_or(|&candidate| candidate < byte)
            });
            let end = candidates.partition_point(|reference| {
                reference
                    .name
                    .as_bytes()
                    .get(depth)
                    .is_none_or(|&candidate| candidate <= byte)
            });

            high = low + end;
            low += start;
            if low == high {
                break;
            }

            let first = self.by_name[low];
            if first.name.len() == depth + 1 {
                longest = Some(first);
            }
        }

        longest
    }
}

// Shortest wins; ties prefer fewer capitals so `amp;` beats `AMP;`.
fn canonical_rank(name: &str) -> (usize, usize, &str) {
    let capitals = name.bytes().filter(u8::is_ascii_uppercase).count();
    (name.len(), capitals, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html4_lookups() {
        let table = SymbolTable::html4();
        assert_eq!(table.name_of('&'), Some("amp;"));
        assert_eq!(table.name_of('<'), Some("lt;"));
        assert_eq!(table.name_of('\u{00A0}'), Some("nbsp;"));
        assert_eq!(table.name_of('\u{20AC}'), Some("euro;"));
        assert_eq!(table.name_of('\''), None);
        assert_eq!(table.codepoint_of("hearts;"), Some('\u{2665}'));
        assert_eq!(table.codepoint_of("hearts"), None);
        assert_eq!(table.codepoint_of("apos;"), None);
    }

    #[test]
    fn test_html4_table_size() {
        assert_eq!(SymbolTable::html4().len(), 252);
    }

    #[test]
    fn test_html5_lookups() {
        let table = SymbolTable::html5();
        assert_eq!(table.name_of('\''), Some("apos;"));
        assert_eq!(table.name_of('&'), Some("amp;"));
        assert_eq!(table.name_of('"'), Some("quot;"));
        assert_eq!(table.name_of('\u{2192}'), Some("rarr;"));
        assert_eq!(table.name_of('\u{1D504}'), Some("Afr;"));
        assert_eq!(table.codepoint_of("amp"), Some('&'));
        assert_eq!(table.codepoint_of("AMP;"), Some('&'));
        assert_eq!(table.codepoint_of("NotElement;"), Some('\u{2209}'));
        assert_eq!(table.codepoint_of("notin"), None);
    }

    #[test]
    fn test_html5_table_is_complete() {
        let table = SymbolTable::html5();
        assert_eq!(table.len(), 2231);
        assert_eq!(table.iter().filter(|reference| reference.name.ends_with(';')).count(), 2125);
        assert_eq!(
            table
                .iter()
                .filter(|reference| reference.codepoint().is_none())
                .count(),
            93
        );
        for name in ["bigcup;", "boxDL;", "Cross;", "Rarr;", "amalg;", "And;", "Not;"] {
            assert!(table.codepoint_of(name).is_some(), "{name} is missing");
        }
    }

    #[test]
    fn test_two_code_point_names() {
        let table = SymbolTable::html5();
        assert_eq!(table.characters_of("NotEqualTilde;"), Some("\u{2242}\u{0338}"));
        assert_eq!(table.codepoint_of("NotEqualTilde;"), None);
        assert_eq!(table.characters_of("fjlig;"), Some("fj"));
        assert_eq!(table.name_of('\u{2242}'), Some("esim;"));
    }

    #[test]
    fn test_canonical_name_is_always_terminated() {
        let table = SymbolTable::html5();
        for codepoint in table.iter().filter_map(Reference::codepoint) {
            if let Some(name) = table.name_of(codepoint) {
                assert!(name.ends_with(';'), "{name} is not terminated");
            }
        }
    }

    #[test]
    fn test_html5_redefines_angle_brackets() {
        assert_eq!(SymbolTable::html4().codepoint_of("lang;"), Some('\u{2329}'));
        assert_eq!(SymbolTable::html5().codepoint_of("lang;"), Some('\u{27E8}'));
        assert_eq!(SymbolTable::unescape().codepoint_of("lang;"), Some('\u{27E8}'));
        assert_eq!(SymbolTable::html4().name_of('\u{2329}'), None);
        assert_eq!(SymbolTable::html5().name_of('\u{27E8}'), Some("lang;"));
    }

    #[test]
    fn test_every_html4_escape_name_decodes_back() {
        let unescape = SymbolTable::unescape();
        let html4 = SymbolTable::html4();
        for codepoint in html4.iter().filter_map(Reference::codepoint) {
            if let Some(name) = html4.name_of(codepoint) {
                assert_eq!(unescape.codepoint_of(name), Some(codepoint));
            }
        }
    }

    #[test]
    fn test_names_are_sorted_and_unique() {
        let names: Vec<&str> = SymbolTable::unescape()
            .iter()
            .map(|reference| reference.name)
            .collect();
        for pair in names.windows(2) {
            assert!(pair[0].as_bytes() < pair[1].as_bytes(), "{pair:?}");
        }
    }

    #[test]
    fn test_longest_match_prefers_longer_name() {
        let table = SymbolTable::unescape();
        let found = table.longest_match("&notin; x", 1).unwrap();
        assert_eq!(found.name, "notin;");
        assert_eq!(found.characters, "\u{2209}");

        let found = table.longest_match("&notit;", 1).unwrap();
        assert_eq!(found.name, "not");

        let found = table.longest_match("&not;", 1).unwrap();
        assert_eq!(found.name, "not;");
    }

    #[test]
    fn test_longest_match_unterminated_legacy() {
        let table = SymbolTable::unescape();
        assert_eq!(table.longest_match("&ampfoo", 1).unwrap().name, "amp");
        assert_eq!(table.longest_match("&copy", 1).unwrap().name, "copy");
        assert!(table.longest_match("&hearts", 1).is_none());
        assert_eq!(table.longest_match("&hearts;", 1).unwrap().name, "hearts;");
    }

    #[test]
    fn test_longest_match_misses() {
        let table = SymbolTable::unescape();
        assert!(table.longest_match("&zzz;", 1).is_none());
        assert!(table.longest_match("&", 1).is_none());
        assert!(table.longest_match("&", 5).is_none());
        assert!(table.longest_match("&;", 1).is_none());
    }

    #[test]
    fn test_custom_table_replaces_duplicate_names() {
        let table = SymbolTable::new([("x;", "a"), ("y;", "b"), ("x;", "c")]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.codepoint_of("x;"), Some('c'));
        assert_eq!(table.name_of('a'), None);
        assert_eq!(table.name_of('c'), Some("x;"));
    }

    #[test]
    fn test_union_later_tables_win() {
        let first = SymbolTable::new([("x;", "a"), ("y;", "b")]);
        let second = SymbolTable::new([("x;", "c"), ("z;", "d")]);
        let merged = SymbolTable::union([&first, &second]);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.codepoint_of("x;"), Some('c'));
        assert_eq!(merged.codepoint_of("y;"), Some('b'));
        assert_eq!(merged.name_of('d'), Some("z;"));
    }

    #[test]
    fn test_canonical_rank_ties() {
        let table = SymbolTable::new([
            ("AMP;", "&"),
            ("amp;", "&"),
            ("ampersand;", "&"),
            ("amp", "&"),
        ]);
        assert_eq!(table.name_of('&'), Some("amp;"));
    }
}
