//! Character reference decoding with HTML5 "consume a character reference"
//! semantics, in text content context.
//!
//! Malformed or unknown references are never errors; they pass through as
//! literal text.

use log::trace;
use memchr::memchr;
use std::borrow::Cow;
use std::fmt;

use crate::symbols::SymbolTable;

// Numeric references 0x80..=0x9F name Windows-1252 characters, not C1
// controls. Positions with no Windows-1252 meaning keep their code point.
const WINDOWS_1252: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

// Any value past this is already out of range; clamping keeps the
// accumulator from overflowing on long digit runs.
const OUT_OF_RANGE: u32 = 0x11_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// A named reference expanded to `characters`; scanning resumes at `end`.
    Named { characters: &'static str, end: usize },
    /// A numeric reference decoded to `character`.
    Numeric { character: char, end: usize },
    /// Not a reference. Everything before `resume` is literal text.
    Literal { resume: usize },
}

pub fn unescape(text: &str) -> Cow<'_, str> {
    if memchr(b'&', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }

    let mut output = String::with_capacity(text.len());
    // Writing into a String cannot fail.
    let _ = unescape_to_sink(text, &mut output);
    Cow::Owned(output)
}

pub fn unescape_to_sink<W: fmt::Write>(text: &str, sink: &mut W) -> fmt::Result {
    let bytes = text.as_bytes();
    let table = SymbolTable::unescape();
    let mut copy_start = 0;
    let mut position = 0;

    while let Some(offset) = memchr(b'&', &bytes[position..]) {
        let ampersand = position + offset;
        match consume_reference(text, ampersand, table) {
            Outcome::Named { characters, end } => {
                sink.write_str(&text[copy_start..ampersand])?;
                sink.write_str(characters)?;
                copy_start = end;
                position = end;
            }
            Outcome::Numeric { character, end } => {
                sink.write_str(&text[copy_start..ampersand])?;
                sink.write_char(character)?;
                copy_start = end;
                position = end;
            }
            Outcome::Literal { resume } => position = resume,
        }
    }

    if copy_start < text.len() {
        sink.write_str(&text[copy_start..])?;
    }
    Ok(())
}

fn consume_reference(text: &str, ampersand: usize, table: &SymbolTable) -> Outcome {
    let start = ampersand + 1;
    match text.as_bytes().get(start) {
        Some(b'#') => consume_numeric(text.as_bytes(), start + 1),
        Some(byte) if byte.is_ascii_alphanumeric() => consume_named(text, start, table),
        _ => Outcome::Literal { resume: start },
    }
}

fn consume_named(text: &str, start: usize, table: &SymbolTable) -> Outcome {
    let Some(reference) = table.longest_match(text, start) else {
        trace!("no named reference matches at byte {start}");
        return Outcome::Literal { resume: start };
    };

    let end = start + reference.name.len();
    // A legacy name without `;` only counts when it is not glued to more of a
    // word: `&copy 2024` decodes, `&notarealname;` stays literal.
    if !reference.name.ends_with(';')
        && text
            .as_bytes()
            .get(end)
            .is_some_and(|&next| next.is_ascii_alphanumeric() || next == b'=')
    {
        trace!("unterminated `{}` is followed by a name character", reference.name);
        return Outcome::Literal { resume: start };
    }

    Outcome::Named {
        characters: reference.characters,
        end,
    }
}

fn consume_numeric(bytes: &[u8], after_hash: usize) -> Outcome {
    let (radix, digits_start) = match bytes.get(after_hash) {
        Some(b'x' | b'X') => (16, after_hash + 1),
        _ => (10, after_hash),
    };

    let mut value: u32 = 0;
    let mut end = digits_start;
    while let Some(digit) = bytes.get(end).and_then(|&byte| char::from(byte).to_digit(radix)) {
        value = (value * radix + digit).min(OUT_OF_RANGE);
        end += 1;
    }

    if end == digits_start {
        trace!("numeric reference without digits at byte {after_hash}");
        return Outcome::Literal {
            resume: digits_start,
        };
    }
    if bytes.get(end) == Some(&b';') {
        end += 1;
    }

    Outcome::Numeric {
        character: numeric_reference_char(value),
        end,
    }
}

/// Maps the value of a numeric reference to the character it denotes.
pub fn numeric_reference_char(value: u32) -> char {
    match value {
        0 => char::REPLACEMENT_CHARACTER,
        0x80..=0x9F => WINDOWS_1252[(value - 0x80) as usize],
        _ => char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_named() {
        assert_eq!(unescape("&amp;"), "&");
        assert_eq!(unescape("&lt;p&gt;"), "<p>");
        assert_eq!(unescape("&apos;&quot;"), "'\"");
        assert_eq!(unescape("caf&eacute;"), "café");
        assert_eq!(unescape("&NotElement; &Afr;"), "\u{2209} \u{1D504}");
    }

    #[test]
    fn test_unescape_numeric() {
        assert_eq!(unescape("&#65;"), "A");
        assert_eq!(unescape("&#x41;"), "A");
        assert_eq!(unescape("&#X41;"), "A");
        assert_eq!(unescape("&#x1F600;"), "\u{1F600}");
        assert_eq!(unescape("&#128512;"), "\u{1F600}");
    }

    #[test]
    fn test_numeric_semicolon_is_optional() {
        assert_eq!(unescape("&#65B"), "AB");
        assert_eq!(unescape("&#x41g"), "Ag");
        assert_eq!(unescape("&#65"), "A");
    }

    #[test]
    fn test_numeric_without_digits_is_literal() {
        assert_eq!(unescape("&#;"), "&#;");
        assert_eq!(unescape("&#x;"), "&#x;");
        assert_eq!(unescape("&#xZZ;"), "&#xZZ;");
        assert_eq!(unescape("&#"), "&#");
        assert_eq!(unescape("&#-1;"), "&#-1;");
        assert_eq!(unescape("&#x&amp;"), "&#x&");
    }

    #[test]
    fn test_windows_1252_remapping() {
        assert_eq!(unescape("&#128;"), "\u{20AC}");
        assert_eq!(unescape("&#x80;"), "\u{20AC}");
        assert_eq!(unescape("&#150;"), "\u{2013}");
        assert_eq!(unescape("&#x9F;"), "\u{0178}");
        assert_eq!(unescape("&#x81;"), "\u{0081}");
    }

    #[test]
    fn test_invalid_code_points_become_replacement() {
        assert_eq!(unescape("&#0;"), "\u{FFFD}");
        assert_eq!(unescape("&#xD800;"), "\u{FFFD}");
        assert_eq!(unescape("&#x110000;"), "\u{FFFD}");
        assert_eq!(unescape("&#99999999999999999999;"), "\u{FFFD}");
        assert_eq!(unescape("&#x10FFFF;"), "\u{10FFFF}");
    }

    #[test]
    fn test_longest_match() {
        assert_eq!(unescape("&notin;"), "\u{2209}");
        assert_eq!(unescape("&notit;"), "&notit;");
        assert_eq!(unescape("&not in"), "\u{00AC} in");
        assert_eq!(unescape("&not;in"), "\u{00AC}in");
    }

    #[test]
    fn test_legacy_unterminated_names() {
        assert_eq!(unescape("&amp"), "&");
        assert_eq!(unescape("&copy 2024"), "\u{00A9} 2024");
        assert_eq!(unescape("&ampx"), "&ampx");
        assert_eq!(unescape("&amp=1"), "&amp=1");
        assert_eq!(unescape("&lt<"), "<<");
        assert_eq!(unescape("&hearts"), "&hearts");
    }

    #[test]
    fn test_unknown_names_pass_through() {
        assert_eq!(unescape("&notarealname;"), "&notarealname;");
        assert_eq!(unescape("&zzz;"), "&zzz;");
        assert_eq!(unescape("a & b"), "a & b");
        assert_eq!(unescape("&"), "&");
        assert_eq!(unescape("&&amp;"), "&&");
        assert_eq!(unescape("&;"), "&;");
    }

    #[test]
    fn test_failed_match_rescans_following_ampersand() {
        assert_eq!(unescape("&zz&lt;"), "&zz<");
        assert_eq!(unescape("&qq&#65;"), "&qqA");
    }

    #[test]
    fn test_every_named_reference_decodes() {
        for reference in SymbolTable::html5().iter() {
            let text = format!("&{}", reference.name);
            assert_eq!(unescape(&text), reference.characters, "{text}");
        }
        assert_eq!(unescape("&bigcup; &boxDL; &Cross;"), "\u{22C3} \u{2557} \u{2A2F}");
        assert_eq!(unescape("&Rarr;&amalg;&And;&Not;"), "\u{21A0}\u{2A3F}\u{2A53}\u{2AEC}");
    }

    #[test]
    fn test_two_code_point_references() {
        assert_eq!(unescape("a&NotEqualTilde;b"), "a\u{2242}\u{0338}b");
        assert_eq!(unescape("&nvlt;"), "<\u{20D2}");
        assert_eq!(unescape("&fjlig;"), "fj");
    }

    #[test]
    fn test_html5_meaning_of_angle_brackets() {
        assert_eq!(unescape("&lang;&rang;"), "\u{27E8}\u{27E9}");
    }

    #[test]
    fn test_input_without_ampersand_is_borrowed() {
        assert!(matches!(unescape("plain"), Cow::Borrowed("plain")));
        assert!(matches!(unescape("&amp;"), Cow::Owned(_)));
    }

    #[test]
    fn test_unescape_preserves_multibyte_text() {
        assert_eq!(unescape("π &amp; σ ✓"), "π & σ ✓");
        assert_eq!(unescape("日本&lt;語"), "日本<語");
    }

    #[test]
    fn test_unescape_to_sink() {
        let mut output = String::from(">");
        unescape_to_sink("a&gt;b", &mut output).unwrap();
        assert_eq!(output, ">a>b");
    }
}
