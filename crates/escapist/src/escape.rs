use log::debug;
use std::borrow::Cow;
use std::fmt;
use std::io;

use crate::config::EscapeOptions;
use crate::error::{EscapistError, Result};
use crate::symbols::SymbolTable;
use crate::types::{EscapeLevel, ReferenceType};

/// Whether `character` must be replaced by a reference at `level`.
///
/// Control characters other than HTML whitespace (C0, DEL and C1) are
/// escaped at every level.
pub fn requires_escape(character: char, level: EscapeLevel) -> bool {
    if is_unsafe_control(character) {
        return true;
    }

    match level {
        EscapeLevel::OnlyMarkupSignificantWithoutApos => {
            matches!(character, '<' | '>' | '&' | '"')
        }
        EscapeLevel::OnlyMarkupSignificantWithApos => {
            matches!(character, '<' | '>' | '&' | '"' | '\'')
        }
        EscapeLevel::AllNonAsciiPlusMarkupSignificantWithApos => {
            !character.is_ascii() || matches!(character, '<' | '>' | '&' | '"' | '\'')
        }
        EscapeLevel::AllNonAlphanumeric => !character.is_ascii_alphanumeric(),
        EscapeLevel::AllCharacters => true,
    }
}

fn is_unsafe_control(character: char) -> bool {
    matches!(
        character,
        '\u{0000}'..='\u{0008}'
            | '\u{000B}'
            | '\u{000E}'..='\u{001F}'
            | '\u{007F}'..='\u{009F}'
    )
}

pub fn escape<'a>(text: &'a str, options: &EscapeOptions) -> Cow<'a, str> {
    let Some(first) = first_escape(text, options.level) else {
        return Cow::Borrowed(text);
    };

    let mut output = String::with_capacity(text.len() + text.len() / 4 + 8);
    output.push_str(&text[..first]);
    // Writing into a String cannot fail.
    let _ = escape_into(&text[first..], &mut output, options);
    Cow::Owned(output)
}

fn first_escape(text: &str, level: EscapeLevel) -> Option<usize> {
    text.char_indices()
        .find(|&(_, character)| requires_escape(character, level))
        .map(|(index, _)| index)
}

/// Escapes `text[offset..offset + len]` into `sink`.
pub fn escape_to_sink<W: fmt::Write>(
    text: &str,
    offset: usize,
    len: usize,
    sink: &mut W,
    options: &EscapeOptions,
) -> Result<()> {
    let end = offset.checked_add(len).ok_or_else(|| {
        EscapistError::invalid_argument(format!("range {offset}+{len} overflows"))
    })?;
    let slice = text.get(offset..end).ok_or_else(|| {
        EscapistError::invalid_argument(format!(
            "range {offset}..{end} is out of bounds or not on a character boundary \
             (text is {} bytes)",
            text.len()
        ))
    })?;

    escape_into(slice, sink, options)?;
    Ok(())
}

pub fn escape_to_writer<W: io::Write>(
    text: &str,
    writer: &mut W,
    options: &EscapeOptions,
) -> Result<()> {
    let mut sink = IoSink {
        writer,
        error: None,
    };

    match escape_into(text, &mut sink, options) {
        Ok(()) => Ok(()),
        Err(error) => match sink.error.take() {
            Some(io_error) => Err(EscapistError::Io(io_error)),
            None => Err(EscapistError::Format(error)),
        },
    }
}

/// Escapes UTF-16 code units, combining surrogate pairs into one code point.
/// An unpaired surrogate is replaced by U+FFFD and always emitted as a
/// numeric reference.
pub fn escape_utf16(units: &[u16], options: &EscapeOptions) -> String {
    let mut output = String::with_capacity(units.len());
    let mut run = String::new();

    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(character) => run.push(character),
            Err(error) => {
                debug!(
                    "replacing unpaired surrogate {:#06x}",
                    error.unpaired_surrogate()
                );
                output.push_str(&escape(&run, options));
                run.clear();
                output.push_str(replacement_reference(options.reference_type));
            }
        }
    }

    output.push_str(&escape(&run, options));
    output
}

fn replacement_reference(reference_type: ReferenceType) -> &'static str {
    match reference_type {
        ReferenceType::NamedDefaultToHexa | ReferenceType::Hexadecimal => "&#xfffd;",
        ReferenceType::NamedDefaultToDecimal | ReferenceType::Decimal => "&#65533;",
    }
}

pub(crate) fn escape_into<W: fmt::Write>(
    text: &str,
    sink: &mut W,
    options: &EscapeOptions,
) -> fmt::Result {
    let table = SymbolTable::for_set(options.references);
    let mut safe_start = 0;

    for (index, character) in text.char_indices() {
        if !requires_escape(character, options.level) {
            continue;
        }
        if safe_start < index {
            sink.write_str(&text[safe_start..index])?;
        }
        write_reference(sink, character, table, options.reference_type)?;
        safe_start = index + character.len_utf8();
    }

    if safe_start < text.len() {
        sink.write_str(&text[safe_start..])?;
    }
    Ok(())
}

fn write_reference<W: fmt::Write>(
    sink: &mut W,
    character: char,
    table: &SymbolTable,
    reference_type: ReferenceType,
) -> fmt::Result {
    let name = match reference_type {
        ReferenceType::NamedDefaultToDecimal | ReferenceType::NamedDefaultToHexa => {
            table.name_of(character)
        }
        ReferenceType::Decimal | ReferenceType::Hexadecimal => None,
    };

    match name {
        Some(name) => {
            sink.write_char('&')?;
            sink.write_str(name)
        }
        None => write_numeric(sink, character, reference_type),
    }
}

fn write_numeric<W: fmt::Write>(
    sink: &mut W,
    character: char,
    reference_type: ReferenceType,
) -> fmt::Result {
    match reference_type {
        ReferenceType::NamedDefaultToHexa | ReferenceType::Hexadecimal => {
            write!(sink, "&#x{:x};", u32::from(character))
        }
        ReferenceType::NamedDefaultToDecimal | ReferenceType::Decimal => {
            write!(sink, "&#{};", u32::from(character))
        }
    }
}

struct IoSink<'w, W: io::Write> {
    writer: &'w mut W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoSink<'_, W> {
    fn write_str(&mut self, chunk: &str) -> fmt::Result {
        self.writer.write_all(chunk.as_bytes()).map_err(|error| {
            self.error = Some(error);
            fmt::Error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReferenceSet;

    fn options(
        references: ReferenceSet,
        reference_type: ReferenceType,
        level: u8,
    ) -> EscapeOptions {
        EscapeOptions::new(
            references,
            reference_type,
            EscapeLevel::try_from(level).unwrap(),
        )
    }

    fn html4_decimal(level: u8) -> EscapeOptions {
        options(ReferenceSet::Html4, ReferenceType::NamedDefaultToDecimal, level)
    }

    #[test]
    fn test_escape_markup_at_level_0() {
        assert_eq!(escape("<script>", &html4_decimal(0)), "&lt;script&gt;");
        assert_eq!(
            escape("a & \"b\"", &html4_decimal(0)),
            "a &amp; &quot;b&quot;"
        );
    }

    #[test]
    fn test_apostrophe_depends_on_level() {
        assert_eq!(escape("'", &html4_decimal(0)), "'");
        assert_eq!(escape("'", &html4_decimal(1)), "&#39;");

        let html5 = options(ReferenceSet::Html5, ReferenceType::NamedDefaultToDecimal, 1);
        assert_eq!(escape("'", &html5), "&apos;");

        let hexa = options(ReferenceSet::Html4, ReferenceType::NamedDefaultToHexa, 1);
        assert_eq!(escape("'", &hexa), "&#x27;");
    }

    #[test]
    fn test_non_ascii_escaped_from_level_2() {
        assert_eq!(escape("café", &html4_decimal(1)), "café");
        assert_eq!(escape("café", &html4_decimal(2)), "caf&eacute;");
        assert_eq!(escape("€ ☃", &html4_decimal(2)), "&euro; &#9731;");
    }

    #[test]
    fn test_level_3_keeps_only_alphanumerics() {
        assert_eq!(escape("a b-1", &html4_decimal(3)), "a&#32;b&#45;1");
        let html5 = options(ReferenceSet::Html5, ReferenceType::NamedDefaultToDecimal, 3);
        assert_eq!(escape("a.b,c", &html5), "a&period;b&comma;c");
    }

    #[test]
    fn test_level_4_escapes_everything() {
        assert_eq!(escape("Ab1", &html4_decimal(4)), "&#65;&#98;&#49;");
        let hexa = options(ReferenceSet::Html4, ReferenceType::Hexadecimal, 4);
        assert_eq!(escape("Z<", &hexa), "&#x5a;&#x3c;");
    }

    #[test]
    fn test_numeric_only_types_ignore_names() {
        let decimal = options(ReferenceSet::Html5, ReferenceType::Decimal, 2);
        assert_eq!(escape("<é>", &decimal), "&#60;&#233;&#62;");
        let hexa = options(ReferenceSet::Html5, ReferenceType::Hexadecimal, 2);
        assert_eq!(escape("<é>", &hexa), "&#x3c;&#xe9;&#x3e;");
    }

    #[test]
    fn test_supplementary_plane_is_one_reference() {
        let decimal = options(ReferenceSet::Html4, ReferenceType::Decimal, 2);
        assert_eq!(escape("\u{1F600}", &decimal), "&#128512;");
        let hexa = options(ReferenceSet::Html4, ReferenceType::NamedDefaultToHexa, 2);
        assert_eq!(escape("\u{1F600}", &hexa), "&#x1f600;");
        let html5 = options(ReferenceSet::Html5, ReferenceType::NamedDefaultToHexa, 2);
        assert_eq!(escape("\u{1D504}", &html5), "&Afr;");
    }

    #[test]
    fn test_controls_escaped_at_every_level() {
        assert_eq!(escape("a\u{0}b", &html4_decimal(0)), "a&#0;b");
        assert_eq!(escape("\u{7F}", &html4_decimal(0)), "&#127;");
        assert_eq!(escape("\u{1B}[0m", &html4_decimal(1)), "&#27;[0m");
        assert_eq!(escape("a\tb\nc\r", &html4_decimal(2)), "a\tb\nc\r");
    }

    #[test]
    fn test_c1_controls_escaped_at_every_level() {
        assert_eq!(escape("\u{80}", &html4_decimal(0)), "&#128;");
        assert_eq!(escape("a\u{85}b", &html4_decimal(0)), "a&#133;b");
        assert_eq!(escape("\u{9B}", &html4_decimal(1)), "&#155;");
        let hexa = options(ReferenceSet::Html5, ReferenceType::NamedDefaultToHexa, 0);
        assert_eq!(escape("\u{9F}", &hexa), "&#x9f;");
        assert_eq!(escape("\u{A0}", &html4_decimal(1)), "\u{A0}");
    }

    #[test]
    fn test_unescaped_input_is_borrowed() {
        let text = "plain text with no markup";
        assert!(matches!(escape(text, &html4_decimal(2)), Cow::Borrowed(_)));
        assert!(matches!(escape("a<b", &html4_decimal(2)), Cow::Owned(_)));
        assert!(matches!(escape("", &html4_decimal(4)), Cow::Borrowed("")));
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        let once = escape("&", &html4_decimal(0)).into_owned();
        assert_eq!(once, "&amp;");
        assert_eq!(escape(&once, &html4_decimal(0)), "&amp;amp;");
    }

    #[test]
    fn test_levels_are_nested() {
        let samples = ['a', 'Z', '5', ' ', '-', '<', '\'', '"', '&', 'é', '\u{1F600}', '\u{0}'];
        for pair in EscapeLevel::ALL.windows(2) {
            for character in samples {
                if requires_escape(character, pair[0]) {
                    assert!(
                        requires_escape(character, pair[1]),
                        "{character:?} escaped at {} but not {}",
                        pair[0],
                        pair[1]
                    );
                }
            }
        }
    }

    #[test]
    fn test_escape_to_sink_range() {
        let mut output = String::new();
        escape_to_sink("xx<a>yy", 2, 3, &mut output, &html4_decimal(0)).unwrap();
        assert_eq!(output, "&lt;a&gt;");
    }

    #[test]
    fn test_escape_to_sink_uses_requested_table() {
        let mut output = String::new();
        let html5 = options(ReferenceSet::Html5, ReferenceType::NamedDefaultToDecimal, 1);
        escape_to_sink("'", 0, 1, &mut output, &html5).unwrap();
        assert_eq!(output, "&apos;");
    }

    #[test]
    fn test_escape_to_sink_rejects_bad_ranges() {
        let mut output = String::new();
        let error = escape_to_sink("abc", 2, 5, &mut output, &html4_decimal(0)).unwrap_err();
        assert!(matches!(error, EscapistError::InvalidArgument { .. }));

        let error = escape_to_sink("é", 1, 1, &mut output, &html4_decimal(0)).unwrap_err();
        assert!(matches!(error, EscapistError::InvalidArgument { .. }));

        let error =
            escape_to_sink("abc", usize::MAX, 2, &mut output, &html4_decimal(0)).unwrap_err();
        assert!(matches!(error, EscapistError::InvalidArgument { .. }));
        assert!(output.is_empty());
    }

    #[test]
    fn test_escape_to_writer() {
        let mut buffer: Vec<u8> = Vec::new();
        escape_to_writer("1 < 2 & ü", &mut buffer, &html4_decimal(2)).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "1 &lt; 2 &amp; &uuml;");
    }

    #[test]
    fn test_escape_to_writer_reports_io_errors() {
        struct Broken;
        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("disk full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let error = escape_to_writer("<", &mut Broken, &html4_decimal(0)).unwrap_err();
        assert!(matches!(error, EscapistError::Io(_)));
    }

    #[test]
    fn test_escape_utf16_combines_surrogate_pairs() {
        let units: Vec<u16> = "a\u{1F600}<".encode_utf16().collect();
        assert_eq!(units.len(), 4);
        let decimal = options(ReferenceSet::Html4, ReferenceType::Decimal, 2);
        assert_eq!(escape_utf16(&units, &decimal), "a&#128512;&#60;");
    }

    #[test]
    fn test_escape_utf16_replaces_unpaired_surrogates() {
        let units = [0x0061, 0xD800, 0x0062, 0xDC00];
        assert_eq!(
            escape_utf16(&units, &html4_decimal(0)),
            "a&#65533;b&#65533;"
        );
        let hexa = options(ReferenceSet::Html5, ReferenceType::NamedDefaultToHexa, 0);
        assert_eq!(escape_utf16(&[0xDFFF], &hexa), "&#xfffd;");
    }

    #[test]
    fn test_escape_utf16_surrogate_between_escapes() {
        let units = [0x003C, 0xD800, 0x00E9];
        assert_eq!(
            escape_utf16(&units, &html4_decimal(2)),
            "&lt;&#65533;&eacute;"
        );
        assert_eq!(escape_utf16(&[], &html4_decimal(4)), "");
    }
}
