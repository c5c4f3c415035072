use escapist::{
    EscapeLevel, EscapeOptions, ReferenceSet, ReferenceType, SymbolTable, escape, escape_to_sink,
    escape_utf16, requires_escape, unescape,
};
use std::thread;

const SAMPLES: &[&str] = &[
    "",
    "plain ascii text",
    "Tom & Jerry <said> \"hi\", it's fine",
    "caf\u{e9} na\u{ef}ve \u{2209} \u{2192} \u{20ac}",
    "\u{1F600} \u{1D504} \u{10FFFF}",
    "\u{65e5}\u{672c}\u{8a9e} &amp; already escaped &lt;",
    "tabs\tnew\nlines\r\ncontrols \u{1}\u{b}\u{7f}",
    "& &; &#; &notit; &#x; trailing &",
    "\u{2329}\u{232a}\u{27e8}\u{27e9}",
];

fn all_options() -> Vec<EscapeOptions> {
    let mut options = Vec::new();
    for references in [ReferenceSet::Html4, ReferenceSet::Html5] {
        for reference_type in [
            ReferenceType::NamedDefaultToDecimal,
            ReferenceType::NamedDefaultToHexa,
            ReferenceType::Decimal,
            ReferenceType::Hexadecimal,
        ] {
            for level in EscapeLevel::ALL {
                options.push(EscapeOptions::new(references, reference_type, level));
            }
        }
    }
    options
}

#[test]
fn test_unescape_reverses_escape_for_every_policy() {
    for options in all_options() {
        for sample in SAMPLES {
            let escaped = escape(sample, &options);
            assert_eq!(
                unescape(&escaped),
                *sample,
                "{options:?} escaped {sample:?} as {escaped:?}"
            );
        }
    }
}

#[test]
fn test_every_named_character_survives_round_trip() {
    for references in [ReferenceSet::Html4, ReferenceSet::Html5] {
        let table = SymbolTable::for_set(references);
        let options = EscapeOptions::default()
            .references(references)
            .level(EscapeLevel::AllCharacters);
        for reference in table.iter() {
            let text = reference.characters;
            assert_eq!(unescape(&escape(text, &options)), text, "{}", reference.name);
        }
    }
}

#[test]
fn test_nul_and_c1_are_not_preserved() {
    let options = EscapeOptions::default().level(EscapeLevel::AllCharacters);
    assert_eq!(escape("\u{0}", &options), "&#0;");
    assert_eq!(unescape(&escape("\u{0}", &options)), "\u{FFFD}");
    assert_eq!(unescape(&escape("\u{80}", &options)), "\u{20AC}");
}

#[test]
fn test_documented_examples() {
    let markup = EscapeOptions::default().level(EscapeLevel::OnlyMarkupSignificantWithoutApos);
    assert_eq!(escape("<script>", &markup), "&lt;script&gt;");
    assert_eq!(escape("'", &markup), "'");

    let with_apos = markup.level(EscapeLevel::OnlyMarkupSignificantWithApos);
    assert_eq!(escape("'", &with_apos), "&#39;");
    assert_eq!(
        escape("'", &with_apos.references(ReferenceSet::Html5)),
        "&apos;"
    );

    assert_eq!(unescape("&amp;"), "&");
    assert_eq!(unescape("&notarealname;"), "&notarealname;");
    assert_eq!(unescape("&#65;"), "A");
    assert_eq!(unescape("&#x41;"), "A");
    assert_eq!(unescape("&notin;"), "\u{2209}");
    assert_eq!(unescape("&#128;"), "\u{20AC}");
}

#[test]
fn test_escape_is_not_idempotent() {
    let options = EscapeOptions::default();
    let once = escape("&", &options);
    assert_eq!(once, "&amp;");
    assert_eq!(escape(&once, &options), "&amp;amp;");
}

#[test]
fn test_levels_escape_nested_sets() {
    let characters = SAMPLES.iter().flat_map(|sample| sample.chars());
    for character in characters {
        for pair in EscapeLevel::ALL.windows(2) {
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
fn test_sink_and_utf16_agree_with_escape() {
    let text = SAMPLES.concat();
    let units: Vec<u16> = text.encode_utf16().collect();
    for options in all_options() {
        let expected = escape(&text, &options);

        let mut sink = String::new();
        escape_to_sink(&text, 0, text.len(), &mut sink, &options).unwrap();
        assert_eq!(sink, expected);

        assert_eq!(escape_utf16(&units, &options), expected);
    }
}

#[test]
fn test_tables_are_shared_across_threads() {
    let options = all_options();
    thread::scope(|scope| {
        for chunk in options.chunks(8) {
            scope.spawn(move || {
                for options in chunk {
                    for sample in SAMPLES {
                        assert_eq!(unescape(&escape(sample, options)), *sample);
                    }
                }
            });
        }
    });
}
