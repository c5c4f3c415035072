use escapist::{
    CONFIG_FILE_NAME, EscapeLevel, EscapeOptions, ReferenceSet, ReferenceType, SymbolTable,
    escape_to_writer, unescape,
};
use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub references: Option<ReferenceSet>,
    pub reference_type: Option<ReferenceType>,
    pub level: Option<EscapeLevel>,
}

fn read_input(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => io::read_to_string(io::stdin()),
    }
}

fn resolve_options(
    config: Option<&Path>,
    working_dir: &Path,
    overrides: Overrides,
) -> Result<EscapeOptions, Box<dyn std::error::Error>> {
    let mut options = match config {
        Some(path) => EscapeOptions::load(path)?,
        None => {
            let default_path = working_dir.join(CONFIG_FILE_NAME);
            if default_path.exists() {
                EscapeOptions::load(&default_path)?
            } else {
                EscapeOptions::default()
            }
        }
    };
    debug!("options before overrides: {options:?}");

    if let Some(references) = overrides.references {
        options = options.references(references);
    }
    if let Some(reference_type) = overrides.reference_type {
        options = options.reference_type(reference_type);
    }
    if let Some(level) = overrides.level {
        options = options.level(level);
    }
    Ok(options)
}

pub fn escape_file(
    file: Option<&Path>,
    config: Option<&Path>,
    overrides: Overrides,
) -> Result<(), Box<dyn std::error::Error>> {
    let current_dir = std::env::current_dir()?;
    let options = resolve_options(config, &current_dir, overrides)?;
    let text = read_input(file)?;

    let mut stdout = io::stdout().lock();
    escape_to_writer(&text, &mut stdout, &options)?;
    stdout.flush()?;
    Ok(())
}

pub fn unescape_file(file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(file)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(unescape(&text).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn describe(query: &str, references: ReferenceSet) -> Result<String, Box<dyn std::error::Error>> {
    let table = SymbolTable::for_set(references);

    let mut characters = query.chars();
    if let (Some(character), None) = (characters.next(), characters.next()) {
        return match table.name_of(character) {
            Some(name) => Ok(format!("U+{:04X} &{name}", u32::from(character))),
            None => Err(format!("no {references} name for U+{:04X}", u32::from(character)).into()),
        };
    }

    let name = query.strip_prefix('&').unwrap_or(query);
    let characters = table
        .characters_of(name)
        .or_else(|| table.characters_of(&format!("{name};")))
        .ok_or_else(|| format!("'{query}' is not an {references} reference"))?;
    let codepoints: Vec<String> = characters
        .chars()
        .map(|character| format!("U+{:04X}", u32::from(character)))
        .collect();
    Ok(format!("&{name} {} {characters}", codepoints.join(" ")))
}

pub fn lookup(query: &str, references: ReferenceSet) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", describe(query, references)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_defaults_without_config() {
        let dir = TempDir::new().unwrap();
        let options = resolve_options(None, dir.path(), Overrides::default()).unwrap();
        assert_eq!(options, EscapeOptions::default());
    }

    #[test]
    fn test_resolve_reads_working_dir_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "references = \"html5\"\nlevel = 1\n",
        )
        .unwrap();

        let options = resolve_options(None, dir.path(), Overrides::default()).unwrap();
        assert_eq!(options.references, ReferenceSet::Html5);
        assert_eq!(options.level, EscapeLevel::OnlyMarkupSignificantWithApos);
    }

    #[test]
    fn test_flags_override_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "reference-type = \"decimal\"\nlevel = 4\n").unwrap();

        let overrides = Overrides {
            level: Some(EscapeLevel::OnlyMarkupSignificantWithoutApos),
            ..Overrides::default()
        };
        let options = resolve_options(Some(&path), dir.path(), overrides).unwrap();
        assert_eq!(options.reference_type, ReferenceType::Decimal);
        assert_eq!(options.level, EscapeLevel::OnlyMarkupSignificantWithoutApos);
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(resolve_options(Some(&missing), dir.path(), Overrides::default()).is_err());
    }

    #[test]
    fn test_describe_character() {
        assert_eq!(describe("&", ReferenceSet::Html4).unwrap(), "U+0026 &amp;");
        assert_eq!(describe("'", ReferenceSet::Html5).unwrap(), "U+0027 &apos;");
        assert!(describe("'", ReferenceSet::Html4).is_err());
    }

    #[test]
    fn test_describe_name() {
        assert_eq!(
            describe("&notin;", ReferenceSet::Html5).unwrap(),
            "&notin; U+2209 \u{2209}"
        );
        assert_eq!(
            describe("copy", ReferenceSet::Html4).unwrap(),
            "&copy U+00A9 \u{a9}"
        );
        assert_eq!(
            describe("NotEqualTilde;", ReferenceSet::Html5).unwrap(),
            "&NotEqualTilde; U+2242 U+0338 \u{2242}\u{338}"
        );
        assert!(describe("notarealname", ReferenceSet::Html5).is_err());
    }
}
