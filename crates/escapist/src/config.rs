use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{EscapistError, Result};
use crate::types::{EscapeLevel, ReferenceSet, ReferenceType};

pub const CONFIG_FILE_NAME: &str = "escapist.toml";

/// Everything `escape` needs to know. Defaults to HTML4 names with a
/// decimal fallback at level 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct EscapeOptions {
    #[serde(default)]
    pub references: ReferenceSet,
    #[serde(default)]
    pub reference_type: ReferenceType,
    #[serde(default)]
    pub level: EscapeLevel,
}

impl EscapeOptions {
    pub fn new(references: ReferenceSet, reference_type: ReferenceType, level: EscapeLevel) -> Self {
        Self {
            references,
            reference_type,
            level,
        }
    }

    pub fn references(mut self, references: ReferenceSet) -> Self {
        self.references = references;
        self
    }

    pub fn reference_type(mut self, reference_type: ReferenceType) -> Self {
        self.reference_type = reference_type;
        self
    }

    pub fn level(mut self, level: EscapeLevel) -> Self {
        self.level = level;
        self
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EscapistError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        parse(&content, path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        parse(content, Path::new("<inline>"))
    }
}

fn parse(content: &str, path: &Path) -> Result<EscapeOptions> {
    toml::from_str(content).map_err(|error| EscapistError::TomlParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_options() {
        let options = EscapeOptions::default();
        assert_eq!(options.references, ReferenceSet::Html4);
        assert_eq!(options.reference_type, ReferenceType::NamedDefaultToDecimal);
        assert_eq!(
            options.level,
            EscapeLevel::AllNonAsciiPlusMarkupSignificantWithApos
        );
    }

    #[test]
    fn test_builder_methods() {
        let options = EscapeOptions::default()
            .references(ReferenceSet::Html5)
            .reference_type(ReferenceType::Hexadecimal)
            .level(EscapeLevel::AllCharacters);
        assert_eq!(
            options,
            EscapeOptions::new(
                ReferenceSet::Html5,
                ReferenceType::Hexadecimal,
                EscapeLevel::AllCharacters
            )
        );
    }

    #[test]
    fn test_parse_full_config() {
        let options = EscapeOptions::from_toml_str(
            r#"
references = "html5"
reference-type = "named-default-to-hexa"
level = 3
"#,
        )
        .unwrap();
        assert_eq!(options.references, ReferenceSet::Html5);
        assert_eq!(options.reference_type, ReferenceType::NamedDefaultToHexa);
        assert_eq!(options.level, EscapeLevel::AllNonAlphanumeric);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let options = EscapeOptions::from_toml_str("level = 0").unwrap();
        assert_eq!(options.references, ReferenceSet::Html4);
        assert_eq!(options.level, EscapeLevel::OnlyMarkupSignificantWithoutApos);

        assert_eq!(
            EscapeOptions::from_toml_str("").unwrap(),
            EscapeOptions::default()
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let error = EscapeOptions::from_toml_str("level = 9").unwrap_err();
        assert!(matches!(error, EscapistError::TomlParse { .. }));
        assert!(error.to_string().contains("between 0 and 4"));

        assert!(EscapeOptions::from_toml_str("reference-type = \"octal\"").is_err());
        assert!(EscapeOptions::from_toml_str("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "references = \"html5\"\nlevel = 1\n").unwrap();

        let options = EscapeOptions::load(&path).unwrap();
        assert_eq!(options.references, ReferenceSet::Html5);
        assert_eq!(options.level, EscapeLevel::OnlyMarkupSignificantWithApos);
    }

    #[test]
    fn test_load_reports_path_on_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            EscapeOptions::load(&missing),
            Err(EscapistError::ConfigNotFound { .. })
        ));

        let broken = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&broken, "level = [").unwrap();
        match EscapeOptions::load(&broken) {
            Err(EscapistError::TomlParse { path, .. }) => assert_eq!(path, broken),
            other => panic!("expected TomlParse, got {other:?}"),
        }
    }

    #[test]
    fn test_round_trips_through_toml() {
        let options = EscapeOptions::new(
            ReferenceSet::Html5,
            ReferenceType::Decimal,
            EscapeLevel::AllNonAlphanumeric,
        );
        let serialized = toml::to_string(&options).unwrap();
        assert!(serialized.contains("level = 3"));
        assert_eq!(EscapeOptions::from_toml_str(&serialized).unwrap(), options);
    }
}
