use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EscapistError;

/// How aggressively text is escaped. Each level escapes everything the
/// previous one does, plus more.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum EscapeLevel {
    /// `<`, `>`, `&` and `"`.
    OnlyMarkupSignificantWithoutApos,
    /// Level 0 plus `'`.
    OnlyMarkupSignificantWithApos,
    /// Level 1 plus every code point at or above U+0080.
    #[default]
    AllNonAsciiPlusMarkupSignificantWithApos,
    /// Everything except ASCII letters and digits.
    AllNonAlphanumeric,
    /// Everything.
    AllCharacters,
}

impl EscapeLevel {
    pub const ALL: [EscapeLevel; 5] = [
        EscapeLevel::OnlyMarkupSignificantWithoutApos,
        EscapeLevel::OnlyMarkupSignificantWithApos,
        EscapeLevel::AllNonAsciiPlusMarkupSignificantWithApos,
        EscapeLevel::AllNonAlphanumeric,
        EscapeLevel::AllCharacters,
    ];
}

impl From<EscapeLevel> for u8 {
    fn from(level: EscapeLevel) -> u8 {
        match level {
            EscapeLevel::OnlyMarkupSignificantWithoutApos => 0,
            EscapeLevel::OnlyMarkupSignificantWithApos => 1,
            EscapeLevel::AllNonAsciiPlusMarkupSignificantWithApos => 2,
            EscapeLevel::AllNonAlphanumeric => 3,
            EscapeLevel::AllCharacters => 4,
        }
    }
}

impl TryFrom<u8> for EscapeLevel {
    type Error = EscapistError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        EscapeLevel::ALL
            .get(usize::from(ordinal))
            .copied()
            .ok_or_else(|| {
                EscapistError::invalid_argument(format!(
                    "escape level must be between 0 and 4, got {ordinal}"
                ))
            })
    }
}

impl FromStr for EscapeLevel {
    type Err = EscapistError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let ordinal: u8 = input.trim().parse().map_err(|_| {
            EscapistError::invalid_argument(format!("'{input}' is not an escape level"))
        })?;
        EscapeLevel::try_from(ordinal)
    }
}

impl fmt::Display for EscapeLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", u8::from(*self))
    }
}

/// Which encoding is emitted for a character that must be escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceType {
    #[default]
    NamedDefaultToDecimal,
    NamedDefaultToHexa,
    Decimal,
    Hexadecimal,
}

impl ReferenceType {
    fn name(self) -> &'static str {
        match self {
            ReferenceType::NamedDefaultToDecimal => "named-default-to-decimal",
            ReferenceType::NamedDefaultToHexa => "named-default-to-hexa",
            ReferenceType::Decimal => "decimal",
            ReferenceType::Hexadecimal => "hexadecimal",
        }
    }
}

impl FromStr for ReferenceType {
    type Err = EscapistError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "named-default-to-decimal" => Ok(ReferenceType::NamedDefaultToDecimal),
            "named-default-to-hexa" => Ok(ReferenceType::NamedDefaultToHexa),
            "decimal" => Ok(ReferenceType::Decimal),
            "hexadecimal" => Ok(ReferenceType::Hexadecimal),
            other => Err(EscapistError::invalid_argument(format!(
                "unknown reference type '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// The named reference set consulted when escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceSet {
    #[default]
    Html4,
    Html5,
}

impl FromStr for ReferenceSet {
    type Err = EscapistError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "html4" => Ok(ReferenceSet::Html4),
            "html5" => Ok(ReferenceSet::Html5),
            other => Err(EscapistError::invalid_argument(format!(
                "unknown reference set '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ReferenceSet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceSet::Html4 => formatter.write_str("html4"),
            ReferenceSet::Html5 => formatter.write_str("html5"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordinals_round_trip() {
        for (ordinal, level) in EscapeLevel::ALL.iter().enumerate() {
            assert_eq!(usize::from(u8::from(*level)), ordinal);
            assert_eq!(EscapeLevel::try_from(ordinal as u8).unwrap(), *level);
        }
    }

    #[test]
    fn test_level_out_of_range_is_invalid_argument() {
        let error = EscapeLevel::try_from(5).unwrap_err();
        assert!(matches!(error, EscapistError::InvalidArgument { .. }));
        assert!(error.to_string().contains("between 0 and 4"));

        assert!("seven".parse::<EscapeLevel>().is_err());
        assert_eq!(
            " 3 ".parse::<EscapeLevel>().unwrap(),
            EscapeLevel::AllNonAlphanumeric
        );
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(EscapeLevel::OnlyMarkupSignificantWithoutApos < EscapeLevel::AllCharacters);
        assert!(
            EscapeLevel::OnlyMarkupSignificantWithApos
                < EscapeLevel::AllNonAsciiPlusMarkupSignificantWithApos
        );
    }

    #[test]
    fn test_reference_type_names() {
        for reference_type in [
            ReferenceType::NamedDefaultToDecimal,
            ReferenceType::NamedDefaultToHexa,
            ReferenceType::Decimal,
            ReferenceType::Hexadecimal,
        ] {
            let parsed: ReferenceType = reference_type.to_string().parse().unwrap();
            assert_eq!(parsed, reference_type);
        }
        assert!("octal".parse::<ReferenceType>().is_err());
    }

    #[test]
    fn test_reference_set_parse_is_case_insensitive() {
        assert_eq!("HTML5".parse::<ReferenceSet>().unwrap(), ReferenceSet::Html5);
        assert_eq!("html4".parse::<ReferenceSet>().unwrap(), ReferenceSet::Html4);
        assert!("xhtml".parse::<ReferenceSet>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            EscapeLevel::default(),
            EscapeLevel::AllNonAsciiPlusMarkupSignificantWithApos
        );
        assert_eq!(ReferenceType::default(), ReferenceType::NamedDefaultToDecimal);
        assert_eq!(ReferenceSet::default(), ReferenceSet::Html4);
    }
}
