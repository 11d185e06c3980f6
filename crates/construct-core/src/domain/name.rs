//! The `vendor/project` package name.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A validated composer-style package name.
///
/// Shape: `vendor/project` — exactly one `/`, both segments non-empty and
/// limited to `[A-Za-z0-9_.-]`. Parsing is the single hard failure in the
/// whole pipeline; everything downstream assumes a well-formed name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectName {
    vendor: String,
    project: String,
}

impl ProjectName {
    /// Parse and validate a raw `vendor/project` string.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = raw.split('/');
        let vendor = segments.next().unwrap_or_default();
        let project = segments
            .next()
            .ok_or_else(|| invalid("missing '/' separator, expected \"vendor/project\""))?;

        if segments.next().is_some() {
            return Err(invalid("more than one '/' separator"));
        }
        if vendor.is_empty() {
            return Err(invalid("vendor segment is empty"));
        }
        if project.is_empty() {
            return Err(invalid("project segment is empty"));
        }
        for segment in [vendor, project] {
            if let Some(c) = segment.chars().find(|c| !Self::allowed_char(*c)) {
                return Err(invalid(&format!(
                    "character '{c}' is not allowed, use letters, digits, '_', '.' or '-'"
                )));
            }
        }

        Ok(Self {
            vendor: vendor.to_string(),
            project: project.to_string(),
        })
    }

    fn allowed_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
    }

    /// The organization/author segment.
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// The project segment — also the name of the output directory.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// StudlyCaps class name derived from the project segment.
    ///
    /// `my-logger` → `MyLogger`, `json.parser` → `JsonParser`.
    pub fn class_name(&self) -> String {
        self.project
            .split(['-', '_', '.'])
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.vendor, self.project)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name_splits() {
        let name = ProjectName::parse("acme/widget").unwrap();
        assert_eq!(name.vendor(), "acme");
        assert_eq!(name.project(), "widget");
        assert_eq!(name.to_string(), "acme/widget");
    }

    #[test]
    fn dots_dashes_underscores_are_allowed() {
        for raw in &["jonathan.torres/my-logger", "a_b/c.d", "Acme-Corp/Widget_2"] {
            assert!(ProjectName::parse(raw).is_ok(), "failed for: {raw}");
        }
    }

    #[test]
    fn missing_slash_is_invalid() {
        assert!(matches!(
            ProjectName::parse("bad-name-no-slash"),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn extra_slash_is_invalid() {
        assert!(ProjectName::parse("a/b/c").is_err());
    }

    #[test]
    fn empty_segments_are_invalid() {
        assert!(ProjectName::parse("/widget").is_err());
        assert!(ProjectName::parse("acme/").is_err());
        assert!(ProjectName::parse("/").is_err());
        assert!(ProjectName::parse("").is_err());
    }

    #[test]
    fn disallowed_characters_are_invalid() {
        assert!(ProjectName::parse("acme/wid get").is_err());
        assert!(ProjectName::parse("ac me/widget").is_err());
        assert!(ProjectName::parse("acme/widg@t").is_err());
        assert!(ProjectName::parse("acme\\widget").is_err());
    }

    #[test]
    fn error_echoes_offending_input() {
        let err = ProjectName::parse("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn class_name_is_studly_caps() {
        let cases = [
            ("acme/widget", "Widget"),
            ("acme/my-logger", "MyLogger"),
            ("acme/json.parser_v2", "JsonParserV2"),
        ];
        for (raw, expected) in cases {
            assert_eq!(ProjectName::parse(raw).unwrap().class_name(), expected);
        }
    }
}
