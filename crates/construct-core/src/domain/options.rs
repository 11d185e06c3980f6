//! Enumerated generation options and the resolve-or-default policy.
//!
//! Licenses and testing frameworks share the same fallback behaviour: an
//! unrecognized value is replaced by the default and the rejected input is
//! handed back so the CLI can print a warning. Resolution never fails —
//! invalid option values must not block scaffolding.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of resolving a raw option value against an allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    /// The resolved value (the input itself, or the default on fallback).
    pub value: T,
    /// The rejected raw input, when the default was substituted.
    pub rejected: Option<String>,
}

impl<T> Resolved<T> {
    /// `true` when the default was substituted for an unrecognized input.
    pub fn warned(&self) -> bool {
        self.rejected.is_some()
    }
}

/// A closed set of option values with a designated default.
///
/// Implemented by [`License`] and [`TestingFramework`]; both get the same
/// fallback policy from the provided [`OptionSet::resolve`].
pub trait OptionSet: Sized + Copy + Default + 'static {
    /// Every member of the set, in display order.
    const ALL: &'static [Self];

    /// The canonical token for this member (matched exactly, case-sensitive).
    fn token(&self) -> &'static str;

    /// Resolve a raw value: member tokens pass through unchanged, anything
    /// else yields the default plus the rejected input.
    fn resolve(raw: &str) -> Resolved<Self> {
        match Self::ALL.iter().find(|m| m.token() == raw) {
            Some(member) => Resolved {
                value: *member,
                rejected: None,
            },
            None => Resolved {
                value: Self::default(),
                rejected: Some(raw.to_string()),
            },
        }
    }

    /// Comma-separated list of all tokens, for help text and warnings.
    fn tokens() -> String {
        Self::ALL
            .iter()
            .map(|m| m.token())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ── License ───────────────────────────────────────────────────────────────────

/// Supported open source licenses (more: <http://choosealicense.com/licenses>).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum License {
    #[default]
    Mit,
    Apache2,
    Gpl2,
    Gpl3,
}

impl OptionSet for License {
    const ALL: &'static [Self] = &[Self::Mit, Self::Apache2, Self::Gpl2, Self::Gpl3];

    fn token(&self) -> &'static str {
        match self {
            Self::Mit => "MIT",
            Self::Apache2 => "Apache-2.0",
            Self::Gpl2 => "GPL-2.0",
            Self::Gpl3 => "GPL-3.0",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ── TestingFramework ──────────────────────────────────────────────────────────

/// Supported PHP testing frameworks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestingFramework {
    #[default]
    Phpunit,
    Behat,
    Phpspec,
    Codeception,
}

impl OptionSet for TestingFramework {
    const ALL: &'static [Self] = &[Self::Phpunit, Self::Behat, Self::Phpspec, Self::Codeception];

    fn token(&self) -> &'static str {
        match self {
            Self::Phpunit => "phpunit",
            Self::Behat => "behat",
            Self::Phpspec => "phpspec",
            Self::Codeception => "codeception",
        }
    }
}

impl TestingFramework {
    /// Composer package pulled into `require-dev`.
    pub fn composer_package(&self) -> &'static str {
        match self {
            Self::Phpunit => "phpunit/phpunit",
            Self::Behat => "behat/behat",
            Self::Phpspec => "phpspec/phpspec",
            Self::Codeception => "codeception/codeception",
        }
    }

    /// Command used to run the test suite, for the generated README.
    pub fn run_command(&self) -> &'static str {
        match self {
            Self::Phpunit => "vendor/bin/phpunit",
            Self::Behat => "vendor/bin/behat",
            Self::Phpspec => "vendor/bin/phpspec run",
            Self::Codeception => "vendor/bin/codecept run",
        }
    }
}

impl fmt::Display for TestingFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_licenses_pass_through_without_warning() {
        for token in &["MIT", "Apache-2.0", "GPL-2.0", "GPL-3.0"] {
            let resolved = License::resolve(token);
            assert_eq!(resolved.value.token(), *token);
            assert!(!resolved.warned(), "unexpected warning for: {token}");
        }
    }

    #[test]
    fn unknown_license_falls_back_to_mit() {
        let resolved = License::resolve("GPL-4.0");
        assert_eq!(resolved.value, License::Mit);
        assert_eq!(resolved.rejected.as_deref(), Some("GPL-4.0"));
    }

    #[test]
    fn license_matching_is_case_sensitive() {
        // `mit` is not a member token; the fallback policy applies.
        let resolved = License::resolve("mit");
        assert_eq!(resolved.value, License::Mit);
        assert!(resolved.warned());
    }

    #[test]
    fn known_frameworks_pass_through_without_warning() {
        for token in &["phpunit", "behat", "phpspec", "codeception"] {
            let resolved = TestingFramework::resolve(token);
            assert_eq!(resolved.value.token(), *token);
            assert!(!resolved.warned());
        }
    }

    #[test]
    fn unknown_framework_falls_back_to_phpunit() {
        let resolved = TestingFramework::resolve("jest");
        assert_eq!(resolved.value, TestingFramework::Phpunit);
        assert_eq!(resolved.rejected.as_deref(), Some("jest"));
    }

    #[test]
    fn tokens_list_all_members() {
        assert_eq!(License::tokens(), "MIT, Apache-2.0, GPL-2.0, GPL-3.0");
        assert_eq!(
            TestingFramework::tokens(),
            "phpunit, behat, phpspec, codeception"
        );
    }
}
