//! The validated generation request.

use serde::{Deserialize, Serialize};

use crate::domain::{License, ProjectName, TestingFramework};

/// Default namespace when the user supplies none.
pub const DEFAULT_NAMESPACE: &str = "Vendor\\Project";

/// Everything the generator needs, validated and normalized.
///
/// Immutable once constructed; built once per invocation and consumed once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    name: ProjectName,
    testing: TestingFramework,
    license: License,
    namespace: String,
    git: bool,
}

impl GenerationRequest {
    pub fn new(
        name: ProjectName,
        testing: TestingFramework,
        license: License,
        namespace: impl Into<String>,
        git: bool,
    ) -> Self {
        Self {
            name,
            testing,
            license,
            namespace: namespace.into(),
            git,
        }
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn testing(&self) -> TestingFramework {
        self.testing
    }

    pub fn license(&self) -> License {
        self.license
    }

    /// The PHP namespace, used verbatim in generated sources.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Whether to initialize a git repository in the output root.
    pub fn git(&self) -> bool {
        self.git
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_exposes_fields() {
        let name = ProjectName::parse("acme/widget").unwrap();
        let request = GenerationRequest::new(
            name.clone(),
            TestingFramework::Behat,
            License::Gpl3,
            DEFAULT_NAMESPACE,
            true,
        );

        assert_eq!(request.name(), &name);
        assert_eq!(request.testing(), TestingFramework::Behat);
        assert_eq!(request.license(), License::Gpl3);
        assert_eq!(request.namespace(), "Vendor\\Project");
        assert!(request.git());
    }
}
