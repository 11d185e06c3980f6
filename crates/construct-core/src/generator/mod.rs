//! The scaffold generator.
//!
//! [`Generator::generate`] turns a [`GenerationRequest`] into a [`Manifest`]
//! — pure computation, no I/O. Identical requests always produce
//! byte-identical manifests (the copyright year is fixed when the generator
//! is constructed).

mod licenses;
mod templates;

use chrono::{Datelike, Utc};
use tracing::{debug, instrument};

use crate::domain::{GenerationRequest, Manifest, OptionSet as _};

pub use templates::TestScaffold;

/// Renders the fixed file set for a generation request.
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    year: i32,
}

impl Generator {
    /// Generator stamped with the current UTC year.
    pub fn new() -> Self {
        Self {
            year: Utc::now().year(),
        }
    }

    /// Generator with a pinned year, for deterministic snapshots in tests.
    pub fn with_year(year: i32) -> Self {
        Self { year }
    }

    /// Produce the manifest for a request.
    ///
    /// Cannot fail: all templates are statically known and the request is
    /// already validated.
    #[instrument(skip_all, fields(project = %request.name()))]
    pub fn generate(&self, request: &GenerationRequest) -> Manifest {
        let name = request.name();
        let class = name.class_name();
        let year = self.year.to_string();
        let namespace_json = request.namespace().replace('\\', "\\\\");

        let vars = [
            ("{vendor}", name.vendor()),
            ("{project}", name.project()),
            ("{namespace}", request.namespace()),
            ("{namespace_json}", namespace_json.as_str()),
            ("{class}", class.as_str()),
            ("{license}", request.license().token()),
            ("{testing}", request.testing().token()),
            ("{testing_package}", request.testing().composer_package()),
            ("{testing_run}", request.testing().run_command()),
            ("{year}", year.as_str()),
        ];
        let render = |template: &str| substitute(template, &vars);

        let scaffold = templates::test_scaffold(request.testing());
        let mut manifest = Manifest::new(name.project());

        manifest.add_file("composer.json", render(templates::COMPOSER_JSON));
        manifest.add_file(".gitignore", templates::GITIGNORE);
        manifest.add_file("README.md", render(templates::README));
        manifest.add_file(
            "LICENSE.md",
            render(licenses::license_body(request.license())),
        );
        manifest.add_file(scaffold.config_path, render(scaffold.config_body));
        manifest.add_file(format!("src/{class}.php"), render(templates::SRC_CLASS));
        manifest.add_file(render(scaffold.stub_path), render(scaffold.stub_body));

        debug!(files = manifest.entry_count(), "manifest rendered");
        manifest
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Literal multi-replace of `{placeholder}` markers.
fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(key, value);
    }
    out
}

// ── tests ─────────────────────────────────────────────────────────────────────
