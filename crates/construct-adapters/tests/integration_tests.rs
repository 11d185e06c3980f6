//! End-to-end tests: ScaffoldService against the in-memory adapters.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use construct_adapters::MemoryFilesystem;
use construct_core::{
    application::{
        ApplicationError, ScaffoldService, VcsStatus,
        ports::{Filesystem, VcsInit},
    },
    domain::{DEFAULT_NAMESPACE, GenerationRequest, License, ProjectName, TestingFramework},
    error::ConstructResult,
    generator::Generator,
};

/// Records init calls instead of touching a real repository.
#[derive(Clone, Default)]
struct RecordingVcs {
    calls: Arc<Mutex<Vec<PathBuf>>>,
    fail: bool,
}

impl RecordingVcs {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl VcsInit for RecordingVcs {
    fn init(&self, root: &Path) -> ConstructResult<()> {
        self.calls.lock().unwrap().push(root.to_path_buf());
        if self.fail {
            return Err(ApplicationError::VcsInitFailure {
                reason: "git not found".into(),
            }
            .into());
        }
        Ok(())
    }
}

fn request(git: bool) -> GenerationRequest {
    GenerationRequest::new(
        ProjectName::parse("acme/widget").unwrap(),
        TestingFramework::Phpunit,
        License::Mit,
        DEFAULT_NAMESPACE,
        git,
    )
}

fn service(fs: MemoryFilesystem, vcs: RecordingVcs) -> ScaffoldService {
    ScaffoldService::new(Generator::with_year(2026), Box::new(fs), Box::new(vcs))
}

#[test]
fn full_scaffold_writes_every_manifest_file() {
    let fs = MemoryFilesystem::new();
    let summary = service(fs.clone(), RecordingVcs::default())
        .scaffold(&request(false))
        .unwrap();

    assert_eq!(summary.root, PathBuf::from("widget"));
    assert_eq!(summary.files_written, 7);
    assert_eq!(summary.vcs, VcsStatus::NotRequested);

    for file in [
        "widget/composer.json",
        "widget/.gitignore",
        "widget/README.md",
        "widget/LICENSE.md",
        "widget/phpunit.xml.dist",
        "widget/src/Widget.php",
        "widget/tests/WidgetTest.php",
    ] {
        assert!(fs.exists(Path::new(file)), "missing: {file}");
    }

    let composer = fs.read_file(Path::new("widget/composer.json")).unwrap();
    assert!(composer.contains("\"name\": \"acme/widget\""));
}

#[test]
fn behat_request_writes_behat_conventions() {
    let fs = MemoryFilesystem::new();
    let req = GenerationRequest::new(
        ProjectName::parse("acme/widget").unwrap(),
        TestingFramework::Behat,
        License::Mit,
        DEFAULT_NAMESPACE,
        false,
    );
    service(fs.clone(), RecordingVcs::default())
        .scaffold(&req)
        .unwrap();

    assert!(fs.exists(Path::new("widget/behat.yml")));
    assert!(fs.exists(Path::new("widget/features/bootstrap/FeatureContext.php")));
    assert!(!fs.exists(Path::new("widget/phpunit.xml.dist")));
}

#[test]
fn git_flag_triggers_exactly_one_init_in_the_root() {
    let fs = MemoryFilesystem::new();
    let vcs = RecordingVcs::default();
    let summary = service(fs, vcs.clone()).scaffold(&request(true)).unwrap();

    assert_eq!(summary.vcs, VcsStatus::Initialized);
    assert_eq!(vcs.calls(), vec![PathBuf::from("widget")]);
}

#[test]
fn vcs_failure_keeps_files_and_is_reported_in_summary() {
    let fs = MemoryFilesystem::new();
    let summary = service(fs.clone(), RecordingVcs::failing())
        .scaffold(&request(true))
        .unwrap();

    match summary.vcs {
        VcsStatus::Failed(reason) => assert!(reason.contains("git not found")),
        other => panic!("expected failure status, got {other:?}"),
    }
    // Files written before the failed init survive.
    assert!(fs.exists(Path::new("widget/composer.json")));
}

#[test]
fn existing_root_refuses_to_scaffold() {
    let fs = MemoryFilesystem::new();
    fs.seed_directory("widget");

    let err = service(fs.clone(), RecordingVcs::default())
        .scaffold(&request(false))
        .unwrap_err();

    assert!(err.to_string().contains("already exists"));
    // Nothing was written.
    assert_eq!(fs.file_count(), 0);
}
