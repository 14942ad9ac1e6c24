//! End-to-end integration tests over a realistic backend project
//!
//! These tests exercise the complete flow: config resolution -> sync into the
//! template -> render a project from the template -> prune optional features.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tsync_core::{GeneratorContext, SyncConfig, SyncEngine, SyncOptions, UnitKind, default_features, prune};
use tsync_fs::enumerate_files;
use tsync_test_utils::tree::{SyncFixture, copy_tree, list_files};

fn fixture_project() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/projects/backend-service")
}

/// Fixture project plus the clutter a working checkout accumulates, and a
/// template that already holds a stale file and a placeholder.
fn setup_backend() -> (SyncFixture, SyncConfig) {
    let fixture = SyncFixture::new();
    fixture.seed_source(&fixture_project());

    fixture.write_source("app/__pycache__/main.cpython-312.pyc", "bytecode");
    fixture.write_source("app/.env.local", "SECRET=1");
    fixture.write_source("tests/.pytest_cache/v/cache/lastfailed", "{}");
    fixture.write_source("app/docs/notes.md", "scratch");

    fixture.write_template("app/legacy.py", "removed upstream");
    fixture.write_template("alembic/versions/.gitkeep", "");
    fixture.write_template("app/__pycache__/old.cpython-312.pyc", "stale bytecode");

    let config = SyncConfig {
        template_dir: fixture.template_relative(),
        ..SyncConfig::default()
    };
    (fixture, config)
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn expected_template() -> BTreeSet<String> {
    set(&[
        "LICENSE",
        "alembic/env.py",
        "alembic/versions/.gitkeep",
        "alembic/versions/0001_initial.py",
        "app/__init__.py",
        "app/__pycache__/old.cpython-312.pyc",
        "app/api/__init__.py",
        "app/api/routes.py",
        "app/main.py",
        "app/tasks/__init__.py",
        "app/tasks/jobs.py",
        "app/websocket/hub.py",
        "env.example",
        "pyproject.toml",
        "requirements.txt",
        "scripts/start_worker.sh",
        "tests/test_celery.py",
        "tests/test_main.py",
    ])
}

#[test]
fn test_backend_project_synced_with_default_config() {
    let (fixture, config) = setup_backend();

    let report = SyncEngine::new(&config, fixture.source(), SyncOptions::default())
        .run()
        .unwrap();

    assert!(report.is_success());
    assert_eq!(report.template_root, fixture.source().join(fixture.template_relative()));
    assert_eq!(fixture.template_files(), expected_template());

    // 16 copies plus the stale app/legacy.py
    assert_eq!(report.succeeded(), 17);

    for missing in ["requirements-dev.txt", "requirements.lock", "pytest.ini", "alembic.ini"] {
        assert_eq!(report.unit(missing).unwrap().kind, UnitKind::Missing);
    }
    assert_eq!(report.unit("LICENSE").unwrap().kind, UnitKind::File);
}

#[test]
fn test_directory_units_mirror_source_after_sync() {
    let (fixture, config) = setup_backend();
    SyncEngine::new(&config, fixture.source(), SyncOptions::default())
        .run()
        .unwrap();

    let filter = config.filter();
    for unit in ["app", "alembic", "tests", "scripts"] {
        let source = enumerate_files(&fixture.source().join(unit), &fixture.source(), &filter).unwrap();
        let template =
            enumerate_files(&fixture.template().join(unit), &fixture.template(), &filter).unwrap();
        assert!(source.is_complete() && template.is_complete());
        assert_eq!(source.files, template.files, "unit {unit} is not mirrored");
    }
}

#[test]
fn test_second_run_only_recopies() {
    let (fixture, config) = setup_backend();
    let engine = SyncEngine::new(&config, fixture.source(), SyncOptions::default());

    engine.run().unwrap();
    let second = engine.run().unwrap();

    assert!(second.is_success());
    assert_eq!(second.succeeded(), 16);
    assert_eq!(fixture.template_files(), expected_template());
}

#[test]
fn test_dry_run_over_backend_project() {
    let (fixture, config) = setup_backend();
    let before = fixture.template_snapshot();

    let report = SyncEngine::new(&config, fixture.source(), SyncOptions { dry_run: true })
        .run()
        .unwrap();

    assert!(report.dry_run);
    assert_eq!(report.succeeded(), 17);
    assert_eq!(fixture.template_snapshot(), before);
}

#[test]
fn test_generated_project_pruned_by_answers() {
    let (fixture, config) = setup_backend();
    SyncEngine::new(&config, fixture.source(), SyncOptions::default())
        .run()
        .unwrap();

    // Render a project from the freshly synced template
    let generated = fixture.root().join("my_service");
    copy_tree(&fixture.template(), &generated);

    let context = GeneratorContext::parse(r#"{"project_name": "my_service", "include_celery": "n"}"#);
    let report = prune(&generated, &context, &default_features(), false);

    assert!(report.is_success());
    // app/tasks, tests/test_celery.py, scripts/start_worker.sh, app/websocket
    assert_eq!(report.succeeded(), 4);

    let remaining = list_files(&generated);
    assert!(remaining.iter().all(|p| !p.starts_with("app/tasks/")));
    assert!(remaining.iter().all(|p| !p.starts_with("app/websocket/")));
    assert!(!remaining.contains("tests/test_celery.py"));
    assert!(!remaining.contains("scripts/start_worker.sh"));
    assert!(remaining.contains("app/main.py"));
    assert!(remaining.contains("tests/test_main.py"));
}
