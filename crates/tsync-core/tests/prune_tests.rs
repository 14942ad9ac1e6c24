//! Tests for post-generation pruning

use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;
use tsync_core::{GeneratorContext, Outcome, default_features, prune};

fn rendered_project() -> assert_fs::TempDir {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("app/main.py").touch().unwrap();
    temp.child("app/tasks/worker.py").touch().unwrap();
    temp.child("app/websocket/manager.py").touch().unwrap();
    temp.child("tests/test_celery.py").touch().unwrap();
    temp.child("tests/test_websocket.py").touch().unwrap();
    temp.child("tests/websocket_test.html").touch().unwrap();
    temp.child("scripts/start_worker.sh").touch().unwrap();
    temp.child("scripts/start_flower.sh").touch().unwrap();
    temp
}

#[test]
fn defaults_keep_celery_and_drop_websocket() {
    let project = rendered_project();

    let report = prune(project.path(), &GeneratorContext::default(), &default_features(), false);

    assert!(report.is_success());
    project.child("app/tasks/worker.py").assert(predicate::path::exists());
    project.child("scripts/start_worker.sh").assert(predicate::path::exists());
    project.child("app/websocket").assert(predicate::path::missing());
    project.child("tests/test_websocket.py").assert(predicate::path::missing());
    project.child("tests/websocket_test.html").assert(predicate::path::missing());
    project.child("app/main.py").assert(predicate::path::exists());
    assert_eq!(report.succeeded(), 3);
}

#[rstest]
#[case(r#"{"include_celery": "n", "include_websocket": "y"}"#, &["app/tasks", "tests/test_celery.py"], &["app/websocket"])]
#[case(r#"{"include_celery": "y", "include_websocket": "y"}"#, &[], &["app/tasks", "app/websocket"])]
#[case(r#"{"include_celery": "yes"}"#, &["app/tasks", "app/websocket"], &[])]
fn answers_decide_what_is_removed(
    #[case] context: &str,
    #[case] removed: &[&str],
    #[case] kept: &[&str],
) {
    let project = rendered_project();

    prune(project.path(), &GeneratorContext::parse(context), &default_features(), false);

    for path in removed {
        project.child(path).assert(predicate::path::missing());
    }
    for path in kept {
        project.child(path).assert(predicate::path::exists());
    }
}

#[test]
fn already_absent_paths_are_skipped() {
    let project = assert_fs::TempDir::new().unwrap();
    project.child("app/main.py").touch().unwrap();

    let report = prune(project.path(), &GeneratorContext::default(), &default_features(), false);

    let websocket = report.features.iter().find(|f| f.key == "include_websocket").unwrap();
    assert!(!websocket.included);
    assert!(
        websocket
            .operations
            .iter()
            .all(|op| matches!(op.outcome, Outcome::Skipped { .. }))
    );
    assert_eq!(report.failed(), 0);
}

#[test]
fn dry_run_prune_removes_nothing() {
    let project = rendered_project();

    let report = prune(
        project.path(),
        &GeneratorContext::parse(r#"{"include_celery": "n"}"#),
        &default_features(),
        true,
    );

    assert!(report.dry_run);
    assert_eq!(report.succeeded(), 7);
    project.child("app/tasks").assert(predicate::path::exists());
    project.child("app/websocket").assert(predicate::path::exists());
}
