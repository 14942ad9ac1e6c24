//! Property tests: a sync makes the template mirror the source.

use std::collections::BTreeSet;

use proptest::prelude::*;
use tsync_core::{Action, SyncConfig, SyncEngine, SyncOptions};
use tsync_test_utils::tree::SyncFixture;

fn tree() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("(sub/)?[a-z]{1,6}\\.txt", 0..8)
}

fn unit_config() -> SyncConfig {
    SyncConfig {
        units: vec!["app/".to_string()],
        excludes: Vec::new(),
        ..SyncConfig::default()
    }
}

fn prefixed(files: &BTreeSet<String>) -> BTreeSet<String> {
    files.iter().map(|f| format!("app/{f}")).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sync_mirrors_source_and_deletes_difference(source in tree(), target in tree()) {
        let fixture = SyncFixture::new();
        std::fs::create_dir_all(fixture.source().join("app")).unwrap();
        for f in &source {
            fixture.write_source(&format!("app/{f}"), "source");
        }
        for f in &target {
            fixture.write_template(&format!("app/{f}"), "template");
        }

        let config = unit_config();
        let report = SyncEngine::new(&config, fixture.source(), SyncOptions::default())
            .with_template_root(fixture.template())
            .run()
            .unwrap();

        let deleted: BTreeSet<String> = report.units[0]
            .paths(Action::Delete)
            .into_iter()
            .map(|p| p.to_string())
            .collect();
        let expected_deleted: BTreeSet<String> =
            prefixed(&target).difference(&prefixed(&source)).cloned().collect();

        prop_assert!(report.is_success());
        prop_assert_eq!(deleted, expected_deleted);
        prop_assert_eq!(fixture.template_files(), prefixed(&source));
    }

    #[test]
    fn dry_run_never_changes_template(source in tree(), target in tree()) {
        let fixture = SyncFixture::new();
        std::fs::create_dir_all(fixture.source().join("app")).unwrap();
        for f in &source {
            fixture.write_source(&format!("app/{f}"), "source");
        }
        for f in &target {
            fixture.write_template(&format!("app/{f}"), "template");
        }
        let before = fixture.template_snapshot();

        let config = unit_config();
        let report = SyncEngine::new(&config, fixture.source(), SyncOptions { dry_run: true })
            .with_template_root(fixture.template())
            .run()
            .unwrap();

        prop_assert_eq!(fixture.template_snapshot(), before);
        prop_assert_eq!(report.failed(), 0);
    }
}
