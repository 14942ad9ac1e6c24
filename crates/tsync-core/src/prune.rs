//! Post-generation pruning of optional features
//!
//! After a project is rendered from the template, files belonging to
//! optional features that were switched off are removed from it. The
//! generator passes its answers as a JSON object; a feature is kept only when
//! its answer is exactly `"y"`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tsync_fs::NormalizedPath;

use crate::sync::{Executor, OperationRecord, Outcome};

/// Environment variable the generator uses to pass its context.
pub const CONTEXT_ENV: &str = "COOKIECUTTER_CONTEXT";

/// Answer that keeps a feature.
const ENABLED: &str = "y";

/// An optional feature and the files that belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalFeature {
    /// Context key holding the switch, e.g. `include_celery`
    pub key: String,
    /// Answer assumed when the context does not mention the key
    pub default: String,
    /// Paths removed when the feature is off, relative to the project
    pub paths: Vec<String>,
}

impl OptionalFeature {
    pub fn new(key: &str, default: &str, paths: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            default: default.to_string(),
            paths: paths.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// The optional features shipped with the backend template.
pub fn default_features() -> Vec<OptionalFeature> {
    vec![
        OptionalFeature::new(
            "include_celery",
            "y",
            &[
                "app/tasks",
                "tests/test_celery.py",
                "scripts/start_worker.sh",
                "scripts/start_flower.sh",
            ],
        ),
        OptionalFeature::new(
            "include_websocket",
            "n",
            &[
                "app/websocket",
                "tests/test_websocket.py",
                "tests/websocket_test.html",
            ],
        ),
    ]
}

/// Answers given to the project generator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorContext {
    answers: HashMap<String, Value>,
}

impl GeneratorContext {
    /// Parse the generator's JSON context.
    ///
    /// Anything that is not a JSON object falls back to an empty context, so
    /// every feature takes its default.
    pub fn parse(json: &str) -> Self {
        match serde_json::from_str::<HashMap<String, Value>>(json) {
            Ok(answers) => Self { answers },
            Err(e) => {
                tracing::warn!("Ignoring malformed generator context: {}", e);
                Self::default()
            }
        }
    }

    /// Read the context from `COOKIECUTTER_CONTEXT` among `vars`.
    pub fn from_env<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        vars.into_iter()
            .find(|(key, _)| key.as_ref() == CONTEXT_ENV)
            .map(|(_, value)| Self::parse(value.as_ref()))
            .unwrap_or_default()
    }

    /// The answer for `key`, or `default` when absent.
    ///
    /// Non-string answers are rendered as JSON text.
    pub fn answer(&self, key: &str, default: &str) -> String {
        match self.answers.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => default.to_string(),
        }
    }
}

/// What happened to one feature.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureReport {
    pub key: String,
    pub answer: String,
    pub included: bool,
    pub operations: Vec<OperationRecord>,
}

/// Result of pruning a rendered project.
#[derive(Debug, Clone, Serialize)]
pub struct PruneReport {
    pub project_dir: PathBuf,
    pub dry_run: bool,
    pub features: Vec<FeatureReport>,
}

impl PruneReport {
    pub fn succeeded(&self) -> usize {
        self.features
            .iter()
            .map(|f| crate::sync::report_count(&f.operations, Outcome::is_success))
            .sum()
    }

    pub fn failed(&self) -> usize {
        self.features
            .iter()
            .map(|f| crate::sync::report_count(&f.operations, Outcome::is_failure))
            .sum()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Remove the files of every switched-off feature from `project_dir`.
///
/// Paths that do not exist are recorded as skipped. Failures are recorded
/// and pruning continues.
pub fn prune(
    project_dir: &Path,
    context: &GeneratorContext,
    features: &[OptionalFeature],
    dry_run: bool,
) -> PruneReport {
    let executor = Executor::new(dry_run);

    let features = features
        .iter()
        .map(|feature| {
            let answer = context.answer(&feature.key, &feature.default);
            let included = answer == ENABLED;
            tracing::debug!(key = %feature.key, %answer, included, "Resolved optional feature");

            let operations = if included {
                Vec::new()
            } else {
                feature
                    .paths
                    .iter()
                    .map(|p| {
                        let path = NormalizedPath::new(p);
                        executor.delete(&path, &path.under(project_dir))
                    })
                    .collect()
            };

            FeatureReport {
                key: feature.key.clone(),
                answer,
                included,
                operations,
            }
        })
        .collect();

    PruneReport {
        project_dir: project_dir.to_path_buf(),
        dry_run,
        features,
    }
}
