//! Template-type detection by structural markers in the raw YAML text.
//!
//! Rules run in a fixed order and the first match wins:
//! 1. `apiversion:` and `kind:`                      → kubernetes
//! 2. `version:` and `services:`                     → docker-compose
//! 3. `on:` and (`jobs:` or `runs-on:`)              → github-actions
//! 4. `cv:`, or both `name:` and `sections:`         → resume
//! 5. anything else                                  → generic
//!
//! Matching is a case-insensitive substring test over the whole text, run
//! before any multi-document split.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::models::document::scalar_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateType {
    Resume,
    Kubernetes,
    DockerCompose,
    GithubActions,
    Generic,
}

impl TemplateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Resume => "resume",
            TemplateType::Kubernetes => "kubernetes",
            TemplateType::DockerCompose => "docker-compose",
            TemplateType::GithubActions => "github-actions",
            TemplateType::Generic => "generic",
        }
    }
}

impl std::fmt::Display for TemplateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies raw YAML text. Total: never fails, defaults to `Generic`.
pub fn detect_template_type(raw_yaml: &str) -> TemplateType {
    let content = raw_yaml.to_lowercase();
    let has = |marker: &str| content.contains(marker);

    let detected = if has("apiversion:") && has("kind:") {
        TemplateType::Kubernetes
    } else if has("version:") && has("services:") {
        TemplateType::DockerCompose
    } else if has("on:") && (has("jobs:") || has("runs-on:")) {
        TemplateType::GithubActions
    } else if has("cv:") || (has("name:") && has("sections:")) {
        TemplateType::Resume
    } else {
        TemplateType::Generic
    };
    debug!(template_type = %detected, bytes = raw_yaml.len(), "Detected template type");
    detected
}

/// Classifies an already-parsed tree by rendering it back to YAML text.
pub fn detect_value_type(value: &Value) -> TemplateType {
    match serde_yaml::to_string(value) {
        Ok(text) => detect_template_type(&text),
        Err(_) => TemplateType::Generic,
    }
}

/// Display title and subtitle for a parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMetadata {
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    pub name: String,
    pub description: String,
}

/// Builds display metadata for `value`, which has already been classified
/// as `template_type`.
pub fn template_metadata(template_type: TemplateType, value: &Value) -> TemplateMetadata {
    let (name, description) = match template_type {
        TemplateType::Kubernetes => {
            let metadata = value.get("metadata");
            let name = scalar_text(metadata.and_then(|m| m.get("name")))
                .unwrap_or_else(|| "K8s Resource".to_string());
            let kind = scalar_text(value.get("kind")).unwrap_or_default();
            let namespace = scalar_text(metadata.and_then(|m| m.get("namespace")))
                .unwrap_or_else(|| "default".to_string());
            (name, format!("{kind} in {namespace}"))
        }
        TemplateType::Resume => {
            let cv = value.get("cv");
            let name = scalar_text(cv.and_then(|c| c.get("name"))).unwrap_or_else(|| "Resume".to_string());
            let headline = scalar_text(cv.and_then(|c| c.get("headline"))).unwrap_or_default();
            (name, headline)
        }
        TemplateType::DockerCompose => {
            let count = mapping_len(value.get("services"));
            ("Docker Compose".to_string(), format!("{count} services"))
        }
        TemplateType::GithubActions => {
            let name = scalar_text(value.get("name")).unwrap_or_else(|| "Workflow".to_string());
            let count = mapping_len(value.get("jobs"));
            (name, format!("{count} jobs"))
        }
        TemplateType::Generic => ("Untitled".to_string(), String::new()),
    };
    TemplateMetadata {
        template_type,
        name,
        description,
    }
}

fn mapping_len(value: Option<&Value>) -> usize {
    value.and_then(Value::as_object).map_or(0, |m| m.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const K8S: &str = "apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: web\n";
    const COMPOSE: &str = "version: '3.8'\nservices:\n  web:\n    image: nginx\n";
    const ACTIONS: &str =
        "name: CI\non:\n  push:\njobs:\n  build:\n    runs-on: ubuntu-latest\n";
    const RESUME: &str = "cv:\n  name: Ada\n  sections:\n    Skills: []\n";

    #[test]
    fn test_kubernetes() {
        assert_eq!(detect_template_type(K8S), TemplateType::Kubernetes);
    }

    #[test]
    fn test_docker_compose() {
        assert_eq!(detect_template_type(COMPOSE), TemplateType::DockerCompose);
    }

    #[test]
    fn test_github_actions() {
        assert_eq!(detect_template_type(ACTIONS), TemplateType::GithubActions);
    }

    #[test]
    fn test_github_actions_runs_on_without_jobs_key() {
        let text = "on: push\nbuild:\n  runs-on: ubuntu-latest\n";
        assert_eq!(detect_template_type(text), TemplateType::GithubActions);
    }

    #[test]
    fn test_resume_by_cv_key() {
        assert_eq!(detect_template_type(RESUME), TemplateType::Resume);
    }

    #[test]
    fn test_resume_by_name_and_sections() {
        let text = "name: Ada\nsections:\n  Skills: []\n";
        assert_eq!(detect_template_type(text), TemplateType::Resume);
    }

    #[test]
    fn test_generic_fallback() {
        assert_eq!(detect_template_type("foo: bar\n"), TemplateType::Generic);
        assert_eq!(detect_template_type(""), TemplateType::Generic);
    }

    #[test]
    fn test_kubernetes_beats_compose_when_both_present() {
        let text = format!("{COMPOSE}---\n{K8S}");
        assert_eq!(detect_template_type(&text), TemplateType::Kubernetes);
    }

    #[test]
    fn test_compose_beats_actions_when_both_present() {
        let text = format!("{COMPOSE}---\n{ACTIONS}");
        assert_eq!(detect_template_type(&text), TemplateType::DockerCompose);
    }

    #[test]
    fn test_actions_beats_resume_when_both_present() {
        let text = format!("{ACTIONS}---\n{RESUME}");
        assert_eq!(detect_template_type(&text), TemplateType::GithubActions);
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        assert_eq!(
            detect_template_type("APIVERSION: v1\nKIND: Service\n"),
            TemplateType::Kubernetes
        );
    }

    #[test]
    fn test_detection_is_idempotent() {
        assert_eq!(detect_template_type(ACTIONS), detect_template_type(ACTIONS));
    }

    #[test]
    fn test_detect_value_type_round_trips_through_yaml() {
        let value = json!({ "apiVersion": "v1", "kind": "Service", "metadata": { "name": "db" } });
        assert_eq!(detect_value_type(&value), TemplateType::Kubernetes);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&TemplateType::DockerCompose).unwrap(),
            r#""docker-compose""#
        );
        assert_eq!(TemplateType::GithubActions.to_string(), "github-actions");
    }

    #[test]
    fn test_kubernetes_metadata() {
        let value = json!({ "kind": "Deployment", "metadata": { "name": "web", "namespace": "prod" } });
        let meta = template_metadata(TemplateType::Kubernetes, &value);
        assert_eq!(meta.name, "web");
        assert_eq!(meta.description, "Deployment in prod");
    }

    #[test]
    fn test_kubernetes_metadata_defaults() {
        let meta = template_metadata(TemplateType::Kubernetes, &json!({ "kind": "Service" }));
        assert_eq!(meta.name, "K8s Resource");
        assert_eq!(meta.description, "Service in default");
    }

    #[test]
    fn test_resume_metadata() {
        let value = json!({ "cv": { "name": "Ada", "headline": "Engineer" } });
        let meta = template_metadata(TemplateType::Resume, &value);
        assert_eq!(meta.name, "Ada");
        assert_eq!(meta.description, "Engineer");
    }

    #[test]
    fn test_compose_and_actions_metadata() {
        let compose = json!({ "services": { "web": {}, "db": {} } });
        assert_eq!(
            template_metadata(TemplateType::DockerCompose, &compose).description,
            "2 services"
        );
        let workflow = json!({ "name": "CI", "jobs": { "build": {} } });
        let meta = template_metadata(TemplateType::GithubActions, &workflow);
        assert_eq!(meta.name, "CI");
        assert_eq!(meta.description, "1 jobs");
    }

    #[test]
    fn test_generic_metadata() {
        let meta = template_metadata(TemplateType::Generic, &json!({}));
        assert_eq!(meta.name, "Untitled");
    }
}
