//! The answer record assembled by the wizard
//!
//! One record per run: created with defaults, overwritten field-by-field as
//! the questionnaire progresses, then handed back to the caller for
//! persistence. Fields untouched by the chosen branch keep their defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

/// PHP versions offered by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhpVersion {
    #[serde(rename = "8.2")]
    Php82,
    #[serde(rename = "8.3")]
    Php83,
    #[serde(rename = "8.4")]
    Php84,
}

impl PhpVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            PhpVersion::Php82 => "8.2",
            PhpVersion::Php83 => "8.3",
            PhpVersion::Php84 => "8.4",
        }
    }
}

impl fmt::Display for PhpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database engines offered by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Sqlite,
    Mysql,
    Mariadb,
    Postgres,
}

/// Starter kits offered by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarterKit {
    None,
    Breeze,
    Jetstream,
}

/// Monorepo frontends offered alongside an API-only backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonoRepo {
    None,
    Nuxt,
    Next,
}

/// Test runners offered by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestingFramework {
    Pest,
    #[serde(rename = "PHPUnit")]
    PhpUnit,
}

/// Queue services offered by the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Queue {
    None,
    Horizon,
    Queue,
}

/// Complete set of configuration choices collected by one wizard run.
///
/// Serializes to the JSON document consumed by the downstream provisioning
/// tooling; field order matches the questionnaire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub project_name: String,
    pub server_contact: String,
    pub needs_traefik: bool,
    pub network: String,
    pub php_version: PhpVersion,
    pub php_extensions: Vec<String>,
    pub database: Database,
    pub starter_kit: StarterKit,
    pub starter_kit_stack: String,
    pub starter_kit_options: Vec<String>,
    pub mono_repo: MonoRepo,
    pub testing_framework: TestingFramework,
    pub queue: Queue,
    pub queue_driver: String,
    pub features: Vec<String>,
    pub javascript_package_manager: String,
    pub initialize_git: bool,
}

impl Default for AnswerRecord {
    fn default() -> Self {
        Self {
            project_name: crate::constants::DEFAULT_PROJECT_NAME.to_string(),
            server_contact: String::new(),
            needs_traefik: true,
            network: String::new(),
            php_version: PhpVersion::Php84,
            php_extensions: Vec::new(),
            database: Database::Sqlite,
            starter_kit: StarterKit::None,
            starter_kit_stack: String::new(),
            starter_kit_options: Vec::new(),
            mono_repo: MonoRepo::None,
            testing_framework: TestingFramework::Pest,
            queue: Queue::None,
            queue_driver: String::new(),
            features: Vec::new(),
            javascript_package_manager: String::new(),
            initialize_git: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_the_initial_record() {
        let record = AnswerRecord::default();
        assert_eq!(record.project_name, "laravel");
        assert_eq!(record.server_contact, "");
        assert!(record.needs_traefik);
        assert_eq!(record.network, "");
        assert_eq!(record.php_version, PhpVersion::Php84);
        assert!(record.php_extensions.is_empty());
        assert_eq!(record.database, Database::Sqlite);
        assert_eq!(record.starter_kit, StarterKit::None);
        assert_eq!(record.starter_kit_stack, "");
        assert!(record.starter_kit_options.is_empty());
        assert_eq!(record.mono_repo, MonoRepo::None);
        assert_eq!(record.testing_framework, TestingFramework::Pest);
        assert_eq!(record.queue, Queue::None);
        assert_eq!(record.queue_driver, "");
        assert!(record.features.is_empty());
        assert_eq!(record.javascript_package_manager, "");
        assert!(record.initialize_git);
    }

    #[test]
    fn serializes_exactly_the_declared_fields() {
        let value = serde_json::to_value(AnswerRecord::default()).unwrap();
        let map = value.as_object().unwrap();

        let expected = [
            "project_name",
            "server_contact",
            "needs_traefik",
            "network",
            "php_version",
            "php_extensions",
            "database",
            "starter_kit",
            "starter_kit_stack",
            "starter_kit_options",
            "mono_repo",
            "testing_framework",
            "queue",
            "queue_driver",
            "features",
            "javascript_package_manager",
            "initialize_git",
        ];
        assert_eq!(map.len(), expected.len());
        for key in expected {
            assert!(map.contains_key(key), "missing field '{key}'");
        }
    }

    #[test]
    fn enums_serialize_to_their_wire_vocabulary() {
        assert_eq!(serde_json::to_value(PhpVersion::Php84).unwrap(), json!("8.4"));
        assert_eq!(serde_json::to_value(PhpVersion::Php82).unwrap(), json!("8.2"));
        assert_eq!(serde_json::to_value(Database::Postgres).unwrap(), json!("postgres"));
        assert_eq!(serde_json::to_value(Database::Mariadb).unwrap(), json!("mariadb"));
        assert_eq!(serde_json::to_value(StarterKit::Breeze).unwrap(), json!("breeze"));
        assert_eq!(serde_json::to_value(MonoRepo::Nuxt).unwrap(), json!("nuxt"));
        assert_eq!(serde_json::to_value(TestingFramework::Pest).unwrap(), json!("Pest"));
        assert_eq!(
            serde_json::to_value(TestingFramework::PhpUnit).unwrap(),
            json!("PHPUnit")
        );
        assert_eq!(serde_json::to_value(Queue::Horizon).unwrap(), json!("horizon"));
    }

    #[test]
    fn record_round_trips_through_json() {
        let mut record = AnswerRecord::default();
        record.project_name = "shop".to_string();
        record.php_extensions = vec!["gd".to_string(), "intl".to_string()];
        record.queue = Queue::Queue;
        record.queue_driver = "valkey".to_string();

        let serialized = serde_json::to_string_pretty(&record).unwrap();
        let parsed: AnswerRecord = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn php_version_display_matches_wire_form() {
        assert_eq!(PhpVersion::Php83.to_string(), "8.3");
        assert_eq!(PhpVersion::Php84.as_str(), "8.4");
    }
}
