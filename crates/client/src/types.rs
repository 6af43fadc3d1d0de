//! Wire records exchanged with the backend.
//!
//! Every type mirrors the backend's snake_case JSON verbatim; the client
//! passes contents through without interpreting them. The one naming
//! exception: the external service's ID fields (`tinyfish_automation_id`,
//! `tinyfish_run_id`) keep their wire names via serde renames while the Rust
//! fields use neutral names. Timestamps stay as strings — the backend emits
//! naive ISO-8601 without a zone designator, so a zoned datetime type would
//! reject real responses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A registered connection to an externally hosted LLM automation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Automation {
    pub id: i64,
    pub name: String,
    #[serde(rename = "tinyfish_automation_id")]
    pub external_automation_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default_inputs: Option<Map<String, Value>>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for registering a new automation.
///
/// POST `/api/v1/automations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAutomation {
    pub name: String,
    #[serde(rename = "tinyfish_automation_id")]
    pub external_automation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_inputs: Option<Map<String, Value>>,
}

/// Partial update for an automation. Unset fields are omitted from the JSON
/// body and left untouched by the backend.
///
/// PUT `/api/v1/automations/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutomationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        rename = "tinyfish_automation_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub external_automation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_inputs: Option<Map<String, Value>>,
}

/// A named template binding an automation to default inputs and run settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: i64,
    pub name: String,
    pub automation_id: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub inputs_template: Option<Map<String, Value>>,
    #[serde(default)]
    pub run_settings: Option<Map<String, Value>>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for creating a new scenario.
///
/// POST `/api/v1/scenarios`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewScenario {
    pub name: String,
    pub automation_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs_template: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_settings: Option<Map<String, Value>>,
}

/// Partial update for a scenario.
///
/// PUT `/api/v1/scenarios/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automation_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs_template: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_settings: Option<Map<String, Value>>,
}

/// Lifecycle state of a run. Transitions (pending → running → completed or
/// failed) are owned by the backend's execution service; the client only
/// observes the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl RunStatus {
    /// The lowercase wire form, as used in the `status` query filter.
    pub fn as_str(self) -> &'static str {
        match self {
            RunStatus::Pending => "pending",
            RunStatus::Running => "running",
            RunStatus::Completed => "completed",
            RunStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RunStatus::Pending),
            "running" => Ok(RunStatus::Running),
            "completed" => Ok(RunStatus::Completed),
            "failed" => Ok(RunStatus::Failed),
            other => Err(format!(
                "unknown run status '{}' (expected pending|running|completed|failed)",
                other
            )),
        }
    }
}

/// One execution of a scenario, with status, timing, and result payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub id: i64,
    pub scenario_id: i64,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub finished_at: Option<String>,
    pub status: RunStatus,
    #[serde(default)]
    pub total_duration_ms: Option<f64>,
    #[serde(default)]
    pub ttft_ms: Option<f64>,
    #[serde(default)]
    pub inter_token_stats: Option<Map<String, Value>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(rename = "tinyfish_run_id", default)]
    pub external_run_id: Option<String>,
    #[serde(default)]
    pub response_json: Option<Map<String, Value>>,
    pub created_at: String,
}

/// Body for the run-trigger endpoint.
///
/// POST `/api/v1/runs/trigger`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerRunRequest {
    pub scenario_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs_override: Option<Map<String, Value>>,
}

/// Latency percentile summary, computed server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentileStats {
    #[serde(default)]
    pub p50: Option<f64>,
    #[serde(default)]
    pub p95: Option<f64>,
    #[serde(default)]
    pub p99: Option<f64>,
}

/// Aggregate dashboard view over all runs. Server-computed, read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardKpis {
    pub total_runs: i64,
    /// Percentage of completed runs, 0–100.
    pub success_rate: f64,
    pub total_time_stats: PercentileStats,
    #[serde(default)]
    pub ttft_stats: Option<PercentileStats>,
    #[serde(default)]
    pub avg_inter_token_latency: Option<f64>,
    pub recent_runs: Vec<Run>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn automation_decodes_wire_id_field() {
        let json = r#"{
            "id": 1,
            "name": "x",
            "tinyfish_automation_id": "auto_1",
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let automation: Automation = serde_json::from_str(json).unwrap();
        assert_eq!(automation.id, 1);
        assert_eq!(automation.name, "x");
        assert_eq!(automation.external_automation_id, "auto_1");
        assert_eq!(automation.description, None);
        assert_eq!(automation.updated_at, None);
    }

    #[test]
    fn new_automation_serializes_wire_id_field() {
        let payload = NewAutomation {
            name: "checkout".to_string(),
            external_automation_id: "auto_9".to_string(),
            description: None,
            default_inputs: None,
        };
        let json: Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "checkout", "tinyfish_automation_id": "auto_9"})
        );
    }

    #[test]
    fn patch_omits_unset_fields() {
        let patch = AutomationPatch {
            description: Some("updated".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"description":"updated"}"#);
    }

    #[test]
    fn run_status_round_trips_lowercase() {
        for (status, wire) in [
            (RunStatus::Pending, "\"pending\""),
            (RunStatus::Running, "\"running\""),
            (RunStatus::Completed, "\"completed\""),
            (RunStatus::Failed, "\"failed\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
            assert_eq!(serde_json::from_str::<RunStatus>(wire).unwrap(), status);
        }
    }

    #[test]
    fn run_status_rejects_unknown_value() {
        let result = "cancelled".parse::<RunStatus>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cancelled"));
    }

    #[test]
    fn run_decodes_with_optional_fields_absent() {
        let json = r#"{
            "id": 7,
            "scenario_id": 3,
            "status": "pending",
            "created_at": "2024-02-02T12:00:00"
        }"#;
        let run: Run = serde_json::from_str(json).unwrap();
        assert_eq!(run.id, 7);
        assert_eq!(run.status, RunStatus::Pending);
        assert_eq!(run.total_duration_ms, None);
        assert_eq!(run.external_run_id, None);
    }

    #[test]
    fn trigger_request_omits_absent_override() {
        let body = TriggerRunRequest {
            scenario_id: 42,
            inputs_override: None,
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"scenario_id":42}"#);
    }

    #[test]
    fn trigger_request_includes_present_override() {
        let mut inputs = Map::new();
        inputs.insert("query".to_string(), Value::String("laptops".to_string()));
        let body = TriggerRunRequest {
            scenario_id: 42,
            inputs_override: Some(inputs),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"scenario_id":42,"inputs_override":{"query":"laptops"}}"#
        );
    }

    #[test]
    fn dashboard_kpis_decode() {
        let json = r#"{
            "total_runs": 128,
            "success_rate": 92.1875,
            "total_time_stats": {"p50": 812.0, "p95": 2201.5, "p99": 3100.0},
            "ttft_stats": null,
            "avg_inter_token_latency": null,
            "recent_runs": []
        }"#;
        let kpis: DashboardKpis = serde_json::from_str(json).unwrap();
        assert_eq!(kpis.total_runs, 128);
        assert_eq!(kpis.total_time_stats.p50, Some(812.0));
        assert!(kpis.ttft_stats.is_none());
        assert!(kpis.recent_runs.is_empty());
    }
}
