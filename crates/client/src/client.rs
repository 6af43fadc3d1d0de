//! HTTP client for the benchdash backend API.
//!
//! Provides [`ApiClient`] which encapsulates all HTTP interactions with the
//! backend. Consumers (the CLI, dashboards) delegate to this client rather
//! than constructing HTTP requests themselves.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::{ClientConfig, API_V1_PREFIX};
use crate::error::ApiError;
use crate::query::QueryString;
use crate::types::{
    Automation, AutomationPatch, DashboardKpis, NewAutomation, NewScenario, Run, RunStatus,
    Scenario, ScenarioPatch, TriggerRunRequest,
};

/// Blocking HTTP client for the backend API.
///
/// The client is stateless beyond its configuration: each operation issues one
/// request and blocks the caller until it settles. There is no internal
/// retry, coalescing, or mutual exclusion, so it is safe to reuse one client
/// across callers or construct a fresh one per call.
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    /// Create a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Create a client configured from the environment
    /// (see [`ClientConfig::from_env`]).
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    // ─── Automations ──────────────────────────────────────────────────────

    /// List all registered automations.
    ///
    /// GET `/api/v1/automations`
    pub fn list_automations(&self) -> Result<Vec<Automation>, ApiError> {
        self.get("/automations")
    }

    /// Fetch a single automation.
    ///
    /// GET `/api/v1/automations/{id}`
    pub fn get_automation(&self, id: i64) -> Result<Automation, ApiError> {
        self.get(&format!("/automations/{}", id))
    }

    /// Register a new automation.
    ///
    /// POST `/api/v1/automations`
    pub fn create_automation(&self, automation: &NewAutomation) -> Result<Automation, ApiError> {
        self.post("/automations", automation)
    }

    /// Apply a partial update to an automation.
    ///
    /// PUT `/api/v1/automations/{id}`
    pub fn update_automation(
        &self,
        id: i64,
        patch: &AutomationPatch,
    ) -> Result<Automation, ApiError> {
        self.put(&format!("/automations/{}", id), patch)
    }

    /// Delete an automation.
    ///
    /// DELETE `/api/v1/automations/{id}`
    pub fn delete_automation(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/automations/{}", id))
    }

    // ─── Scenarios ────────────────────────────────────────────────────────

    /// List scenarios, optionally filtered to one automation.
    ///
    /// GET `/api/v1/scenarios?automation_id=...`
    pub fn list_scenarios(&self, automation_id: Option<i64>) -> Result<Vec<Scenario>, ApiError> {
        let mut query = QueryString::new();
        query.push_opt("automation_id", automation_id);
        self.get(&format!("/scenarios{}", query.as_str()))
    }

    /// Fetch a single scenario.
    ///
    /// GET `/api/v1/scenarios/{id}`
    pub fn get_scenario(&self, id: i64) -> Result<Scenario, ApiError> {
        self.get(&format!("/scenarios/{}", id))
    }

    /// Create a new scenario.
    ///
    /// POST `/api/v1/scenarios`
    pub fn create_scenario(&self, scenario: &NewScenario) -> Result<Scenario, ApiError> {
        self.post("/scenarios", scenario)
    }

    /// Apply a partial update to a scenario.
    ///
    /// PUT `/api/v1/scenarios/{id}`
    pub fn update_scenario(&self, id: i64, patch: &ScenarioPatch) -> Result<Scenario, ApiError> {
        self.put(&format!("/scenarios/{}", id), patch)
    }

    /// Delete a scenario.
    ///
    /// DELETE `/api/v1/scenarios/{id}`
    pub fn delete_scenario(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/scenarios/{}", id))
    }

    // ─── Runs ─────────────────────────────────────────────────────────────

    /// List runs, optionally filtered by scenario and/or status. Filters are
    /// independently combinable and appear in the query string in declaration
    /// order.
    ///
    /// GET `/api/v1/runs?scenario_id=...&status=...`
    pub fn list_runs(
        &self,
        scenario_id: Option<i64>,
        status: Option<RunStatus>,
    ) -> Result<Vec<Run>, ApiError> {
        let mut query = QueryString::new();
        query.push_opt("scenario_id", scenario_id);
        query.push_opt("status", status);
        self.get(&format!("/runs{}", query.as_str()))
    }

    /// Fetch a single run.
    ///
    /// GET `/api/v1/runs/{id}`
    pub fn get_run(&self, id: i64) -> Result<Run, ApiError> {
        self.get(&format!("/runs/{}", id))
    }

    /// Trigger a new run of a scenario. The returned record reflects the
    /// initial state assigned by the backend (typically pending); execution
    /// proceeds asynchronously on the backend side.
    ///
    /// POST `/api/v1/runs/trigger`
    pub fn trigger_run(
        &self,
        scenario_id: i64,
        inputs_override: Option<Map<String, Value>>,
    ) -> Result<Run, ApiError> {
        let body = TriggerRunRequest {
            scenario_id,
            inputs_override,
        };
        self.post("/runs/trigger", &body)
    }

    /// Fetch the aggregated dashboard KPI snapshot.
    ///
    /// GET `/api/v1/runs/kpis/dashboard`
    pub fn dashboard_kpis(&self) -> Result<DashboardKpis, ApiError> {
        self.get("/runs/kpis/dashboard")
    }

    // ─── Request plumbing ─────────────────────────────────────────────────

    /// Full request URL: base + versioned prefix + endpoint (which already
    /// carries any query string).
    fn url(&self, endpoint: &str) -> String {
        format!("{}{}{}", self.config.base_url(), API_V1_PREFIX, endpoint)
    }

    fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let agent = ureq::Agent::new_with_defaults();
        let response = agent
            .get(&self.url(endpoint))
            .header("Content-Type", "application/json")
            .call()
            .map_err(ApiError::from_transport)?;

        response
            .into_body()
            .read_json::<T>()
            .map_err(ApiError::from_decode)
    }

    fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let agent = ureq::Agent::new_with_defaults();
        let response = agent
            .post(&self.url(endpoint))
            .send_json(body)
            .map_err(ApiError::from_transport)?;

        response
            .into_body()
            .read_json::<T>()
            .map_err(ApiError::from_decode)
    }

    fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let agent = ureq::Agent::new_with_defaults();
        let response = agent
            .put(&self.url(endpoint))
            .send_json(body)
            .map_err(ApiError::from_transport)?;

        response
            .into_body()
            .read_json::<T>()
            .map_err(ApiError::from_decode)
    }

    /// DELETE endpoints return a `{"message": ...}` acknowledgement; the body
    /// is discarded once the status is known to be a success.
    fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        let agent = ureq::Agent::new_with_defaults();
        agent
            .delete(&self.url(endpoint))
            .header("Content-Type", "application/json")
            .call()
            .map_err(ApiError::from_transport)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_concatenates_base_prefix_and_endpoint() {
        let client = ApiClient::new(ClientConfig::new("http://localhost:8000"));
        assert_eq!(
            client.url("/automations"),
            "http://localhost:8000/api/v1/automations"
        );
    }

    #[test]
    fn url_survives_trailing_slash_in_base() {
        let client = ApiClient::new(ClientConfig::new("http://localhost:8000/"));
        assert_eq!(client.url("/runs/7"), "http://localhost:8000/api/v1/runs/7");
    }

    #[test]
    fn unreachable_backend_is_a_network_error() {
        // Port 9 (discard) is reserved and nothing listens on it locally.
        let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:9"));
        match client.list_automations() {
            Err(ApiError::Network(_)) => {}
            other => panic!("expected Network error, got: {:?}", other.map(|_| ())),
        }
    }
}
