//! Typed client for the benchdash benchmarking backend.
//!
//! The backend manages three resources — automations (registered connections
//! to externally hosted LLM automations), scenarios (templates for producing
//! benchmark runs), and runs (individual executions with timing results) —
//! plus an aggregated dashboard KPI view. This crate translates resource-level
//! intents into HTTP requests against a configured backend and decodes the
//! JSON responses into typed records. It holds no authoritative state: every
//! record is a transient, re-fetchable copy owned by the backend.

mod client;
mod config;
mod error;
mod query;
mod types;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use types::{
    Automation, AutomationPatch, DashboardKpis, NewAutomation, NewScenario, PercentileStats, Run,
    RunStatus, Scenario, ScenarioPatch, TriggerRunRequest,
};
