//! Mock Digitransit client for running without API access.
//!
//! Loads canned responses from JSON files and serves them as if they
//! were live API responses.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::TransitApi;
use super::error::DigitransitError;
use super::query::PlanRequest;
use super::types::{PlanResponse, StopResponse};

/// File name prefix for stop responses, e.g. `stop-HSL:1040129.json`.
const STOP_FILE_PREFIX: &str = "stop-";

/// File name of the plan response.
const PLAN_FILE: &str = "plan.json";

/// Mock client that serves data from JSON files.
///
/// Stop responses are keyed by stop id; a single plan response answers
/// every plan request.
#[derive(Debug, Clone)]
pub struct MockDigitransitClient {
    stops: HashMap<String, StopResponse>,
    plan: Option<PlanResponse>,
}

impl MockDigitransitClient {
    /// Create a mock client by loading JSON files from a directory.
    ///
    /// Expects files named `stop-{id}.json` and optionally `plan.json`.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, DigitransitError> {
        let data_dir = data_dir.as_ref();
        let mut stops = HashMap::new();
        let mut plan = None;

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            DigitransitError::Mock(format!("failed to read {}: {e}", data_dir.display()))
        })?;

        for entry in entries {
            let entry = entry
                .map_err(|e| DigitransitError::Mock(format!("failed to read entry: {e}")))?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };

            if file_name == PLAN_FILE {
                plan = Some(load_json(&path)?);
            } else if let Some(stop_id) = file_name
                .strip_prefix(STOP_FILE_PREFIX)
                .and_then(|rest| rest.strip_suffix(".json"))
            {
                stops.insert(stop_id.to_string(), load_json(&path)?);
            }
        }

        if stops.is_empty() && plan.is_none() {
            return Err(DigitransitError::Mock(format!(
                "no mock response files found in {}",
                data_dir.display()
            )));
        }

        Ok(Self { stops, plan })
    }

    /// Create a mock client from already-decoded responses.
    pub fn from_responses(stops: HashMap<String, StopResponse>, plan: Option<PlanResponse>) -> Self {
        Self { stops, plan }
    }

    /// Stop ids with a canned response.
    pub fn stop_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.stops.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, DigitransitError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| DigitransitError::Mock(format!("failed to read {}: {e}", path.display())))?;

    serde_json::from_str(&json).map_err(|e| DigitransitError::Json {
        message: format!("{}: {e}", path.display()),
        body: None,
    })
}

impl TransitApi for MockDigitransitClient {
    async fn fetch_arrivals(&self, stop_id: &str) -> Result<StopResponse, DigitransitError> {
        self.stops
            .get(stop_id)
            .cloned()
            .ok_or_else(|| DigitransitError::Api {
                status: 404,
                message: format!(
                    "no mock data for stop {stop_id}. Available: {:?}",
                    self.stop_ids()
                ),
            })
    }

    /// Request parameters are ignored; mock data is static.
    async fn fetch_itineraries(
        &self,
        _request: &PlanRequest,
    ) -> Result<PlanResponse, DigitransitError> {
        self.plan.clone().ok_or_else(|| DigitransitError::Api {
            status: 404,
            message: "no mock plan data".to_string(),
        })
    }
}
