//! Bounded polling for itinerary plans.
//!
//! The planner occasionally answers with an empty itinerary list right
//! after a request that succeeds moments later. Instead of sleeping a
//! fixed interval, an empty plan is re-requested a bounded number of
//! times with a doubling delay. Transport errors are returned at once.

use std::time::Duration;

use tracing::{debug, warn};

use super::TransitApi;
use super::error::DigitransitError;
use super::query::PlanRequest;
use super::types::PlanResponse;

/// Polling parameters for [`fetch_itineraries_settled`].
#[derive(Debug, Clone)]
pub struct PlanPolling {
    /// Total number of requests, including the first (minimum 1).
    pub max_attempts: u32,

    /// Delay before the second request; doubles after each attempt.
    pub initial_delay: Duration,
}

impl Default for PlanPolling {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(500),
        }
    }
}

/// Fetch itineraries, re-requesting while the plan comes back empty.
///
/// Returns the first response with at least one itinerary, or the last
/// response once `max_attempts` is used up.
pub async fn fetch_itineraries_settled<A: TransitApi>(
    api: &A,
    request: &PlanRequest,
    polling: &PlanPolling,
) -> Result<PlanResponse, DigitransitError> {
    let attempts = polling.max_attempts.max(1);
    let mut delay = polling.initial_delay;
    let mut attempt = 1;

    loop {
        let response = api.fetch_itineraries(request).await?;
        let count = response.itinerary_count();

        if count > 0 || attempt >= attempts {
            debug!(attempt, count, "plan settled");
            return Ok(response);
        }

        warn!(attempt, ?delay, "plan returned no itineraries, retrying");
        tokio::time::sleep(delay).await;
        delay = delay.saturating_mul(2);
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digitransit::StopResponse;
    use crate::domain::Coordinates;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    const EMPTY_PLAN: &str = r#"{ "data": { "plan": { "itineraries": [] } } }"#;
    const ONE_ITINERARY: &str = r#"{ "data": { "plan": { "itineraries": [
        { "legs": [ { "mode": "WALK", "startTime": 0, "endTime": 60000,
                      "from": { "name": "A" }, "to": { "name": "B" }, "trip": null } ] }
    ] } } }"#;

    /// Answers plan requests from a script, one entry per call.
    struct ScriptedApi {
        script: Mutex<Vec<Result<&'static str, u16>>>,
        calls: Mutex<u32>,
    }

    impl ScriptedApi {
        fn new(mut script: Vec<Result<&'static str, u16>>) -> Self {
            script.reverse();
            Self {
                script: Mutex::new(script),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    impl TransitApi for ScriptedApi {
        async fn fetch_arrivals(&self, _stop_id: &str) -> Result<StopResponse, DigitransitError> {
            unimplemented!("not used by the poller")
        }

        async fn fetch_itineraries(
            &self,
            _request: &PlanRequest,
        ) -> Result<PlanResponse, DigitransitError> {
            *self.calls.lock().unwrap() += 1;
            let next = self.script.lock().unwrap().pop().expect("script exhausted");
            match next {
                Ok(json) => Ok(serde_json::from_str(json).unwrap()),
                Err(status) => Err(DigitransitError::Api {
                    status,
                    message: "scripted".into(),
                }),
            }
        }
    }

    fn request() -> PlanRequest {
        PlanRequest::departing_at(
            Coordinates::new(60.0, 24.0).unwrap(),
            Coordinates::new(60.1, 24.1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        )
    }

    fn fast_polling(max_attempts: u32) -> PlanPolling {
        PlanPolling {
            max_attempts,
            initial_delay: Duration::from_millis(1),
        }
    }

    #[test]
    fn default_polling() {
        let polling = PlanPolling::default();
        assert_eq!(polling.max_attempts, 3);
        assert_eq!(polling.initial_delay, Duration::from_millis(500));
    }

    #[tokio::test]
    async fn returns_first_non_empty_plan() {
        let api = ScriptedApi::new(vec![Ok(EMPTY_PLAN), Ok(ONE_ITINERARY), Ok(EMPTY_PLAN)]);
        let response = fetch_itineraries_settled(&api, &request(), &fast_polling(3))
            .await
            .unwrap();

        assert_eq!(response.itinerary_count(), 1);
        assert_eq!(api.calls(), 2);
    }

    #[tokio::test]
    async fn no_retry_when_first_plan_has_itineraries() {
        let api = ScriptedApi::new(vec![Ok(ONE_ITINERARY)]);
        fetch_itineraries_settled(&api, &request(), &fast_polling(3))
            .await
            .unwrap();
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let api = ScriptedApi::new(vec![Ok(EMPTY_PLAN), Ok(EMPTY_PLAN)]);
        let response = fetch_itineraries_settled(&api, &request(), &fast_polling(2))
            .await
            .unwrap();

        assert_eq!(response.itinerary_count(), 0);
        assert_eq!(api.calls(), 2);
    }

    #[tokio::test]
    async fn errors_are_not_retried() {
        let api = ScriptedApi::new(vec![Ok(EMPTY_PLAN), Err(503), Ok(ONE_ITINERARY)]);
        let err = fetch_itineraries_settled(&api, &request(), &fast_polling(3))
            .await
            .unwrap_err();

        assert!(matches!(err, DigitransitError::Api { status: 503, .. }));
        assert_eq!(api.calls(), 2);
    }

    #[tokio::test]
    async fn zero_attempts_still_requests_once() {
        let api = ScriptedApi::new(vec![Ok(EMPTY_PLAN)]);
        fetch_itineraries_settled(&api, &request(), &fast_polling(0))
            .await
            .unwrap();
        assert_eq!(api.calls(), 1);
    }
}
