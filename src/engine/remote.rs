//! HTTP client for the remote transformation service.

use crate::engine::{EngineError, EngineOutput, TransformationEngine};
use crate::model::{EngineConfig, Execution, TransformationRequest};
use serde::{Deserialize, Serialize};

pub struct RemoteEngine {
    client: reqwest::Client,
    cfg: EngineConfig,
}

impl RemoteEngine {
    pub fn new(cfg: EngineConfig) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(cfg.user_agent.clone())
            .timeout(cfg.request_timeout)
            .build()?;
        Ok(Self { client, cfg })
    }

    fn endpoint(&self) -> String {
        format!("{}/transform", self.cfg.base_url.trim_end_matches('/'))
    }
}

/// Request body for the service's `/transform` endpoint. Field names follow
/// the upstream service API.
#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    text_in: &'a str,
    mode: &'a str,
    get_all_combs: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    change_prb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    change_frq: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uniform_change: Option<bool>,
}

impl<'a> WireRequest<'a> {
    fn from_request(request: &'a TransformationRequest) -> Self {
        let (get_all_combs, change_prb, change_frq, uniform_change) = match request.execution {
            Execution::Random(cfg) => (
                false,
                Some(cfg.probability),
                Some(cfg.frequency),
                Some(cfg.uniform),
            ),
            Execution::Exhaustive => (true, None, None, None),
        };
        Self {
            text_in: &request.text,
            mode: request.mode.as_str(),
            get_all_combs,
            change_prb,
            change_frq,
            uniform_change,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireResponse {
    Single { result: String },
    All { results: Vec<String> },
}

impl TransformationEngine for RemoteEngine {
    async fn transform(
        &self,
        request: &TransformationRequest,
    ) -> Result<EngineOutput, EngineError> {
        let body = WireRequest::from_request(request);
        tracing::debug!(
            rid = %self.cfg.request_id,
            mode = %request.mode,
            get_all_combs = body.get_all_combs,
            "dispatching engine request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("rid", self.cfg.request_id.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() {
            let message = response.text().await.unwrap_or_default();
            return Err(EngineError::Rejected(if message.is_empty() {
                status.to_string()
            } else {
                message
            }));
        }
        if !status.is_success() {
            return Err(EngineError::Http {
                status: status.as_u16(),
            });
        }

        let wire: WireResponse = response
            .json()
            .await
            .map_err(|e| EngineError::Protocol(e.to_string()))?;
        Ok(match wire {
            WireResponse::Single { result } => EngineOutput::Single(result),
            WireResponse::All { results } => EngineOutput::Variants(results),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RandomConfig, SubstitutionMode};
    use serde_json::json;

    fn request(execution: Execution) -> TransformationRequest {
        TransformationRequest {
            text: "leet".into(),
            mode: SubstitutionMode::new("Basic"),
            execution,
        }
    }

    #[test]
    fn random_request_carries_all_parameters() {
        let request = request(Execution::Random(RandomConfig {
            probability: 0.9,
            frequency: 0.1,
            uniform: true,
        }));
        let wire = serde_json::to_value(WireRequest::from_request(&request)).unwrap();
        assert_eq!(
            wire,
            json!({
                "text_in": "leet",
                "mode": "basic",
                "get_all_combs": false,
                "change_prb": 0.9,
                "change_frq": 0.1,
                "uniform_change": true,
            })
        );
    }

    #[test]
    fn exhaustive_request_omits_random_parameters() {
        let request = request(Execution::Exhaustive);
        let wire = serde_json::to_value(WireRequest::from_request(&request)).unwrap();
        assert_eq!(
            wire,
            json!({
                "text_in": "leet",
                "mode": "basic",
                "get_all_combs": true,
            })
        );
    }

    #[test]
    fn both_response_shapes_decode() {
        let single: WireResponse = serde_json::from_value(json!({"result": "l33t"})).unwrap();
        assert!(matches!(single, WireResponse::Single { result } if result == "l33t"));

        let all: WireResponse =
            serde_json::from_value(json!({"results": ["l33t", "le3t"]})).unwrap();
        assert!(matches!(all, WireResponse::All { results } if results.len() == 2));
    }
}
