// API client module: a small blocking HTTP client that talks to the
// TensorFlow Serving instance hosting the sentiment classifier. One call,
// one response, no retries.

use crate::error::{Result, SentimentError};
use crate::sentiment::Prediction;
use log::{debug, info, trace, warn};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8501";
pub const DEFAULT_MODEL: &str = "sentiment_classifier";

/// Where the inference service lives. Kept separate from the client so tests
/// can point it at a stub server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub model: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
        }
    }
}

impl ClientConfig {
    /// Read `TF_SERVING_URL` and `SENTIMENT_MODEL`, falling back to the
    /// local defaults.
    pub fn from_env() -> Self {
        let defaults = ClientConfig::default();
        ClientConfig {
            base_url: std::env::var("TF_SERVING_URL").unwrap_or(defaults.base_url),
            model: std::env::var("SENTIMENT_MODEL").unwrap_or(defaults.model),
        }
    }

    /// Full URL of the model's predict method.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1/models/{}:predict",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Request body expected by TF Serving: one instance holding one string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PredictRequest {
    pub instances: Vec<Vec<String>>,
}

impl PredictRequest {
    pub fn new(text: impl Into<String>) -> Self {
        PredictRequest {
            instances: vec![vec![text.into()]],
        }
    }
}

/// Response body returned by TF Serving. Unknown keys are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PredictResponse {
    pub predictions: Vec<Vec<f64>>,
}

impl PredictResponse {
    /// The positive-class score at `predictions[0][0]`.
    pub fn score(&self) -> Result<f64> {
        self.predictions
            .first()
            .and_then(|row| row.first())
            .copied()
            .ok_or(SentimentError::MissingScore)
    }
}

/// Blocking client bound to a single predict endpoint.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
}

impl ApiClient {
    /// Build a client for `config`. No request timeout is set: a call blocks
    /// until the service answers or the connection fails.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Option::<Duration>::None)
            .build()?;
        Ok(Self::with_client(config, client))
    }

    /// Use an already configured reqwest client.
    pub fn with_client(config: &ClientConfig, client: Client) -> Self {
        let endpoint = config.endpoint();
        debug!("inference endpoint: {}", endpoint);
        ApiClient { client, endpoint }
    }

    /// Create an ApiClient configured from the environment. See
    /// [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the envelope and decode the response body.
    pub fn predict(&self, req: &PredictRequest) -> Result<PredictResponse> {
        debug!("POST {}", self.endpoint);
        let res = self.client.post(&self.endpoint).json(req).send()?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().unwrap_or_else(|_| "".into());
            warn!("inference service answered {}", status);
            return Err(SentimentError::Status { status, body });
        }
        let body = res.text()?;
        let resp: PredictResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("could not decode prediction response: {}", e);
            SentimentError::Decode(e)
        })?;
        Ok(resp)
    }

    /// Send `text` to the model and label the returned score.
    pub fn classify(&self, text: &str) -> Result<Prediction> {
        trace!("classifying {:?}", text);
        let resp = self.predict(&PredictRequest::new(text))?;
        let score = resp.score()?;
        let prediction = Prediction::from_score(score);
        info!("score {} -> {}", score, prediction.sentiment);
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_envelope_wraps_text_twice() {
        for text in ["I love this!", "", "comillas \" y\nsaltos", "ñandú 🐦"] {
            let value = serde_json::to_value(PredictRequest::new(text)).unwrap();
            assert_eq!(value, json!({ "instances": [[text]] }));
        }
    }

    #[test]
    fn score_is_first_cell() {
        let resp: PredictResponse =
            serde_json::from_str(r#"{"predictions": [[0.92, 0.1], [0.3]]}"#).unwrap();
        assert_eq!(resp.score().unwrap(), 0.92);
    }

    #[test]
    fn empty_predictions_have_no_score() {
        let no_rows = PredictResponse { predictions: vec![] };
        assert!(matches!(no_rows.score(), Err(SentimentError::MissingScore)));

        let empty_row = PredictResponse { predictions: vec![vec![]] };
        assert!(matches!(empty_row.score(), Err(SentimentError::MissingScore)));
    }

    #[test]
    fn missing_predictions_key_does_not_decode() {
        let res = serde_json::from_str::<PredictResponse>(r#"{"error": "oops"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn default_endpoint_is_local_tf_serving() {
        assert_eq!(
            ClientConfig::default().endpoint(),
            "http://localhost:8501/v1/models/sentiment_classifier:predict"
        );
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let config = ClientConfig {
            base_url: "http://tf:9000/".into(),
            model: "tweets".into(),
        };
        assert_eq!(config.endpoint(), "http://tf:9000/v1/models/tweets:predict");
    }
}
