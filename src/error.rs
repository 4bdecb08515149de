use thiserror::Error;

/// Everything that can go wrong between sending a tweet and getting a label
/// back from the inference service.
#[derive(Error, Debug)]
pub enum SentimentError {
    // Transport
    #[error("Request to inference service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Inference service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    // Response shape
    #[error("Malformed prediction response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Prediction response has no score at predictions[0][0]")]
    MissingScore,
}

pub type Result<T> = std::result::Result<T, SentimentError>;
