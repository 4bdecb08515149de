// Library root
// -----------
// Module responsibilities:
// - `api`: endpoint configuration, the TF Serving request/response
//   envelopes and the blocking client that posts them.
// - `sentiment`: thresholding a score into a label and the text shown
//   for it.
// - `error`: the typed error returned by `api`.
// - `ui`: the interactive terminal form used by the binary.
pub mod api;
pub mod error;
pub mod sentiment;
pub mod ui;

pub use api::{ApiClient, ClientConfig, PredictRequest, PredictResponse};
pub use error::SentimentError;
pub use sentiment::{render_verdict, Prediction, Sentiment};
