// Sentiment labelling: turns the raw score returned by the model into the
// label shown to the user. Nothing here talks to the network.

use std::fmt;

/// Scores at or above this value are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.5;

/// Binary label shown to the user. The display strings match what the
/// original web page printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positivo,
    Negativo,
}

impl Sentiment {
    /// Apply the inclusive 0.5 threshold to a score.
    pub fn from_score(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Sentiment::Positivo
        } else {
            Sentiment::Negativo
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positivo => "positivo",
            Sentiment::Negativo => "negativo",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A score together with the label derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub score: f64,
    pub sentiment: Sentiment,
}

impl Prediction {
    pub fn from_score(score: f64) -> Self {
        Prediction {
            score,
            sentiment: Sentiment::from_score(score),
        }
    }
}

/// Text written to the output area for a prediction.
pub fn render_verdict(prediction: &Prediction) -> String {
    format!("El sentimiento del tweet es {}", prediction.sentiment)
}
