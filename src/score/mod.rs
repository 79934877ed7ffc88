//! Remote score service client
//!
//! Thin HTTP wrapper over the leaderboard service. One best-effort call per
//! submission: no timeout, no retry. Callers decide what to do on failure;
//! the service owns leaderboard ordering.

use serde::Serialize;

/// A leaderboard row: player name and score, in service order.
pub type HighScore = (String, u64);

#[derive(Debug, Serialize)]
struct SubmitScoreRequest<'a> {
    name: &'a str,
    score: u64,
}

/// Why a score service call failed. A reachable service that declines a
/// score is not an error: that path answers `Ok(false)`.
#[derive(Debug)]
pub enum ScoreServiceError {
    /// The request never produced an HTTP response
    Unreachable,
    /// The service answered with a non-success status
    Status(reqwest::StatusCode),
    /// The service answered, but not with the agreed wire shape
    MalformedResponse,
}

/// Thin reqwest client for the score service.
#[derive(Clone)]
pub struct ScoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Record a score. Returns whether the service accepted it.
    pub async fn submit_score(&self, name: &str, score: u64) -> Result<bool, ScoreServiceError> {
        let url = format!("{}/api/scores", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&SubmitScoreRequest { name, score })
            .send()
            .await
            .map_err(|_| ScoreServiceError::Unreachable)?;

        if !response.status().is_success() {
            return Err(ScoreServiceError::Status(response.status()));
        }

        response
            .json::<bool>()
            .await
            .map_err(|_| ScoreServiceError::MalformedResponse)
    }

    /// Fetch the current leaderboard, best first as ordered by the service.
    pub async fn get_high_scores(&self) -> Result<Vec<HighScore>, ScoreServiceError> {
        let url = format!("{}/api/scores", self.base_url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|_| ScoreServiceError::Unreachable)?;

        if !response.status().is_success() {
            return Err(ScoreServiceError::Status(response.status()));
        }

        response
            .json::<Vec<HighScore>>()
            .await
            .map_err(|_| ScoreServiceError::MalformedResponse)
    }
}
