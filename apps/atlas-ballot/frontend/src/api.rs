//! Client for the ballot service's REST API.

use reqwest::StatusCode;
use types_rs::ballot::{BallotStatus, BallotSubmission, CountBallotResponse, ParseBallotStatusError};
use types_rs::candidate::Candidate;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid API path: {0}")]
    Url(#[from] url::ParseError),

    #[error("unexpected response ({status}): {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    BallotStatus(#[from] ParseBallotStatusError),
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    root: reqwest::Url,
}

impl ApiClient {
    #[must_use]
    pub const fn new(root: reqwest::Url) -> Self {
        Self { root }
    }

    pub fn url(&self, path: &str) -> Result<reqwest::Url> {
        Ok(self.root.join(path.trim_start_matches('/'))?)
    }

    pub async fn get_all_candidates(&self) -> Result<Vec<Candidate>> {
        let url = self.url("/api/get_all_candidates")?;
        let response = reqwest::Client::new().get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus { status, body });
        }

        let candidates: Vec<Candidate> = serde_json::from_str(&body)?;
        log::info!("loaded {} candidates", candidates.len());
        Ok(candidates)
    }

    pub async fn count_ballot(&self, submission: &BallotSubmission) -> Result<BallotStatus> {
        let url = self.url("/api/count_ballot")?;
        let response = reqwest::Client::new()
            .post(url)
            .json(submission)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        let ballot_status = decode_count_ballot_response(status, &body)?;
        log::info!("ballot {}: {ballot_status}", submission.ballot_number);
        Ok(ballot_status)
    }
}

/// The service answers `202 Accepted` for a counted ballot and `409 Conflict`
/// for every rejection, both with a `{"status": ...}` body.
pub fn decode_count_ballot_response(status: StatusCode, body: &str) -> Result<BallotStatus> {
    if status != StatusCode::ACCEPTED && status != StatusCode::CONFLICT {
        return Err(ApiError::UnexpectedStatus {
            status,
            body: body.to_owned(),
        });
    }

    let response: CountBallotResponse = serde_json::from_str(body)?;
    Ok(response.ballot_status()?)
}
