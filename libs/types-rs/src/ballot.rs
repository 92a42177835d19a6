use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::candidate::CandidateId;

/// The outcome the ballot service reports for a counted (or rejected) ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallotStatus {
    VoterBallotMismatch,
    InvalidBallot,
    FraudCommitted,
    VoterNotRegistered,
    BallotCounted,
}

impl BallotStatus {
    pub const ALL: [Self; 5] = [
        Self::VoterBallotMismatch,
        Self::InvalidBallot,
        Self::FraudCommitted,
        Self::VoterNotRegistered,
        Self::BallotCounted,
    ];

    /// The exact text the ballot service uses for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::VoterBallotMismatch => "the ballot doesn't belong to the voter specified",
            Self::InvalidBallot => "the ballot given is invalid",
            Self::FraudCommitted => "fraud committed: the voter has already voted",
            Self::VoterNotRegistered => "voter not registered",
            Self::BallotCounted => "ballot counted",
        }
    }

    #[must_use]
    pub const fn is_counted(&self) -> bool {
        matches!(self, Self::BallotCounted)
    }

    /// A sentence suitable for showing to the voter.
    #[must_use]
    pub const fn voter_message(&self) -> &'static str {
        match self {
            Self::BallotCounted => "Your ballot has been counted. Thank you for voting.",
            Self::VoterBallotMismatch => {
                "This ballot was not issued to the national ID you entered."
            }
            Self::InvalidBallot => "This ballot number is not valid or has been invalidated.",
            Self::FraudCommitted => "A ballot has already been counted for this voter.",
            Self::VoterNotRegistered => "No registered voter matches the national ID you entered.",
        }
    }
}

impl Display for BallotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized ballot status: {0:?}")]
pub struct ParseBallotStatusError(pub String);

impl FromStr for BallotStatus {
    type Err = ParseBallotStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // the service JSON-encodes the status before embedding it, so it may
        // arrive wrapped in an extra pair of quotes
        let unquoted = match serde_json::from_str::<String>(s) {
            Ok(inner) => inner,
            Err(_) => s.to_owned(),
        };

        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == unquoted.trim())
            .ok_or_else(|| ParseBallotStatusError(s.to_owned()))
    }
}

/// Body of a `count_ballot` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountBallotResponse {
    pub status: String,
}

impl CountBallotResponse {
    pub fn ballot_status(&self) -> Result<BallotStatus, ParseBallotStatusError> {
        self.status.parse()
    }
}

/// A filled-in ballot as sent to the ballot service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BallotSubmission {
    pub ballot_number: String,
    pub chosen_candidate_id: CandidateId,
    pub voter_comments: String,
    pub voter_national_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallotField {
    BallotNumber,
    NationalId,
    Candidate,
}

impl Display for BallotField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BallotNumber => write!(f, "ballot number"),
            Self::NationalId => write!(f, "national ID"),
            Self::Candidate => write!(f, "candidate"),
        }
    }
}

/// Raw form input, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BallotDraft {
    pub ballot_number: String,
    pub voter_national_id: String,
    pub chosen_candidate_id: String,
    pub voter_comments: String,
}

impl BallotDraft {
    /// Trims every field and returns the submission, or the required fields
    /// that are still blank.
    pub fn validate(&self) -> Result<BallotSubmission, Vec<BallotField>> {
        let ballot_number = self.ballot_number.trim();
        let voter_national_id = self.voter_national_id.trim();
        let chosen_candidate_id = self.chosen_candidate_id.trim();

        let missing: Vec<BallotField> = [
            (ballot_number, BallotField::BallotNumber),
            (voter_national_id, BallotField::NationalId),
            (chosen_candidate_id, BallotField::Candidate),
        ]
        .into_iter()
        .filter(|(value, _)| value.is_empty())
        .map(|(_, field)| field)
        .collect();

        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(BallotSubmission {
            ballot_number: ballot_number.to_owned(),
            chosen_candidate_id: CandidateId::from(chosen_candidate_id.to_owned()),
            voter_comments: self.voter_comments.trim().to_owned(),
            voter_national_id: voter_national_id.to_owned(),
        })
    }
}
