// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handing the chosen seats to whoever books them.

use std::error::Error;

use serde::{Deserialize, Serialize};
use seatmap_venue::SeatId;
use thiserror::Error;

/// Payload describing the seats to reserve.
///
/// Serializes as `{"seats": ["A1", "A2"]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// Seat ids in the order they were picked.
    pub seats: Vec<SeatId>,
}

impl SubmissionRequest {
    /// Comma-joined ids, the form reservation endpoints take as a query value.
    #[must_use]
    pub fn query_value(&self) -> String {
        self.seats
            .iter()
            .map(SeatId::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// JSON body for the request.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// What the engine has to submit right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Nothing is selected.
    Empty,
    /// These seats are selected.
    Ready(SubmissionRequest),
}

/// Transport for seat submissions.
///
/// Implementations own the network call and any confirmation UI; the engine
/// only builds the request and reports the outcome.
pub trait SubmitSeats {
    /// Backend response on success.
    type Response;
    /// Transport failure.
    type Error: Error + Send + Sync + 'static;

    /// Sends `request`.
    fn submit(&mut self, request: &SubmissionRequest) -> Result<Self::Response, Self::Error>;
}

/// Outcome of [`crate::SeatMap::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionStatus<R> {
    /// No seats were selected, so nothing was sent.
    NothingSelected,
    /// The transport accepted the request.
    Submitted {
        /// Number of seats sent.
        seats: usize,
        /// Backend response.
        response: R,
    },
}

/// A submission that the transport rejected.
#[derive(Debug, Error)]
#[error("submitting {seats} seat(s) failed")]
pub struct SubmitError {
    /// Number of seats in the failed request.
    pub seats: usize,
    #[source]
    source: Box<dyn Error + Send + Sync>,
}

impl SubmitError {
    pub(crate) fn new(seats: usize, source: impl Error + Send + Sync + 'static) -> Self {
        Self {
            seats,
            source: Box::new(source),
        }
    }
}
