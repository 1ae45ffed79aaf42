//! Response bodies for the web API.
//!
//! Thread projections are serialized as [`ThreadView`](crate::board::ThreadView);
//! mutations without a projection answer with one of these plain-text bodies.

use crate::board::DeleteOutcome;

/// Body of a successful delete.
pub const SUCCESS: &str = "success";

/// Body of a delete with the wrong password (sent with status 200).
pub const INCORRECT_PASSWORD: &str = "incorrect password";

/// Body of a successful report.
pub const REPORTED: &str = "reported";

/// Plain-text body for a delete outcome.
pub fn delete_outcome_body(outcome: DeleteOutcome) -> &'static str {
    match outcome {
        DeleteOutcome::Deleted => SUCCESS,
        DeleteOutcome::IncorrectPassword => INCORRECT_PASSWORD,
    }
}
