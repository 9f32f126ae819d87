//! Classification of completed HTTP exchanges.
//!
//! [`ResponseValidator`] maps a status code and optional error body onto the
//! [`Error`] taxonomy. Dispatch is an ordered match: the named 4xx and 5xx
//! codes are checked before the generic 5xx range.
//!
//! # Status 400
//!
//! By default a 400 response carrying a description terminates the process
//! with `Error: <description>` on stderr and exit status 1, instead of
//! returning [`Error::BadRequest`]. Existing callers rely on this, so it stays
//! the default. Use [`BadRequestPolicy::Fail`] to receive a normal
//! [`Error::BadRequest`] carrying the description instead.

use tracing::{trace, warn};

use crate::error::{Error, SERVER_MAINTENANCE_MESSAGE};
use crate::exchange::{BLANK_MESSAGE, ExchangeOutcome};

/// Exit status used when a 400 response terminates the process.
pub const BAD_REQUEST_EXIT_CODE: i32 = 1;

/// How a 400 response with a description is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadRequestPolicy {
    /// Print the description and exit the process.
    #[default]
    Exit,
    /// Return [`Error::BadRequest`] carrying the description.
    Fail,
}

/// Result of classifying an exchange without acting on it.
#[derive(Debug)]
pub enum Verdict {
    /// 2xx: the response is usable.
    Accept,
    /// The response maps to an error.
    Reject(Error),
    /// The process should terminate with this diagnostic.
    Exit(String),
}

/// Validates completed exchanges against the error taxonomy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseValidator {
    bad_request: BadRequestPolicy,
}

impl ResponseValidator {
    /// A validator with the default (exiting) 400 handling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select how 400 responses with a description are handled.
    pub fn with_bad_request_policy(mut self, policy: BadRequestPolicy) -> Self {
        self.bad_request = policy;
        self
    }

    pub fn bad_request_policy(&self) -> BadRequestPolicy {
        self.bad_request
    }

    /// Classify an exchange without side effects.
    pub fn classify(&self, outcome: &ExchangeOutcome) -> Verdict {
        let status = outcome.status();
        trace!(status, "Classifying response");

        if outcome.is_success() {
            return Verdict::Accept;
        }

        let message = outcome.message();
        let has_message = message != BLANK_MESSAGE;

        let error = match status {
            400 => {
                if has_message && self.bad_request == BadRequestPolicy::Exit {
                    return Verdict::Exit(message);
                }
                Error::BadRequest { message }
            }
            401 => Error::Authentication,
            403 => Error::Authorization,
            404 => Error::ResourceNotFound {
                message: has_message.then_some(message),
            },
            423 => Error::Locked,
            429 => Error::OverLimit,
            502 => Error::BadGateway,
            504 => Error::GatewayTimeout,
            500..=599 => Error::Server {
                message: SERVER_MAINTENANCE_MESSAGE.to_string(),
            },
            _ => Error::UnexpectedStatusCode {
                status,
                message: format!("An error occurred. Server response: {}", status),
            },
        };

        Verdict::Reject(error)
    }

    /// Validate an exchange.
    ///
    /// Returns `Ok(())` for 2xx responses and the matching [`Error`]
    /// otherwise. Under [`BadRequestPolicy::Exit`] a 400 response with a
    /// description does not return.
    pub fn validate(&self, outcome: &ExchangeOutcome) -> Result<(), Error> {
        match self.classify(outcome) {
            Verdict::Accept => Ok(()),
            Verdict::Reject(error) => Err(error),
            Verdict::Exit(message) => {
                warn!(status = outcome.status(), "Terminating on bad request");
                eprintln!("Error: {}", message);
                std::process::exit(BAD_REQUEST_EXIT_CODE)
            }
        }
    }
}

/// Validate an exchange with the default validator.
pub fn validate(outcome: &ExchangeOutcome) -> Result<(), Error> {
    ResponseValidator::new().validate(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn reject(outcome: &ExchangeOutcome) -> Error {
        match ResponseValidator::new().classify(outcome) {
            Verdict::Reject(error) => error,
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn success_ignores_body() {
        for status in [200, 201, 204, 299] {
            let outcome = ExchangeOutcome::new(status).with_body("not json {");
            assert!(validate(&outcome).is_ok());
        }
    }

    #[test]
    fn named_statuses() {
        let cases = [
            (401, ErrorKind::Authentication),
            (403, ErrorKind::Authorization),
            (423, ErrorKind::Locked),
            (429, ErrorKind::OverLimit),
            (502, ErrorKind::BadGateway),
            (504, ErrorKind::GatewayTimeout),
        ];
        for (status, kind) in cases {
            let outcome =
                ExchangeOutcome::new(status).with_json(&json!({"description": "ignored"}));
            let error = reject(&outcome);
            assert_eq!(error.kind(), kind, "status {}", status);
            assert_eq!(error.message(), None);
        }
    }

    #[test]
    fn not_found_carries_description() {
        let outcome =
            ExchangeOutcome::new(404).with_json(&json!({"description": "no such object"}));
        match reject(&outcome) {
            Error::ResourceNotFound { message } => {
                assert_eq!(message.as_deref(), Some("no such object"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn not_found_without_body_is_bare() {
        match reject(&ExchangeOutcome::new(404)) {
            Error::ResourceNotFound { message } => assert!(message.is_none()),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn generic_server_range() {
        for status in [500, 501, 503, 550, 599] {
            let error = reject(&ExchangeOutcome::new(status));
            assert_eq!(error.kind(), ErrorKind::Server);
            assert_eq!(
                error.message(),
                Some("Server under maintenance, try again later.")
            );
        }
    }

    #[test]
    fn unexpected_status_names_code() {
        for status in [100, 302, 402, 600, 999] {
            let error = reject(&ExchangeOutcome::new(status));
            assert_eq!(error.kind(), ErrorKind::UnexpectedStatusCode);
            assert!(error.to_string().contains(&status.to_string()));
        }
    }

    #[test]
    fn bad_request_without_description_fails() {
        match reject(&ExchangeOutcome::new(400).with_body("garbage")) {
            Error::BadRequest { message } => assert_eq!(message, BLANK_MESSAGE),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn bad_request_with_non_string_description_fails() {
        for description in [json!(null), json!(17), json!({"field": "name"})] {
            let outcome =
                ExchangeOutcome::new(400).with_json(&json!({ "description": description }));
            match ResponseValidator::new().classify(&outcome) {
                Verdict::Reject(Error::BadRequest { message }) => {
                    assert_eq!(message, BLANK_MESSAGE)
                }
                other => panic!("unexpected verdict: {:?}", other),
            }
        }
    }

    #[test]
    fn bad_request_with_empty_description_exits() {
        let outcome = ExchangeOutcome::new(400).with_json(&json!({"description": ""}));
        match ResponseValidator::new().classify(&outcome) {
            Verdict::Exit(message) => assert_eq!(message, ""),
            other => panic!("expected exit, got {:?}", other),
        }
    }

    #[test]
    fn bad_request_with_description_exits_by_default() {
        let outcome = ExchangeOutcome::new(400).with_json(&json!({"description": "bad field"}));
        match ResponseValidator::new().classify(&outcome) {
            Verdict::Exit(message) => assert_eq!(message, "bad field"),
            other => panic!("expected exit, got {:?}", other),
        }
    }

    #[test]
    fn bad_request_fail_policy_returns_error() {
        let validator = ResponseValidator::new().with_bad_request_policy(BadRequestPolicy::Fail);
        let outcome = ExchangeOutcome::new(400).with_json(&json!({"description": "bad field"}));
        match validator.validate(&outcome) {
            Err(Error::BadRequest { message }) => assert_eq!(message, "bad field"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
