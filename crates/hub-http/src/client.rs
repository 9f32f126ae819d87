//! Authenticated HTTP client for the Hub API.

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{IntoUrl, RequestBuilder, Response};
use tracing::{debug, instrument, trace};

use hub_core::{ExchangeOutcome, ResponseValidator, SessionEnv};
use hub_store::{CredentialStore, ProcessEnv};

use crate::error::HttpError;

/// Attach the stored credential to a request, if one is configured.
///
/// The header value is marked sensitive so it is not printed by reqwest.
pub fn authorize<E: SessionEnv>(
    builder: RequestBuilder,
    store: &CredentialStore<E>,
) -> Result<RequestBuilder, HttpError> {
    match store.authorization_header()? {
        Some(value) => {
            let mut value = HeaderValue::from_str(&value)?;
            value.set_sensitive(true);
            Ok(builder.header(AUTHORIZATION, value))
        }
        None => {
            debug!("No credential configured; sending unauthenticated request");
            Ok(builder)
        }
    }
}

/// Read a response into an [`ExchangeOutcome`].
///
/// An empty body is recorded as no body.
pub async fn read_outcome(response: Response) -> Result<ExchangeOutcome, HttpError> {
    let status = response.status().as_u16();
    let body = response.bytes().await?;
    trace!(status, len = body.len(), "Response received");

    let outcome = ExchangeOutcome::new(status);
    if body.is_empty() {
        Ok(outcome)
    } else {
        Ok(outcome.with_body(body.to_vec()))
    }
}

/// HTTP client that attaches the stored credential and validates responses.
#[derive(Debug)]
pub struct HubClient<E = ProcessEnv> {
    client: reqwest::Client,
    store: CredentialStore<E>,
    validator: ResponseValidator,
}

impl<E: SessionEnv> HubClient<E> {
    /// Create a client with the default validator.
    pub fn new(store: CredentialStore<E>) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("hub-http/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            store,
            validator: ResponseValidator::new(),
        })
    }

    /// Replace the response validator.
    pub fn with_validator(mut self, validator: ResponseValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn store(&self) -> &CredentialStore<E> {
        &self.store
    }

    pub fn validator(&self) -> &ResponseValidator {
        &self.validator
    }

    /// Returns the underlying reqwest client for building requests.
    pub fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Authenticated GET returning the response body.
    #[instrument(skip(self, url))]
    pub async fn get<U: IntoUrl>(&self, url: U) -> Result<Vec<u8>, HttpError> {
        let builder = self.client.get(url);
        self.send(builder).await
    }

    /// Attach the credential, send, and validate.
    ///
    /// Returns the body of a successful response.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Vec<u8>, HttpError> {
        let response = authorize(builder, &self.store)?.send().await?;
        let outcome = read_outcome(response).await?;

        debug!(status = outcome.status(), "Validating response");
        self.validator.validate(&outcome)?;

        Ok(outcome.body().map(<[u8]>::to_vec).unwrap_or_default())
    }
}
