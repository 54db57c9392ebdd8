//! Shared plumbing for the blocking HTTP adapters.
//!
//! The collaborator traits in `nearbeer-core` are synchronous. Each adapter
//! owns a [`BlockingClient`] that pairs a `reqwest` client with a private
//! current-thread Tokio runtime and bridges async requests onto the caller's
//! thread.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use nearbeer_core::{GeocodeError, VenueSourceError};

/// Default user agent. Nominatim rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = "nearbeer/0.1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors raised while constructing an HTTP adapter.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The configured base URL does not parse.
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        /// URL as configured.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Classified transport failure, converted into each adapter's error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request exceeded its deadline.
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The server answered with a non-success status.
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Underlying error text.
        message: String,
    },
    /// The server could not be reached.
    Network {
        /// Requested URL.
        url: String,
        /// Underlying error text.
        message: String,
    },
}

/// An HTTP client that can be driven from synchronous code.
///
/// When called from outside any Tokio runtime the private runtime is used.
/// Inside a multi-threaded runtime the ambient handle is used with
/// [`tokio::task::block_in_place`]; inside a `current_thread` runtime the
/// private runtime is used instead, since `block_in_place` would panic there.
pub(crate) struct BlockingClient {
    client: Client,
    runtime: Runtime,
    timeout: Duration,
}

impl std::fmt::Debug for BlockingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingClient")
            .field("client", &self.client)
            .field("timeout", &self.timeout)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl BlockingClient {
    pub(crate) fn new(user_agent: &str, timeout: Duration) -> Result<Self, ClientBuildError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientBuildError::Runtime)?;
        Ok(Self {
            client,
            runtime,
            timeout,
        })
    }

    /// Run `future` to completion on the appropriate runtime.
    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }

    /// GET `url` and decode the JSON body as `T`.
    ///
    /// Transport failures convert through `From<TransportError>`; decoding
    /// failures go through `parse_error`.
    pub(crate) fn get_json<T, E>(
        &self,
        url: &Url,
        parse_error: impl FnOnce(String) -> E,
    ) -> Result<T, E>
    where
        T: DeserializeOwned,
        E: From<TransportError>,
    {
        self.block_on(self.fetch_json(url, parse_error))
    }

    async fn fetch_json<T, E>(
        &self,
        url: &Url,
        parse_error: impl FnOnce(String) -> E,
    ) -> Result<T, E>
    where
        T: DeserializeOwned,
        E: From<TransportError>,
    {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.classify(&err, url))?
            .error_for_status()
            .map_err(|err| self.classify(&err, url))?;
        response
            .json::<T>()
            .await
            .map_err(|err| parse_error(err.to_string()))
    }

    fn classify(&self, error: &reqwest::Error, url: &Url) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                url: url.to_string(),
                timeout_secs: self.timeout.as_secs(),
            };
        }
        if let Some(status) = error.status() {
            return TransportError::Http {
                url: url.to_string(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }
        TransportError::Network {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

impl From<TransportError> for VenueSourceError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Timeout { url, timeout_secs } => Self::Timeout { url, timeout_secs },
            TransportError::Http {
                url,
                status,
                message,
            } => Self::Http {
                url,
                status,
                message,
            },
            TransportError::Network { url, message } => Self::Network { url, message },
        }
    }
}

impl From<TransportError> for GeocodeError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Timeout { url, timeout_secs } => Self::Timeout { url, timeout_secs },
            TransportError::Http {
                url,
                status,
                message,
            } => Self::Http {
                url,
                status,
                message,
            },
            TransportError::Network { url, message } => Self::Network { url, message },
        }
    }
}

/// Parse `base` and append `segment` as a final path segment.
pub(crate) fn endpoint(base: &str, segment: &str) -> Result<Url, ClientBuildError> {
    let joined = format!("{}/{segment}", base.trim_end_matches('/'));
    Url::parse(&joined).map_err(|source| ClientBuildError::InvalidBaseUrl {
        url: base.to_owned(),
        source,
    })
}
