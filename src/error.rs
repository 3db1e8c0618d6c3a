//! Client-level error types shared by the session, the executor, and the endpoint facade.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// The provider answered with a 2xx body that could not be decoded.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// The request target could not be turned into an absolute URL.
	#[error("Request target `{target}` is not a valid URL.")]
	InvalidTarget {
		/// Path or URL supplied by the caller.
		target: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The request failed at the transport level after the fallback (if any) was exhausted.
	#[error("API request to {url} failed: {source}")]
	Request {
		/// Fully resolved URL that was requested.
		url: String,
		/// Whether an unauthenticated retry was issued after the primary attempt.
		fallback_attempted: bool,
		/// Failure observed on the primary attempt.
		#[source]
		source: TransportError,
	},
}
impl Error {
	/// Returns the resolved URL for request-level failures.
	pub fn url(&self) -> Option<&str> {
		match self {
			Self::Request { url, .. } => Some(url),
			Self::Decode(DecodeError::Json { url, .. }) => Some(url),
			_ => None,
		}
	}

	/// Returns the HTTP status code when the failure was a non-2xx response.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Request { source: TransportError::Status { status }, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised while building the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// A configured URL cannot be parsed.
	#[error("The {field} URL is invalid.")]
	InvalidUrl {
		/// Which configuration field failed validation.
		field: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A configured URL uses a scheme other than HTTP(S).
	#[error("The {field} URL must use http or https: {url}.")]
	UnsupportedScheme {
		/// Which configuration field failed validation.
		field: &'static str,
		/// URL that failed validation.
		url: String,
	},
	/// The base64-encoded proxy URL could not be decoded.
	#[error("Encoded proxy URL is not valid base64.")]
	InvalidEncodedUrl(#[from] base64::DecodeError),
	/// The base64-encoded proxy URL did not decode to UTF-8.
	#[error("Encoded proxy URL does not decode to UTF-8.")]
	NonUtf8EncodedUrl(#[from] std::string::FromUtf8Error),
	/// A default header name or value is malformed.
	#[error("Header `{name}` is invalid.")]
	InvalidHeader {
		/// Offending header name.
		name: String,
		/// Underlying validation failure.
		#[source]
		source: BoxError,
	},
	/// Token TTL must be strictly positive.
	#[error("The token TTL must be positive.")]
	NonPositiveTokenTtl,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}

	/// Wraps a header validation failure inside [`ConfigError`].
	pub fn invalid_header(
		name: impl Into<String>,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self::InvalidHeader { name: name.into(), source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures; eligible for the unauthenticated fallback.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure (DNS, TCP, TLS, timeout, body read).
	#[error("Network error: {source}.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// The server answered with a non-2xx status.
	#[error("Server responded with HTTP {status}.")]
	Status {
		/// HTTP status code.
		status: u16,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Returns `true` when the failure was a 401/403 response.
	pub fn is_auth_rejection(&self) -> bool {
		matches!(self, Self::Status { status: 401 | 403 })
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Response body decoding failures. Never retried.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Body was not valid JSON or did not match the requested shape.
	#[error("Response from {url} could not be decoded at `{}`.", .source.path())]
	Json {
		/// URL whose body failed to decode.
		url: String,
		/// Structured parsing failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Reasons a token refresh failed. Swallowed by the executor and only logged.
#[derive(Debug, ThisError)]
pub enum TokenFetchError {
	/// The proxy could not be reached or answered with a non-2xx status.
	#[error("Token proxy request failed.")]
	Transport(
		#[from]
		#[source]
		TransportError,
	),
	/// The proxy answered with a body that is not a JSON object of the expected shape.
	#[error("Token proxy returned malformed JSON.")]
	Decode(#[source] serde_path_to_error::Error<serde_json::Error>),
	/// The proxy answered without a usable `x-mas` field.
	#[error("Token proxy response has no x-mas token.")]
	MissingToken,
}
