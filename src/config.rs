//! Executor configuration: endpoints, token TTL, timeouts, default headers, and locale.
//!
//! Everything the request layer needs is passed in explicitly through
//! [`ExecutorConfig::builder`]; nothing is read from process-wide state. The token proxy URL in
//! particular is a regular option with a documented default ([`DEFAULT_PROXY_URL`]). It can also
//! be supplied base64-encoded, the form proxy endpoints are usually shared in.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::header::{
	ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderName, HeaderValue, REFERER, USER_AGENT,
};
// self
use crate::{_prelude::*, error::ConfigError};

/// Provider API root every relative request path is appended to.
pub const DEFAULT_BASE_URL: &str = "https://www.fotmob.com/api";
/// Token proxy used when no other proxy is configured.
pub const DEFAULT_PROXY_URL: &str = "http://46.101.91.154:6006/";
/// Lifetime assigned to a freshly fetched x-mas token.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::hours(1);
/// Browser-like user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";
/// Default `Accept` header.
pub const DEFAULT_ACCEPT: &str = "application/json, text/plain, */*";
/// Default `Accept-Language` header.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
/// Default `Referer` header.
pub const DEFAULT_REFERER: &str = "https://www.fotmob.com/";

/// Validated configuration consumed by [`Executor`](crate::executor::Executor).
#[derive(Clone, Debug)]
pub struct ExecutorConfig {
	/// Provider API root; relative request paths are appended verbatim.
	pub base_url: Url,
	/// Endpoint that mints x-mas tokens.
	pub proxy_url: Url,
	/// Lifetime assigned to a fetched token.
	pub token_ttl: Duration,
	/// Whole-request timeout; `None` keeps the transport default.
	pub timeout: Option<StdDuration>,
	/// Headers attached to every request, including token fetches.
	pub default_headers: HeaderMap,
}
impl ExecutorConfig {
	/// Creates a builder seeded with the documented defaults.
	pub fn builder() -> ExecutorConfigBuilder {
		ExecutorConfigBuilder::new()
	}

	/// Builds the default configuration.
	pub fn try_default() -> Result<Self, ConfigError> {
		Self::builder().build()
	}
}

/// Builder for [`ExecutorConfig`] values.
#[derive(Clone, Debug)]
pub struct ExecutorConfigBuilder {
	base_url: Option<Url>,
	proxy_url: Option<Url>,
	encoded_proxy_url: Option<String>,
	token_ttl: Duration,
	timeout: Option<StdDuration>,
	user_agent: String,
	accept: String,
	accept_language: String,
	referer: String,
	extra_headers: Vec<(String, String)>,
}
impl ExecutorConfigBuilder {
	/// Creates a builder seeded with the documented defaults.
	pub fn new() -> Self {
		Self {
			base_url: None,
			proxy_url: None,
			encoded_proxy_url: None,
			token_ttl: DEFAULT_TOKEN_TTL,
			timeout: None,
			user_agent: DEFAULT_USER_AGENT.into(),
			accept: DEFAULT_ACCEPT.into(),
			accept_language: DEFAULT_ACCEPT_LANGUAGE.into(),
			referer: DEFAULT_REFERER.into(),
			extra_headers: Vec::new(),
		}
	}

	/// Overrides the provider API root.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Overrides the token proxy endpoint.
	pub fn proxy_url(mut self, url: Url) -> Self {
		self.proxy_url = Some(url);
		self.encoded_proxy_url = None;

		self
	}

	/// Overrides the token proxy endpoint with a base64-encoded URL, decoded at build time.
	pub fn encoded_proxy_url(mut self, encoded: impl Into<String>) -> Self {
		self.encoded_proxy_url = Some(encoded.into());
		self.proxy_url = None;

		self
	}

	/// Sets the lifetime assigned to fetched tokens.
	pub fn token_ttl(mut self, ttl: Duration) -> Self {
		self.token_ttl = ttl;

		self
	}

	/// Sets a whole-request timeout applied to provider and proxy calls.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Overrides the `User-Agent` header.
	pub fn user_agent(mut self, value: impl Into<String>) -> Self {
		self.user_agent = value.into();

		self
	}

	/// Overrides the `Accept` header.
	pub fn accept(mut self, value: impl Into<String>) -> Self {
		self.accept = value.into();

		self
	}

	/// Overrides the `Accept-Language` header.
	pub fn accept_language(mut self, value: impl Into<String>) -> Self {
		self.accept_language = value.into();

		self
	}

	/// Overrides the `Referer` header.
	pub fn referer(mut self, value: impl Into<String>) -> Self {
		self.referer = value.into();

		self
	}

	/// Adds an extra default header (for example a locale cookie).
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.extra_headers.push((name.into(), value.into()));

		self
	}

	/// Validates the builder and produces an [`ExecutorConfig`].
	pub fn build(self) -> Result<ExecutorConfig, ConfigError> {
		if !self.token_ttl.is_positive() {
			return Err(ConfigError::NonPositiveTokenTtl);
		}

		let base_url = match self.base_url {
			Some(url) => url,
			None => parse_url("base", DEFAULT_BASE_URL)?,
		};
		let proxy_url = match (self.proxy_url, self.encoded_proxy_url) {
			(Some(url), _) => url,
			(None, Some(encoded)) => decode_proxy_url(&encoded)?,
			(None, None) => parse_url("proxy", DEFAULT_PROXY_URL)?,
		};

		ensure_http("base", &base_url)?;
		ensure_http("proxy", &proxy_url)?;

		let mut default_headers = HeaderMap::new();

		default_headers.insert(USER_AGENT, header_value(USER_AGENT.as_str(), &self.user_agent)?);
		default_headers.insert(ACCEPT, header_value(ACCEPT.as_str(), &self.accept)?);
		default_headers
			.insert(ACCEPT_LANGUAGE, header_value(ACCEPT_LANGUAGE.as_str(), &self.accept_language)?);
		default_headers.insert(REFERER, header_value(REFERER.as_str(), &self.referer)?);

		for (name, value) in &self.extra_headers {
			let header_name = HeaderName::from_bytes(name.as_bytes())
				.map_err(|err| ConfigError::invalid_header(name.as_str(), err))?;

			default_headers.insert(header_name, header_value(name, value)?);
		}

		Ok(ExecutorConfig {
			base_url,
			proxy_url,
			token_ttl: self.token_ttl,
			timeout: self.timeout,
			default_headers,
		})
	}
}
impl Default for ExecutorConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Locale parameters forwarded by the endpoint facade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
	/// ISO 3166-1 alpha-3 country code (`ccode3`), defaults to `GBR`.
	pub ccode3: String,
	/// IANA timezone used for date-bucketed match lists, defaults to `Europe/London`.
	pub timezone: String,
	/// Content language for news endpoints, defaults to `en-GB`.
	pub language: String,
	/// ISO 3166-1 alpha-2 country code for TV listings, defaults to `GB`.
	pub country_code: String,
}
impl Default for Region {
	fn default() -> Self {
		Self {
			ccode3: "GBR".into(),
			timezone: "Europe/London".into(),
			language: "en-GB".into(),
			country_code: "GB".into(),
		}
	}
}

fn parse_url(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
	Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { field, source })
}

fn decode_proxy_url(encoded: &str) -> Result<Url, ConfigError> {
	let bytes = STANDARD.decode(encoded.trim())?;
	let raw = String::from_utf8(bytes)?;

	parse_url("proxy", raw.trim())
}

fn ensure_http(field: &'static str, url: &Url) -> Result<(), ConfigError> {
	match url.scheme() {
		"http" | "https" => Ok(()),
		_ => Err(ConfigError::UnsupportedScheme { field, url: url.to_string() }),
	}
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ConfigError> {
	HeaderValue::from_str(value).map_err(|err| ConfigError::invalid_header(name, err))
}
