//! Transport session: one lazily built, explicitly closed reqwest client per executor.
//!
//! [`Session`] holds at most one live [`ReqwestClient`] (and therefore one connection pool)
//! configured with the executor's default headers and timeout. [`Session::ensure_open`] hands
//! out cheap clones of that client; [`Session::close`] drops the session's handle so the pool
//! is released once in-flight requests finish.

// self
use crate::{
	_prelude::*,
	auth::{TokenSecret, X_MAS_HEADER},
	config::ExecutorConfig,
	error::{ConfigError, TransportError},
};

/// Lazily opened HTTP session shared by every call on one executor.
pub struct Session {
	config: Arc<ExecutorConfig>,
	client: Mutex<Option<ReqwestClient>>,
}
impl Session {
	/// Creates a closed session; nothing is allocated until [`Session::ensure_open`].
	pub fn new(config: Arc<ExecutorConfig>) -> Self {
		Self { config, client: Mutex::new(None) }
	}

	/// Creates a session that adopts a caller-built client (for custom TLS or proxies).
	///
	/// The adopted client is used as-is; configured default headers are still added per
	/// request. After [`Session::close`] a reopened session builds its own client.
	pub fn with_client(config: Arc<ExecutorConfig>, client: ReqwestClient) -> Self {
		Self { config, client: Mutex::new(Some(client)) }
	}

	/// Returns the live client, building it first if the session is closed.
	pub fn ensure_open(&self) -> Result<ReqwestClient, ConfigError> {
		let mut slot = self.client.lock();

		if let Some(client) = slot.as_ref() {
			return Ok(client.clone());
		}

		let client = build_client(&self.config)?;

		*slot = Some(client.clone());

		Ok(client)
	}

	/// Releases the client if open. Safe to call repeatedly or before opening.
	pub fn close(&self) {
		self.client.lock().take();
	}

	/// Returns `true` while a client is held.
	pub fn is_open(&self) -> bool {
		self.client.lock().is_some()
	}
}
impl Debug for Session {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Session")
			.field("base_url", &self.config.base_url.as_str())
			.field("open", &self.is_open())
			.finish()
	}
}

/// Issues one GET and returns the raw 2xx body.
///
/// Non-2xx statuses, network failures, and body read failures all map to
/// [`TransportError`] so callers can decide whether a fallback applies.
pub(crate) async fn send(
	client: &ReqwestClient,
	config: &ExecutorConfig,
	url: &Url,
	token: Option<&TokenSecret>,
) -> Result<Vec<u8>, TransportError> {
	let mut request = client.get(url.clone()).headers(config.default_headers.clone());

	if let Some(token) = token {
		request = request.header(X_MAS_HEADER, token.expose());
	}

	let response = request.send().await?;
	let status = response.status();

	if !status.is_success() {
		return Err(TransportError::Status { status: status.as_u16() });
	}

	Ok(response.bytes().await?.to_vec())
}

/// Resolves a request target against the base URL and appends query parameters.
///
/// Absolute `http(s)://` targets are used verbatim; anything else is treated as a path
/// appended to `base` (which may itself carry a path prefix such as `/api`).
pub(crate) fn resolve(base: &Url, target: &str, params: &[(&str, &str)]) -> Result<Url> {
	let raw = if is_absolute(target) {
		target.to_owned()
	} else {
		let root = base.as_str().trim_end_matches('/');

		if target.starts_with('/') { format!("{root}{target}") } else { format!("{root}/{target}") }
	};
	let mut url = Url::parse(&raw)
		.map_err(|source| Error::InvalidTarget { target: target.to_owned(), source })?;

	if !params.is_empty() {
		url.query_pairs_mut().extend_pairs(params);
	}

	Ok(url)
}

/// Decodes a complete JSON document, reporting the path of any mismatch.
///
/// Trailing non-whitespace bytes after the document are a decode failure.
pub(crate) fn parse_json<T>(body: &[u8]) -> Result<T, serde_path_to_error::Error<serde_json::Error>>
where
	T: DeserializeOwned,
{
	let mut de = serde_json::Deserializer::from_slice(body);
	let mut track = serde_path_to_error::Track::new();
	let value = match T::deserialize(serde_path_to_error::Deserializer::new(&mut de, &mut track)) {
		Ok(value) => value,
		Err(err) => return Err(serde_path_to_error::Error::new(track.path(), err)),
	};

	match de.end() {
		Ok(()) => Ok(value),
		Err(err) => Err(serde_path_to_error::Error::new(track.path(), err)),
	}
}

fn is_absolute(target: &str) -> bool {
	let lower = target.get(..8).unwrap_or(target).to_ascii_lowercase();

	lower.starts_with("http://") || lower.starts_with("https://")
}

fn build_client(config: &ExecutorConfig) -> Result<ReqwestClient, ConfigError> {
	let mut builder = ReqwestClient::builder().default_headers(config.default_headers.clone());

	if let Some(timeout) = config.timeout {
		builder = builder.timeout(timeout);
	}

	Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn base() -> Url {
		Url::parse("https://www.fotmob.com/api").expect("Base URL fixture should parse.")
	}

	#[test]
	fn resolve_appends_paths_to_prefixed_base() {
		let url = resolve(&base(), "/data/match?id=1", &[]).expect("Path should resolve.");

		assert_eq!(url.as_str(), "https://www.fotmob.com/api/data/match?id=1");

		let url = resolve(&base(), "data/tltable", &[("leagueId", "47")])
			.expect("Relative path should resolve.");

		assert_eq!(url.as_str(), "https://www.fotmob.com/api/data/tltable?leagueId=47");
	}

	#[test]
	fn resolve_merges_and_encodes_params() {
		let url = resolve(&base(), "/data/search/suggest?hits=5", &[("term", "Bukayo Saka")])
			.expect("Params should merge into an existing query.");

		assert_eq!(
			url.as_str(),
			"https://www.fotmob.com/api/data/search/suggest?hits=5&term=Bukayo+Saka"
		);
	}

	#[test]
	fn resolve_passes_absolute_urls_through() {
		let url = resolve(&base(), "https://images.example.com/raw.json", &[("v", "2")])
			.expect("Absolute URL should resolve.");

		assert_eq!(url.as_str(), "https://images.example.com/raw.json?v=2");
	}

	#[test]
	fn resolve_rejects_broken_targets() {
		let err = resolve(&base(), "http://[::1", &[]).expect_err("Broken URL should fail.");

		assert!(matches!(err, Error::InvalidTarget { .. }));
	}

	#[test]
	fn close_is_idempotent_and_open_is_lazy() {
		let config = Arc::new(ExecutorConfig::try_default().expect("Default config should build."));
		let session = Session::new(config);

		assert!(!session.is_open());

		session.close();
		session.close();

		session.ensure_open().expect("Session should open.");
		session.ensure_open().expect("Second open should be a no-op.");

		assert!(session.is_open());

		session.close();
		session.close();

		assert!(!session.is_open());
	}
}
