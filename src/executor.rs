//! Token-gated request executor: cached x-mas tokens, single-flight refreshes, and a one-shot
//! unauthenticated fallback.
//!
//! [`Executor::get`] hides the whole token lifecycle from callers. Each call opens the
//! [`Session`] if needed, obtains the cached token (fetching it from the proxy when absent or
//! expired), and sends the request with an `x-mas` header. Token fetch failures are logged and
//! swallowed so the call proceeds unauthenticated. When an authenticated attempt fails at the
//! transport level (network error or non-2xx), exactly one retry without the header is issued.
//! The cached token sits behind an async mutex, so concurrent callers that find it absent
//! share a single proxy round trip instead of stampeding the proxy. Callers that queued behind
//! a refresh that produced no token go unauthenticated instead of retrying the proxy in turn.

mod metrics;

pub use metrics::ExecutorMetrics;

// std
use std::sync::atomic::{AtomicU64, Ordering};

// self
use crate::{
	_prelude::*,
	auth::{AuthToken, ProxyTokenResponse, TokenSecret},
	config::ExecutorConfig,
	error::{DecodeError, TokenFetchError, TransportError},
	http::{self, Session},
	obs::{self, RequestKind, RequestOutcome, RequestSpan},
};

/// Long-lived request executor owning one transport session and one cached token.
pub struct Executor {
	config: Arc<ExecutorConfig>,
	session: Session,
	token: AsyncMutex<Option<AuthToken>>,
	// Completed refresh attempts; lets queued callers see that a refresh finished while waiting.
	refreshes: AtomicU64,
	metrics: ExecutorMetrics,
}
impl Executor {
	/// Creates a closed executor; the session opens on first use.
	pub fn new(config: ExecutorConfig) -> Self {
		let config = Arc::new(config);

		Self {
			session: Session::new(config.clone()),
			config,
			token: AsyncMutex::new(None),
			refreshes: AtomicU64::new(0),
			metrics: Default::default(),
		}
	}

	/// Creates an executor that adopts a caller-built reqwest client.
	pub fn with_client(config: ExecutorConfig, client: ReqwestClient) -> Self {
		let config = Arc::new(config);

		Self {
			session: Session::with_client(config.clone(), client),
			config,
			token: AsyncMutex::new(None),
			refreshes: AtomicU64::new(0),
			metrics: Default::default(),
		}
	}

	/// Creates an executor from the documented default configuration.
	pub fn with_defaults() -> Result<Self> {
		Ok(Self::new(ExecutorConfig::try_default()?))
	}

	/// Configuration the executor was built with.
	pub fn config(&self) -> &ExecutorConfig {
		&self.config
	}

	/// Shared activity counters.
	pub fn metrics(&self) -> &ExecutorMetrics {
		&self.metrics
	}

	/// Opens the transport session. Idempotent.
	pub fn open(&self) -> Result<()> {
		self.session.ensure_open()?;

		Ok(())
	}

	/// Closes the transport session. Safe to call repeatedly or before [`Executor::open`].
	///
	/// The cached token survives; a later call reopens the session lazily.
	pub fn close(&self) {
		self.session.close();
	}

	/// Returns `true` while the transport session is open.
	pub fn is_open(&self) -> bool {
		self.session.is_open()
	}

	/// Returns the cached token, if any, without contacting the proxy.
	pub async fn cached_token(&self) -> Option<AuthToken> {
		self.token.lock().await.clone()
	}

	/// Issues a GET and returns the decoded JSON body.
	///
	/// `target` is a path appended to the configured base URL or an absolute `http(s)://`
	/// URL; `params` are appended to its query string.
	pub async fn get(&self, target: &str, params: &[(&str, &str)]) -> Result<Value> {
		self.get_as(target, params).await
	}

	/// Issues a GET and decodes the body into `T`, reporting the JSON path of any mismatch.
	pub async fn get_as<T>(&self, target: &str, params: &[(&str, &str)]) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let result = match self.execute(target, params).await {
			Ok((url, body)) => decode(&url, &body),
			Err(err) => Err(err),
		};

		if result.is_err() {
			self.metrics.record_failure();
		}

		result
	}

	async fn execute(&self, target: &str, params: &[(&str, &str)]) -> Result<(Url, Vec<u8>)> {
		const KIND: RequestKind = RequestKind::Primary;

		let span = RequestSpan::new(KIND, "get");

		span.instrument(async move {
			let client = self.session.ensure_open()?;
			let url = http::resolve(&self.config.base_url, target, params)?;
			let token = self.current_token(&client).await;

			self.metrics.record_request();
			obs::record_request_outcome(KIND, RequestOutcome::Attempt);

			let primary = match http::send(&client, &self.config, &url, token.as_ref()).await {
				Ok(body) => {
					obs::record_request_outcome(KIND, RequestOutcome::Success);

					return Ok((url, body));
				},
				Err(err) => {
					obs::record_request_outcome(KIND, RequestOutcome::Failure);

					err
				},
			};

			if token.is_none() {
				return Err(Error::Request {
					url: url.to_string(),
					fallback_attempted: false,
					source: primary,
				});
			}

			self.fallback(&client, url, primary).await
		})
		.await
	}

	async fn fallback(
		&self,
		client: &ReqwestClient,
		url: Url,
		primary: TransportError,
	) -> Result<(Url, Vec<u8>)> {
		const KIND: RequestKind = RequestKind::Fallback;

		let span = RequestSpan::new(KIND, "fallback");

		obs::fallback_started(&url, &primary);
		obs::record_request_outcome(KIND, RequestOutcome::Attempt);
		self.metrics.record_fallback();

		match span.instrument(http::send(client, &self.config, &url, None)).await {
			Ok(body) => {
				obs::record_request_outcome(KIND, RequestOutcome::Success);

				Ok((url, body))
			},
			Err(err) => {
				obs::record_request_outcome(KIND, RequestOutcome::Failure);
				obs::fallback_failed(&url, &err);

				Err(Error::Request { url: url.to_string(), fallback_attempted: true, source: primary })
			},
		}
	}

	/// Returns the cached token, refreshing it first when absent or expired. Never fails.
	///
	/// A caller that waited on the lock while another refresh completed reuses that outcome:
	/// the fresh token, or no token when the refresh failed.
	async fn current_token(&self, client: &ReqwestClient) -> Option<TokenSecret> {
		let observed = self.refreshes.load(Ordering::Acquire);
		let mut slot = self.token.lock().await;
		let now = OffsetDateTime::now_utc();

		if let Some(token) = slot.as_ref().filter(|token| token.is_valid_at(now)) {
			return Some(token.secret.clone());
		}
		if self.refreshes.load(Ordering::Acquire) != observed {
			return None;
		}

		*slot = None;

		let result = self.fetch_token(client, now).await;

		self.refreshes.fetch_add(1, Ordering::Release);

		match result {
			Ok(token) => {
				let secret = token.secret.clone();

				obs::token_refreshed(&token);
				*slot = Some(token);

				Some(secret)
			},
			Err(err) => {
				self.metrics.record_token_failure();
				obs::token_fetch_failed(&self.config.proxy_url, &err);

				None
			},
		}
	}

	async fn fetch_token(
		&self,
		client: &ReqwestClient,
		now: OffsetDateTime,
	) -> Result<AuthToken, TokenFetchError> {
		const KIND: RequestKind = RequestKind::TokenFetch;

		let span = RequestSpan::new(KIND, "fetch_token");

		obs::record_request_outcome(KIND, RequestOutcome::Attempt);
		self.metrics.record_token_fetch();

		let result: Result<AuthToken, TokenFetchError> = span
			.instrument(async {
				let body = http::send(client, &self.config, &self.config.proxy_url, None).await?;
				let token = ProxyTokenResponse::from_slice(&body)?.into_token()?;

				Ok(AuthToken::new(token, now, self.config.token_ttl))
			})
			.await;

		match &result {
			Ok(_) => obs::record_request_outcome(KIND, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(KIND, RequestOutcome::Failure),
		}

		result
	}
}
impl Debug for Executor {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Executor")
			.field("base_url", &self.config.base_url.as_str())
			.field("proxy_url", &self.config.proxy_url.as_str())
			.field("session", &self.session)
			.finish()
	}
}

fn decode<T>(url: &Url, body: &[u8]) -> Result<T>
where
	T: DeserializeOwned,
{
	http::parse_json(body)
		.map_err(|source| DecodeError::Json { url: url.to_string(), source }.into())
}
