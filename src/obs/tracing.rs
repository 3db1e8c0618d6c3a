// self
use crate::{
	_prelude::*,
	auth::AuthToken,
	error::{TokenFetchError, TransportError},
	obs::RequestKind,
};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// A span builder used by executor operations.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Creates a new span tagged with the provided request kind + stage.
	pub fn new(kind: RequestKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::debug_span!("fotmob_client.request", kind = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Logs a successful token refresh without exposing the secret.
pub fn token_refreshed(token: &AuthToken) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			fingerprint = %token.secret.fingerprint(),
			expires_at = %token.expires_at,
			remaining_secs = token.remaining_at(OffsetDateTime::now_utc()).whole_seconds(),
			"x-mas token refreshed"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = token;
	}
}

/// Logs a swallowed token fetch failure; the caller continues unauthenticated.
pub fn token_fetch_failed(proxy_url: &Url, err: &TokenFetchError) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(
			proxy = %proxy_url,
			error = %crate::obs::error_chain(err),
			"failed to get x-mas token, continuing without it"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (proxy_url, err);
	}
}

/// Logs the start of the unauthenticated retry.
pub fn fallback_started(url: &Url, cause: &TransportError) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			url = %url,
			error = %crate::obs::error_chain(cause),
			"authenticated request failed, retrying without x-mas"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (url, cause);
	}
}

/// Logs a failed unauthenticated retry; the primary failure is what gets propagated.
pub fn fallback_failed(url: &Url, err: &TransportError) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(
			url = %url,
			error = %crate::obs::error_chain(err),
			"fallback request without x-mas failed"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (url, err);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn events_are_safe_without_subscriber() {
		let url = Url::parse("http://localhost/proxy").expect("URL fixture should parse.");

		token_fetch_failed(&url, &TokenFetchError::MissingToken);
		fallback_failed(&url, &TransportError::Status { status: 500 });
		token_refreshed(&AuthToken::new("abc", OffsetDateTime::now_utc(), Duration::minutes(1)));
	}

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = RequestSpan::new(RequestKind::Primary, "instrument_wraps_future");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
