//! Cached x-mas token value and its lifecycle helpers.

// self
use crate::{_prelude::*, auth::token::secret::TokenSecret};

/// Lifecycle status for a cached token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenStatus {
	/// Token may be attached to requests.
	Valid,
	/// Token reached its expiry instant and must be re-fetched.
	Expired,
}

/// Immutable x-mas token plus the absolute instant it stops being reused.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthToken {
	/// Signed token secret; callers must avoid logging it.
	pub secret: TokenSecret,
	/// Instant the token was obtained from the proxy.
	pub fetched_at: OffsetDateTime,
	/// Expiry instant (`fetched_at + ttl`).
	pub expires_at: OffsetDateTime,
}
impl AuthToken {
	/// Creates a token fetched at `fetched_at` that lives for `ttl`.
	pub fn new(secret: impl Into<String>, fetched_at: OffsetDateTime, ttl: Duration) -> Self {
		Self { secret: TokenSecret::new(secret), fetched_at, expires_at: fetched_at + ttl }
	}

	/// Computes the lifecycle status at a given instant.
	pub fn status_at(&self, instant: OffsetDateTime) -> TokenStatus {
		if instant < self.expires_at { TokenStatus::Valid } else { TokenStatus::Expired }
	}

	/// Returns `true` if the token is still valid at the provided instant.
	pub fn is_valid_at(&self, instant: OffsetDateTime) -> bool {
		matches!(self.status_at(instant), TokenStatus::Valid)
	}

	/// Returns `true` if the token is valid relative to the current clock.
	pub fn is_valid(&self) -> bool {
		self.is_valid_at(OffsetDateTime::now_utc())
	}

	/// Time left before expiry at the provided instant, clamped at zero.
	pub fn remaining_at(&self, instant: OffsetDateTime) -> Duration {
		let remaining = self.expires_at - instant;

		if remaining.is_negative() { Duration::ZERO } else { remaining }
	}
}
impl Debug for AuthToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthToken")
			.field("secret", &"<redacted>")
			.field("fingerprint", &self.secret.fingerprint())
			.field("fetched_at", &self.fetched_at)
			.field("expires_at", &self.expires_at)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn status_flips_exactly_at_expiry() {
		let fetched = macros::datetime!(2025-01-01 00:00 UTC);
		let token = AuthToken::new("abc123", fetched, Duration::seconds(3600));

		assert_eq!(token.expires_at, macros::datetime!(2025-01-01 01:00 UTC));
		assert_eq!(token.status_at(macros::datetime!(2025-01-01 00:59:59 UTC)), TokenStatus::Valid);
		assert_eq!(token.status_at(macros::datetime!(2025-01-01 01:00 UTC)), TokenStatus::Expired);
		assert!(!token.is_valid_at(macros::datetime!(2025-01-01 02:00 UTC)));
	}

	#[test]
	fn remaining_is_clamped() {
		let fetched = macros::datetime!(2025-01-01 00:00 UTC);
		let token = AuthToken::new("abc123", fetched, Duration::minutes(10));

		assert_eq!(
			token.remaining_at(macros::datetime!(2025-01-01 00:04 UTC)),
			Duration::minutes(6)
		);
		assert_eq!(token.remaining_at(macros::datetime!(2025-01-01 00:30 UTC)), Duration::ZERO);
	}

	#[test]
	fn debug_redacts_secret() {
		let token = AuthToken::new("abc123", OffsetDateTime::now_utc(), Duration::minutes(1));
		let rendered = format!("{token:?}");

		assert!(token.is_valid());
		assert!(rendered.contains("<redacted>"));
		assert!(!rendered.contains("abc123"));
	}
}
