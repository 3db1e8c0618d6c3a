//! Token proxy response parsing.

// crates.io
use serde::{
	Deserializer,
	de::{IgnoredAny, MapAccess, Visitor},
};
// self
use crate::{_prelude::*, error::TokenFetchError, http};

/// Header (and proxy response field) carrying the signed token.
pub const X_MAS_HEADER: &str = "x-mas";

/// Body returned by the token proxy. Must be a JSON object; unknown fields are ignored.
#[derive(Clone, Debug, Default)]
pub struct ProxyTokenResponse {
	/// Signed token; absent when the proxy could not mint one.
	pub x_mas: Option<String>,
}
impl ProxyTokenResponse {
	/// Decodes a proxy body, reporting the JSON path of any mismatch.
	///
	/// Arrays, scalars, and trailing bytes after the object are rejected.
	pub fn from_slice(body: &[u8]) -> Result<Self, TokenFetchError> {
		http::parse_json(body).map_err(TokenFetchError::Decode)
	}

	/// Returns the token when present and non-empty.
	pub fn into_token(self) -> Result<String, TokenFetchError> {
		self.x_mas.filter(|token| !token.trim().is_empty()).ok_or(TokenFetchError::MissingToken)
	}
}
impl<'de> Deserialize<'de> for ProxyTokenResponse {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_map(ProxyTokenVisitor)
	}
}

struct ProxyTokenVisitor;
impl<'de> Visitor<'de> for ProxyTokenVisitor {
	type Value = ProxyTokenResponse;

	fn expecting(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("an object carrying an `x-mas` string")
	}

	fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut x_mas = None;

		while let Some(key) = map.next_key::<String>()? {
			if key == X_MAS_HEADER {
				x_mas = map.next_value::<Option<String>>()?;
			} else {
				map.next_value::<IgnoredAny>()?;
			}
		}

		Ok(ProxyTokenResponse { x_mas })
	}
}
