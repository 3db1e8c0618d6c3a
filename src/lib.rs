//! Async FotMob client built around a token-gated request executor: cached x-mas tokens,
//! single-flight refreshes, a one-shot unauthenticated fallback, and a thin endpoint facade.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

#[cfg(test)] use fotmob_client as _;

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod executor;
pub mod http;
pub mod obs;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests that point an executor at a
	//! local mock server; enabled via `cfg(test)` or the `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{api::FotMob, config::ExecutorConfig, executor::Executor};

	/// Builds an executor configuration whose provider base is `{server}/api` and whose token
	/// proxy is `{server}/proxy`.
	pub fn test_config(server_base: &str) -> ExecutorConfig {
		test_config_builder(server_base)
			.build()
			.expect("Failed to build executor configuration for tests.")
	}

	/// Returns a builder seeded with the mock server endpoints so tests can tweak the TTL,
	/// timeout, or headers before building.
	pub fn test_config_builder(server_base: &str) -> crate::config::ExecutorConfigBuilder {
		let base = server_base.trim_end_matches('/');

		ExecutorConfig::builder()
			.base_url(
				Url::parse(&format!("{base}/api"))
					.expect("Failed to parse mock provider base URL."),
			)
			.proxy_url(
				Url::parse(&format!("{base}/proxy")).expect("Failed to parse mock proxy URL."),
			)
	}

	/// Constructs an [`Executor`] wired to the mock server.
	pub fn build_test_executor(server_base: &str) -> Executor {
		Executor::new(test_config(server_base))
	}

	/// Constructs a [`FotMob`] facade over a shared test executor.
	pub fn build_test_client(server_base: &str) -> (FotMob, Arc<Executor>) {
		let executor = Arc::new(build_test_executor(server_base));

		(FotMob::with_executor(executor.clone()), executor)
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		sync::Arc,
		time::Duration as StdDuration,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::Mutex;
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
