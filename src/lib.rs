//! Identity-provider adapters for OAuth 2.0 issuers: turn a provider type plus client
//! configuration into the endpoint descriptor an authorization-code engine can drive.
//!
//! ```
//! use oauth2_adapters::provider::{self, ProviderConfig};
//!
//! let config = ProviderConfig::new("1234567890", "0987654321").with_instance("hachyderm.io");
//! let resolved = provider::mastodon(config)?;
//!
//! assert_eq!(
//! 	resolved.endpoint().authorization().as_str(),
//! 	"https://hachyderm.io/oauth/authorize"
//! );
//! # Ok::<(), oauth2_adapters::provider::ResolveError>(())
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod oauth;
pub mod obs;
pub mod provider;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use color_eyre as _;
