//! Crate-level error types shared by configuration loading, resolution, and the engine hand-off.

// self
use crate::{_prelude::*, provider::ResolveError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Provider configuration could not be resolved.
	#[error(transparent)]
	Resolve(#[from] ResolveError),
}

/// Configuration failures raised while loading providers or handing them to the engine.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Provider configuration is not valid JSON or does not match the expected shape.
	#[error("Provider configuration is invalid at `{path}`.", path = .source.path())]
	Parse {
		/// Structured parsing failure, including the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// A named provider entry failed to resolve.
	#[error("Provider `{name}` could not be resolved.")]
	Provider {
		/// Name the provider is registered under.
		name: String,
		/// Underlying resolution failure.
		#[source]
		source: ResolveError,
	},
	/// Resolved endpoint was rejected by the engine.
	#[error("Descriptor contains an invalid URL.")]
	InvalidDescriptor {
		/// Underlying parsing failure.
		#[source]
		source: oauth2::url::ParseError,
	},
	/// Redirect URI cannot be parsed.
	#[error("Redirect URI is invalid.")]
	InvalidRedirect {
		/// Underlying parsing failure.
		#[source]
		source: oauth2::url::ParseError,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
	fn from(source: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::Parse { source }
	}
}
