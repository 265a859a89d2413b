//! JSON configuration for registering providers.
//!
//! A single provider is described by its `type` plus the usual [`ProviderConfig`] fields:
//!
//! ```json
//! {
//! 	"type": "mastodon",
//! 	"client_id": "1234567890",
//! 	"client_secret": "0987654321",
//! 	"instance": "hachyderm.io"
//! }
//! ```
//!
//! [`ProvidersConfig`] wraps a map of such entries keyed by the name the issuer registers
//! them under. Parse failures report the JSON path of the offending field.

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	provider::{self, ProviderConfig, ProviderKind, ResolveError, ResolvedProvider},
};

/// One provider entry: its type plus the adapter configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
	/// Adapter to resolve with.
	#[serde(rename = "type")]
	pub kind: ProviderKind,
	/// Adapter configuration.
	#[serde(flatten)]
	pub config: ProviderConfig,
}
impl ProviderSettings {
	/// Parses a single provider entry.
	pub fn from_json_str(raw: &str) -> Result<Self> {
		from_json_str(raw)
	}

	/// Resolves the entry with its adapter.
	pub fn resolve(self) -> Result<ResolvedProvider, ResolveError> {
		provider::resolve(self.kind, self.config)
	}
}

/// Named set of provider entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidersConfig {
	/// Entries keyed by registration name.
	pub providers: BTreeMap<String, ProviderSettings>,
}
impl ProvidersConfig {
	/// Parses a `{ "providers": { ... } }` document.
	pub fn from_json_str(raw: &str) -> Result<Self> {
		from_json_str(raw)
	}

	/// Resolves every entry independently, stopping at the first failure.
	///
	/// The error names the entry that failed.
	pub fn resolve_all(self) -> Result<BTreeMap<String, ResolvedProvider>> {
		self.providers
			.into_iter()
			.map(|(name, settings)| match settings.resolve() {
				Ok(resolved) => Ok((name, resolved)),
				Err(source) => Err(Error::from(ConfigError::Provider { name, source })),
			})
			.collect()
	}
}

fn from_json_str<T>(raw: &str) -> Result<T>
where
	T: for<'de> Deserialize<'de>,
{
	let de = &mut serde_json::Deserializer::from_str(raw);

	serde_path_to_error::deserialize(de).map_err(|e| ConfigError::from(e).into())
}
