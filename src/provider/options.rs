// self
use crate::{
	_prelude::*,
	auth::{ClientSecret, ScopeSet},
};

/// Engine options forwarded untouched from configuration to the resolved provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Oauth2Options {
	/// Scopes requested during authorization.
	pub scopes: ScopeSet,
	/// Whether the engine should attach a PKCE challenge.
	pub pkce: bool,
	/// Extra query parameters appended to the authorization URL.
	pub query: BTreeMap<String, String>,
}

/// Caller input for a provider adapter.
///
/// `instance` is only meaningful for self-hostable providers and is consumed during
/// resolution. Credentials are carried as-is; nothing here checks them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
	/// OAuth client identifier.
	#[serde(alias = "clientID")]
	pub client_id: String,
	/// OAuth client secret.
	#[serde(alias = "clientSecret")]
	pub client_secret: ClientSecret,
	/// Hostname of a self-hosted deployment, e.g. `gitlab.mycompany.com`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub instance: Option<String>,
	/// Pass-through engine options.
	#[serde(flatten)]
	pub options: Oauth2Options,
}
impl ProviderConfig {
	/// Creates a config carrying only client credentials.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<ClientSecret>) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			instance: None,
			options: Oauth2Options::default(),
		}
	}

	/// Points a self-hostable provider at a specific deployment.
	pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
		self.instance = Some(instance.into());

		self
	}

	/// Replaces the requested scopes.
	pub fn with_scopes(mut self, scopes: ScopeSet) -> Self {
		self.options.scopes = scopes;

		self
	}

	/// Toggles PKCE.
	pub fn with_pkce(mut self, pkce: bool) -> Self {
		self.options.pkce = pkce;

		self
	}

	/// Adds an extra authorization query parameter.
	pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.options.query.insert(key.into(), value.into());

		self
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn deserializes_camel_case_credentials() {
		let config: ProviderConfig = serde_json::from_str(
			r#"{"clientID":"1234567890","clientSecret":"0987654321","instance":"hachyderm.io"}"#,
		)
		.expect("Camel-case credential keys should be accepted.");

		assert_eq!(config.client_id, "1234567890");
		assert_eq!(config.client_secret.expose(), "0987654321");
		assert_eq!(config.instance.as_deref(), Some("hachyderm.io"));
		assert_eq!(config.options, Oauth2Options::default());
	}

	#[test]
	fn flattens_engine_options() {
		let config: ProviderConfig = serde_json::from_str(
			r#"{
				"client_id": "id",
				"client_secret": "secret",
				"scopes": ["read_user", "openid"],
				"pkce": true,
				"query": { "prompt": "consent" }
			}"#,
		)
		.expect("Engine options should deserialize from the top level.");

		assert!(config.instance.is_none());
		assert!(config.options.pkce);
		assert!(config.options.scopes.contains("openid"));
		assert_eq!(config.options.query.get("prompt").map(String::as_str), Some("consent"));
	}

	#[test]
	fn builder_helpers_set_fields() {
		let config = ProviderConfig::new("id", "secret")
			.with_instance("gitlab.mycompany.com")
			.with_pkce(true)
			.with_query("prompt", "login");

		assert_eq!(config.instance.as_deref(), Some("gitlab.mycompany.com"));
		assert!(config.options.pkce);
		assert_eq!(config.options.query.len(), 1);
	}
}
