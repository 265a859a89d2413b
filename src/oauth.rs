//! Hand-off from resolved providers to the shared OAuth 2.0 engine.
//!
//! The engine owns everything after resolution (redirects, state, PKCE, token exchange).
//! [`ProviderEngine`] is the seam; [`BasicClientEngine`] feeds the `oauth2` crate's
//! [`BasicClient`] and keeps the pass-through options next to it for the flow to use.

pub use oauth2;

// crates.io
use oauth2::{
	AuthType, AuthUrl, ClientId, ClientSecret as OAuth2ClientSecret, EndpointNotSet, EndpointSet,
	RedirectUrl, TokenUrl, basic::BasicClient,
};
// self
use crate::{
	_prelude::*,
	error::ConfigError,
	provider::{
		ClientAuthMethod, EndpointDescriptor, Oauth2Options, ProviderKind, ResolvedParts,
		ResolvedProvider,
	},
};

/// `oauth2` client with the authorization and token endpoints set.
pub type ConfiguredBasicClient =
	BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Consumer of resolved providers.
///
/// Implementations take ownership of the descriptor and return whatever handle their flow
/// machinery needs. Credential validation happens here, never during resolution.
pub trait ProviderEngine {
	/// Engine-specific provider handle.
	type Handle;

	/// Registers a resolved provider with the engine.
	fn register(&self, provider: ResolvedProvider) -> Result<Self::Handle>;
}

/// Engine adapter backed by [`oauth2::basic::BasicClient`].
#[derive(Clone, Debug, Default)]
pub struct BasicClientEngine {
	/// Redirect URI applied to every registered client.
	pub redirect_uri: Option<Url>,
}
impl BasicClientEngine {
	/// Creates an engine adapter without a redirect URI.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the redirect URI applied to every registered client.
	pub fn with_redirect_uri(mut self, redirect_uri: Url) -> Self {
		self.redirect_uri = Some(redirect_uri);

		self
	}
}
impl ProviderEngine for BasicClientEngine {
	type Handle = ProviderClient;

	fn register(&self, provider: ResolvedProvider) -> Result<Self::Handle> {
		let ResolvedParts {
			kind,
			endpoint,
			client_id,
			client_secret,
			options,
			client_auth_method,
		} = provider.into_parts();
		let auth_type = match client_auth_method {
			ClientAuthMethod::ClientSecretBasic => AuthType::BasicAuth,
			ClientAuthMethod::ClientSecretPost => AuthType::RequestBody,
		};
		let auth_url = AuthUrl::new(endpoint.authorization().to_string())
			.map_err(|source| ConfigError::InvalidDescriptor { source })?;
		let token_url = TokenUrl::new(endpoint.token().to_string())
			.map_err(|source| ConfigError::InvalidDescriptor { source })?;
		let mut client = BasicClient::new(ClientId::new(client_id))
			.set_client_secret(OAuth2ClientSecret::new(client_secret.expose().to_owned()))
			.set_auth_uri(auth_url)
			.set_token_uri(token_url)
			.set_auth_type(auth_type);

		if let Some(redirect) = self.redirect_uri.as_ref() {
			let redirect_url = RedirectUrl::new(redirect.to_string())
				.map_err(|source| ConfigError::InvalidRedirect { source })?;

			client = client.set_redirect_uri(redirect_url);
		}

		Ok(ProviderClient { kind, endpoint, client, options })
	}
}

/// Handle returned by [`BasicClientEngine`].
#[derive(Clone, Debug)]
pub struct ProviderClient {
	kind: ProviderKind,
	endpoint: EndpointDescriptor,
	client: ConfiguredBasicClient,
	options: Oauth2Options,
}
impl ProviderClient {
	/// Provider type literal.
	pub fn kind(&self) -> ProviderKind {
		self.kind
	}

	/// Endpoints the client was configured with.
	pub fn endpoint(&self) -> &EndpointDescriptor {
		&self.endpoint
	}

	/// Configured `oauth2` client.
	pub fn client(&self) -> &ConfiguredBasicClient {
		&self.client
	}

	/// Pass-through options (scopes, PKCE toggle, extra query parameters).
	pub fn options(&self) -> &Oauth2Options {
		&self.options
	}
}
