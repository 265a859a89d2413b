//! Resolved provider descriptors handed to the shared OAuth 2.0 engine.
//!
//! Both types are immutable once built: fields are private and only exposed through
//! accessors, so a descriptor cannot drift from what the resolver produced.

// self
use crate::{
	_prelude::*,
	auth::ClientSecret,
	provider::{Oauth2Options, ProviderKind},
};

/// Client authentication modes for token endpoint calls.
///
/// Every built-in catalog entry posts credentials in the body; Basic stays available for
/// templates whose token endpoint follows the RFC 6749 default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientAuthMethod {
	/// HTTP Basic with `client_id`/`client_secret`.
	ClientSecretBasic,
	/// Form POST body parameters for `client_id`/`client_secret`.
	ClientSecretPost,
}

/// Authorization and token endpoints for one resolved provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EndpointDescriptor {
	authorization: Url,
	token: Url,
}
impl EndpointDescriptor {
	pub(crate) fn new(authorization: Url, token: Url) -> Self {
		Self { authorization, token }
	}

	/// Authorization endpoint used by the Authorization Code flow.
	pub fn authorization(&self) -> &Url {
		&self.authorization
	}

	/// Token endpoint used for exchanges and refreshes.
	pub fn token(&self) -> &Url {
		&self.token
	}
}

/// Provider configuration with endpoints filled in, ready for the shared engine.
///
/// Carries the fixed `type` literal, the computed endpoints, and every caller-supplied field
/// except the consumed `instance`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedProvider {
	#[serde(rename = "type")]
	kind: ProviderKind,
	endpoint: EndpointDescriptor,
	client_id: String,
	client_secret: ClientSecret,
	#[serde(flatten)]
	options: Oauth2Options,
	#[serde(skip)]
	client_auth_method: ClientAuthMethod,
}
impl ResolvedProvider {
	pub(crate) fn new(
		kind: ProviderKind,
		endpoint: EndpointDescriptor,
		client_id: String,
		client_secret: ClientSecret,
		options: Oauth2Options,
		client_auth_method: ClientAuthMethod,
	) -> Self {
		Self { kind, endpoint, client_id, client_secret, options, client_auth_method }
	}

	/// Provider type literal.
	pub fn kind(&self) -> ProviderKind {
		self.kind
	}

	/// Resolved endpoints.
	pub fn endpoint(&self) -> &EndpointDescriptor {
		&self.endpoint
	}

	/// OAuth client identifier, exactly as configured.
	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// OAuth client secret, exactly as configured.
	pub fn client_secret(&self) -> &ClientSecret {
		&self.client_secret
	}

	/// Pass-through engine options.
	pub fn options(&self) -> &Oauth2Options {
		&self.options
	}

	/// Client authentication mode the provider expects at its token endpoint.
	pub fn client_auth_method(&self) -> ClientAuthMethod {
		self.client_auth_method
	}

	/// Splits the descriptor for consumers that take ownership of the pieces.
	pub fn into_parts(self) -> ResolvedParts {
		let ResolvedProvider {
			kind,
			endpoint,
			client_id,
			client_secret,
			options,
			client_auth_method,
		} = self;

		ResolvedParts { kind, endpoint, client_id, client_secret, options, client_auth_method }
	}
}

/// Owned pieces of a [`ResolvedProvider`].
#[derive(Debug)]
pub struct ResolvedParts {
	/// Provider type literal.
	pub kind: ProviderKind,
	/// Resolved endpoints.
	pub endpoint: EndpointDescriptor,
	/// OAuth client identifier.
	pub client_id: String,
	/// OAuth client secret.
	pub client_secret: ClientSecret,
	/// Pass-through engine options.
	pub options: Oauth2Options,
	/// Client authentication mode for the token endpoint.
	pub client_auth_method: ClientAuthMethod,
}
