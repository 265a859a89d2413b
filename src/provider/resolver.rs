//! Provider adapter resolution.
//!
//! [`resolve`] is a pure function: it reads the catalog entry for a [`ProviderKind`], picks
//! the host, renders both endpoint templates, and moves every remaining config field into
//! the returned [`ResolvedProvider`]. `instance` is consumed and never forwarded.
//!
//! A non-empty `instance` must be a bare hostname (optionally with a port). Anything that
//! looks like a URL is rejected here instead of surfacing later as a network failure inside
//! the engine. The rendered endpoints must point at the host and port as written; only case
//! folding and IDNA encoding are tolerated.

// crates.io
use url::Host;
// self
use crate::{
	_prelude::*,
	obs::{self, ResolveOutcome, ResolveSpan},
	provider::{
		EndpointDescriptor, HostPolicy, ProviderConfig, ProviderKind, ProviderTemplate,
		ResolvedProvider,
	},
};

/// Errors raised while resolving a provider.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ResolveError {
	/// The configured instance carries URL syntax instead of a bare hostname.
	#[error("Instance `{instance}` must be a bare hostname, not a URL.")]
	NotBareHost {
		/// Instance value that failed validation.
		instance: String,
	},
	/// The rendered endpoint could not be parsed.
	#[error("The {endpoint} endpoint `{url}` is not a valid URL.")]
	InvalidEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Rendered endpoint string.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must use HTTPS.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
}

/// Resolves `config` against the catalog entry for `kind`.
///
/// ```
/// use oauth2_adapters::provider::{self, ProviderConfig, ProviderKind};
///
/// let resolved = provider::resolve(ProviderKind::Gitlab, ProviderConfig::new("id", "secret"))?;
///
/// assert_eq!(resolved.endpoint().token().as_str(), "https://gitlab.com/oauth/token");
/// # Ok::<(), provider::ResolveError>(())
/// ```
pub fn resolve(
	kind: ProviderKind,
	config: ProviderConfig,
) -> Result<ResolvedProvider, ResolveError> {
	let _span = ResolveSpan::new(kind, "resolve").entered();
	let result = resolve_with(kind.template(), config);

	match &result {
		Ok(resolved) => {
			obs::trace_resolved(resolved);
			obs::record_resolution(kind, ResolveOutcome::Success);
		},
		Err(e) => {
			obs::trace_rejected(kind, e);
			obs::record_resolution(kind, ResolveOutcome::Failure);
		},
	}

	result
}

/// Resolves a GitLab provider; `instance` defaults to `gitlab.com`.
///
/// ```
/// use oauth2_adapters::provider::{self, ProviderConfig};
///
/// let config =
/// 	ProviderConfig::new("1234567890", "0987654321").with_instance("gitlab.mycompany.com");
/// let resolved = provider::gitlab(config)?;
///
/// assert_eq!(
/// 	resolved.endpoint().authorization().as_str(),
/// 	"https://gitlab.mycompany.com/oauth/authorize"
/// );
/// # Ok::<(), provider::ResolveError>(())
/// ```
pub fn gitlab(config: ProviderConfig) -> Result<ResolvedProvider, ResolveError> {
	resolve(ProviderKind::Gitlab, config)
}

/// Resolves a LinkedIn provider. Any `instance` is ignored.
pub fn linkedin(config: ProviderConfig) -> Result<ResolvedProvider, ResolveError> {
	resolve(ProviderKind::Linkedin, config)
}

/// Resolves a Mastodon provider; `instance` defaults to `mastodon.social`.
pub fn mastodon(config: ProviderConfig) -> Result<ResolvedProvider, ResolveError> {
	resolve(ProviderKind::Mastodon, config)
}

fn resolve_with(
	template: &ProviderTemplate,
	config: ProviderConfig,
) -> Result<ResolvedProvider, ResolveError> {
	let ProviderConfig { client_id, client_secret, instance, options } = config;

	if let (HostPolicy::Fixed, Some(ignored)) = (template.host, instance.as_deref()) {
		obs::trace_instance_ignored(template.kind, ignored);
	}

	let host = template.select_host(instance.as_deref());

	if let Some(host) = host {
		validate_bare_host(host)?;
	}

	let authorization = render_endpoint(template, "authorization", template.authorization, host)?;
	let token = render_endpoint(template, "token", template.token, host)?;

	if let Some(host) = host {
		verify_authority(host, &authorization)?;
		verify_authority(host, &token)?;
	}

	Ok(ResolvedProvider::new(
		template.kind,
		EndpointDescriptor::new(authorization, token),
		client_id,
		client_secret,
		options,
		template.client_auth_method,
	))
}

fn validate_bare_host(host: &str) -> Result<(), ResolveError> {
	let url_syntax = |c: char| c.is_whitespace() || matches!(c, '/' | '\\' | '?' | '#' | '@' | '%');

	if host.chars().any(url_syntax) {
		Err(ResolveError::NotBareHost { instance: host.to_owned() })
	} else {
		Ok(())
	}
}

// The URL parser drops empty and default ports; 443 is what an omitted port means here.
fn verify_authority(instance: &str, url: &Url) -> Result<(), ResolveError> {
	let (host, port) = split_port(instance);
	let expected_host = Host::parse(host).ok();
	let expected_port = match port {
		Some(port) => port.parse::<u16>().ok(),
		None => Some(443),
	};

	if expected_host.is_some()
		&& expected_host == url.host().map(|h| h.to_owned())
		&& expected_port.is_some()
		&& expected_port == url.port_or_known_default()
	{
		Ok(())
	} else {
		Err(ResolveError::NotBareHost { instance: instance.to_owned() })
	}
}

fn split_port(instance: &str) -> (&str, Option<&str>) {
	let boundary = instance.rfind(']').unwrap_or(0);

	match instance[boundary..].rfind(':') {
		Some(i) => (&instance[..boundary + i], Some(&instance[boundary + i + 1..])),
		None => (instance, None),
	}
}

fn render_endpoint(
	template: &ProviderTemplate,
	endpoint: &'static str,
	raw: &'static str,
	host: Option<&str>,
) -> Result<Url, ResolveError> {
	let rendered = template.render(raw, host);
	let url = Url::parse(&rendered).map_err(|source| ResolveError::InvalidEndpoint {
		endpoint,
		url: rendered.clone(),
		source,
	})?;

	if url.scheme() != "https" {
		return Err(ResolveError::InsecureEndpoint { endpoint, url: url.to_string() });
	}

	Ok(url)
}
