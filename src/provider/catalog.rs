//! Static endpoint templates for every built-in provider.
//!
//! One generic resolver consults this table instead of each provider carrying its own
//! bespoke function. Templates are compile-time constants; the only substitution ever
//! performed is the `{host}` placeholder for self-hostable providers.

// self
use crate::provider::{ClientAuthMethod, ProviderKind};

/// Placeholder replaced with the resolved host in self-hosted templates.
pub const HOST_PLACEHOLDER: &str = "{host}";

/// How a provider's host is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostPolicy {
	/// Single global host baked into the templates.
	Fixed,
	/// Caller may point the adapter at their own deployment.
	SelfHosted {
		/// Host used when no instance (or an empty one) is configured.
		default_host: &'static str,
	},
}
impl HostPolicy {
	/// Returns true when the provider accepts an `instance` hostname.
	pub fn is_self_hosted(self) -> bool {
		matches!(self, HostPolicy::SelfHosted { .. })
	}
}

/// Catalog entry describing a provider's endpoint layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProviderTemplate {
	/// Provider the entry belongs to.
	pub kind: ProviderKind,
	/// Host selection rule.
	pub host: HostPolicy,
	/// Authorization endpoint template.
	pub authorization: &'static str,
	/// Token endpoint template.
	pub token: &'static str,
	/// How the engine should present client credentials at the token endpoint.
	pub client_auth_method: ClientAuthMethod,
}
impl ProviderTemplate {
	/// Picks the host to substitute, if the provider is self-hostable.
	///
	/// This is a presence check only: an empty instance falls back to the default host and any
	/// other value is returned untouched.
	pub fn select_host<'a>(&self, instance: Option<&'a str>) -> Option<&'a str> {
		match self.host {
			HostPolicy::Fixed => None,
			HostPolicy::SelfHosted { default_host } => Some(
				instance.filter(|instance| !instance.is_empty()).unwrap_or(default_host),
			),
		}
	}

	/// Substitutes `host` into `template`; fixed-host templates are returned as-is.
	pub fn render(&self, template: &'static str, host: Option<&str>) -> String {
		match host {
			Some(host) if self.host.is_self_hosted() => template.replace(HOST_PLACEHOLDER, host),
			_ => template.to_owned(),
		}
	}
}

/// GitLab.com, overridable with a self-hosted instance.
pub static GITLAB: ProviderTemplate = ProviderTemplate {
	kind: ProviderKind::Gitlab,
	host: HostPolicy::SelfHosted { default_host: "gitlab.com" },
	authorization: "https://{host}/oauth/authorize",
	token: "https://{host}/oauth/token",
	client_auth_method: ClientAuthMethod::ClientSecretPost,
};

/// LinkedIn's global OAuth 2.0 endpoints.
pub static LINKEDIN: ProviderTemplate = ProviderTemplate {
	kind: ProviderKind::Linkedin,
	host: HostPolicy::Fixed,
	authorization: "https://www.linkedin.com/oauth/v2/authorization",
	token: "https://www.linkedin.com/oauth/v2/accessToken",
	client_auth_method: ClientAuthMethod::ClientSecretPost,
};

/// `mastodon.social`, overridable with any other instance.
pub static MASTODON: ProviderTemplate = ProviderTemplate {
	kind: ProviderKind::Mastodon,
	host: HostPolicy::SelfHosted { default_host: "mastodon.social" },
	authorization: "https://{host}/oauth/authorize",
	token: "https://{host}/oauth/token",
	client_auth_method: ClientAuthMethod::ClientSecretPost,
};

/// Returns the catalog entry for `kind`.
pub fn template(kind: ProviderKind) -> &'static ProviderTemplate {
	match kind {
		ProviderKind::Gitlab => &GITLAB,
		ProviderKind::Linkedin => &LINKEDIN,
		ProviderKind::Mastodon => &MASTODON,
	}
}

/// Iterates over every catalog entry.
pub fn templates() -> impl Iterator<Item = &'static ProviderTemplate> {
	ProviderKind::ALL.into_iter().map(template)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::_prelude::*;

	#[test]
	fn entries_match_their_kind() {
		for entry in templates() {
			assert_eq!(template(entry.kind), entry);
		}
	}

	#[test]
	fn default_hosts_render_to_https_urls() {
		for entry in templates() {
			let host = entry.select_host(None);

			for raw in [entry.authorization, entry.token] {
				let rendered = entry.render(raw, host);
				let url =
					Url::parse(&rendered).expect("Catalog templates should render valid URLs.");

				assert_eq!(url.scheme(), "https", "{rendered} must use HTTPS.");
				assert!(!rendered.contains(HOST_PLACEHOLDER));
			}
		}
	}

	#[test]
	fn fixed_templates_carry_no_placeholder() {
		for entry in templates().filter(|entry| !entry.host.is_self_hosted()) {
			assert!(!entry.authorization.contains(HOST_PLACEHOLDER));
			assert!(!entry.token.contains(HOST_PLACEHOLDER));
		}
	}

	#[test]
	fn host_selection_is_a_presence_check() {
		assert_eq!(GITLAB.select_host(None), Some("gitlab.com"));
		assert_eq!(GITLAB.select_host(Some("")), Some("gitlab.com"));
		assert_eq!(MASTODON.select_host(Some("hachyderm.io")), Some("hachyderm.io"));
		assert_eq!(LINKEDIN.select_host(Some("example.org")), None);
		assert_eq!(
			LINKEDIN.render(LINKEDIN.token, Some("example.org")),
			"https://www.linkedin.com/oauth/v2/accessToken"
		);
	}
}
