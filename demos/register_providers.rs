//! Resolves a GitLab, LinkedIn, and self-hosted Mastodon provider and registers each one with
//! the `oauth2` engine adapter.

// crates.io
use color_eyre::Result;
use url::Url;
// self
use oauth2_adapters::{
	auth::ScopeSet,
	oauth::{BasicClientEngine, ProviderEngine},
	provider::{self, ProviderConfig},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let engine = BasicClientEngine::new()
		.with_redirect_uri(Url::parse("https://auth.example.com/oauth/callback")?);
	let providers = [
		provider::gitlab(
			ProviderConfig::new("1234567890", "0987654321")
				.with_instance("gitlab.mycompany.com")
				.with_scopes(ScopeSet::new(["read_user"])),
		)?,
		provider::linkedin(
			ProviderConfig::new("1234567890", "0987654321")
				.with_scopes(ScopeSet::new(["openid", "profile", "email"])),
		)?,
		provider::mastodon(
			ProviderConfig::new("1234567890", "0987654321")
				.with_instance("hachyderm.io")
				.with_pkce(true),
		)?,
	];

	for resolved in providers {
		println!(
			"{}: authorize at {}, exchange at {}.",
			resolved.kind(),
			resolved.endpoint().authorization(),
			resolved.endpoint().token()
		);

		let handle = engine.register(resolved)?;

		println!(
			"Registered {} with scopes `{}` (PKCE: {}).",
			handle.kind(),
			handle.options().scopes,
			handle.options().pkce
		);
	}

	Ok(())
}
