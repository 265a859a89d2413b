// std
use std::sync::Arc;
// self
use oauth2_adapters::{
	auth::ScopeSet,
	provider::{self, ProviderConfig, ProviderKind, ResolvedProvider},
};

const CLIENT_ID: &str = "1234567890";
const CLIENT_SECRET: &str = "0987654321";

fn config() -> ProviderConfig {
	ProviderConfig::new(CLIENT_ID, CLIENT_SECRET)
}

fn resolve(kind: ProviderKind, config: ProviderConfig) -> ResolvedProvider {
	provider::resolve(kind, config).expect("Provider fixture should resolve.")
}

fn endpoints(resolved: &ResolvedProvider) -> (&str, &str) {
	(resolved.endpoint().authorization().as_str(), resolved.endpoint().token().as_str())
}

#[test]
fn default_hosts_yield_documented_endpoints() {
	let cases = [
		(
			ProviderKind::Gitlab,
			"https://gitlab.com/oauth/authorize",
			"https://gitlab.com/oauth/token",
		),
		(
			ProviderKind::Mastodon,
			"https://mastodon.social/oauth/authorize",
			"https://mastodon.social/oauth/token",
		),
		(
			ProviderKind::Linkedin,
			"https://www.linkedin.com/oauth/v2/authorization",
			"https://www.linkedin.com/oauth/v2/accessToken",
		),
	];

	for (kind, authorization, token) in cases {
		let resolved = resolve(kind, config());

		assert_eq!(resolved.kind(), kind);
		assert_eq!(endpoints(&resolved), (authorization, token), "{kind} endpoints drifted.");
	}
}

#[test]
fn named_adapters_fix_the_type() {
	let gitlab = provider::gitlab(config()).expect("GitLab adapter should resolve.");
	let linkedin = provider::linkedin(config()).expect("LinkedIn adapter should resolve.");
	let mastodon = provider::mastodon(config()).expect("Mastodon adapter should resolve.");

	assert_eq!(gitlab.kind().as_str(), "gitlab");
	assert_eq!(linkedin.kind().as_str(), "linkedin");
	assert_eq!(mastodon.kind().as_str(), "mastodon");
}

#[test]
fn instance_replaces_only_the_host() {
	for kind in [ProviderKind::Gitlab, ProviderKind::Mastodon] {
		let resolved = resolve(kind, config().with_instance("example.org"));

		assert_eq!(
			endpoints(&resolved),
			("https://example.org/oauth/authorize", "https://example.org/oauth/token")
		);
	}
}

#[test]
fn linkedin_endpoints_are_fixed_regardless_of_instance() {
	let plain = resolve(ProviderKind::Linkedin, config());
	let with_instance = resolve(ProviderKind::Linkedin, config().with_instance("example.org"));

	assert_eq!(plain, with_instance);
}

#[test]
fn empty_instance_falls_back_to_default_host() {
	for kind in [ProviderKind::Gitlab, ProviderKind::Mastodon] {
		let absent = resolve(kind, config());
		let empty = resolve(kind, config().with_instance(""));

		assert_eq!(absent, empty, "Empty instance must behave like an absent one for {kind}.");
	}
}

#[test]
fn resolution_is_repeatable_and_unaliased() {
	let input = config()
		.with_instance("hachyderm.io")
		.with_scopes(ScopeSet::new(["read", "write"]));
	let first = resolve(ProviderKind::Mastodon, input.clone());
	let second = resolve(ProviderKind::Mastodon, input);

	assert_eq!(first, second);
	assert_ne!(first.client_id().as_ptr(), second.client_id().as_ptr());
	assert_ne!(
		first.endpoint().authorization().as_str().as_ptr(),
		second.endpoint().authorization().as_str().as_ptr()
	);
}

#[test]
fn output_never_carries_instance() {
	for kind in ProviderKind::ALL {
		let resolved = resolve(kind, config().with_instance("example.org"));
		let json = serde_json::to_value(&resolved).expect("Resolved provider should serialize.");
		let object = json.as_object().expect("Resolved provider should serialize as an object.");

		assert!(!object.contains_key("instance"));
		assert_eq!(object.get("type").and_then(|v| v.as_str()), Some(kind.as_str()));
		assert!(object.contains_key("endpoint"));
	}
}

#[test]
fn pass_through_fields_are_preserved() {
	let scopes = ScopeSet::new(["read_user", "openid"]);
	let input = config()
		.with_instance("gitlab.mycompany.com")
		.with_scopes(scopes.clone())
		.with_pkce(true)
		.with_query("prompt", "consent");
	let expected_options = input.options.clone();
	let resolved = resolve(ProviderKind::Gitlab, input);

	assert_eq!(resolved.client_id(), CLIENT_ID);
	assert_eq!(resolved.client_secret().expose(), CLIENT_SECRET);
	assert_eq!(resolved.options(), &expected_options);
	assert!(
		Arc::ptr_eq(&resolved.options().scopes.scopes, &scopes.scopes),
		"Scopes must be moved into the resolved provider, not copied."
	);
}

#[test]
fn scope_lists_survive_resolution_exactly() {
	let input: ProviderConfig = serde_json::from_str(
		r#"{
			"client_id": "1234567890",
			"client_secret": "0987654321",
			"scopes": ["write:statuses", "read", "read", "a b"]
		}"#,
	)
	.expect("Mastodon config should deserialize.");
	let resolved = resolve(ProviderKind::Mastodon, input);
	let json = serde_json::to_value(&resolved).expect("Resolved provider should serialize.");

	assert_eq!(
		json.get("scopes"),
		Some(&serde_json::json!(["write:statuses", "read", "read", "a b"]))
	);
}

#[test]
fn credentials_are_never_inspected() {
	let resolved = resolve(ProviderKind::Linkedin, ProviderConfig::new("", ""));

	assert_eq!(resolved.client_id(), "");
	assert_eq!(resolved.client_secret().expose(), "");
}

#[test]
fn concurrent_resolution_needs_no_coordination() {
	let handles = (0..8)
		.map(|i| {
			std::thread::spawn(move || {
				let kind = ProviderKind::ALL[i % ProviderKind::ALL.len()];

				provider::resolve(kind, config()).expect("Concurrent resolution should succeed.")
			})
		})
		.collect::<Vec<_>>();

	for handle in handles {
		let resolved = handle.join().expect("Resolver thread should not panic.");

		assert_eq!(resolved.endpoint().authorization().scheme(), "https");
	}
}
