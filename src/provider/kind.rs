// self
use crate::{_prelude::*, provider::catalog::ProviderTemplate};

/// Error returned when a provider type label is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unsupported provider type `{label}`.")]
pub struct UnknownProviderKind {
	/// Label that failed to parse.
	pub label: String,
}

/// Identity providers with a built-in adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
	/// GitLab.com or a self-hosted GitLab instance.
	Gitlab,
	/// LinkedIn (single global host).
	Linkedin,
	/// Any Mastodon instance, `mastodon.social` by default.
	Mastodon,
}
impl ProviderKind {
	/// Every supported provider, in catalog order.
	pub const ALL: [ProviderKind; 3] =
		[ProviderKind::Gitlab, ProviderKind::Linkedin, ProviderKind::Mastodon];

	/// Returns the fixed `type` literal emitted in resolved providers.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProviderKind::Gitlab => "gitlab",
			ProviderKind::Linkedin => "linkedin",
			ProviderKind::Mastodon => "mastodon",
		}
	}

	/// Returns the catalog entry for this provider.
	pub fn template(self) -> &'static ProviderTemplate {
		crate::provider::catalog::template(self)
	}

	/// Returns true when the provider accepts an `instance` hostname.
	pub fn is_self_hostable(self) -> bool {
		self.template().host.is_self_hosted()
	}
}
impl Display for ProviderKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ProviderKind {
	type Err = UnknownProviderKind;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str() == s)
			.ok_or_else(|| UnknownProviderKind { label: s.to_owned() })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn labels_round_trip() {
		for kind in ProviderKind::ALL {
			assert_eq!(kind.as_str().parse::<ProviderKind>(), Ok(kind));
			assert_eq!(kind.to_string(), kind.as_str());
		}

		let err = "GitLab".parse::<ProviderKind>().expect_err("Labels are case-sensitive.");

		assert_eq!(err.label, "GitLab");
	}

	#[test]
	fn serde_uses_lowercase_labels() {
		assert_eq!(
			serde_json::to_string(&ProviderKind::Linkedin)
				.expect("Provider kind should serialize."),
			"\"linkedin\""
		);
		assert!(serde_json::from_str::<ProviderKind>("\"github\"").is_err());
	}

	#[test]
	fn only_gitlab_and_mastodon_are_self_hostable() {
		assert!(ProviderKind::Gitlab.is_self_hostable());
		assert!(ProviderKind::Mastodon.is_self_hostable());
		assert!(!ProviderKind::Linkedin.is_self_hostable());
	}
}
