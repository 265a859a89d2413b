// self
use crate::{obs::ResolveOutcome, provider::ProviderKind};

/// Records a resolution outcome via the global metrics recorder (when enabled).
pub fn record_resolution(kind: ProviderKind, outcome: ResolveOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_adapters_resolve_total",
			"provider" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_resolution_noop_without_metrics() {
		record_resolution(ProviderKind::Mastodon, ResolveOutcome::Failure);
	}
}
