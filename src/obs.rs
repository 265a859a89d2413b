//! Optional observability helpers for provider resolution.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth2_adapters.resolve` with the
//!   `provider` and `stage` fields, plus debug events for resolved and rejected providers.
//! - Enable `metrics` to increment the `oauth2_adapters_resolve_total` counter for every
//!   success/failure, labeled by `provider` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolveOutcome {
	/// Provider resolved into a descriptor.
	Success,
	/// Resolution rejected the configuration.
	Failure,
}
impl ResolveOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResolveOutcome::Success => "success",
			ResolveOutcome::Failure => "failure",
		}
	}
}
impl Display for ResolveOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
