// self
use crate::{
	_prelude::*,
	provider::{ProviderKind, ResolveError, ResolvedProvider},
};

/// A span builder used around provider resolution.
#[derive(Clone, Debug)]
pub struct ResolveSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ResolveSpan {
	/// Creates a new span tagged with the provider + stage.
	pub fn new(kind: ProviderKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::debug_span!("oauth2_adapters.resolve", provider = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Enters the span for the duration of the returned guard.
	pub fn entered(self) -> ResolveSpanGuard {
		#[cfg(feature = "tracing")]
		{
			ResolveSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			ResolveSpanGuard {}
		}
	}
}

/// RAII guard returned by [`ResolveSpan::entered`].
pub struct ResolveSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for ResolveSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ResolveSpanGuard(..)")
	}
}

/// Emits a debug event describing the resolved endpoints. Credentials are never logged.
pub fn trace_resolved(resolved: &ResolvedProvider) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			provider = resolved.kind().as_str(),
			authorization = %resolved.endpoint().authorization(),
			token = %resolved.endpoint().token(),
			"provider resolved"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = resolved;
	}
}

/// Emits a warning for a configuration the resolver refused.
pub fn trace_rejected(kind: ProviderKind, error: &ResolveError) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(provider = kind.as_str(), %error, "provider rejected");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, error);
	}
}

/// Notes an `instance` supplied to a provider that has no self-hosted variant.
pub fn trace_instance_ignored(kind: ProviderKind, instance: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			provider = kind.as_str(),
			instance,
			"instance ignored for fixed-host provider"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, instance);
	}
}
