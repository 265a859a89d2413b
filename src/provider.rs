//! Provider adapters (behavior) and the descriptors they produce (data).
//!
//! `catalog` holds the static endpoint templates for every supported provider. `resolver`
//! combines a [`ProviderKind`] with a caller's [`ProviderConfig`] into a [`ResolvedProvider`],
//! the immutable value handed to the shared OAuth 2.0 engine. `descriptor` defines that value
//! and its [`EndpointDescriptor`].

pub mod catalog;
pub mod descriptor;
/// Supported provider types.
pub mod kind;
/// Caller-facing adapter configuration.
pub mod options;
pub mod resolver;

pub use catalog::*;
pub use descriptor::*;
pub use kind::*;
pub use options::*;
pub use resolver::*;
