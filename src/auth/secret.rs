//! Client secret wrapper that redacts sensitive material.

// self
use crate::_prelude::*;

/// OAuth client secret kept out of logs and debug output.
///
/// Resolution never inspects the value. The shared engine decides whether it is usable.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientSecret(String);
impl ClientSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for ClientSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl From<&str> for ClientSecret {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl From<String> for ClientSecret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl Debug for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ClientSecret").field(&"<redacted>").finish()
	}
}
impl Display for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
