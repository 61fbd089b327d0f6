//! Secret key wrapper that redacts sensitive material.

// crates.io
use rand::RngCore;
// self
use crate::_prelude::*;

/// Redacted secret key wrapper keeping the guard key out of logs.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuardKey(String);
impl GuardKey {
	const GENERATED_LEN: usize = 32;

	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Generates a random 256-bit key rendered as lowercase hex.
	///
	/// Keys must stay stable across processes that validate each other's tokens, so this is
	/// meant for provisioning a key once, not for calling per request.
	pub fn generate() -> Self {
		let mut bytes = [0_u8; Self::GENERATED_LEN];

		rand::rng().fill_bytes(&mut bytes);

		Self(hex::encode(bytes))
	}

	/// Returns the inner key value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` when no key material has been set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl AsRef<str> for GuardKey {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl From<&str> for GuardKey {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl From<String> for GuardKey {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl Debug for GuardKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("GuardKey").field(&"<redacted>").finish()
	}
}
impl Display for GuardKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
