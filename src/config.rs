//! Guard configuration snapshot and the optional-field options surface.
//!
//! [`GuardConfig`] is the read-only view handed to token strategies. [`GuardOptions`] mirrors
//! the recognized configuration keys with every field optional, so callers (or a JSON file)
//! can override just what they need; absent fields leave the current value untouched.

// self
use crate::{_prelude::*, digest::HashAlgorithm, error::ConfigError, key::GuardKey};

/// Configuration read by token generators and validators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
	/// Secret key the token digest is derived from.
	pub key: GuardKey,
	/// Extra binding data (e.g. a user id) mixed into the digest.
	pub userdata: String,
	/// Maximum token age in seconds.
	pub timeout_seconds: u64,
	/// Form field carrying the token.
	pub field_name: String,
	/// Hash function applied to the token material.
	pub hash_algorithm: HashAlgorithm,
	/// Fixed "current time" in Unix seconds; `None` reads the wall clock on every call.
	pub now: Option<i64>,
}
impl GuardConfig {
	/// Default maximum token age.
	pub const DEFAULT_TIMEOUT_SECONDS: u64 = 900;
	/// Default form field name.
	pub const DEFAULT_FIELD_NAME: &'static str = "__xsrf_guard";

	/// Creates a default configuration using the provided key.
	pub fn new(key: impl Into<GuardKey>) -> Self {
		Self { key: key.into(), ..Default::default() }
	}

	/// Returns the override timestamp, or the current Unix time when none is set.
	pub fn now(&self) -> i64 {
		self.now.unwrap_or_else(unix_now)
	}

	/// Applies every field that is set on `options`, leaving the rest untouched.
	pub fn apply(&mut self, options: GuardOptions) {
		let GuardOptions { key, userdata, timeout_seconds, field_name, hash_algorithm, now } =
			options;

		if let Some(key) = key {
			self.key = key;
		}
		if let Some(userdata) = userdata {
			self.userdata = userdata;
		}
		if let Some(timeout_seconds) = timeout_seconds {
			self.timeout_seconds = timeout_seconds;
		}
		if let Some(field_name) = field_name {
			self.field_name = field_name;
		}
		if let Some(hash_algorithm) = hash_algorithm {
			self.hash_algorithm = hash_algorithm;
		}
		if let Some(now) = now {
			self.now = Some(now);
		}
	}

	/// Startup check rejecting configurations that cannot protect anything.
	pub fn check(&self) -> Result<(), ConfigError> {
		if self.key.is_empty() {
			return Err(ConfigError::EmptyKey);
		}
		if self.field_name.is_empty() {
			return Err(ConfigError::EmptyFieldName);
		}

		Ok(())
	}
}
impl Default for GuardConfig {
	fn default() -> Self {
		Self {
			key: GuardKey::default(),
			userdata: String::new(),
			timeout_seconds: Self::DEFAULT_TIMEOUT_SECONDS,
			field_name: Self::DEFAULT_FIELD_NAME.to_owned(),
			hash_algorithm: HashAlgorithm::default(),
			now: None,
		}
	}
}

/// Recognized guard options; `None` means "keep the current value".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuardOptions {
	/// Secret key.
	pub key: Option<GuardKey>,
	/// Extra binding data.
	pub userdata: Option<String>,
	/// Maximum token age in seconds.
	pub timeout_seconds: Option<u64>,
	/// Form field name.
	pub field_name: Option<String>,
	/// Hash algorithm identifier such as `sha256`.
	pub hash_algorithm: Option<HashAlgorithm>,
	/// Fixed Unix timestamp for deterministic runs.
	pub now: Option<i64>,
}
impl GuardOptions {
	/// Parses options from JSON, reporting the failing path on error.
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_str(json);

		serde_path_to_error::deserialize(&mut de).map_err(|source| ConfigError::Parse { source })
	}

	/// Sets the secret key.
	pub fn key(mut self, key: impl Into<GuardKey>) -> Self {
		self.key = Some(key.into());

		self
	}

	/// Sets the binding userdata.
	pub fn userdata(mut self, userdata: impl Into<String>) -> Self {
		self.userdata = Some(userdata.into());

		self
	}

	/// Sets the timeout in seconds.
	pub fn timeout_seconds(mut self, timeout_seconds: u64) -> Self {
		self.timeout_seconds = Some(timeout_seconds);

		self
	}

	/// Sets the form field name.
	pub fn field_name(mut self, field_name: impl Into<String>) -> Self {
		self.field_name = Some(field_name.into());

		self
	}

	/// Sets the hash algorithm.
	pub fn hash_algorithm(mut self, hash_algorithm: HashAlgorithm) -> Self {
		self.hash_algorithm = Some(hash_algorithm);

		self
	}

	/// Pins the current time.
	pub fn now(mut self, now: i64) -> Self {
		self.now = Some(now);

		self
	}
}
impl From<GuardOptions> for GuardConfig {
	fn from(options: GuardOptions) -> Self {
		let mut config = Self::default();

		config.apply(options);

		config
	}
}

fn unix_now() -> i64 {
	OffsetDateTime::now_utc().unix_timestamp()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_follow_documented_values() {
		let config = GuardConfig::default();

		assert!(config.key.is_empty());
		assert_eq!(config.userdata, "");
		assert_eq!(config.timeout_seconds, 900);
		assert_eq!(config.field_name, "__xsrf_guard");
		assert_eq!(config.hash_algorithm, HashAlgorithm::Sha256);
		assert_eq!(config.now, None);
	}

	#[test]
	fn apply_skips_unset_fields_and_accepts_zero() {
		let mut config = GuardConfig::new("topsecret");

		config.apply(GuardOptions::default().timeout_seconds(0).userdata(""));

		assert_eq!(config.key.expose(), "topsecret");
		assert_eq!(config.timeout_seconds, 0);
		assert_eq!(config.userdata, "");
		assert_eq!(config.field_name, GuardConfig::DEFAULT_FIELD_NAME);
	}

	#[test]
	fn debug_output_keeps_key_redacted() {
		let rendered = format!("{:?}", GuardConfig::new("topsecret"));

		assert!(!rendered.contains("topsecret"));
		assert!(rendered.contains("GuardKey(\"<redacted>\")"));
	}

	#[test]
	fn now_prefers_override() {
		let mut config = GuardConfig::default();

		assert!(config.now() > 1_600_000_000, "Wall clock should be used without an override.");

		config.now = Some(1000);

		assert_eq!(config.now(), 1000);
	}

	#[test]
	fn check_rejects_empty_key_and_field() {
		assert!(matches!(GuardConfig::default().check(), Err(ConfigError::EmptyKey)));

		let mut config = GuardConfig::new("topsecret");

		config.check().expect("Keyed default configuration should pass the check.");
		config.field_name.clear();

		assert!(matches!(config.check(), Err(ConfigError::EmptyFieldName)));
	}

	#[test]
	fn json_options_report_failing_path() {
		let options = GuardOptions::from_json_str(
			r#"{"key":"topsecret","timeout_seconds":3,"hash_algorithm":"sha512"}"#,
		)
		.expect("Valid options should parse.");

		assert_eq!(options.timeout_seconds, Some(3));
		assert_eq!(options.hash_algorithm, Some(HashAlgorithm::Sha512));
		assert_eq!(options.field_name, None);

		let Err(ConfigError::Parse { source }) =
			GuardOptions::from_json_str(r#"{"hash_algorithm":"md5"}"#)
		else {
			panic!("Unsupported algorithm should fail to parse.");
		};

		assert_eq!(source.path().to_string(), "hash_algorithm");
		assert!(GuardOptions::from_json_str(r#"{"colour":"blue"}"#).is_err());
	}
}
