//! Token generation and validation strategies.
//!
//! A [`Guard`](crate::guard::Guard) delegates to a [`TokenGenerator`] and a
//! [`TokenValidator`]. Both traits have a single method and are implemented for plain
//! closures, so a custom token format is a one-liner. The built-in pair implements the
//! keyed-hash format described in [`token`](crate::token).

// crates.io
use subtle::ConstantTimeEq;
// self
use crate::{
	_prelude::*,
	config::GuardConfig,
	digest::token_material,
	error::ValidationError,
	token,
};

/// Package-level default generator.
pub const DEFAULT_TOKEN_GENERATOR: DefaultTokenGenerator = DefaultTokenGenerator;
/// Package-level default validator.
pub const DEFAULT_TOKEN_VALIDATOR: DefaultTokenValidator = DefaultTokenValidator;

/// Produces a token string from the current configuration.
pub trait TokenGenerator: Send + Sync {
	/// Generates a token; `config.now()` supplies the issue time.
	fn generate(&self, config: &GuardConfig) -> String;
}
impl<F> TokenGenerator for F
where
	F: Send + Sync + Fn(&GuardConfig) -> String,
{
	fn generate(&self, config: &GuardConfig) -> String {
		self(config)
	}
}

/// Checks a candidate token against the current configuration.
pub trait TokenValidator: Send + Sync {
	/// Returns `Ok(())` when the token is authentic and fresh.
	fn validate(&self, token: &str, config: &GuardConfig) -> Result<(), ValidationError>;
}
impl<F> TokenValidator for F
where
	F: Send + Sync + Fn(&str, &GuardConfig) -> Result<(), ValidationError>,
{
	fn validate(&self, token: &str, config: &GuardConfig) -> Result<(), ValidationError> {
		self(token, config)
	}
}

/// Built-in generator: Base64 of `<hex digest>:<now>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTokenGenerator;
impl Display for DefaultTokenGenerator {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("default-token-generator")
	}
}
impl TokenGenerator for DefaultTokenGenerator {
	fn generate(&self, config: &GuardConfig) -> String {
		let now = config.now();

		token::encode(&expected_digest(config, now), now)
	}
}

/// Built-in validator: syntax, then freshness, then integrity.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTokenValidator;
impl Display for DefaultTokenValidator {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("default-token-validator")
	}
}
impl TokenValidator for DefaultTokenValidator {
	fn validate(&self, token: &str, config: &GuardConfig) -> Result<(), ValidationError> {
		let decoded = token::decode(token)?;
		let now = config.now();
		let timeout = i64::try_from(config.timeout_seconds).unwrap_or(i64::MAX);

		if decoded.issued_at.saturating_add(timeout) < now {
			return Err(ValidationError::Expired {
				issued_at: decoded.issued_at,
				timeout_seconds: config.timeout_seconds,
				now,
			});
		}

		let expected = expected_digest(config, decoded.issued_at);

		if !bool::from(expected.as_bytes().ct_eq(&decoded.digest)) {
			return Err(ValidationError::TamperedOrForged);
		}

		Ok(())
	}
}

fn expected_digest(config: &GuardConfig, timestamp: i64) -> String {
	let material = token_material(config.key.expose(), &config.userdata, timestamp);

	config.hash_algorithm.hex_digest(material.as_bytes())
}
