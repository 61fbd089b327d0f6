//! Guard-level error types shared across configuration, codec, and strategies.

// self
use crate::_prelude::*;

/// Guard-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical guard error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Submitted token was rejected.
	#[error(transparent)]
	Validation(#[from] ValidationError),
}

/// Configuration failures raised while building or checking a guard.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Guard options could not be parsed.
	#[error("Guard options could not be parsed.")]
	Parse {
		/// Structured parsing failure, including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::error::Error>,
	},
	/// Secret key is empty, which makes every token trivially forgeable.
	#[error("Secret key must not be empty.")]
	EmptyKey,
	/// Form field name is empty.
	#[error("Field name must not be empty.")]
	EmptyFieldName,
	/// Hash algorithm identifier is not recognized.
	#[error("Hash algorithm `{name}` is not supported.")]
	UnsupportedHashAlgorithm {
		/// Identifier that failed to parse.
		name: String,
	},
}

/// Reasons a token string fails the syntax stage of validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum TokenSyntaxError {
	/// The token is not valid Base64.
	#[error("token is not valid Base64")]
	Encoding,
	/// The decoded payload does not hold exactly one `:` separator.
	#[error("expected 2 colon-separated parts, found {parts}")]
	PartCount {
		/// Number of parts found after splitting.
		parts: usize,
	},
	/// The issue timestamp is not an integer.
	#[error("issue timestamp is not an integer")]
	Timestamp,
}

/// Validation failures surfaced by token validators.
///
/// These are expected outcomes of untrusted input and never fatal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ValidationError {
	/// Token could not be decoded or split into its parts.
	#[error("Invalid token syntax: {reason}.")]
	MalformedToken {
		/// Syntax stage that failed.
		reason: TokenSyntaxError,
	},
	/// Token is older than the configured timeout.
	#[error("Token died of old age: issued at {issued_at}, valid for {timeout_seconds} seconds, checked at {now}.")]
	Expired {
		/// Unix timestamp embedded in the token.
		issued_at: i64,
		/// Timeout in effect during validation.
		timeout_seconds: u64,
		/// Unix timestamp used as "now" during validation.
		now: i64,
	},
	/// Recomputed hash does not match the submitted one.
	#[error("Token hash does not match; somebody tinkered with or forged it.")]
	TamperedOrForged,
	/// Submitted form data does not carry the token field.
	#[error("Submission is missing the `{field}` field.")]
	MissingField {
		/// Field name that was looked up.
		field: String,
	},
	/// Failure reported by a custom validator.
	#[error("Token rejected: {reason}.")]
	Rejected {
		/// Validator-supplied reason string.
		reason: String,
	},
}
impl ValidationError {
	/// Returns a stable label suitable for log or metric fields.
	pub const fn kind(&self) -> &'static str {
		match self {
			Self::MalformedToken { .. } => "malformed_token",
			Self::Expired { .. } => "expired",
			Self::TamperedOrForged => "tampered_or_forged",
			Self::MissingField { .. } => "missing_field",
			Self::Rejected { .. } => "rejected",
		}
	}

	/// Convenience constructor for custom validators.
	pub fn rejected(reason: impl Into<String>) -> Self {
		Self::Rejected { reason: reason.into() }
	}
}
impl From<TokenSyntaxError> for ValidationError {
	fn from(reason: TokenSyntaxError) -> Self {
		Self::MalformedToken { reason }
	}
}
