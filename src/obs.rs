//! Optional observability helpers for guard operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `xsrf_guard.operation` with the `operation` and
//!   `field` fields, plus a debug event for every rejected token.
//! - Enable `metrics` to increment the `xsrf_guard_operation_total` counter for every
//!   generated or checked token, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, error::ValidationError};

/// Guard operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuardOperation {
	/// Token generation (including field rendering).
	Generate,
	/// Token validation.
	Validate,
}
impl GuardOperation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			GuardOperation::Generate => "generate",
			GuardOperation::Validate => "validate",
		}
	}
}
impl Display for GuardOperation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuardOutcome {
	/// Operation completed; for validation, the token was accepted.
	Success,
	/// Token was rejected for the given reason label.
	Rejected(&'static str),
}
impl GuardOutcome {
	/// Maps a validation result onto an outcome label.
	pub fn of(result: &Result<(), ValidationError>) -> Self {
		match result {
			Ok(()) => GuardOutcome::Success,
			Err(e) => GuardOutcome::Rejected(e.kind()),
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			GuardOutcome::Success => "success",
			GuardOutcome::Rejected(kind) => kind,
		}
	}
}
impl Display for GuardOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn outcome_labels_follow_error_kind() {
		assert_eq!(GuardOutcome::of(&Ok(())).as_str(), "success");
		assert_eq!(
			GuardOutcome::of(&Err(ValidationError::TamperedOrForged)).to_string(),
			"tampered_or_forged"
		);
		assert_eq!(GuardOperation::Validate.to_string(), "validate");
	}
}
