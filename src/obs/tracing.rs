// self
use crate::{_prelude::*, error::ValidationError, obs::GuardOperation};

/// A span builder used by guard operations.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Creates a new span tagged with the operation and the configured field name.
	pub fn new(operation: GuardOperation, field: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::debug_span!("xsrf_guard.operation", operation = operation.as_str(), field);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, field);

			Self {}
		}
	}

	/// Enters the span for the duration of the operation.
	pub fn entered(self) -> OperationSpanGuard {
		#[cfg(feature = "tracing")]
		{
			OperationSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			OperationSpanGuard {}
		}
	}
}

/// RAII guard returned by [`OperationSpan::entered`].
pub struct OperationSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for OperationSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("OperationSpanGuard(..)")
	}
}

/// Emits a debug event describing a rejected token. Token and key are never logged.
pub fn log_rejection(error: &ValidationError) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(kind = error.kind(), %error, "token rejected");
	}

	#[cfg(not(feature = "tracing"))]
	{
		let _ = error;
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn operation_span_noop_without_subscriber() {
		let _guard = OperationSpan::new(GuardOperation::Validate, "__xsrf_guard").entered();

		log_rejection(&ValidationError::TamperedOrForged);
	}
}
