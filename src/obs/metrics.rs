// self
use crate::obs::{GuardOperation, GuardOutcome};

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_operation(operation: GuardOperation, outcome: GuardOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"xsrf_guard_operation_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}
