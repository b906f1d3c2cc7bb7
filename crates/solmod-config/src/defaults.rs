use solmod_engine::{DEFAULT_TARGET_VERSION, OperatorSpacing};

use crate::logging::LogFormat;

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}

/// Owned target version constraint used where allocation is required.
#[must_use]
pub fn default_target_version_string() -> String {
    DEFAULT_TARGET_VERSION.to_owned()
}

/// Default layout of operators replacing SafeMath calls.
#[must_use]
pub const fn default_operator_spacing() -> OperatorSpacing {
    OperatorSpacing::Compact
}
