//! Validate — compile check for a normalized pattern.

use regex::Regex;
use tracing::debug;

/// Attempt to compile `pattern` under the target regex dialect.
///
/// The compilation error never crosses this boundary: the failure detail is
/// logged at debug level and the caller only sees `false`.
pub fn validate_pattern(pattern: &str) -> bool {
    match Regex::new(pattern) {
        Ok(_) => true,
        Err(e) => {
            debug!(pattern, error = %e, "pattern failed to compile");
            false
        }
    }
}
