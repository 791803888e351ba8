// Check command for validating config files under the root

use crate::doctor;

/// Returns the doctor exit code: 0 = healthy, 1 = drift, 2 = failure
pub fn check(json: bool) -> anyhow::Result<i32> {
    doctor::check_health(json)
}
