//! Failure artifacts.
//!
//! On a failed test the fixture captures a viewport screenshot named after
//! the test. Capture is best-effort: a capture or write failure is logged
//! and swallowed so a secondary failure never masks the one that failed the
//! test. Only capture/IO failures are swallowed here; nothing else passes
//! through this module.

use std::path::Path;

use tracing::{info, warn};

use crate::driver::Driver;

/// Captures the current viewport to `{dir}/{test_name}.png`.
pub async fn capture_failure(driver: &dyn Driver, dir: &Path, test_name: &str) {
    let bytes = match driver.screenshot().await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(test = test_name, %err, "failed to capture failure screenshot");
            return;
        }
    };
    // Backends without a viewport (e.g. the mock driver) return an empty
    // buffer; there is nothing to save.
    if bytes.is_empty() {
        return;
    }

    if let Err(err) = tokio::fs::create_dir_all(dir).await {
        warn!(test = test_name, dir = %dir.display(), %err, "failed to create screenshot directory");
        return;
    }
    let path = dir.join(format!("{test_name}.png"));
    match tokio::fs::write(&path, &bytes).await {
        Ok(()) => info!(path = %path.display(), "saved failure screenshot"),
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to write failure screenshot")
        }
    }
}
