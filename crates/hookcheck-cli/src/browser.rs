//! System browser launching

use tracing::{debug, warn};

/// Open `url` in the default browser. Failure is only logged.
pub fn open(url: &str) {
    match webbrowser::open(url) {
        Ok(()) => debug!(url = %url, "Opened browser"),
        Err(e) => warn!(url = %url, error = %e, "Failed to open browser"),
    }
}
