//! Panic payload helpers.
//!
//! Panics are how a test body raises an exception. The harness needs to read
//! their payloads and keep the default hook from printing them to stderr
//! while a run is in progress.

use std::any::Any;
use std::sync::Once;

static QUIET_HOOK: Once = Once::new();

/// Extracts the message of a `panic!("..")`-style payload.
pub fn payload_message(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        Some((*message).to_string())
    } else {
        payload.downcast_ref::<String>().cloned()
    }
}

/// Replaces the default panic hook with one that writes to the debug log.
///
/// Contained panics are reported by the harness itself, so the default
/// `thread 'main' panicked at ..` line would only duplicate them.
/// Safe to call multiple times.
pub fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let message = payload_message(info.payload()).unwrap_or_else(|| "UNKNOWN".to_string());
            match info.location() {
                Some(location) => tracing::debug!(
                    file = location.file(),
                    line = location.line(),
                    "panic contained: {message}"
                ),
                None => tracing::debug!("panic contained: {message}"),
            }
        }));
    });
}
