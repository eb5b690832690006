//! Console logging
//!
//! In the browser messages go to `console.log` / `console.warn`.
//! Off-wasm (native tests, tooling) they go to stderr, so no JS import is
//! ever called outside a JS host.
//!
//! Usage:
//! ```rust
//! use floatfield_engine::{log_info, log_warn};
//!
//! let bodies = 13;
//! log_info!("spawned {} bodies", bodies);
//! log_warn!("asset missing, staying empty");
//! ```

#[cfg(target_arch = "wasm32")]
pub fn info(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(msg: &str) {
    eprintln!("[floatfield] {msg}");
}

#[cfg(target_arch = "wasm32")]
pub fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(msg: &str) {
    eprintln!("[floatfield] warning: {msg}");
}

/// Informational message (init banner, asset load, teardown)
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        $crate::core::log::info(&format!($($arg)*));
    }};
}

/// Tolerated failure that the scene recovers from on its own
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        $crate::core::log::warn(&format!($($arg)*));
    }};
}
