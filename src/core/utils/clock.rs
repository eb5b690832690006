/// Wall-clock milliseconds since the Unix epoch.
///
/// The breathing clock is derived from this value, matching `Date.now()` on
/// the JS side so every scene on a page breathes in phase.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}
