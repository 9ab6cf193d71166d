//! Browser clock access.

/// Milliseconds since epoch as the browser reports it; `0.0` off-browser
/// (SSR renders never stamp timestamps).
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
