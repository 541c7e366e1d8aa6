// Inline-style formatting for the mounted button. Free of web-sys so the
// helpers can be exercised host-side.

/// Base class followed by the caller's extra classes, if any.
pub fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

#[inline]
pub fn px(v: f32) -> String {
    if v.is_finite() {
        format!("{:.2}px", v)
    } else {
        "0px".to_string()
    }
}

#[inline]
pub fn scale_transform(scale: f32) -> String {
    format!("scale({:.4})", scale.clamp(0.0, 1.0))
}
