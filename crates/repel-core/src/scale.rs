/// Visual shrink factor for a pointer `dist` pixels from the control centre.
///
/// Full size at or beyond `radius`, shrinking linearly to `min_scale` as the
/// pointer reaches the centre.
#[inline]
pub fn scale_for_distance(dist: f32, radius: f32, min_scale: f32) -> f32 {
    if dist >= radius {
        return 1.0;
    }
    let t = (dist / radius).clamp(0.0, 1.0);
    min_scale + (1.0 - min_scale) * t
}
