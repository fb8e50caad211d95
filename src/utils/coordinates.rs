use crate::utils::constants::{COORDINATE_PRECISION, LONLAT_RESOLUTION};

/// Convert a header nanodegree value to decimal degrees.
///
/// The value is first truncated to the 1e-7 degree grid used for OSM node
/// locations, so header boxes render with the same precision as node
/// coordinates.
///
/// # Examples
/// ```
/// use pbf_bounds::utils::nanodegrees_to_degrees;
///
/// assert_eq!(nanodegrees_to_degrees(10_500_000_000), 10.5);
/// assert_eq!(nanodegrees_to_degrees(-12_345_678_999), -12.3456789);
/// ```
pub fn nanodegrees_to_degrees(nano: i64) -> f64 {
    let fixed = nano / (LONLAT_RESOLUTION / COORDINATE_PRECISION);
    fixed as f64 / COORDINATE_PRECISION as f64
}

/// Recover the nanodegree value behind a header coordinate that was decoded
/// to floating point degrees.
pub fn degrees_to_nanodegrees(degrees: f64) -> i64 {
    (degrees * LONLAT_RESOLUTION as f64).round() as i64
}

/// Render a coordinate in its natural decimal form.
///
/// Uses the shortest representation that round-trips, never exponent
/// notation, and always keeps a decimal point so whole degrees read `10.0`.
pub fn format_coordinate(value: f64) -> String {
    let text = value.to_string();
    if !value.is_finite() || text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Parse a coordinate rendered by [`format_coordinate`].
pub fn parse_coordinate(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
