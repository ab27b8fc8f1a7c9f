use qibla_types::CompassDirection;

/// Width of one compass sector in degrees.
pub const SECTOR_DEGREES: f64 = 45.0;

/// Index into the eight-point rose: `round(bearing / 45) mod 8`.
///
/// `f64::round` rounds half away from zero, so a bearing exactly on a sector
/// boundary (22.5, 67.5, ...) moves to the clockwise neighbour, and 337.5
/// wraps to North. Bearings outside [0, 360) are folded first; NaN yields 0.
pub fn sector_index(bearing_degrees: f64) -> usize {
    if !bearing_degrees.is_finite() {
        return 0;
    }
    let folded = bearing_degrees.rem_euclid(360.0);
    (folded / SECTOR_DEGREES).round() as usize % 8
}

/// Maps a bearing to one of the eight principal compass points.
pub fn compass_label(bearing_degrees: f64) -> CompassDirection {
    CompassDirection::from_index(sector_index(bearing_degrees))
}
