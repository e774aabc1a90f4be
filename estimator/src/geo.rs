use geo_types::Point;
use shared::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6_371.0;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("coordinate ({lat}, {lon}) is not finite")]
    NonFinite { lat: f64, lon: f64 },
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Rejects NaN, infinities and out-of-range degrees.
pub fn validate_point(point: GeoPoint) -> Result<GeoPoint, CoordinateError> {
    let GeoPoint { lat, lon } = point;
    if !lat.is_finite() || !lon.is_finite() {
        return Err(CoordinateError::NonFinite { lat, lon });
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(CoordinateError::LatitudeOutOfRange(lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(CoordinateError::LongitudeOutOfRange(lon));
    }
    Ok(point)
}

pub fn validate_all(points: &[GeoPoint]) -> Result<(), CoordinateError> {
    points.iter().try_for_each(|p| validate_point(*p).map(|_| ()))
}

/// Haversine distance in kilometres. Inputs are assumed validated.
pub fn great_circle_distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();

    // Clamped so rounding near antipodes cannot push `1 - h` below zero.
    let h = (sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon).clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Sum of consecutive legs in the given order, in metres. Zero for fewer
/// than two points.
pub fn route_distance_meters(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|w| great_circle_distance_km(w[0], w[1]))
        .sum::<f64>()
        * 1000.0
}

pub fn to_geo_point(point: GeoPoint) -> Point<f64> {
    Point::new(point.lon, point.lat)
}
