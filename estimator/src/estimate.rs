use shared::{DonationPoint, GeoPoint, RouteEstimate, RouteReport};

use crate::{
    catalog::DonationCatalog,
    error::EstimateError,
    format::{format_distance, format_duration},
    geo::{route_distance_meters, validate_all},
    selection::Selection,
    speed::SpeedModel,
};

/// Straight-line route estimates over stops taken in the given order.
///
/// Fewer than two stops is the empty state and yields `Ok(None)`; invalid
/// coordinates are rejected before any distance is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RouteEstimator {
    speed: SpeedModel,
}

impl RouteEstimator {
    pub fn new(speed: SpeedModel) -> Result<Self, EstimateError> {
        speed.validate()?;
        Ok(Self { speed })
    }

    pub fn speed(&self) -> SpeedModel {
        self.speed
    }

    pub fn estimate(&self, points: &[GeoPoint]) -> Result<Option<RouteEstimate>, EstimateError> {
        if let Err(err) = validate_all(points) {
            tracing::warn!("rejecting route with invalid coordinate: {err}");
            return Err(err.into());
        }
        if points.len() < 2 {
            return Ok(None);
        }

        let distance_m = route_distance_meters(points);
        let duration_s = self.speed.duration_seconds(distance_m);
        tracing::debug!(
            stops = points.len(),
            distance_m,
            duration_s,
            speed = %self.speed,
            "route estimated"
        );

        Ok(Some(RouteEstimate {
            distance_m,
            duration_s,
            stops: points.len(),
        }))
    }

    pub fn report(&self, stops: &[&DonationPoint]) -> Result<Option<RouteReport>, EstimateError> {
        let path: Vec<GeoPoint> = stops.iter().map(|p| p.location).collect();
        let Some(estimate) = self.estimate(&path)? else {
            return Ok(None);
        };

        Ok(Some(RouteReport {
            estimate,
            stop_ids: stops.iter().map(|p| p.id.clone()).collect(),
            path,
            distance_label: format_distance(estimate.distance_m),
            duration_label: format_duration(estimate.duration_s),
        }))
    }

    pub fn report_selection(
        &self,
        catalog: &DonationCatalog,
        selection: &Selection,
    ) -> Result<Option<RouteReport>, EstimateError> {
        let stops = catalog.resolve(selection.ids())?;
        self.report(&stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{great_circle_distance_km, CoordinateError};

    const A: GeoPoint = GeoPoint::new(-23.5505, -46.6333);
    const B: GeoPoint = GeoPoint::new(-23.5615, -46.6565);
    const C: GeoPoint = GeoPoint::new(-23.5448, -46.6886);

    #[test]
    fn fewer_than_two_points_is_empty() {
        let estimator = RouteEstimator::default();
        assert_eq!(estimator.estimate(&[]).unwrap(), None);
        assert_eq!(estimator.estimate(&[A]).unwrap(), None);
    }

    #[test]
    fn single_invalid_point_is_still_an_error() {
        let err = RouteEstimator::default()
            .estimate(&[GeoPoint::new(f64::NAN, 0.0)])
            .unwrap_err();
        assert!(matches!(
            err,
            EstimateError::Coordinate(CoordinateError::NonFinite { .. })
        ));
    }

    #[test]
    fn three_stops_sum_consecutive_legs() {
        let estimate = RouteEstimator::default()
            .estimate(&[A, B, C])
            .unwrap()
            .unwrap();
        let expected = (great_circle_distance_km(A, B) + great_circle_distance_km(B, C)) * 1000.0;
        assert!((estimate.distance_m - expected).abs() < 1e-6);
        assert!((estimate.duration_s - expected / 1000.0 * 60.0).abs() < 1e-6);
        assert_eq!(estimate.stops, 3);
    }

    #[test]
    fn speed_model_drives_duration() {
        let fifty = RouteEstimator::new(SpeedModel::AverageSpeed { kmh: 50.0 }).unwrap();
        let estimate = fifty.estimate(&[A, B]).unwrap().unwrap();
        let km = great_circle_distance_km(A, B);
        assert!((estimate.duration_s - km / 50.0 * 3600.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_invalid_speed_model() {
        assert!(matches!(
            RouteEstimator::new(SpeedModel::PacePerKm { minutes: 0.0 }),
            Err(EstimateError::SpeedModel(_))
        ));
    }

    #[test]
    fn out_of_range_point_fails_fast() {
        let err = RouteEstimator::default()
            .estimate(&[A, GeoPoint::new(-23.5, 190.0), C])
            .unwrap_err();
        assert!(matches!(
            err,
            EstimateError::Coordinate(CoordinateError::LongitudeOutOfRange(_))
        ));
    }

    #[test]
    fn report_carries_labels_and_order() {
        let catalog = DonationCatalog::builtin();
        let selection: Selection = ["2", "1"].into_iter().collect();
        let report = RouteEstimator::default()
            .report_selection(catalog, &selection)
            .unwrap()
            .unwrap();

        assert_eq!(report.stop_ids, ["2", "1"]);
        assert_eq!(report.path, [B, A]);
        assert_eq!(report.distance_label, "2.7 km");
        assert_eq!(report.duration_label, "2min");
    }

    #[test]
    fn report_for_short_selection_is_empty() {
        let catalog = DonationCatalog::builtin();
        let selection: Selection = ["4"].into_iter().collect();
        assert!(RouteEstimator::default()
            .report_selection(catalog, &selection)
            .unwrap()
            .is_none());
    }

    #[test]
    fn report_with_unknown_point() {
        let catalog = DonationCatalog::builtin();
        let selection: Selection = ["1", "nope"].into_iter().collect();
        assert!(matches!(
            RouteEstimator::default().report_selection(catalog, &selection),
            Err(EstimateError::Catalog(_))
        ));
    }
}
