use std::io::Write;

use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};
use shared::{DonationPoint, RouteReport};

use crate::catalog::DonationCatalog;
use crate::error::EstimateError;
use crate::geo::to_geo_point;

const CREATOR: &str = "donation-route-estimator";

/// Writes the route as GPX 1.1: one named waypoint per stop and a single
/// track segment in visit order.
pub fn write_route_gpx<W: Write>(
    report: &RouteReport,
    catalog: &DonationCatalog,
    writer: W,
) -> Result<(), EstimateError> {
    let stops = catalog.resolve(report.stop_ids.as_slice())?;

    let mut gpx = Gpx {
        version: GpxVersion::Gpx11,
        creator: Some(CREATOR.into()),
        ..Default::default()
    };
    gpx.waypoints.extend(stops.iter().map(|stop| to_named_waypoint(stop)));

    let mut track = Track {
        name: Some(track_name(&stops)),
        description: Some(format!(
            "{}, {}",
            report.distance_label, report.duration_label
        )),
        ..Default::default()
    };
    let mut segment = TrackSegment::new();
    segment
        .points
        .extend(report.path.iter().map(|p| Waypoint::new(to_geo_point(*p))));
    track.segments.push(segment);
    gpx.tracks.push(track);

    gpx::write(&gpx, writer)?;
    Ok(())
}

fn to_named_waypoint(stop: &DonationPoint) -> Waypoint {
    let mut waypoint = Waypoint::new(to_geo_point(stop.location));
    waypoint.name = Some(stop.name.clone());
    waypoint.description = Some(stop.address.clone());
    waypoint
}

fn track_name(stops: &[&DonationPoint]) -> String {
    match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => format!("{} → {}", first.name, last.name),
        _ => CREATOR.to_string(),
    }
}
