use std::{io, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use estimator::{
    format::format_distance, geo::validate_point, gpx_export::write_route_gpx, DonationPoint,
    EstimatorConfig, GeoPoint, PointCategory, RouteEstimator, RouteReport, SpeedModel,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Straight-line distance and travel time between donation points"
)]
struct Cli {
    /// Catalog JSON to use instead of the built-in points (env: DONATION_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List donation points
    Points {
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
        /// Print the points as JSON
        #[arg(long)]
        json: bool,
    },
    /// Estimate a route visiting the given point ids in order
    Estimate {
        #[arg(required = true)]
        ids: Vec<String>,
        /// Speed model, e.g. "50km/h" or "1min/km" (env: ROUTE_SPEED_MODEL)
        #[arg(long)]
        speed: Option<SpeedModel>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
    /// Great-circle distance between two coordinates given as LAT,LON
    Distance {
        #[arg(long, value_parser = parse_lat_lon, allow_hyphen_values = true)]
        from: GeoPoint,
        #[arg(long, value_parser = parse_lat_lon, allow_hyphen_values = true)]
        to: GeoPoint,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryArg {
    Collection,
    Distribution,
}

impl From<CategoryArg> for PointCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Collection => PointCategory::Collection,
            CategoryArg::Distribution => PointCategory::Distribution,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Gpx,
}

fn parse_lat_lon(raw: &str) -> Result<GeoPoint, String> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got {raw:?}"))?;
    let lat = lat.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let lon = lon.trim().parse::<f64>().map_err(|e| e.to_string())?;
    validate_point(GeoPoint::new(lat, lon)).map_err(|e| e.to_string())
}

/// `null` is the empty state: fewer than two stops.
fn report_json(report: Option<&RouteReport>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&report)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = EstimatorConfig::from_env()?;
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }

    match cli.command {
        Command::Points { category, json } => {
            let catalog = config.load_catalog()?;
            let points: Vec<&DonationPoint> = match category {
                Some(category) => catalog.by_category(category.into()).collect(),
                None => catalog.points().iter().collect(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&points)?);
            } else {
                for point in points {
                    print_point(point);
                }
            }
        }
        Command::Estimate { ids, speed, output } => {
            if let Some(speed) = speed {
                config.speed = speed;
            }
            let catalog = config.load_catalog()?;
            let estimator = RouteEstimator::new(config.speed)?;
            let stops = catalog.resolve(ids.as_slice())?;
            tracing::info!("estimating {} stop(s) with {}", stops.len(), config.speed);

            let Some(report) = estimator.report(&stops)? else {
                tracing::warn!("select at least two points to estimate a route");
                if output == OutputFormat::Json {
                    println!("{}", report_json(None)?);
                }
                return Ok(());
            };

            match output {
                OutputFormat::Text => {
                    let names: Vec<&str> = stops.iter().map(|p| p.name.as_str()).collect();
                    println!("{}", names.join(" -> "));
                    println!("Distance: {}", report.distance_label);
                    println!("Time:     {}", report.duration_label);
                }
                OutputFormat::Json => println!("{}", report_json(Some(&report))?),
                OutputFormat::Gpx => write_route_gpx(&report, &catalog, io::stdout().lock())?,
            }
        }
        Command::Distance { from, to } => {
            let km = estimator::great_circle_distance_km(from, to);
            println!("{} ({km:.3} km)", format_distance(km * 1000.0));
        }
    }

    Ok(())
}

fn print_point(point: &DonationPoint) {
    let category = match point.category {
        PointCategory::Collection => "collection",
        PointCategory::Distribution => "distribution",
    };
    println!("[{}] {} ({category})", point.id, point.name);
    println!("    {}", point.address);
    println!("    hours: {}", point.hours);
    if let Some(phone) = &point.phone {
        println!("    phone: {phone}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lat_lon_needs_a_comma() {
        let err = parse_lat_lon("-23.5 -46.6").unwrap_err();
        assert!(err.contains("expected LAT,LON"), "{err}");
    }

    #[test]
    fn lat_lon_out_of_range() {
        let err = parse_lat_lon("91,0").unwrap_err();
        assert!(err.contains("latitude 91"), "{err}");
        assert!(parse_lat_lon("0,abc").is_err());
    }

    #[test]
    fn lat_lon_negative_pair() {
        assert_eq!(
            parse_lat_lon("-23.5, -46.6"),
            Ok(GeoPoint::new(-23.5, -46.6))
        );
    }

    #[test]
    fn negative_coordinates_are_not_taken_for_flags() {
        let cli = Cli::try_parse_from([
            "route-estimate",
            "distance",
            "--from",
            "-23.5505,-46.6333",
            "--to",
            "-23.5615,-46.6565",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Distance { from, .. } if from == GeoPoint::new(-23.5505, -46.6333)
        ));
    }

    #[test]
    fn empty_estimate_renders_null_json() {
        assert_eq!(report_json(None).unwrap(), "null");

        let stops = estimator::DonationCatalog::builtin()
            .resolve(&["1", "2"])
            .unwrap();
        let report = RouteEstimator::default().report(&stops).unwrap().unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&report_json(Some(&report)).unwrap()).unwrap();
        assert_eq!(json["stop_ids"], serde_json::json!(["1", "2"]));
    }
}
