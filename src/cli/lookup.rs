//! Lookup command handler
//!
//! Acts as a minimal host: arms one click-to-address interaction with the
//! given point and prints the delivered outcome.

use crate::config::Config;
use crate::coord::reproject::{ReferenceSystem, Reprojector};
use crate::coord::MapPoint;
use crate::error::Result;
use crate::geocode::http::HttpTransport;
use crate::geocode::nominatim::ReverseGeocodeClient;
use crate::geocode::AddressLookupResult;
use crate::interaction::{ClickToAddressController, PresentationSink, TracingErrorLog};
use clap::Args;
use tracing_subscriber::EnvFilter;

/// Lookup command arguments
#[derive(Args)]
pub struct LookupArgs {
    /// X coordinate (easting or longitude) in the source reference system
    #[arg(allow_negative_numbers = true)]
    pub x: f64,

    /// Y coordinate (northing or latitude) in the source reference system
    #[arg(allow_negative_numbers = true)]
    pub y: f64,

    /// EPSG code of the source reference system
    #[arg(long, short = 'e')]
    pub epsg: Option<u16>,

    /// Reverse-geocoding endpoint override
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Print the full outcome as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the lookup command
pub async fn run(args: LookupArgs) -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;

    let epsg = args.epsg.unwrap_or(config.defaults.source_epsg);
    let endpoint = args.endpoint.unwrap_or(config.service.endpoint);

    let source = ReferenceSystem::from_epsg(epsg)?;
    let reprojector = Reprojector::to_wgs84(source)?;
    let transport = HttpTransport::with_user_agent(&config.service.user_agent);
    let client = ReverseGeocodeClient::with_endpoint(transport, endpoint);

    let sink = StdoutSink { json: args.json };
    let mut controller =
        ClickToAddressController::new(reprojector, client, sink, TracingErrorLog);
    controller.handle_click(MapPoint::new(args.x, args.y)).await;

    Ok(())
}

/// Presentation sink that prints the outcome to stdout
struct StdoutSink {
    json: bool,
}

impl PresentationSink for StdoutSink {
    fn present(&self, outcome: &AddressLookupResult) {
        if self.json {
            match serde_json::to_string_pretty(outcome) {
                Ok(body) => println!("{}", body),
                Err(e) => eprintln!("Error: {}", e),
            }
        } else {
            println!("{}", outcome.user_message());
        }
    }
}
