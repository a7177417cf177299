use std::panic;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use zone_warden::{
    Cli, FixedLocation, GeoJsonFileSource, LogObserver, Point, RulesConfig, SystemClock,
    WardenEngine,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    // The log IS the UI here, so our own crate stays at Info even in release.
    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, log::LevelFilter::Warn)
        .filter(Some("zone_warden"), log::LevelFilter::Info)
        .init();

    let args = Cli::parse();

    let rules = match &args.rules {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading rules file {}", path.display()))?;
            serde_json::from_str::<RulesConfig>(&raw)
                .with_context(|| format!("decoding rules file {}", path.display()))?
        }
        None => RulesConfig::default(),
    };

    let source = Arc::new(GeoJsonFileSource::load(&args.zones)?);
    let position = Point::new(args.lon, args.lat);

    let mut engine = WardenEngine::new(
        &rules,
        source,
        Arc::new(FixedLocation(position)),
        Arc::new(SystemClock),
        Box::new(LogObserver),
    );

    // Immediate first answer for the watched spot, then the monitor loop
    // keeps the status current.
    engine.tick_clock();
    log::info!(
        "Tracking {} zone categories, {} active",
        engine.registry().known_categories().len(),
        engine.registry().active_count()
    );
    if let Some(zone) = engine.resolve_at(position).await? {
        log::info!(
            "Monitoring inside zone: {} ({})",
            zone.name().unwrap_or("<unnamed>"),
            zone.category
        );
    }
    engine.run_check_once().await;

    engine.run().await;
    Ok(())
}
