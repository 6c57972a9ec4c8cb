mod config;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use picodiag_core::{DiagnosticSources, MemoryStats, NetworkLink};
use picodiag_providers::{
    http_agent, AstrosApi, BootCounter, CountingAllocator, HeapMonitor, HostLink, JokeApi,
    SntpClock, StatusLed, ThermalZone, WorldTimeApi,
};
use picodiag_server::{default_router, AppContext, HttpServer};

use config::Config;

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;

    if config.wait_for_operator {
        tracing::info!("press enter to start");
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
    }

    let boot_count = BootCounter::new(&config.boot_count_path)
        .increment()
        .context("boot counter")?;
    tracing::info!("boot count: {}", boot_count);

    let heap = HeapMonitor::new(config.heap_capacity_bytes);
    let snapshot = heap.snapshot().context("heap stats")?;
    tracing::info!(
        "allocated: {} B, free mem: {} B",
        snapshot.allocated_bytes,
        snapshot.free_bytes
    );

    // Startup aborts here if there is no usable link; association
    // failures on a board port surface the same way.
    let link = HostLink::detect(config.rssi_dbm)?;
    let report = link.link().context("wifi status")?;
    tracing::info!("wifi status: {}", report);

    let fetch_timeout = Duration::from_millis(config.fetch_timeout_ms);
    let agent = http_agent(fetch_timeout);

    let sources = DiagnosticSources {
        network: Box::new(link),
        temperature: Box::new(ThermalZone::new(&config.thermal_zone)),
        memory: Box::new(heap),
        utc_clock: Box::new(SntpClock::new(&config.ntp_server, fetch_timeout)),
        geo_clock: Box::new(WorldTimeApi::new(agent.clone(), &config.worldtime_url)),
        jokes: Box::new(JokeApi::new(agent.clone(), &config.joke_url)),
        roster: Box::new(AstrosApi::new(agent, &config.astros_url)),
    };
    let ctx = AppContext::new(sources, Box::new(StatusLed::new()));

    let server = HttpServer::bind(config.bind, default_router(), ctx)?;
    tracing::info!("webserver open at {} on port {}", report.ip, config.bind.port());

    server.run()
}
