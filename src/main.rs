use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use al1905d::{MacAddr, SystemClock, new_shared_store};

/// Minimal driver for the 1905.1 Abstraction Layer data model: seeds local
/// identity from the command line and runs the garbage collector on a
/// fixed cadence. Discovery, message handling, and wire I/O are external
/// collaborators not implemented by this binary.
#[derive(Parser, Debug)]
#[command(name = "al1905d", about = "IEEE 1905.1/1a AL topology store")]
struct Cli {
    /// This AL entity's own MAC address.
    #[arg(long)]
    al_mac: String,

    /// MAC address of the registrar entity (defaults to the AL MAC).
    #[arg(long)]
    registrar_mac: Option<String>,

    /// Map the whole network rather than only direct neighbors.
    #[arg(long)]
    map_whole_network: bool,

    /// Local interfaces to seed at startup, as `name=mac` pairs
    /// (e.g. `eth0=02:00:00:00:00:01`). May be repeated.
    #[arg(long = "interface", value_parser = parse_interface)]
    interfaces: Vec<(String, MacAddr)>,
}

fn parse_interface(s: &str) -> Result<(String, MacAddr), String> {
    let (name, mac) = s.split_once('=').ok_or_else(|| format!("expected name=mac, got {s:?}"))?;
    let mac = mac.parse::<MacAddr>().map_err(|e| e.to_string())?;
    Ok((name.to_string(), mac))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "al1905d=info".parse().unwrap()),
        )
        .init();

    if let Err(e) = run().await {
        error!("fatal: {e}");
        std::process::exit(1);
    }
}

async fn run() -> al1905d::Result<()> {
    let cli = Cli::parse();

    let al_mac =
        cli.al_mac.parse::<MacAddr>().map_err(|e| al1905d::Error::InvalidMac(cli.al_mac.clone(), e))?;
    let registrar_mac = match &cli.registrar_mac {
        Some(s) => s.parse::<MacAddr>().map_err(|e| al1905d::Error::InvalidMac(s.clone(), e))?,
        None => al_mac,
    };

    info!(%al_mac, %registrar_mac, map_whole_network = cli.map_whole_network, "starting al1905d");

    let shared = new_shared_store(Arc::new(SystemClock::new()));
    {
        let mut store = shared.write().await;
        store.al_mac_set(al_mac);
        store.registrar_mac_set(registrar_mac);
        store.map_whole_network_set(cli.map_whole_network);
        for (name, mac) in &cli.interfaces {
            store.insert_interface(name, *mac);
            info!(name, %mac, "seeded local interface");
        }
    }

    run_gc_loop(shared).await;
    Ok(())
}

/// Periodically run the garbage collector until interrupted. The period is
/// a third of `GC_MAX_AGE_MS`, comfortably satisfying the contract that the
/// GC be called at a rate greater than `1/GC_MAX_AGE` (spec.md §4.5).
async fn run_gc_loop(shared: al1905d::SharedStore) {
    let period = std::time::Duration::from_millis(al1905d::constants::GC_MAX_AGE_MS / 3);
    let mut ticker = tokio::time::interval(period);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let evicted = shared.write().await.run_garbage_collector();
                if evicted > 0 {
                    info!(evicted, "garbage collector evicted stale devices");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("received SIGINT, shutting down");
                break;
            }
        }
    }
}
