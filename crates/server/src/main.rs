use clap::Parser;
use std::time::{Duration, Instant};
use stringdb_core::config;
use stringdb_core::storage::{load_store, save_store, Store};
use stringdb_server::api::create_router;
use stringdb_server::api::handlers::AppState;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "strings-db", about = "String analysis service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Data directory for snapshot persistence
    #[arg(short, long, default_value = config::DEFAULT_DATA_DIR)]
    data_dir: String,

    /// Snapshot interval in seconds (0 = disabled)
    #[arg(long, default_value_t = config::DEFAULT_SNAPSHOT_INTERVAL_SECS)]
    snapshot_interval: u64,

    /// Graceful shutdown timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_SHUTDOWN_TIMEOUT_SECS)]
    shutdown_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(
                    "stringdb_server=info"
                        .parse()
                        .expect("valid directive literal"),
                )
                .add_directive(
                    "stringdb_core=info"
                        .parse()
                        .expect("valid directive literal"),
                ),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }
    let data_path = std::path::Path::new(&args.data_dir);
    if data_path.exists() && !data_path.is_dir() {
        eprintln!(
            "Error: data_dir '{}' exists but is not a directory",
            args.data_dir
        );
        std::process::exit(1);
    }

    let store = match load_store(&args.data_dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!(
                "Error: could not load snapshot from '{}': {}",
                args.data_dir, e
            );
            std::process::exit(1);
        }
    };

    let state = AppState {
        store: store.clone(),
        data_dir: args.data_dir.clone(),
        start_time: Instant::now(),
    };

    let app = create_router(state);
    let addr = format!("0.0.0.0:{}", args.port);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = args.port,
        data_dir = %args.data_dir,
        snapshot_interval_secs = args.snapshot_interval,
        strings = store.len(),
        "strings.db ready"
    );

    // Spawn auto-snapshot background task
    if args.snapshot_interval > 0 {
        let snap_store = store.clone();
        let snap_data_dir = args.data_dir.clone();
        let snap_interval = args.snapshot_interval;
        tracing::info!("Auto-snapshots enabled every {}s", snap_interval);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(snap_interval));
            interval.tick().await;
            loop {
                interval.tick().await;
                if let Err(e) = save_store(&snap_store, &snap_data_dir) {
                    tracing::error!("Periodic snapshot failed: {}", e);
                }
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_signal())
        .await?;

    flush_and_shutdown(&store, &args.data_dir);

    Ok(())
}

async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }

    tracing::info!("Shutting down gracefully, draining in-flight requests...");
}

fn flush_and_shutdown(store: &Store, data_dir: &str) {
    tracing::info!("All requests drained, flushing data...");
    match save_store(store, data_dir) {
        Ok(()) => tracing::info!("Snapshot saved on shutdown"),
        Err(e) => tracing::error!("Failed to save snapshot on shutdown: {}", e),
    }
}
