use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::bind_listener(addr)?;
    let state = Arc::new(config::AppState::new(cfg)?);

    let signals = server::SignalHandler::new();
    server::start_signal_handler(&signals);

    logger::log_server_start(&addr, &state.config, &state.root);
    logger::log_available_pages(&state.root, &addr);

    let active_connections = Arc::new(AtomicUsize::new(0));

    // LocalSet so connection tasks can use spawn_local
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::run(
            listener,
            state,
            active_connections,
            Arc::clone(&signals.shutdown),
        ))
        .await;

    Ok(())
}
