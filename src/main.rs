mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!(
        "[MAIN] Starting {} ({})",
        global_constants::APPLICATION_TITLE,
        global_constants::APPLICATION_NAME
    );

    app::PhotoUploaderApp::build()?.run().await
}
