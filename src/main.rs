#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("starting stanhole-site");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Stanhole Trading & Projects")
            .with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Stanhole Trading & Projects",
        options,
        Box::new(|cc| Ok(Box::new(stanhole_site::SiteApp::new(cc)))),
    )
}

// The WASM entry point is `start()` in lib.rs.
#[cfg(target_arch = "wasm32")]
fn main() {}
