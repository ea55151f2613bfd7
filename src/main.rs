// src/main.rs
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use egui as eg;

fn pick_renderer() -> eframe::Renderer {
    match env::var("WATCHLIST_RENDERER").as_deref() {
        Ok("glow") => eframe::Renderer::Glow,
        Ok("wgpu") => eframe::Renderer::Wgpu,
        _ => {
            // Default: Windows = WGPU (DX12), Others = Glow (GL)
            #[cfg(target_os = "windows")]
            { eframe::Renderer::Wgpu }
            #[cfg(not(target_os = "windows"))]
            { eframe::Renderer::Glow }
        }
    }
}

fn main() -> eframe::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let cfg = watchlist::config::load_config();
    info!("watchlist file: {}", cfg.movies_file.display());

    let app = match watchlist::app::WatchlistApp::new(cfg) {
        Ok(app) => app,
        Err(e) => {
            error!("cannot open watchlist: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        renderer: pick_renderer(),
        viewport: eg::ViewportBuilder::default()
            .with_inner_size([1150.0, 750.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    match eframe::run_native(
        "🎬 Movies Watchlist",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    ) {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("eframe failed to start: {e:?}");
            error!("Hint: on WSL use X/Wayland; on Windows try WATCHLIST_RENDERER=wgpu or glow.");
            Err(e)
        }
    }
}
