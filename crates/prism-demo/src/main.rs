mod triangle_app;

use anyhow::Result;
use prism_engine::device::GpuInit;
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::window::{Runtime, RuntimeConfig};

use triangle_app::TriangleApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig::default()
        .with_title("Hello Triangle")
        .with_size(800.0, 600.0);
    let gpu_init = GpuInit::from_env();

    log::info!("starting {} ({:?}, {:?})", config.title, gpu_init.backends, gpu_init.present_mode);

    Runtime::run(config, gpu_init, TriangleApp::default())
}
