use clap::Parser;
use color_eyre::Result;
use std::io::{stdin, stdout};
use std::path::PathBuf;

use selection_store::config::{self, ConfigResult};
use selection_store::session::Session;
use selection_store::{Catalog, StoreError, use_product_store};

/// Product overlay shell
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Open and close a product overlay over a JSON product catalog"
)]
struct Args {
    /// Catalog JSON file (falls back to [catalog] path in the config file)
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Writes to /tmp/selection-store-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/selection-store-debug.log")
        {
            use std::io::Write;

            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(|buf, record| {
                    use std::time::SystemTime;
                    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                    writeln!(
                        buf,
                        "[{}] [{}] {}",
                        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                        record.level(),
                        record.args()
                    )
                })
                .init();

            log::debug!("=== SELECTION-STORE DEBUG SESSION STARTED ===");
        }
    }

    color_eyre::install()?;

    let ConfigResult { config, warning } = config::load_config();
    if let Some(warning) = warning {
        eprintln!("warning: {}", warning);
    }

    let args = Args::parse();

    let catalog_path = args
        .catalog
        .or(config.catalog.path)
        .ok_or(StoreError::MissingCatalogPath)?;
    let catalog = Catalog::load(&catalog_path)?;

    let session = Session::new(catalog, use_product_store(), config.overlay);
    session.run(stdin().lock(), stdout().lock())?;

    #[cfg(debug_assertions)]
    log::debug!("=== SELECTION-STORE DEBUG SESSION ENDED ===");

    Ok(())
}
