//! # Till Terminal Library
//!
//! The cashier-facing host around `till-core`.
//!
//! ## Module Organization
//! ```text
//! till_terminal/
//! ├── lib.rs        ◄─── You are here (startup & input loop)
//! ├── config.rs     ◄─── TILL_* environment configuration
//! ├── command.rs    ◄─── One input line → one Command
//! ├── session.rs    ◄─── Commands applied to catalog + CartStore
//! └── error.rs      ◄─── Startup / I/O error type
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod session;

use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use till_core::receipt::render_order_summary;
use till_core::{CartStore, Catalog};

use command::Command;
use config::TerminalConfig;
use error::{AppError, AppResult};
use session::{Reply, Session};

/// Runs the terminal until `quit` or end of input.
///
/// ## Startup Sequence
/// 1. Initialize logging (stderr, `RUST_LOG` aware)
/// 2. Load configuration from `TILL_*` variables
/// 3. Load and validate the catalog
/// 4. Create the cart store and subscribe the order-summary view
/// 5. Read commands from stdin
pub fn run() -> AppResult<()> {
    init_tracing();

    let config = TerminalConfig::from_env()?;
    info!(
        store = %config.store_name,
        shipping = config.pricing.shipping.cents(),
        tax_bps = config.pricing.tax_rate.bps(),
        discount_bps = config.pricing.discount_rate.bps(),
        "Starting Till terminal"
    );

    let catalog = load_catalog(&config)?;
    info!(products = catalog.len(), "Catalog loaded");

    let store = CartStore::new(config.pricing);
    let layout = config.receipt_layout();

    let view_layout = layout.clone();
    store.subscribe(move |_, snapshot| {
        let mut out = io::stdout().lock();
        if let Err(err) = write!(out, "{}", render_order_summary(snapshot, &view_layout)) {
            warn!(%err, "could not render order summary");
        }
    });

    let session = Session::new(catalog, store, layout);
    let stdin = io::stdin();
    serve(&session, stdin.lock(), io::stdout())
}

/// Reads commands until `quit` or end of input, writing replies to `out`.
pub fn serve<R, W>(session: &Session, input: R, mut out: W) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", command::HELP)?;

    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        };

        match session.execute(command) {
            Reply::Silent => {}
            Reply::Text(text) => writeln!(out, "{}", text.trim_end())?,
            Reply::Quit => break,
        }
        out.flush()?;
    }

    info!("Till terminal stopped");
    Ok(())
}

/// Reads `TILL_CATALOG_PATH`, or falls back to the demo catalog.
pub fn load_catalog(config: &TerminalConfig) -> AppResult<Catalog> {
    let Some(path) = &config.catalog_path else {
        warn!("TILL_CATALOG_PATH not set, using the demo catalog");
        return Ok(Catalog::demo());
    };

    let json = std::fs::read_to_string(path).map_err(|source| AppError::CatalogFile {
        path: path.clone(),
        source,
    })?;

    Ok(Catalog::from_json(&json)?)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the order summary.
///
/// ## Log Levels
/// - `RUST_LOG=till_core=debug` - every cart mutation
/// - Default: INFO for the till crates, WARN for everything else
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,till_core=info,till_terminal=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use till_core::{PricingConfig, ReceiptLayout};

    fn session() -> Session {
        Session::new(
            Catalog::demo(),
            CartStore::new(PricingConfig::default()),
            ReceiptLayout::default(),
        )
    }

    #[test]
    fn test_serve_runs_script_until_quit() {
        let session = session();
        let script = "add notebook-a5\nadd notebook-a5\n\nadd gel-pen\nbogus\nshow\nquit\nadd tape\n";
        let mut out = Vec::new();

        serve(&session, script.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Unknown command 'bogus'"));
        assert!(text.contains("TOTAL                               $62.50"));
        // Nothing after quit is executed
        assert!(session.store().with_cart(|c| c.get("tape").is_none()));
    }

    #[test]
    fn test_serve_stops_at_end_of_input() {
        let session = session();
        let mut out = Vec::new();
        serve(&session, "add tape\nqty tape 4".as_bytes(), &mut out).unwrap();
        assert_eq!(session.store().with_cart(|c| c.total_quantity()), 4);
    }

    #[test]
    fn test_serve_survives_mistyped_huge_quantity() {
        let session = session();
        let script = "add notebook-a5\nqty notebook-a5 10000000000000000\nshow\nqty notebook-a5 2\nshow\n";
        let mut out = Vec::new();

        serve(&session, script.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("TOTAL                               $57.00"));
        assert_eq!(session.store().with_cart(|c| c.total_quantity()), 2);
    }

    #[test]
    fn test_load_catalog_defaults_to_demo() {
        let catalog = load_catalog(&TerminalConfig::default()).unwrap();
        assert_eq!(catalog.len(), Catalog::demo().len());
    }

    #[test]
    fn test_load_sample_catalog() {
        let config = TerminalConfig {
            catalog_path: Some(
                std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("catalog.sample.json"),
            ),
            ..TerminalConfig::default()
        };
        let catalog = load_catalog(&config).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get("stapler").map(|p| p.price_cents), Some(1450));
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let config = TerminalConfig {
            catalog_path: Some("/definitely/not/here/catalog.json".into()),
            ..TerminalConfig::default()
        };
        assert!(matches!(
            load_catalog(&config),
            Err(AppError::CatalogFile { .. })
        ));
    }
}
