//! # Till Terminal Entry Point
//!
//! Cashier terminal for the Till POS cart. Setup lives in `lib.rs` for
//! testability.
//!
//! ```text
//! $ TILL_STORE_NAME="Corner Stationery" till-terminal
//! > add notebook-a5
//! > add gel-pen
//! > qty notebook-a5 2
//! > show
//! ```

use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    match till_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Till terminal failed");
            eprintln!("till-terminal: {}", err);
            ExitCode::FAILURE
        }
    }
}
