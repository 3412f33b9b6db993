// tracksync CLI
//
// Layering: args (clap) -> commands (dispatch) -> handlers (one per command,
// call into tracksync-runtime) -> views (plain or JSON output).
// The bare `tracksync` invocation is the pre-commit hook entry point and
// behaves exactly like `tracksync sync`.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod types;
mod views;

pub use args::{Cli, Commands, DocsCommand};
pub use commands::{EXIT_DRIFT, is_drift, run};
