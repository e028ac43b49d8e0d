//! Logging setup shared by the server binary and tests

use env_logger::Env;

/// Initialize env_logger once. Safe to call repeatedly; later calls are
/// no-ops, which lets every test set up logging without coordination.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();
}
