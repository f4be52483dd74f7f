//! Logging setup for the command-line tools.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging with a default filter.
///
/// Use `RUST_LOG` environment variable to override the default filter.
/// Default is `info` for this crate and `warn` for others.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,cvm_grid=info,generate_grid_points=info,mesh_to_netcdf=info")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
