mod app;
mod cli;
mod config;

use std::io;
use std::process::ExitCode;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use app::App;
use config::Config;

fn main() -> ExitCode {
    init_logging();

    let config = Config::from_env();
    let today = Local::now().date_naive();

    let mut app = App::new(config, Local, today, io::stdout(), io::stderr());
    let code = app.run(std::env::args_os(), io::stdin().lock());

    ExitCode::from(code)
}

/// Diagnostics go to stderr and stay quiet unless RUST_LOG asks for more.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
