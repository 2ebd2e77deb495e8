use std::io::IsTerminal;

use tracing_subscriber::{fmt, EnvFilter};

/// Log to stderr; `RUST_LOG` overrides the default `info` level.
pub fn init() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
