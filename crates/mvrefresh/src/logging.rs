use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

// Operator-facing output goes to stdout as plain lines; diagnostics stay
// quiet unless RUST_LOG asks for them
pub const DEFAULT_LOG_FILTER: &str = "mvrefresh=warn,mvrefresh_databricks=warn";

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .init();
}
