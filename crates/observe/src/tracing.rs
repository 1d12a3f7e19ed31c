use {
    crate::config::Config,
    std::io::IsTerminal,
    time::macros::format_description,
    tracing_subscriber::{EnvFilter, fmt::time::UtcTime, prelude::*, util::SubscriberInitExt},
};

/// Initializes the global tracing subscriber.
/// `env_filter` has similar syntax to env_logger. It is documented at
/// https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html
///
/// All events are written to stderr; stdout is left to the program's own
/// output.
pub fn initialize(config: &Config) {
    if let Err(err) = set_tracing_subscriber(config) {
        eprintln!("failed to install tracing subscriber: {err}");
    }
}

fn set_tracing_subscriber(config: &Config) -> Result<(), tracing_subscriber::util::TryInitError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::new(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        )))
        .with_ansi(std::io::stderr().is_terminal());
    let registry = tracing_subscriber::registry().with(EnvFilter::new(&config.env_filter));
    if config.use_json_format {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer).try_init()
    }
}
