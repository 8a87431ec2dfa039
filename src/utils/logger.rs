use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

pub fn init_cli_logger(verbose: bool) {
    init(directives(verbose), false);
}

pub fn init_json_logger() {
    init(directives(false), true);
}

fn directives(verbose: bool) -> &'static str {
    if verbose {
        "weather_units=debug,info"
    } else {
        "weather_units=info"
    }
}

/// `RUST_LOG` takes precedence over `default_directives` when set.
fn init(default_directives: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let base = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);
    let output: Box<dyn Layer<Registry> + Send + Sync> = if json {
        base.json().boxed()
    } else {
        base.compact().boxed()
    };

    tracing_subscriber::registry()
        .with(output)
        .with(filter)
        .init();
}
