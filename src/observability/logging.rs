//! Structured logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directives when `ENVIRONMENT` is `develop`.
const DEVELOP_DIRECTIVES: &str = "capitalize=debug,tower_http=debug";

/// Default filter directives for any other environment.
const STANDARD_DIRECTIVES: &str = "capitalize=info";

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the default directives
/// come from the `ENVIRONMENT` variable (`develop` enables debug output).
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives().into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn default_directives() -> &'static str {
    match std::env::var("ENVIRONMENT") {
        Ok(environment) if environment.eq_ignore_ascii_case("develop") => DEVELOP_DIRECTIVES,
        _ => STANDARD_DIRECTIVES,
    }
}
