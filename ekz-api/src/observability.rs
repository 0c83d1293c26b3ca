//! Logging bootstrap.

use std::sync::Once;

use ekz_store::app_config::LogFormat;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "ekz_api=info,ekz_core=info,ekz_store=info,tower_http=info";

/// Installs the global subscriber. Later calls are no-ops.
///
/// `RUST_LOG` overrides the default filter. In JSON mode every event is a
/// single object with timestamp, level, target, line number, message and
/// the fields of the enclosing request span.
pub fn init_logging(format: LogFormat) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        match format {
            LogFormat::Json => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(
                        fmt::layer()
                            .json()
                            .with_target(true)
                            .with_line_number(true)
                            .with_current_span(true)
                            .with_span_list(false),
                    )
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().pretty())
                    .init();
            }
        }
    });
}
