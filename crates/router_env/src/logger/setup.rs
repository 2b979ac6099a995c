//!
//! Setup logging subsystem.
//!

use tracing_subscriber::{
    filter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::config;

/// Guard returned by [`setup`]; the subscriber stays installed for the lifetime of the process.
#[derive(Debug)]
pub struct LoggerGuard {
    service_name: String,
}

impl LoggerGuard {
    /// Name the subscriber was installed for.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

///
/// Setup logging sub-system specifying.
/// Expects config and list of names of crates to watch.
///
/// `RUST_LOG` overrides the configured filtering directive when it is set.
///
pub fn setup<Str: AsRef<str>>(
    config: &config::Log,
    service_name: &str,
    crates_to_watch: impl IntoIterator<Item = Str>,
) -> Result<LoggerGuard, tracing_subscriber::util::TryInitError> {
    let console = &config.console;
    let level = console.level.into_level();

    let env_filter = match (std::env::var(EnvFilter::DEFAULT_ENV), &console.filtering_directive) {
        (Err(_), Some(directive)) => EnvFilter::builder()
            .with_default_directive(level.into())
            .parse_lossy(directive),
        _ => EnvFilter::builder()
            .with_default_directive(tracing::Level::TRACE.into())
            .from_env_lossy(),
    };

    let mut console_filter = filter::Targets::new().with_default(tracing::Level::WARN);
    for acrate in crates_to_watch {
        console_filter = console_filter.with_target(acrate.as_ref(), level);
    }

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if console.enabled {
        match console.log_format {
            config::LogFormat::Default => {
                let logging_layer = fmt::layer()
                    .with_timer(fmt::time::time())
                    .with_span_events(fmt::format::FmtSpan::CLOSE)
                    .pretty()
                    .with_writer(std::io::stdout);

                subscriber
                    .with(logging_layer.with_filter(console_filter))
                    .try_init()?;
            }
            config::LogFormat::Json => {
                let logging_layer = fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_writer(std::io::stdout);

                subscriber
                    .with(logging_layer.with_filter(console_filter))
                    .try_init()?;
            }
        }
    } else {
        subscriber.try_init()?;
    }

    tracing::debug!(service = service_name, "logger initialized");

    Ok(LoggerGuard {
        service_name: service_name.to_owned(),
    })
}
