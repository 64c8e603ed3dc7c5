use crate::config::Config;
use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub struct CustomFormatter;

impl<S, N> FormatEvent<S, N> for CustomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let timestamp = Local::now().format("%H:%M:%S");

        let (emoji, level_str) = level_prefix(metadata.level());

        write!(writer, "{} {} [{}]: ", emoji, level_str, timestamp)?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_prefix(level: &tracing::Level) -> (&'static str, &'static str) {
    match *level {
        tracing::Level::TRACE => ("🔬", "TRACE"),
        tracing::Level::DEBUG => ("🐛", "DEBUG"),
        tracing::Level::INFO => ("ℹ️ ", "INFO"),
        tracing::Level::WARN => ("⚠️ ", "WARN"),
        tracing::Level::ERROR => ("❌", "ERROR"),
    }
}

/// Install the global subscriber.
///
/// RUST_LOG takes precedence over the configured filter. Returns false when a
/// subscriber was already installed.
pub fn init(config: &Config) -> bool {
    let filter = config.log_filter();

    tracing_subscriber::fmt()
        .event_format(CustomFormatter)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .try_init()
        .is_ok()
}
