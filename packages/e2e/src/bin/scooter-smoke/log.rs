use std::time::Instant;

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{Layer as _, fmt::MakeWriter, layer::SubscriberExt as _};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum WhenColor {
    Always,
    Never,
    Auto,
}

pub fn make_logger<W>(writer: W, color: WhenColor) -> impl tracing::Subscriber
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with({
            let layer = tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false)
                .with_timer(Uptime::default())
                .with_writer(writer);
            match color {
                WhenColor::Always => layer.with_ansi(true),
                WhenColor::Never => layer.with_ansi(false),
                WhenColor::Auto => layer,
            }
            .with_filter(
                tracing_subscriber::EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .with_env_var("SCOOTER_LOG")
                    .from_env_lossy(),
            )
        })
}

struct Uptime {
    start: Instant,
}

impl Default for Uptime {
    fn default() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl FormatTime for Uptime {
    // Total runtime so far, padded so messages line up.
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let seconds = self.start.elapsed().as_secs_f64();
        write!(w, "{seconds:.03}s")
    }
}
