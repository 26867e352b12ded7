use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::filter::{Directive, EnvFilter};
use tracing_subscriber::prelude::*;

/// Environment variable selecting the log level
pub const LOG_ENV_VAR: &str = "SHAPETOOL_LOG";

/// Level used when `SHAPETOOL_LOG` is unset or unparseable
const DEFAULT_LOG_LEVEL: &str = "warn";
/// Default level with `--debug`
const DEBUG_LOG_LEVEL: &str = "debug";

/// Logger initialization without timestamps, keeping colors.
///
/// Use SHAPETOOL_LOG=info or SHAPETOOL_LOG=debug to increase verbosity.
/// Example: SHAPETOOL_LOG=debug shape-tool --load-ufo Font.ufo
///
/// `debug` lowers the default to debug; SHAPETOOL_LOG still wins.
pub fn init_custom_logger(debug: bool) {
    struct EmptyTime;
    impl FormatTime for EmptyTime {
        fn format_time(
            &self,
            _: &mut tracing_subscriber::fmt::format::Writer<'_>,
        ) -> std::fmt::Result {
            Ok(())
        }
    }

    let level = std::env::var(LOG_ENV_VAR).ok();
    let format = format()
        .with_timer(EmptyTime)
        .with_level(true)
        .with_target(true)
        .with_ansi(true);

    let mut filter = EnvFilter::from_default_env().add_directive(level_directive(level.as_deref(), debug));
    // Render backends are very chatty below error
    for noisy in ["wgpu_core=error", "wgpu_hal=error", "bevy_render=error"] {
        if let Ok(directive) = noisy.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }

    if let Err(e) = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format).with_filter(filter))
        .try_init()
    {
        eprintln!("Failed to initialize logger: {e}");
    }
}

/// Parse the requested level, falling back to the default
fn level_directive(level: Option<&str>, debug: bool) -> Directive {
    let default_level = if debug { DEBUG_LOG_LEVEL } else { DEFAULT_LOG_LEVEL };
    level
        .and_then(|level| level.parse().ok())
        .or_else(|| default_level.parse().ok())
        .unwrap_or_else(|| tracing_subscriber::filter::LevelFilter::WARN.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_defaults_to_warn() {
        assert_eq!(level_directive(None, false).to_string(), "warn");
        assert_eq!(level_directive(None, true).to_string(), "debug");
        assert_eq!(level_directive(Some("info"), true).to_string(), "info");
    }

    #[test]
    fn second_init_is_reported_not_fatal() {
        init_custom_logger(false);
        init_custom_logger(true);
    }
}
