use colored::{ColoredString, Colorize};
use env_logger::{Builder, Env};
use std::io::Write;
use std::time::Duration;

pub struct FormatElapsedTimeOptions {
    pub(crate) millis_yellow_threshold: u128,
    pub(crate) millis_red_threshold: u128,
}

impl Default for FormatElapsedTimeOptions {
    fn default() -> Self {
        Self {
            millis_yellow_threshold: 50,
            millis_red_threshold: 250,
        }
    }
}

/// Install a logger formatted like Maudit's, for programs that use Vitrine outside of [`maudit::coronate`].
///
/// `coronate` installs its own logger, so this returns `false` and does nothing if a logger is already set.
pub fn init_logging() -> bool {
    let logging_env = Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(logging_env)
        .format(|buf, record| {
            if std::env::args().any(|arg| arg == "--quiet") {
                return Ok(());
            }

            writeln!(
                buf,
                "{} {} {}",
                chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
                record.target().to_ascii_lowercase().bold().bright_yellow(),
                record.args()
            )
        })
        .try_init()
        .is_ok()
}

pub fn format_elapsed_time(elapsed: Duration, options: &FormatElapsedTimeOptions) -> ColoredString {
    match elapsed.as_millis() {
        millis if millis > options.millis_red_threshold => format!("{}ms", millis).red(),
        millis if millis > options.millis_yellow_threshold => format!("{}ms", millis).yellow(),
        millis if millis > 0 => format!("{}ms", millis).normal(),
        _ => format!("{}μs", elapsed.as_micros()).normal(),
    }
}
