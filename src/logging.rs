//! Diagnostic logging to stderr.
//!
//! Stdout belongs to command output (`twin`, `classify`, `scaffold`), so the
//! subscriber always writes to stderr.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// How much diagnostic output to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors.
    Normal,
    /// Adds the steps of a switch.
    Verbose,
    /// Adds probes and file names.
    Debug,
    /// Everything.
    Trace,
}

impl Verbosity {
    /// Maps `-v` occurrences and `-q` to a verbosity. `-q` wins.
    #[must_use]
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    fn to_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    fn to_filter(self) -> String {
        format!("rspec_switch={}", self.to_level())
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides the verbosity flags. A second call is a no-op, which
/// keeps repeated [`crate::run`] calls in one process working.
pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.to_filter()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(verbosity >= Verbosity::Debug)
        .with_line_number(verbosity >= Verbosity::Debug)
        .compact();

    let _ = if verbosity <= Verbosity::Normal {
        subscriber.without_time().try_init()
    } else {
        subscriber.try_init()
    };
}
