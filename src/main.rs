use core::fmt;
use hexbin::{
    ConvertError,
    config::{ParseModeError, parse_from_env, select_mode},
    convert,
};
use std::{
    io::{self, Read as _, Write as _},
    process::ExitCode,
};
use tracing_subscriber::EnvFilter;

enum AppError {
    Io(io::Error),
    Mode(ParseModeError),
    Convert(ConvertError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Mode(e) => fmt::Display::fmt(e, f),
            Self::Convert(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl From<io::Error> for AppError {
    #[inline]
    fn from(e: io::Error) -> Self { Self::Io(e) }
}

impl From<ParseModeError> for AppError {
    #[inline]
    fn from(e: ParseModeError) -> Self { Self::Mode(e) }
}

impl From<ConvertError> for AppError {
    #[inline]
    fn from(e: ConvertError) -> Self { Self::Convert(e) }
}

/// Install the stderr subscriber, `debug` when DEBUG is set, `RUST_LOG` wins
fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), AppError> {
    let mode = select_mode(std::env::args_os().nth(1).as_deref(), "HEXBIN_MODE")?;
    tracing::debug!(%mode, "starting");

    let mut input = Vec::new();
    io::stdin().lock().read_to_end(&mut input)?;

    let output = convert(mode, &input)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    // missing .env is fine
    let _ = dotenvy::dotenv();
    init_logging(parse_from_env("DEBUG", false));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hexbin: {e}");
            ExitCode::FAILURE
        }
    }
}
