use clap::Parser;
use clap::builder::{OsStringValueParser, TypedValueParser};
use pdftext::{ExtractError, ExtractorConfig, logging, run};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

// The first argument is always the path, taken verbatim: no flags are
// declared, and empty or dash-prefixed values are accepted as-is.
#[derive(Parser, Debug)]
#[command(
    author,
    about = "Extract plain text from a PDF file",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// PDF file to extract text from
    #[arg(
        allow_hyphen_values = true,
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    path: Option<PathBuf>,

    /// Additional arguments are accepted and ignored
    #[arg(
        hide = true,
        allow_hyphen_values = true,
        value_parser = OsStringValueParser::new()
    )]
    extra: Vec<std::ffi::OsString>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let message = e.to_string().trim_end().to_string();
            return report(ExtractError::Arguments(message));
        }
    };

    // Checked before touching the filesystem, config file included
    let Some(path) = args.path else {
        return report(ExtractError::Usage);
    };

    let config = ExtractorConfig::load_from_file().unwrap_or_default();

    logging::init(&config);
    if !args.extra.is_empty() {
        debug!(ignored = ?args.extra, "extra arguments ignored");
    }

    let result = run(&path, &mut io::stdout().lock(), &mut io::stderr().lock());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e),
    }
}

fn report(err: ExtractError) -> ExitCode {
    eprintln!("{}", err);
    ExitCode::from(err.exit_code())
}
