//! css2jss - convert CSS declarations to JSS

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use css_to_jss::{Converter, ConverterConfig};

#[derive(Parser)]
#[command(name = "css2jss")]
#[command(version, about = "Convert CSS declarations to JSS object entries", long_about = None)]
#[command(after_help = "EXAMPLES:
    css2jss button.css                Convert a file
    pbpaste | css2jss --fallback      Convert clipboard text, echo it back if it is not CSS
    css2jss --strict --indent 2 -     Read stdin, reject malformed input")]
struct Cli {
    /// Input file; reads stdin when omitted or `-`
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Reject unbalanced or unterminated input instead of truncating it
    #[arg(long)]
    strict: bool,

    /// Spaces before each property key
    #[arg(long, value_name = "N", default_value_t = 4)]
    indent: usize,

    /// Print the input unchanged when it cannot be converted
    #[arg(long)]
    fallback: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let css = read_input(cli.input.as_ref()).map_err(|e| e.to_string())?;

    let config = ConverterConfig::new()
        .with_indent_width(cli.indent)
        .with_strict(cli.strict);
    let converter = Converter::new(config);

    let output = if cli.fallback {
        converter.convert_or_original(&css)
    } else {
        converter.parse(&css).map_err(|e| e.to_string())?
    };

    print!("{output}");
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
