use std::ffi::OsString;
use std::io::{self, BufRead};
use std::path::PathBuf;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use ua_classify::{Classifier, DevicePatterns, PlatformClassifier};

fn print_usage() {
    eprintln!("Usage: ua-classify [--devices <file.json>] [--] <user agent>");
    eprintln!("   or: cat user-agents.txt | ua-classify [--devices <file.json>]");
    eprintln!();
    eprintln!("Prints one JSON object per User-Agent:");
    eprintln!(r#"  {{"manufacturer":"Apple","platform":"Mobile"}}"#);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --devices <file>  Load mobile/tablet patterns from a JSON file");
    eprintln!("                    instead of the built-in set");
    eprintln!("  --                Treat every following argument as User-Agent text");
    eprintln!();
    eprintln!("Set RUST_LOG=ua_classify=trace to see which pattern matched.");
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .init();
}

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct Args {
    devices: Option<PathBuf>,
    words: Vec<String>,
    help: bool,
}

/// Parse arguments (without the program name). Non-UTF-8 bytes are replaced.
fn parse_args<I>(raw: I) -> Result<Args, String>
where
    I: IntoIterator<Item = OsString>,
{
    let mut raw = raw.into_iter();
    let mut args = Args::default();

    while let Some(arg) = raw.next() {
        let arg = arg.to_string_lossy().into_owned();
        match arg.as_str() {
            "--devices" => match raw.next() {
                Some(path) => args.devices = Some(PathBuf::from(path)),
                None => return Err("--devices needs a file argument".to_string()),
            },
            "-h" | "--help" => args.help = true,
            "--" => {
                args.words
                    .extend(raw.by_ref().map(|a| a.to_string_lossy().into_owned()));
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option: {}", flag));
            }
            _ => args.words.push(arg),
        }
    }

    Ok(args)
}

/// Turn a raw stdin line into User-Agent text, or `None` for a blank line.
fn line_to_ua(line: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(line);
    let ua = text.trim();
    if ua.is_empty() {
        None
    } else {
        Some(ua.to_string())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args = match parse_args(std::env::args_os().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            print_usage();
            std::process::exit(1);
        }
    };
    if args.help {
        print_usage();
        return Ok(());
    }

    let platform = match &args.devices {
        Some(path) => PlatformClassifier::from_patterns(&DevicePatterns::from_path(path)?)?,
        None => PlatformClassifier::with_default_devices()?,
    };
    let classifier = Classifier::new(platform);

    if !args.words.is_empty() {
        let result = classifier.classify(&args.words.join(" "));
        println!("{}", serde_json::to_string(&result)?);
        return Ok(());
    }

    // No arguments: one User-Agent per stdin line, bytes taken as-is
    for line in io::stdin().lock().split(b'\n') {
        let Some(ua) = line_to_ua(&line?) else {
            continue;
        };
        let result = classifier.classify(&ua);
        println!("{}", serde_json::to_string(&result)?);
    }

    Ok(())
}
