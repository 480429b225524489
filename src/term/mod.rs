extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use clap::Parser;
use linebasic::error;
use linebasic::lang::Error;
use linebasic::mach::Runtime;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: i32 = 2;
const SCRIPT_ERROR: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "linebasic", version)]
#[command(about = "Runs a BASIC program", long_about = None)]
struct Args {
    /// Program file to run
    script: PathBuf,
}

pub fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LINEBASIC_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        // A program that never prints can't be stopped by the flag alone.
        if int_moved.swap(true, Ordering::SeqCst) {
            std::process::exit(130);
        }
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
    }

    let code = match main_loop(&args, interrupted) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}: {}", args.script.display(), error);
            USAGE
        }
    };
    std::process::exit(code);
}

fn main_loop(args: &Args, interrupted: Arc<AtomicBool>) -> std::io::Result<i32> {
    let source = std::fs::read_to_string(&args.script)?;
    debug!(path = %args.script.display(), bytes = source.len(), "loaded");

    let mut runtime = Runtime::new(&source);
    let int_print = interrupted.clone();
    runtime.on_print(move |s: &str| {
        if int_print.load(Ordering::SeqCst) {
            return Err(error!(Break));
        }
        println!("{}", s);
        Ok(())
    });
    let mut prompt = Prompt::default();
    runtime.on_input(move || {
        if interrupted.load(Ordering::SeqCst) {
            return Err(error!(Break));
        }
        prompt.read_line()
    });

    match runtime.run() {
        Ok(()) => Ok(0),
        Err(error) => {
            let bold = Style::new().bold();
            eprintln!("{}", bold.paint(format!("?{}", error)));
            let line = error.line_number().and_then(|n| n.checked_sub(1));
            if let Some(text) = line.and_then(|index| source.lines().nth(index)) {
                eprintln!("{}", text.trim_end_matches('\r'));
            }
            Ok(SCRIPT_ERROR)
        }
    }
}

/// Reads `INPUT` lines with editing and history when stdin is a
/// terminal, plain lines otherwise.
#[derive(Default)]
struct Prompt {
    interface: Option<Interface<DefaultTerminal>>,
    plain: bool,
}

type Result<T> = std::result::Result<T, Error>;

impl Prompt {
    fn read_line(&mut self) -> Result<String> {
        if self.interface.is_none() && !self.plain {
            match Interface::new("linebasic") {
                Ok(interface) => {
                    interface.set_report_signal(Signal::Interrupt, true);
                    interface
                        .set_prompt("? ")
                        .map_err(|e| error!(InternalError; e.to_string()))?;
                    self.interface = Some(interface);
                }
                Err(e) => {
                    debug!(error = %e, "no terminal, reading plain lines");
                    self.plain = true;
                }
            }
        }
        match &self.interface {
            Some(interface) => match interface.read_line() {
                Ok(ReadResult::Input(string)) => {
                    interface.add_history_unique(string.clone());
                    Ok(string)
                }
                Ok(ReadResult::Signal(_)) | Ok(ReadResult::Eof) => Err(error!(Break)),
                Err(e) => Err(error!(InternalError; e.to_string())),
            },
            None => Prompt::read_plain(),
        }
    }

    fn read_plain() -> Result<String> {
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) => Err(error!(Break)),
            Ok(_) => Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
            Err(e) => Err(error!(InternalError; e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_args() {
        let args = Args::try_parse_from(["linebasic", "hello.bas"]).unwrap();
        assert_eq!(args.script, PathBuf::from("hello.bas"));
        let e = Args::try_parse_from(["linebasic"]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(e.exit_code(), USAGE);
        let e = Args::try_parse_from(["linebasic", "a.bas", "b.bas"]).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_missing_script() {
        let args = Args::try_parse_from(["linebasic", "/nonexistent/linebasic.bas"]).unwrap();
        let interrupted = Arc::new(AtomicBool::new(false));
        assert!(main_loop(&args, interrupted).is_err());
    }
}
