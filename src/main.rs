mod args;
mod books;
mod cmd;
mod corpus;
mod error;
mod output;
mod report;
mod resolve;
mod vocab;

use env_logger::Env;
use error::VocabError;
use std::io::Write;

fn main() {
    let config = match args::Config::new() {
        Ok(config) => config,
        Err(e) => exit_with_error(&e),
    };
    let default_level = if config.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    if let Err(e) = cmd::run(&config, &mut writer) {
        exit_with_error(&e);
    }
}

// Fatal messages are printed with the report on stdout. A failed write
// to stdout is reported on stderr instead.
fn exit_with_error(e: &VocabError) -> ! {
    let mut writer: Box<dyn Write> = match e {
        VocabError::Output(_) => Box::new(std::io::stderr()),
        _ => Box::new(std::io::stdout()),
    };
    let _ = writeln!(writer, "{}", e.message());
    if let Some(hint) = e.hint() {
        let _ = writeln!(writer, "{}", hint);
    }
    let _ = writer.flush();
    std::process::exit(1);
}
