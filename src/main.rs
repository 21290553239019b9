// std imports
use std::{
    io::{stdin, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};
use fnmatch::Pattern;

// local imports
use fnmatch_cli::{App, Options, Settings, cli, config, error::*};

// ---

const FNMATCH_DEBUG_LOG: &str = "FNMATCH_DEBUG_LOG";
const FNMATCH_DEBUG_LOG_STYLE: &str = "FNMATCH_DEBUG_LOG_STYLE";

// ---

fn bootstrap(opt: &cli::Opt) -> Result<Settings> {
    if std::env::var(FNMATCH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(FNMATCH_DEBUG_LOG)
                .write_style(FNMATCH_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }

    let (configs, no_default_configs) = opt.config_files();
    config::at(configs).no_default(no_default_configs).load()
}

/// Runs the application and tells whether any candidate was selected.
fn run() -> Result<bool> {
    let opt = cli::Opt::parse();
    let settings = bootstrap(&opt)?;

    let flags = opt.flags(settings.flags());
    log::debug!("pattern {:?} with flags {:?}", opt.pattern, flags);

    let app = App::new(Options {
        pattern: Pattern::new(opt.pattern.as_str()).with_flags(flags),
        invert: opt.invert_match,
        output: opt.output_mode(),
        delimiter: opt.delimiter(settings.delimiter),
    });

    let mut output = stdout().lock();

    let summary = if opt.candidates.is_empty() {
        log::debug!("read candidates from stdin");
        app.run_reader(stdin().lock(), &mut output)
    } else {
        app.run(opt.candidates.iter().map(String::as_str), &mut output)
    };

    match summary {
        Ok(summary) => Ok(summary.selected != 0),
        Err(err) if err.is_broken_pipe() => Ok(true),
        Err(err) => Err(err),
    }
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            err.log();
            process::exit(2);
        }
    }
}
