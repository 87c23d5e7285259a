use std::process;

use clap::{CommandFactory, Parser};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use treecheck::cli::{execute_command, output, Cli};
use treecheck::exitcode;

fn main() {
    let cli = Cli::parse();

    if cli.info {
        let cmd = Cli::command();
        if let Some(a) = cmd.get_author() {
            println!("AUTHOR: {}", a)
        }
        if let Some(v) = cmd.get_version() {
            println!("VERSION: {}", v)
        }
        return;
    }

    setup_logging(cli.debug);

    match execute_command(&cli) {
        Ok(()) => process::exit(exitcode::OK),
        Err(e) => {
            tracing::debug!("exit: {:?}", e);
            output::error(&e);
            process::exit(e.exit_code());
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Log lines go to stderr so stdout stays clean for results
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
