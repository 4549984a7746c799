use std::io::{self, BufWriter, ErrorKind};
use std::process::ExitCode;

use clap::Parser;
use field_core::error::{Error, Result};
use field_core::template::FieldTemplate;
use log::debug;

use crate::cli_args::Args;
use crate::processing::Output;

mod cli_args;
mod processing;

fn execute() -> Result<()> {
    let args = Args::parse();
    let config = args.to_config();
    debug!("Configuration: {config:?}");

    let ranges = args.parse_ranges()?;
    let template = args
        .format
        .as_deref()
        .map(|format| FieldTemplate::parse(format, config.reversed))
        .transpose()?;

    let output = match &template {
        Some(template) => Output::Template(template),
        None => Output::Ranges(&ranges),
    };

    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());

    match processing::process(&config, &output, stdin, &mut stdout) {
        Err(Error::Io(e)) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("Output closed, stopping");
            Ok(())
        }
        result => result,
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
