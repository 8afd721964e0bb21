use clap::Parser;
use quickscope::cli::Args;
use quickscope::error::CliResult;
use quickscope::types::AddrRange;
use quickscope::{exceptions, filter, output, writer};
use std::process::ExitCode;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> CliResult<()> {
    // Range construction fails before any file is touched.
    let range = AddrRange::parse(&args.start_ip, &args.end_ip)?;
    if !args.quiet {
        output::print_run_header(&range);
    }

    let generated = range.len();
    let list = range.to_strings();
    debug!(count = generated, "generated address range");

    let exception_set = exceptions::resolve(&args.exceptions);
    debug!(count = exception_set.len(), "resolved exception set");

    let list = filter::apply(list, &exception_set);

    writer::write_list(&list, &args.output)?;
    if !args.quiet {
        output::print_summary(generated, list.len(), &args.output);
    }

    Ok(())
}

/// Initialize logging, respecting `RUST_LOG`; `--verbose` forces debug level.
fn init_tracing(verbose: bool) {
    let level = if verbose {
        Level::DEBUG
    } else {
        std::env::var("RUST_LOG")
            .ok()
            .and_then(|s| s.parse::<Level>().ok())
            .unwrap_or(Level::WARN)
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
