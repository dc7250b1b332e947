use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{ensure, Result};
use clap::Parser;

mod cli;
mod probe;
mod prober;
mod report;
mod wordlist;

use probe::FtpLoginProbe;
use prober::Prober;
use report::Reporter;

fn main() {
    let args = cli::Cli::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: cli::Cli) -> Result<()> {
    init_logging(args.verbose);
    ensure!(
        args.timeout.is_finite() && args.timeout > 0.0,
        "connect timeout must be a positive number of seconds"
    );

    let usernames = wordlist::resolve(args.username, args.userlist)?;
    let passwords = wordlist::resolve(args.password, args.passlist)?;

    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel = Arc::clone(&cancel);
        ctrlc::set_handler(move || {
            if cancel.swap(true, Ordering::SeqCst) {
                eprintln!("\nForce exiting...");
                process::exit(1);
            }
            eprintln!("\n[+] Exiting...");
        })?;
    }

    let mut reporter = Reporter::open(args.output.as_deref(), args.quiet, args.verbose)?;
    reporter.begin()?;

    let mut probe = FtpLoginProbe::new(Duration::from_secs_f64(args.timeout));
    let prober = Prober {
        target: &args.target,
        port: args.port,
        forcequit: args.forcequit,
    };
    let summary = prober.run(&mut probe, &usernames, &passwords, &cancel, &mut reporter)?;
    log::debug!("{} attempts, {} hits", summary.attempts, summary.hits);

    reporter.finish()?;
    if summary.interrupted {
        process::exit(1);
    }
    Ok(())
}

/// -vv surfaces the FTP client's command/response logging, -vvv its raw
/// protocol trace.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 | 1 => log::LevelFilter::Off,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();
}
