use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use colored::*;

use crate::prober::AttemptResult;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Console and log-file reporting for a probing run.
///
/// The optional sink mirrors the start line, every hit and the trailer;
/// failure lines never reach it. Both the normal-completion and interrupt
/// paths end in the same [`finish`](Reporter::finish) call so the trailer is
/// textually identical either way.
#[derive(Debug)]
pub struct Reporter {
    start: Instant,
    quiet: bool,
    verbose: u8,
    sink: Option<File>,
}

impl Reporter {
    /// Opens the sink (truncating) before any attempt is made; a sink that
    /// cannot be opened aborts the run.
    pub fn open(path: Option<&Path>, quiet: bool, verbose: u8) -> Result<Self> {
        let sink = match path {
            Some(p) => Some(
                File::create(p)
                    .with_context(|| format!("cannot open output file '{}'", p.display()))?,
            ),
            None => None,
        };
        Ok(Self {
            start: Instant::now(),
            quiet,
            verbose,
            sink,
        })
    }

    pub fn begin(&mut self) -> Result<()> {
        let line = format!("Start time: {}", Local::now().format(TIME_FORMAT));
        if !self.quiet {
            println!("{line}");
        }
        self.log(&line)
    }

    pub fn record(&mut self, result: &AttemptResult) -> Result<()> {
        let cred = &result.credential;
        if result.succeeded {
            let line = format!("Found: {} - {}", cred.username, cred.password);
            println!("{}", line.green().bold());
            self.log(&line)?;
        } else if self.verbose >= 1 {
            println!("{}", format!("Failed: {} - {}", cred.username, cred.password).red());
        }
        Ok(())
    }

    /// Emits the telemetry trailer and flushes the sink. Called exactly once,
    /// whether the run completed or was interrupted.
    pub fn finish(&mut self) -> Result<()> {
        let elapsed = format!("Elapsed time: {:.3} s", self.start.elapsed().as_secs_f64());
        let end = format!("End time: {}", Local::now().format(TIME_FORMAT));
        if !self.quiet {
            println!("{elapsed}");
            println!("{end}");
        }
        self.log(&elapsed)?;
        self.log(&end)?;
        Ok(())
    }

    fn log(&mut self, line: &str) -> Result<()> {
        if let Some(sink) = self.sink.as_mut() {
            writeln!(sink, "{line}").context("failed to write to output file")?;
            sink.flush().context("failed to flush output file")?;
        }
        Ok(())
    }
}
