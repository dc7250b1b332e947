use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use log::debug;

use crate::probe::{FtpProbe, Outcome};
use crate::report::Reporter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

/// Outcome of one attempt as seen by the reporter. Never collected; each one
/// is observed and dropped.
pub struct AttemptResult {
    pub credential: Credential,
    pub succeeded: bool,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub attempts: u64,
    pub hits: u64,
    pub interrupted: bool,
}

/// The credential-iteration loop: usernames outer, passwords inner, both in
/// list order. One blocking attempt in flight at a time.
pub struct Prober<'a> {
    pub target: &'a str,
    pub port: u16,
    pub forcequit: bool,
}

impl Prober<'_> {
    /// Runs the full scan. The cancellation flag is polled between attempts;
    /// once set, no further attempt is started. With `forcequit`, the scan
    /// stops entirely at the first valid pair.
    pub fn run(
        &self,
        probe: &mut dyn FtpProbe,
        usernames: &[String],
        passwords: &[String],
        cancel: &AtomicBool,
        reporter: &mut Reporter,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        'users: for username in usernames {
            let mut found = false;
            for password in passwords {
                if cancel.load(Ordering::SeqCst) {
                    summary.interrupted = true;
                    break 'users;
                }
                let outcome = probe.attempt(self.target, self.port, username, password);
                summary.attempts += 1;
                if let Outcome::Failure { cause } = &outcome {
                    debug!("{} - {}: {}", username, password, cause);
                }
                let result = AttemptResult {
                    credential: Credential {
                        username: username.clone(),
                        password: password.clone(),
                    },
                    succeeded: matches!(outcome, Outcome::Success),
                };
                reporter.record(&result)?;
                if result.succeeded {
                    summary.hits += 1;
                    found = true;
                    if self.forcequit {
                        break;
                    }
                }
            }
            if found && self.forcequit {
                break;
            }
        }
        Ok(summary)
    }
}
