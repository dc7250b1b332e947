use std::net::ToSocketAddrs;
use std::time::Duration;

use anyhow::{anyhow, Result};
use suppaftp::FtpStream;

/// Default connect timeout in seconds. Deliberately aggressive; prone to
/// false negatives on slow links. Raise with `--timeout` when probing over
/// the internet.
pub const DEFAULT_TIMEOUT_SECS: f64 = 0.1;

/// Result of a single connect + login attempt. Connection-level and
/// credential-level failures are not distinguished.
pub enum Outcome {
    Success,
    Failure { cause: String },
}

/// One connect + login attempt against the target. Implemented over a real
/// FTP client in production and scripted in tests.
pub trait FtpProbe {
    fn attempt(&mut self, target: &str, port: u16, username: &str, password: &str) -> Outcome;
}

/// Probe backed by the blocking suppaftp client. Every attempt opens a fresh
/// connection; there is no session reuse.
pub struct FtpLoginProbe {
    timeout: Duration,
}

impl FtpLoginProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn try_login(&self, target: &str, port: u16, username: &str, password: &str) -> Result<()> {
        let addr = (target, port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| anyhow!("no address resolved for {}:{}", target, port))?;
        let mut ftp = FtpStream::connect_timeout(addr, self.timeout)?;
        ftp.login(username, password)?;
        let _ = ftp.quit();
        Ok(())
    }
}

impl FtpProbe for FtpLoginProbe {
    fn attempt(&mut self, target: &str, port: u16, username: &str, password: &str) -> Outcome {
        match self.try_login(target, port, username, password) {
            Ok(()) => Outcome::Success,
            Err(e) => Outcome::Failure {
                cause: e.to_string(),
            },
        }
    }
}
