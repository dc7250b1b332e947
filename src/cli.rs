use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};

use crate::probe::DEFAULT_TIMEOUT_SECS;

/// Sequential FTP credential prober
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[clap(group(
    ArgGroup::new("user")
        .required(true)
        .args(&["username", "userlist"])
))]
#[clap(group(
    ArgGroup::new("pass")
        .required(true)
        .args(&["password", "passlist"])
))]
pub struct Cli {
    /// Target host or IP
    pub target: String,

    /// Target port
    #[arg(default_value_t = 21)]
    pub port: u16,

    /// Single username to try
    #[arg(short, long)]
    pub username: Option<String>,

    /// Username list file, one entry per line
    #[arg(short = 'U', long)]
    pub userlist: Option<PathBuf>,

    /// Single password to try
    #[arg(short, long)]
    pub password: Option<String>,

    /// Password list file, one entry per line
    #[arg(short = 'P', long)]
    pub passlist: Option<PathBuf>,

    /// Stop after the first valid credential pair
    #[arg(short = 'f')]
    pub forcequit: bool,

    /// Verbosity: -v prints failed attempts, -vv adds FTP protocol trace
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress start/end timestamps and elapsed time on the console
    #[arg(short, long)]
    pub quiet: bool,

    /// Log file receiving the start line, hits and trailer
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Connect timeout in seconds
    #[arg(short = 't', long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(argv)
    }

    #[test]
    fn port_and_timeout_defaults() {
        let cli = parse(&["bf-ftp", "10.0.0.5", "-u", "root", "-p", "toor"]).unwrap();
        assert_eq!(cli.target, "10.0.0.5");
        assert_eq!(cli.port, 21);
        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.forcequit);
    }

    #[test]
    fn explicit_port_overrides_default() {
        let cli = parse(&["bf-ftp", "host", "2121", "-u", "a", "-p", "b"]).unwrap();
        assert_eq!(cli.port, 2121);
    }

    #[test]
    fn username_and_userlist_conflict() {
        let err = parse(&[
            "bf-ftp", "host", "-u", "a", "-U", "users.txt", "-p", "b",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn password_and_passlist_conflict() {
        let err = parse(&[
            "bf-ftp", "host", "-u", "a", "-p", "b", "-P", "pass.txt",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn missing_user_group_is_rejected() {
        let err = parse(&["bf-ftp", "host", "-p", "b"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn missing_pass_group_is_rejected() {
        let err = parse(&["bf-ftp", "host", "-U", "users.txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn verbosity_counts_repeats() {
        let cli = parse(&["bf-ftp", "host", "-u", "a", "-p", "b", "-vvv"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }
}
