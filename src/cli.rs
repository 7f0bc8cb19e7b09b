//! CLI argument definitions using clap derive macros.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Serve the BSc study-material catalog over HTTP.
///
/// Starts with the bundled sample catalog unless `--no-seed` is given or the
/// config file disables seeding.
#[derive(Parser, Debug)]
#[command(name = "study-catalog")]
#[command(author, version, about)]
pub struct Args {
    /// Path to a JSON config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Address to listen on, overriding the config file (e.g. 0.0.0.0:8080)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    /// Start with an empty catalog
    #[arg(long)]
    pub no_seed: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Default log filter for the verbosity flags; `RUST_LOG` takes precedence
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_args_parses_successfully() {
        let args = Args::try_parse_from(["study-catalog"]).unwrap();
        assert_eq!(args.config, None);
        assert_eq!(args.bind, None);
        assert!(!args.no_seed);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
        assert_eq!(args.default_log_level(), "info");
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["study-catalog", "-v"]).unwrap();
        assert_eq!(args.default_log_level(), "debug");

        let args = Args::try_parse_from(["study-catalog", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.default_log_level(), "trace");
    }

    #[test]
    fn test_cli_quiet_wins_over_verbose() {
        let args = Args::try_parse_from(["study-catalog", "-q", "-v"]).unwrap();
        assert_eq!(args.default_log_level(), "error");
    }

    #[test]
    fn test_cli_config_and_bind() {
        let args = Args::try_parse_from([
            "study-catalog",
            "--config",
            "catalog.json",
            "--bind",
            "0.0.0.0:8080",
            "--no-seed",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("catalog.json")));
        assert_eq!(args.bind, Some("0.0.0.0:8080".parse().unwrap()));
        assert!(args.no_seed);
    }

    #[test]
    fn test_cli_invalid_bind_rejected() {
        let err = Args::try_parse_from(["study-catalog", "--bind", "localhost"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let err = Args::try_parse_from(["study-catalog", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let err = Args::try_parse_from(["study-catalog", "--invalid-flag"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
