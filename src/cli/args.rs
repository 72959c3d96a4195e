use crate::constants::verbosity;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for Spinup.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Environment configuration file with the selectable option lists.
    #[arg(short, long, value_name = "CONFIG", default_value = "/app/config.json")]
    pub config: PathBuf,

    /// Destination file for the collected answers.
    #[arg(short, long, value_name = "OUTPUT", default_value = "/app/output/result.json")]
    pub output: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        use crate::constants::verbosity;
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_default_paths() {
        let args = Args::parse_from(["spinup"]);
        assert_eq!(args.config, PathBuf::from("/app/config.json"));
        assert_eq!(args.output, PathBuf::from("/app/output/result.json"));
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn parses_explicit_flags() {
        let args = Args::parse_from([
            "spinup",
            "--config",
            "env.json",
            "--output",
            "answers.json",
            "-vv",
        ]);
        assert_eq!(args.config, PathBuf::from("env.json"));
        assert_eq!(args.output, PathBuf::from("answers.json"));
        assert_eq!(args.verbose, 2);
    }
}
