use std::path::PathBuf;

use clap::Parser;

use crate::census::MAX_COUNT;
use crate::config::{Config, ConfigError};

/// Reports how many random intervals enclose each randomly drawn number.
#[derive(Debug, Parser)]
#[command(name = "enclosed", version, about)]
pub struct Cli {
    /// Number of intervals to generate, as a positive integer. Omitted,
    /// non-integer, zero or oversized values fall back to the configured default.
    #[arg(value_name = "COUNT", allow_negative_numbers = true)]
    pub count: Option<String>,

    /// Upper bound for drawn numbers and interval ends
    #[arg(long, value_name = "N")]
    pub max_value: Option<u64>,

    /// Seed the random generator for a reproducible run
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Quit after printing this many lines
    #[arg(long, value_name = "N")]
    pub iterations: Option<u64>,

    /// Read configuration from PATH instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Effective settings after merging the config file with the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub max_value: u64,
    pub default_count: usize,
    /// Count carried by the first `Init`; `None` keeps `default_count`.
    pub count: Option<usize>,
    pub seed: Option<u64>,
    pub iterations: Option<u64>,
    pub quit_key: char,
}

impl Cli {
    /// Loads the config file named by `--config`, or the default one.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Command-line values win over the config file.
    pub fn resolve(&self, config: &Config) -> Result<Settings, ConfigError> {
        let max_value = self.max_value.unwrap_or(config.census.max_value);
        if max_value == 0 {
            return Err(ConfigError::ValidationError {
                message: "--max-value must be at least 1".to_string(),
            });
        }

        Ok(Settings {
            max_value,
            default_count: config.census.default_count,
            count: parse_count(self.count.as_deref()),
            seed: self.seed,
            iterations: self.iterations,
            quit_key: config.input.quit_key,
        })
    }
}

/// Lenient count parsing: anything but an integer in `1..=MAX_COUNT` means
/// "use the default".
pub fn parse_count(raw: Option<&str>) -> Option<usize> {
    let raw = raw?;
    match raw.trim().parse::<usize>() {
        Ok(0) => None,
        Ok(n) if n > MAX_COUNT => {
            tracing::debug!("Ignoring interval count {} above {}", n, MAX_COUNT);
            None
        }
        Ok(n) => Some(n),
        Err(_) => {
            tracing::debug!("Ignoring non-numeric interval count {:?}", raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("enclosed").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parse_count_accepts_positive_integers() {
        assert_eq!(parse_count(Some("5")), Some(5));
        assert_eq!(parse_count(Some(" 12 ")), Some(12));
    }

    #[test]
    fn parse_count_falls_back_on_bad_input() {
        assert_eq!(parse_count(None), None);
        assert_eq!(parse_count(Some("0")), None);
        assert_eq!(parse_count(Some("abc")), None);
        assert_eq!(parse_count(Some("-3")), None);
        assert_eq!(parse_count(Some("")), None);
        assert_eq!(parse_count(Some("1e3")), None);
    }

    #[test]
    fn parse_count_falls_back_above_cap() {
        assert_eq!(parse_count(Some("1152921504606846976")), None);
        assert_eq!(parse_count(Some("99999999999999999999999")), None);
        assert_eq!(parse_count(Some(&(MAX_COUNT + 1).to_string())), None);
        assert_eq!(parse_count(Some(&MAX_COUNT.to_string())), Some(MAX_COUNT));
    }

    #[test]
    fn negative_count_is_not_mistaken_for_a_flag() {
        let cli = parse(&["-3"]);
        assert_eq!(cli.count.as_deref(), Some("-3"));
    }

    #[test]
    fn resolve_prefers_command_line() {
        let cli = parse(&["7", "--max-value", "50", "--seed", "9", "--iterations", "3"]);
        let settings = cli.resolve(&Config::default()).unwrap();
        assert_eq!(settings.max_value, 50);
        assert_eq!(settings.count, Some(7));
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.iterations, Some(3));
        assert_eq!(settings.quit_key, 'q');
    }

    #[test]
    fn resolve_uses_config_defaults() {
        let mut config = Config::default();
        config.census.max_value = 99;
        config.census.default_count = 4;
        let settings = parse(&[]).resolve(&config).unwrap();
        assert_eq!(settings.max_value, 99);
        assert_eq!(settings.default_count, 4);
        assert_eq!(settings.count, None);
    }

    #[test]
    fn resolve_rejects_zero_bound() {
        let cli = parse(&["--max-value", "0"]);
        assert!(matches!(
            cli.resolve(&Config::default()),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
