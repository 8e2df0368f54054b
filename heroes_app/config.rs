use dotenvy::dotenv;
use std::env;

use heroes_types::common::DEFAULT_PAGE_SIZE;

const DEFAULT_LATENCY_MIN_MS: u64 = 200;
const DEFAULT_LATENCY_MAX_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub page_size: usize,
    pub latency_min_ms: u64,
    pub latency_max_ms: u64,
    pub seed_roster: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from `lookup`, which returns the raw value of a
    /// variable when it is set. Unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let page_size = match lookup("HEROES_PAGE_SIZE") {
            Some(val) => val.trim().parse::<usize>().unwrap_or(DEFAULT_PAGE_SIZE).max(1),
            None => DEFAULT_PAGE_SIZE,
        };

        let latency_min_ms = match lookup("HEROES_LATENCY_MIN_MS") {
            Some(val) => val.trim().parse::<u64>().unwrap_or(DEFAULT_LATENCY_MIN_MS),
            None => DEFAULT_LATENCY_MIN_MS,
        };

        let latency_max_ms = match lookup("HEROES_LATENCY_MAX_MS") {
            Some(val) => val.trim().parse::<u64>().unwrap_or(DEFAULT_LATENCY_MAX_MS),
            None => DEFAULT_LATENCY_MAX_MS,
        }
        .max(latency_min_ms);

        let seed_roster = match lookup("HEROES_SEED_ROSTER") {
            Some(val) => !matches!(
                val.trim().to_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            ),
            None => true,
        };

        Self {
            page_size,
            latency_min_ms,
            latency_max_ms,
            seed_roster,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            latency_min_ms: DEFAULT_LATENCY_MIN_MS,
            latency_max_ms: DEFAULT_LATENCY_MAX_MS,
            seed_roster: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn test_page_size() {
        assert_eq!(config_from(&[("HEROES_PAGE_SIZE", "25")]).page_size, 25);
        assert_eq!(config_from(&[("HEROES_PAGE_SIZE", "0")]).page_size, 1);
        assert_eq!(
            config_from(&[("HEROES_PAGE_SIZE", "lots")]).page_size,
            DEFAULT_PAGE_SIZE
        );
        assert_eq!(
            config_from(&[("HEROES_PAGE_SIZE", "-3")]).page_size,
            DEFAULT_PAGE_SIZE
        );
    }

    #[test]
    fn test_latency_max_is_clamped_to_min() {
        let config = config_from(&[
            ("HEROES_LATENCY_MIN_MS", "500"),
            ("HEROES_LATENCY_MAX_MS", "100"),
        ]);
        assert_eq!(config.latency_min_ms, 500);
        assert_eq!(config.latency_max_ms, 500);

        // The default max also yields to a larger min.
        let config = config_from(&[("HEROES_LATENCY_MIN_MS", "1500")]);
        assert_eq!(config.latency_max_ms, 1500);

        let config = config_from(&[
            ("HEROES_LATENCY_MIN_MS", "oops"),
            ("HEROES_LATENCY_MAX_MS", "300"),
        ]);
        assert_eq!(config.latency_min_ms, DEFAULT_LATENCY_MIN_MS);
        assert_eq!(config.latency_max_ms, 300);
    }

    #[test]
    fn test_seed_roster_flag() {
        for off in ["0", "false", "NO", "Off", " false "] {
            assert!(
                !config_from(&[("HEROES_SEED_ROSTER", off)]).seed_roster,
                "{off:?} should disable seeding"
            );
        }
        for on in ["1", "true", "yes", "anything"] {
            assert!(config_from(&[("HEROES_SEED_ROSTER", on)]).seed_roster);
        }
    }
}
