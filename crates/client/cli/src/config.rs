//! CLI runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Data directory used when neither `RACE_DATA_DIR` nor `--data-dir` is set,
/// relative to the workspace root.
const BUNDLED_DATA_DIR: &str = "crates/race/content/data";

/// Configuration required to run the terminal client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub session_id: Option<String>,
    pub auto_advance: bool,
    pub seed: Option<u64>,
    pub max_turns: Option<u64>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RACE_DATA_DIR` - Directory holding `config.toml` and `tracks/`
    /// - `RACE_SESSION_ID` - Session identifier for log files (default: auto-generated)
    /// - `RACE_AUTO_ADVANCE` - Play turns without waiting for Enter (default: false)
    /// - `RACE_SEED` - Base seed for random strategies (default: fresh entropy)
    /// - `RACE_MAX_TURNS` - Stop a race after this many turns (default: unlimited)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("RACE_DATA_DIR").ok().map(PathBuf::from);
        config.session_id = env::var("RACE_SESSION_ID").ok();

        if let Some(enable) = read_env::<bool>("RACE_AUTO_ADVANCE") {
            config.auto_advance = enable;
        } else if env::var("RACE_AUTO_ADVANCE").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.auto_advance = true;
        }

        config.seed = read_env::<u64>("RACE_SEED");
        config.max_turns = read_env::<u64>("RACE_MAX_TURNS").filter(|&turns| turns > 0);

        config
    }

    /// Applies command-line flags on top of the environment.
    pub fn with_args(mut self, args: &crate::Args) -> Self {
        if let Some(dir) = &args.data_dir {
            self.data_dir = Some(dir.clone());
        }
        if args.auto {
            self.auto_advance = true;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if args.max_turns.is_some() {
            self.max_turns = args.max_turns;
        }
        self
    }

    /// The configured data directory, or the bundled one.
    ///
    /// The bundled directory is looked up relative to the executable
    /// (`target/<profile>/race`) first, then the current directory.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }

        let from_exe = env::current_exe().ok().and_then(|exe| {
            exe.parent()
                .and_then(|p| p.parent())
                .and_then(|p| p.parent())
                .map(|root| root.join(BUNDLED_DATA_DIR))
        });
        match from_exe {
            Some(dir) if dir.exists() => dir,
            _ => PathBuf::from(BUNDLED_DATA_DIR),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::Args;

    #[test]
    fn flags_override_environment_values() {
        let from_env = CliConfig {
            data_dir: Some(PathBuf::from("/srv/race")),
            session_id: Some("nightly".into()),
            auto_advance: false,
            seed: Some(1),
            max_turns: None,
        };
        let args = Args::parse_from(["race", "oval", "--auto", "--seed", "9", "--max-turns", "50"]);

        let config = from_env.with_args(&args);
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/race")));
        assert_eq!(config.session_id.as_deref(), Some("nightly"));
        assert!(config.auto_advance);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_turns, Some(50));
    }

    #[test]
    fn explicit_data_dir_wins() {
        let config = CliConfig {
            data_dir: Some(PathBuf::from("/data")),
            ..CliConfig::default()
        };
        assert_eq!(config.resolve_data_dir(), PathBuf::from("/data"));
    }
}
