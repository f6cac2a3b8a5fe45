//! Autoplay run configuration.
//!
//! Defaults come from `TETROMINO_*` environment variables; command-line flags
//! override them.

use std::env;

use anyhow::{anyhow, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayConfig {
    pub seed: u32,
    pub max_pieces: u32,
    pub log_path: Option<String>,
    pub quiet: bool,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            max_pieces: 500,
            log_path: None,
            quiet: false,
        }
    }
}

impl AutoplayConfig {
    /// Create from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("TETROMINO_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.seed);

        let max_pieces = lookup("TETROMINO_MAX_PIECES")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_pieces);

        let log_path = lookup("TETROMINO_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let quiet = lookup("TETROMINO_QUIET")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(defaults.quiet);

        Self {
            seed,
            max_pieces,
            log_path,
            quiet,
        }
    }
}

/// Overlay command-line flags on `base`.
///
/// Accepts `--seed N`, `--pieces N`, `--log PATH` and `--quiet`.
pub fn parse_args(args: &[String], base: AutoplayConfig) -> Result<AutoplayConfig> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--pieces" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --pieces"))?;
                config.max_pieces = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --pieces value: {}", v))?;
            }
            "--log" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log"))?;
                config.log_path = Some(v.clone());
            }
            "--quiet" => {
                config.quiet = true;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}
