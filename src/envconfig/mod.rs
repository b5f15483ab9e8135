use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_SAMPLES: usize = 10_000;
pub const DEFAULT_BOUND: f64 = 10_000.0;
pub const DEFAULT_SEEDS: [f64; 3] = [800.0, 25.0, 3005.0];
pub const DEFAULT_LAMBDA: f64 = 1.97;
pub const DEFAULT_OUTPUT: &str = "itamaraca_results.csv";
pub const DEFAULT_PREVIEW: usize = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parameters of one sampling run.
///
/// `seeds` is kept as a list so that a wrong count reaches the generator and
/// is reported there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub samples: usize,
    pub bound: f64,
    pub seeds: Vec<f64>,
    pub lambda: f64,
    pub output: PathBuf,
    pub preview: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            bound: DEFAULT_BOUND,
            seeds: DEFAULT_SEEDS.to_vec(),
            lambda: DEFAULT_LAMBDA,
            output: PathBuf::from(DEFAULT_OUTPUT),
            preview: DEFAULT_PREVIEW,
        }
    }
}

impl SimulationConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overlays `ITAMARACA_*` values looked up through `lookup`, usually
    /// `std::env::var`. Unset keys keep the current value, unparseable ones
    /// are an error.
    pub fn with_vars<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("ITAMARACA_SAMPLES") {
            self.samples = parse_var("ITAMARACA_SAMPLES", &v)?;
        }
        if let Some(v) = lookup("ITAMARACA_BOUND") {
            self.bound = parse_var("ITAMARACA_BOUND", &v)?;
        }
        if let Some(v) = lookup("ITAMARACA_SEEDS") {
            self.seeds = parse_seed_list(&v).ok_or_else(|| ConfigError::InvalidEnv {
                key: "ITAMARACA_SEEDS",
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup("ITAMARACA_LAMBDA") {
            self.lambda = parse_var("ITAMARACA_LAMBDA", &v)?;
        }
        if let Some(v) = lookup("ITAMARACA_OUTPUT") {
            self.output = PathBuf::from(v);
        }

        Ok(self)
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key,
        value: value.to_string(),
    })
}

/// Parses `"a,b,c"` into floats. Any bad or empty element rejects the whole
/// list, so the count is never changed here.
pub fn parse_seed_list(s: &str) -> Option<Vec<f64>> {
    s.split(',').map(|p| p.trim().parse().ok()).collect()
}
