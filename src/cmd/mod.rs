use anyhow::{anyhow, Context, Result};
use clap::Args;
use std::path::PathBuf;

use itamaraca::envconfig::{parse_seed_list, SimulationConfig};
use itamaraca::format::{histogram_lines, sample_line, summary_lines, RULE};
use itamaraca::runner::Simulation;
use itamaraca::rng::ItamaracaRng;

const HISTOGRAM_WIDTH: usize = 50;

/// Parameter overrides shared by every command. Unset flags fall back to the
/// environment, then the config file, then the reference defaults.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// JSON file with any of: samples, bound, seeds, lambda, output, preview
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    #[arg(short = 'n', long, global = true)]
    pub samples: Option<usize>,
    #[arg(short, long, global = true)]
    pub bound: Option<f64>,
    /// Comma-separated seed list, e.g. 800,25,3005
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    pub seeds: Option<String>,
    #[arg(short, long, global = true, allow_hyphen_values = true)]
    pub lambda: Option<f64>,
}

impl ConfigArgs {
    pub fn resolve(&self) -> Result<SimulationConfig> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Builds the config from the file (or defaults), the variables visible
    /// through `lookup`, then the flags, each overriding the previous one.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<SimulationConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match &self.config {
            Some(path) => SimulationConfig::from_file(path)?,
            None => SimulationConfig::default(),
        };
        let mut config = base.with_vars(lookup)?;

        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(bound) = self.bound {
            config.bound = bound;
        }
        if let Some(seeds) = &self.seeds {
            config.seeds = parse_seed_list(seeds)
                .ok_or_else(|| anyhow!("invalid seed list {:?}", seeds))?;
        }
        if let Some(lambda) = self.lambda {
            config.lambda = lambda;
        }

        tracing::info!(
            "config: samples={} bound={} seeds={:?} lambda={}",
            config.samples,
            config.bound,
            config.seeds,
            config.lambda
        );
        Ok(config)
    }
}

/// Flags of the default `generate` command. Accepted both before and after
/// the `generate` keyword.
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct GenerateArgs {
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Number of samples echoed to the console
    #[arg(short, long)]
    pub preview: Option<usize>,
    #[arg(long)]
    pub no_progress: bool,
    /// Print summary statistics after writing
    #[arg(long)]
    pub stats: bool,
}

impl GenerateArgs {
    /// Values given after `generate` win over the ones given before it.
    pub fn merge(self, later: GenerateArgs) -> Self {
        Self {
            output: later.output.or(self.output),
            preview: later.preview.or(self.preview),
            no_progress: self.no_progress || later.no_progress,
            stats: self.stats || later.stats,
        }
    }
}

pub fn generate(mut config: SimulationConfig, args: GenerateArgs) -> Result<()> {
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(preview) = args.preview {
        config.preview = preview;
    }

    let simulation = Simulation::new(config).show_progress(!args.no_progress);
    // Reject a bad seed list before printing anything.
    let rng = simulation.generator()?;

    let config = simulation.config();
    println!("--- Itamaraca PRNG Simulation ---");
    println!("Generating {} numbers...", config.samples);

    let report = simulation.run_to_file_with(rng)?;

    for (i, value) in report.preview.iter().enumerate() {
        println!("{}", sample_line(i + 1, *value));
    }
    if args.stats {
        println!("{}", RULE);
        for line in summary_lines(&report.summary) {
            println!("{}", line);
        }
    }

    println!("{}", RULE);
    println!("Success! Data exported to '{}'.", config.output.display());
    Ok(())
}

pub fn stats(config: SimulationConfig, bins: bool) -> Result<()> {
    let report = Simulation::new(config).run_detached()?;

    println!("--- Itamaraca PRNG Results ---");
    for line in summary_lines(&report.summary) {
        println!("{}", line);
    }

    if bins {
        match &report.histogram {
            Some(histogram) => {
                println!("{}", RULE);
                println!("Uniformity ({} bins over [0, {}]):", histogram.bins().len(), histogram.upper());
                for line in histogram_lines(histogram, HISTOGRAM_WIDTH) {
                    println!("{}", line);
                }
            }
            None => tracing::warn!("bound is not positive, histogram skipped"),
        }
    }
    Ok(())
}

pub fn preview(config: SimulationConfig, count: usize) -> Result<()> {
    let mut rng = ItamaracaRng::new(config.bound, &config.seeds, config.lambda)
        .context("invalid generator configuration")?;

    for (i, value) in rng.by_ref().take(count).enumerate() {
        println!("{}", sample_line(i + 1, value));
    }
    tracing::debug!("final window {:?}", rng.seeds());
    Ok(())
}

pub fn version() -> Result<()> {
    println!("itamaraca version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn write_config(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("itamaraca-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_precedence_flag_env_file() {
        let path = write_config(
            "precedence",
            r#"{"samples": 7, "bound": 50.0, "lambda": 0.5, "seeds": [1.0, 2.0, 3.0]}"#,
        );
        let env = vars(&[("ITAMARACA_BOUND", "60"), ("ITAMARACA_LAMBDA", "0.75")]);
        let args = ConfigArgs {
            config: Some(path.clone()),
            lambda: Some(1.25),
            ..ConfigArgs::default()
        };

        let config = args.resolve_with(|k| env.get(k).cloned());
        std::fs::remove_file(&path).unwrap();
        let config = config.unwrap();

        // file only
        assert_eq!(config.samples, 7);
        assert_eq!(config.seeds, vec![1.0, 2.0, 3.0]);
        // env over file
        assert_eq!(config.bound, 60.0);
        // flag over env over file
        assert_eq!(config.lambda, 1.25);
        // untouched default
        assert_eq!(config.preview, 5);
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = ConfigArgs::default().resolve_with(|_| None).unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_seed_flag_overrides_env() {
        let env = vars(&[("ITAMARACA_SEEDS", "9,9,9")]);
        let args = ConfigArgs {
            seeds: Some("4,5,6".to_string()),
            ..ConfigArgs::default()
        };
        let config = args.resolve_with(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.seeds, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_seed_flag_with_empty_field_is_rejected() {
        let args = ConfigArgs {
            seeds: Some("800,,25,3005".to_string()),
            ..ConfigArgs::default()
        };
        let err = args.resolve_with(|_| None).unwrap_err();
        assert!(err.to_string().contains("invalid seed list"));
    }

    #[test]
    fn test_bad_config_file_is_reported() {
        let path = write_config("malformed", "[1, 2");
        let args = ConfigArgs {
            config: Some(path.clone()),
            ..ConfigArgs::default()
        };
        let result = args.resolve_with(|_| None);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_args_merge() {
        let before = GenerateArgs {
            output: Some(PathBuf::from("a.csv")),
            preview: Some(2),
            no_progress: true,
            stats: false,
        };
        let after = GenerateArgs {
            output: Some(PathBuf::from("b.csv")),
            stats: true,
            ..GenerateArgs::default()
        };
        let merged = before.merge(after);

        assert_eq!(merged.output, Some(PathBuf::from("b.csv")));
        assert_eq!(merged.preview, Some(2));
        assert!(merged.no_progress);
        assert!(merged.stats);
    }
}
