use anyhow::{Context, Result};
use std::io::Write;
use std::time::Instant;

use crate::envconfig::SimulationConfig;
use crate::export::CsvRecordWriter;
use crate::progress::Bar;
use crate::rng::ItamaracaRng;
use crate::stats::{Histogram, Summary};

/// What a finished run produced besides the records themselves.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub samples: u64,
    pub preview: Vec<f64>,
    pub summary: Summary,
    pub histogram: Option<Histogram>,
}

/// Drives one generator through `config.samples` steps.
pub struct Simulation {
    config: SimulationConfig,
    show_progress: bool,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            show_progress: false,
        }
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn generator(&self) -> Result<ItamaracaRng> {
        let config = &self.config;
        ItamaracaRng::new(config.bound, &config.seeds, config.lambda)
            .context("invalid generator configuration")
    }

    /// Creates the configured output file and streams every sample into it.
    /// The generator is built first so a bad seed list never touches the file.
    pub fn run_to_file(&self) -> Result<RunReport> {
        self.run_to_file_with(self.generator()?)
    }

    /// Same as [`Simulation::run_to_file`], continuing from `rng` as given.
    pub fn run_to_file_with(&self, mut rng: ItamaracaRng) -> Result<RunReport> {
        let path = &self.config.output;

        let mut writer = CsvRecordWriter::create(path)
            .with_context(|| format!("failed to create output file {}", path.display()))?;
        tracing::info!("writing {} samples to {}", self.config.samples, path.display());

        let report = self.drive(&mut rng, |index, value| {
            writer
                .write_record(index, value)
                .with_context(|| format!("failed to write record {} to {}", index, path.display()))
        })?;
        writer
            .finish()
            .with_context(|| format!("failed to flush output file {}", path.display()))?;

        Ok(report)
    }

    pub fn run_to_writer<W: Write>(&self, sink: W) -> Result<(RunReport, W)> {
        let mut rng = self.generator()?;
        let mut writer = CsvRecordWriter::new(sink).context("failed to write header")?;

        let report = self.drive(&mut rng, |index, value| {
            writer
                .write_record(index, value)
                .with_context(|| format!("failed to write record {}", index))
        })?;
        let sink = writer.finish().context("failed to flush output")?;

        Ok((report, sink))
    }

    /// Runs the loop with no record sink, for analysis only.
    pub fn run_detached(&self) -> Result<RunReport> {
        let mut rng = self.generator()?;
        self.drive(&mut rng, |_, _| Ok(()))
    }

    fn drive<F>(&self, rng: &mut ItamaracaRng, mut emit: F) -> Result<RunReport>
    where
        F: FnMut(u64, f64) -> Result<()>,
    {
        let config = &self.config;
        let started = Instant::now();
        let total = config.samples as u64;

        let bar = if self.show_progress {
            Bar::new("Generating", total)
        } else {
            Bar::hidden()
        };

        let mut summary = Summary::new();
        let mut histogram = Histogram::new(Histogram::DEFAULT_BINS, config.bound);
        let mut preview = Vec::with_capacity(config.preview.min(config.samples));

        for index in 0..total {
            let value = rng.next_value();
            emit(index, value)?;

            if preview.len() < config.preview {
                preview.push(value);
            }
            summary.push(value);
            if let Some(histogram) = histogram.as_mut() {
                histogram.record(value);
            }
            bar.inc(1);
        }
        bar.finish();

        tracing::debug!(
            "generated {} samples in {:?}, final window {:?}",
            total,
            started.elapsed(),
            rng.seeds()
        );

        Ok(RunReport {
            samples: total,
            preview,
            summary,
            histogram,
        })
    }
}
