pub mod envconfig;
pub mod export;
pub mod format;
pub mod progress;
pub mod rng;
pub mod runner;
pub mod stats;

pub use envconfig::{ConfigError, SimulationConfig};
pub use export::CsvRecordWriter;
pub use rng::{ItamaracaRng, SeedError};
pub use runner::{RunReport, Simulation};
pub use stats::{Histogram, Summary};
