/// Running summary of a sample stream (Welford). Standard deviation is the
/// population one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    count: u64,
    mean: f64,
    m2: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: &[f64]) -> Self {
        let mut summary = Self::new();
        for &v in values {
            summary.push(v);
        }
        summary
    }

    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);

        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }
}

/// Equal-width bins over `[0, upper]`. Values above `upper` land in
/// `overflow`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    upper: f64,
    bins: Vec<u64>,
    overflow: u64,
}

impl Histogram {
    pub const DEFAULT_BINS: usize = 40;

    pub fn new(bins: usize, upper: f64) -> Option<Self> {
        if bins == 0 || upper <= 0.0 || !upper.is_finite() {
            return None;
        }
        Some(Self {
            upper,
            bins: vec![0; bins],
            overflow: 0,
        })
    }

    pub fn record(&mut self, value: f64) {
        if value > self.upper || value.is_nan() {
            self.overflow += 1;
            return;
        }
        let last = self.bins.len() - 1;
        let idx = ((value / self.upper) * self.bins.len() as f64) as usize;
        self.bins[idx.min(last)] += 1;
    }

    pub fn bins(&self) -> &[u64] {
        &self.bins
    }

    pub fn overflow(&self) -> u64 {
        self.overflow
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn bin_width(&self) -> f64 {
        self.upper / self.bins.len() as f64
    }

    pub fn total(&self) -> u64 {
        self.bins.iter().sum::<u64>() + self.overflow
    }
}
