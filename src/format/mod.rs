use crate::export::format_value;
use crate::stats::{Histogram, Summary};

pub const RULE: &str = "--------------------------------------";

/// `Sample <n>: <value>`, `position` is 1-based.
pub fn sample_line(position: usize, value: f64) -> String {
    format!("Sample {}: {}", position, format_value(value))
}

pub fn summary_lines(summary: &Summary) -> Vec<String> {
    let mut lines = vec![
        format!("Samples: {}", summary.count()),
        format!("Mean: {:.2}", summary.mean()),
        format!("Standard Deviation: {:.2}", summary.std_dev()),
    ];
    if let (Some(min), Some(max)) = (summary.min(), summary.max()) {
        lines.push(format!("Min: {}", format_value(min)));
        lines.push(format!("Max: {}", format_value(max)));
    }
    lines
}

/// One line per bin, bar length scaled so the fullest bin spans `width`.
pub fn histogram_lines(histogram: &Histogram, width: usize) -> Vec<String> {
    let peak = histogram.bins().iter().copied().max().unwrap_or(0);
    let step = histogram.bin_width();

    let mut lines: Vec<String> = histogram
        .bins()
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let len = if peak == 0 {
                0
            } else {
                (count as f64 / peak as f64 * width as f64).round() as usize
            };
            format!(
                "{:>10.1} - {:<10.1} {:>7} {}",
                i as f64 * step,
                (i + 1) as f64 * step,
                count,
                "#".repeat(len)
            )
        })
        .collect();

    if histogram.overflow() > 0 {
        lines.push(format!(
            "{:>10} {:<12.1} {:>7}",
            ">",
            histogram.upper(),
            histogram.overflow()
        ));
    }
    lines
}
