use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over the sampling loop. A hidden bar is used when progress
/// output is disabled so the loop does not branch on it.
pub struct Bar {
    progress: ProgressBar,
}

impl Bar {
    pub fn new(message: &str, total: u64) -> Self {
        let progress = ProgressBar::new(total);
        if let Ok(style) =
            ProgressStyle::default_bar().template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        {
            progress.set_style(style);
        }
        progress.set_message(message.to_string());

        Self { progress }
    }

    pub fn hidden() -> Self {
        Self {
            progress: ProgressBar::hidden(),
        }
    }

    pub fn inc(&self, delta: u64) {
        self.progress.inc(delta);
    }

    pub fn position(&self) -> u64 {
        self.progress.position()
    }

    pub fn finish(&self) {
        self.progress.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_bar_counts() {
        let bar = Bar::hidden();
        bar.inc(3);
        bar.inc(2);
        assert_eq!(bar.position(), 5);
        bar.finish();
    }
}
