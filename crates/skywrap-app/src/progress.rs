//! Row-completion progress reporting through `tracing`.

use tracing::info;

/// Logs an event every `step` completed rows and on the final row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowProgress {
    total: u32,
    step: Option<u32>,
}

impl RowProgress {
    /// Report roughly every `step_percent` percent of `total` rows.
    /// A `step_percent` of 0 disables intermediate reports.
    #[must_use]
    pub fn new(total: u32, step_percent: u32) -> Self {
        let step = (step_percent > 0).then(|| {
            let rows = (u64::from(total) * u64::from(step_percent)).div_ceil(100);
            rows.clamp(1, u64::from(total.max(1))) as u32
        });
        Self { total, step }
    }

    /// Whether completing row number `completed` (1-based) should be logged.
    #[must_use]
    pub fn should_report(&self, completed: u32) -> bool {
        match self.step {
            Some(step) => completed == self.total || completed % step == 0,
            None => false,
        }
    }

    /// Row observer suitable for `project_with_progress`.
    pub fn on_row(&self, completed: u32, total: u32) {
        if self.should_report(completed) {
            let percent = u64::from(completed) * 100 / u64::from(total.max(1));
            info!(completed, total, percent, "converting");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reported(progress: &RowProgress, total: u32) -> Vec<u32> {
        (1..=total).filter(|&r| progress.should_report(r)).collect()
    }

    #[test]
    fn test_ten_percent_steps() {
        let progress = RowProgress::new(100, 10);
        let expected: Vec<u32> = (1..=10).map(|i| i * 10).collect();
        assert_eq!(reported(&progress, 100), expected);
    }

    #[test]
    fn test_uneven_total_reports_last_row() {
        let progress = RowProgress::new(7, 50);
        // ceil(3.5) = 4 rows per step.
        assert_eq!(reported(&progress, 7), [4, 7]);
    }

    #[test]
    fn test_tiny_step_reports_every_row() {
        let progress = RowProgress::new(3, 1);
        assert_eq!(reported(&progress, 3), [1, 2, 3]);
    }

    #[test]
    fn test_zero_percent_disables() {
        let progress = RowProgress::new(50, 0);
        assert!(reported(&progress, 50).is_empty());
    }

    #[test]
    fn test_full_step_reports_once() {
        let progress = RowProgress::new(1024, 100);
        assert_eq!(reported(&progress, 1024), [1024]);
    }
}
