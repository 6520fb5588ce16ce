//! Frame-timing collection and formatting
//!
//! Timings are recorded by the driver around each `render_frame` call and
//! never feed back into rendering.

use serde::Serialize;
use std::time::Duration;

/// Accumulated render timings across a run.
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    samples_ms: Vec<f64>,
    total_ms: f64,
    min_ms: f64,
    max_ms: f64,
}

/// Snapshot of the aggregate numbers, serializable for post-run output.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    pub frames: usize,
    pub total_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub mean_ms: f64,
    pub fps: f64,
}

impl RenderStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, elapsed: Duration) {
        let ms = elapsed.as_secs_f64() * 1000.0;
        if self.samples_ms.is_empty() {
            self.min_ms = ms;
            self.max_ms = ms;
        } else {
            self.min_ms = self.min_ms.min(ms);
            self.max_ms = self.max_ms.max(ms);
        }
        self.total_ms += ms;
        self.samples_ms.push(ms);
    }

    pub fn frames(&self) -> usize {
        self.samples_ms.len()
    }

    pub fn mean_ms(&self) -> f64 {
        if self.samples_ms.is_empty() {
            0.0
        } else {
            self.total_ms / self.samples_ms.len() as f64
        }
    }

    /// Average achieved render rate, ignoring display and pacing time.
    pub fn fps(&self) -> f64 {
        let mean = self.mean_ms();
        if mean > 0.0 {
            1000.0 / mean
        } else {
            0.0
        }
    }

    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            frames: self.frames(),
            total_ms: self.total_ms,
            min_ms: self.min_ms,
            max_ms: self.max_ms,
            mean_ms: self.mean_ms(),
            fps: self.fps(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.summary()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Compact single-line format for the status bar.
    pub fn format_compact(&self) -> String {
        let last = self.samples_ms.last().copied().unwrap_or(0.0);
        format!(
            "frame={} render={:.1}ms avg={:.1}ms fps={:.0}",
            self.frames(),
            last,
            self.mean_ms(),
            self.fps()
        )
    }

    /// ASCII histogram of render times, one bucket per line.
    pub fn histogram(&self, buckets: usize, bar_width: usize) -> String {
        if self.samples_ms.is_empty() || buckets == 0 {
            return String::new();
        }

        let span = (self.max_ms - self.min_ms).max(f64::EPSILON);
        let mut counts = vec![0usize; buckets];
        for &ms in &self.samples_ms {
            let idx = (((ms - self.min_ms) / span) * buckets as f64) as usize;
            counts[idx.min(buckets - 1)] += 1;
        }

        let peak = counts.iter().copied().max().unwrap_or(1).max(1);
        let mut out = String::new();
        for (i, &count) in counts.iter().enumerate() {
            let lo = self.min_ms + span * i as f64 / buckets as f64;
            let hi = self.min_ms + span * (i + 1) as f64 / buckets as f64;
            let bar = "#".repeat(count * bar_width / peak);
            out.push_str(&format!("{:7.2}-{:7.2}ms |{:bar_width$}| {}\n", lo, hi, bar, count));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_record_accumulates() {
        let mut stats = RenderStats::new();
        stats.record(ms(2));
        stats.record(ms(4));
        stats.record(ms(6));
        assert_eq!(stats.frames(), 3);
        assert!((stats.mean_ms() - 4.0).abs() < 1e-9);
        let summary = stats.summary();
        assert!((summary.min_ms - 2.0).abs() < 1e-9);
        assert!((summary.max_ms - 6.0).abs() < 1e-9);
        assert!((summary.fps - 250.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_stats() {
        let stats = RenderStats::new();
        assert_eq!(stats.frames(), 0);
        assert_eq!(stats.mean_ms(), 0.0);
        assert_eq!(stats.fps(), 0.0);
        assert!(stats.histogram(8, 40).is_empty());
    }

    #[test]
    fn test_format_compact() {
        let mut stats = RenderStats::new();
        stats.record(ms(5));
        let line = stats.format_compact();
        assert!(line.contains("frame=1"));
        assert!(line.contains("render=5.0ms"));
        assert!(line.contains("fps=200"));
    }

    #[test]
    fn test_to_json_has_fields() {
        let mut stats = RenderStats::new();
        stats.record(ms(3));
        let json = stats.to_json();
        assert!(json.contains("\"frames\":1"));
        assert!(json.contains("\"mean_ms\""));
    }

    #[test]
    fn test_histogram_shape() {
        let mut stats = RenderStats::new();
        for v in [1, 1, 1, 5, 9] {
            stats.record(ms(v));
        }
        let hist = stats.histogram(4, 20);
        assert_eq!(hist.lines().count(), 4);
        // The densest bucket carries the longest bar.
        let first = hist.lines().next().unwrap();
        assert!(first.contains("####################"));
        assert!(first.trim_end().ends_with('3'));
    }
}
