//! Chart models. Surface-independent data for the two result charts.
//!
//! Renderers (terminal, image, ...) draw these; no drawing happens here.

use crate::domain::{Sentiment, SentimentCounts};

/// Number of histogram bins for the polarity distribution.
pub const HISTOGRAM_BINS: usize = 20;

/// Polarity scores live in this closed interval.
pub const POLARITY_DOMAIN: (f64, f64) = (-1.0, 1.0);

pub const BAR_CHART_TITLE: &str = "Sentiment Distribution of YouTube Comments";
pub const HISTOGRAM_TITLE: &str = "Sentiment Polarity Scores of YouTube Comments";

/// One bar of the categorical chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub sentiment: Sentiment,
    pub count: usize,
}

/// Categorical bar chart: positive, neutral, negative.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub bars: Vec<Bar>,
}

impl BarChart {
    pub fn from_counts(counts: &SentimentCounts) -> Self {
        Self {
            title: BAR_CHART_TITLE,
            x_label: "Sentiment",
            y_label: "Number of Comments",
            bars: Sentiment::ALL
                .into_iter()
                .map(|sentiment| Bar {
                    sentiment,
                    count: counts.get(sentiment),
                })
                .collect(),
        }
    }

    pub fn max_count(&self) -> usize {
        self.bars.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// Gaussian kernel density estimate over the polarity scores.
///
/// Bandwidth follows Scott's rule: `n^(-1/5) * sample_std` (ddof = 1).
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Returns `None` when fewer than two samples exist or they have zero spread.
    pub fn new(samples: &[f64]) -> Option<Self> {
        let n = samples.len();
        if n < 2 {
            return None;
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        let std = variance.sqrt();
        if !std.is_finite() || std == 0.0 {
            return None;
        }
        let bandwidth = (n as f64).powf(-1.0 / 5.0) * std;
        Some(Self {
            samples: samples.to_vec(),
            bandwidth,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Probability density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        let norm = 1.0 / (self.samples.len() as f64 * self.bandwidth * (2.0 * std::f64::consts::PI).sqrt());
        let sum: f64 = self
            .samples
            .iter()
            .map(|s| {
                let z = (x - s) / self.bandwidth;
                (-0.5 * z * z).exp()
            })
            .sum();
        norm * sum
    }
}

/// Histogram of polarity scores over a fixed domain, with an optional density overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub min: f64,
    pub max: f64,
    pub counts: Vec<usize>,
    pub kde: Option<GaussianKde>,
    total: usize,
}

impl Histogram {
    /// Bin `scores` into `bins` equal-width bins over [`POLARITY_DOMAIN`].
    ///
    /// The upper edge is inclusive for the last bin; out-of-domain values land in the edge bins.
    pub fn from_scores(scores: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let (min, max) = POLARITY_DOMAIN;
        let width = (max - min) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &score in scores.iter().filter(|s| !s.is_nan()) {
            let idx = ((score - min) / width).floor();
            let idx = if idx < 0.0 { 0 } else { (idx as usize).min(bins - 1) };
            counts[idx] += 1;
        }
        let total = counts.iter().sum();
        let finite: Vec<f64> = scores.iter().copied().filter(|s| s.is_finite()).collect();
        Self {
            title: HISTOGRAM_TITLE,
            x_label: "Polarity Score",
            y_label: "Frequency",
            min,
            max,
            counts,
            kde: GaussianKde::new(&finite),
            total,
        }
    }

    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.counts.len() as f64
    }

    pub fn bin_center(&self, idx: usize) -> f64 {
        self.min + (idx as f64 + 0.5) * self.bin_width()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Number of binned scores.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Density overlay at each bin center, scaled to count units (`pdf * n * bin_width`).
    pub fn density_curve(&self) -> Option<Vec<f64>> {
        let kde = self.kde.as_ref()?;
        let scale = self.total as f64 * self.bin_width();
        Some(
            (0..self.counts.len())
                .map(|i| kde.pdf(self.bin_center(i)) * scale)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_chart_fixed_order() {
        let counts = SentimentCounts {
            positive: 4,
            neutral: 2,
            negative: 7,
        };
        let chart = BarChart::from_counts(&counts);
        let labels: Vec<_> = chart.bars.iter().map(|b| b.sentiment.label()).collect();
        assert_eq!(labels, ["positive", "neutral", "negative"]);
        assert_eq!(chart.bars[2].count, 7);
        assert_eq!(chart.max_count(), 7);
    }

    #[test]
    fn test_histogram_bins_sum_to_total() {
        let scores = [-1.0, -0.95, -0.5, 0.0, 0.0, 0.3, 0.99, 1.0];
        let hist = Histogram::from_scores(&scores, HISTOGRAM_BINS);
        assert_eq!(hist.counts.len(), 20);
        assert_eq!(hist.counts.iter().sum::<usize>(), scores.len());
        assert_eq!(hist.total(), scores.len());
    }

    #[test]
    fn test_histogram_edges() {
        let hist = Histogram::from_scores(&[-1.0, 1.0, 0.0], HISTOGRAM_BINS);
        assert_eq!(hist.counts[0], 1);
        assert_eq!(hist.counts[19], 1);
        // 0.0 is the lower edge of bin 10
        assert_eq!(hist.counts[10], 1);
    }

    #[test]
    fn test_histogram_clamps_out_of_domain() {
        let hist = Histogram::from_scores(&[-3.0, 2.5], HISTOGRAM_BINS);
        assert_eq!(hist.counts[0], 1);
        assert_eq!(hist.counts[19], 1);
    }

    #[test]
    fn test_histogram_empty() {
        let hist = Histogram::from_scores(&[], HISTOGRAM_BINS);
        assert_eq!(hist.max_count(), 0);
        assert!(hist.kde.is_none());
        assert!(hist.density_curve().is_none());
    }

    #[test]
    fn test_kde_requires_spread() {
        assert!(GaussianKde::new(&[0.5]).is_none());
        assert!(GaussianKde::new(&[0.0, 0.0, 0.0]).is_none());
        assert!(GaussianKde::new(&[-0.5, 0.5]).is_some());
    }

    #[test]
    fn test_kde_scott_bandwidth() {
        let kde = GaussianKde::new(&[-0.5, 0.5]).unwrap();
        // std (ddof=1) = sqrt(0.5); factor = 2^(-1/5)
        let expected = 2f64.powf(-0.2) * 0.5f64.sqrt();
        assert!((kde.bandwidth() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_kde_pdf_symmetric_and_positive() {
        let kde = GaussianKde::new(&[-0.5, 0.5]).unwrap();
        assert!(kde.pdf(0.0) > 0.0);
        assert!((kde.pdf(0.3) - kde.pdf(-0.3)).abs() < 1e-12);
    }

    #[test]
    fn test_density_curve_in_count_units() {
        let scores: Vec<f64> = (0..200).map(|i| -1.0 + i as f64 * 0.01).collect();
        let hist = Histogram::from_scores(&scores, HISTOGRAM_BINS);
        let curve = hist.density_curve().unwrap();
        assert_eq!(curve.len(), 20);
        // Roughly uniform data: ~10 per bin in the interior.
        assert!(curve[10] > 5.0 && curve[10] < 15.0);
    }
}
