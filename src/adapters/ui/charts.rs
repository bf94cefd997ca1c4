//! Implements ChartRenderer on the terminal with crossterm colors.
//!
//! Bar chart is drawn horizontally, the histogram vertically with the
//! density overlay plotted as markers over the bins.

use crate::domain::{BarChart, DomainError, Histogram, Sentiment};
use crate::ports::ChartRenderer;
use chrono::Utc;
use crossterm::QueueableCommand;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{self, Write, stdout};

/// Terminal columns per histogram bin.
const COLUMN_WIDTH: usize = 3;

const BAR_GLYPH: &str = "█";
const CURVE_GLYPH: &str = "●";

const HIST_COLOR: Color = Color::Rgb { r: 0x4c, g: 0x72, b: 0xb0 };
const CURVE_COLOR: Color = Color::Rgb { r: 0xff, g: 0xb0, b: 0x00 };

fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => Color::Rgb { r: 0x55, g: 0xa8, b: 0x68 },
        Sentiment::Neutral => Color::Rgb { r: 0x93, g: 0x93, b: 0x93 },
        Sentiment::Negative => Color::Rgb { r: 0xc4, g: 0x4e, b: 0x52 },
    }
}

/// One histogram grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Bar,
    Curve,
    BarCurve,
}

/// Bar length in columns. Non-zero counts always get at least one column.
pub fn bar_length(count: usize, max: usize, width: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    let len = (count as f64 / max as f64 * width as f64).round() as usize;
    len.clamp(1, width)
}

fn rows_for(value: f64, max_y: f64, height: usize) -> usize {
    if value <= 0.0 || max_y <= 0.0 {
        return 0;
    }
    ((value / max_y * height as f64).round() as usize).clamp(1, height)
}

/// Histogram as a `height x bins` grid, top row first.
pub fn histogram_grid(hist: &Histogram, height: usize) -> Vec<Vec<Cell>> {
    let curve = hist.density_curve();
    let max_y = curve
        .iter()
        .flatten()
        .copied()
        .fold(hist.max_count() as f64, f64::max);

    let bar_rows: Vec<usize> = hist
        .counts
        .iter()
        .map(|&c| rows_for(c as f64, max_y, height))
        .collect();
    let curve_rows: Vec<usize> = match &curve {
        Some(values) => values.iter().map(|&v| rows_for(v, max_y, height)).collect(),
        None => vec![0; hist.counts.len()],
    };

    (0..height)
        .map(|r| {
            let level = height - r;
            (0..hist.counts.len())
                .map(|i| match (bar_rows[i] >= level, curve_rows[i] == level) {
                    (true, true) => Cell::BarCurve,
                    (true, false) => Cell::Bar,
                    (false, true) => Cell::Curve,
                    (false, false) => Cell::Empty,
                })
                .collect()
        })
        .collect()
}

/// Terminal chart renderer.
pub struct TerminalChartRenderer {
    /// Max bar length (bar chart) in columns.
    width: usize,
    /// Histogram height in rows.
    height: usize,
}

impl TerminalChartRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Draw both charts into `out`.
    pub fn draw<W: Write>(&self, out: &mut W, bar: &BarChart, hist: &Histogram) -> io::Result<()> {
        self.draw_bar_chart(out, bar)?;
        out.queue(Print("\r\n"))?;
        self.draw_histogram(out, hist)?;
        out.flush()
    }

    fn draw_title<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
        out.queue(SetAttribute(Attribute::Bold))?
            .queue(Print(title))?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(Print("\r\n"))?;
        Ok(())
    }

    fn draw_bar_chart<W: Write>(&self, out: &mut W, chart: &BarChart) -> io::Result<()> {
        Self::draw_title(out, chart.title)?;
        out.queue(Print(format!("{} by {}\r\n", chart.y_label, chart.x_label)))?;

        let label_width = chart
            .bars
            .iter()
            .map(|b| b.sentiment.label().len())
            .max()
            .unwrap_or(0);
        let max = chart.max_count();
        for b in &chart.bars {
            let len = bar_length(b.count, max, self.width);
            out.queue(Print(format!("{:>w$} │", b.sentiment.label(), w = label_width)))?
                .queue(SetForegroundColor(sentiment_color(b.sentiment)))?
                .queue(Print(BAR_GLYPH.repeat(len)))?
                .queue(ResetColor)?
                .queue(Print(format!(" {}\r\n", b.count)))?;
        }
        out.queue(Print(format!(
            "{:>w$} └{}\r\n",
            "",
            "─".repeat(self.width),
            w = label_width
        )))?;
        Ok(())
    }

    fn draw_histogram<W: Write>(&self, out: &mut W, hist: &Histogram) -> io::Result<()> {
        Self::draw_title(out, hist.title)?;
        out.queue(Print(format!(
            "{} of {} (n = {}, generated {})\r\n",
            hist.y_label,
            hist.x_label,
            hist.total(),
            Utc::now().format("%Y-%m-%d %H:%M UTC")
        )))?;

        if hist.total() == 0 {
            out.queue(Print("(no comments to plot)\r\n"))?;
            return Ok(());
        }

        let grid = histogram_grid(hist, self.height);
        let top = hist
            .density_curve()
            .iter()
            .flatten()
            .copied()
            .fold(hist.max_count() as f64, f64::max);
        let axis_width = format!("{:.0}", top).len().max(1);

        for (r, row) in grid.iter().enumerate() {
            let label = match r {
                0 => format!("{:>w$.0}", top, w = axis_width),
                _ => " ".repeat(axis_width),
            };
            out.queue(Print(format!("{} │", label)))?;
            for cell in row {
                match cell {
                    Cell::Empty => {
                        out.queue(Print(" ".repeat(COLUMN_WIDTH)))?;
                    }
                    Cell::Bar => {
                        out.queue(SetForegroundColor(HIST_COLOR))?
                            .queue(Print(BAR_GLYPH.repeat(COLUMN_WIDTH)))?
                            .queue(ResetColor)?;
                    }
                    Cell::Curve => {
                        out.queue(SetForegroundColor(CURVE_COLOR))?
                            .queue(Print(format!(" {} ", CURVE_GLYPH)))?
                            .queue(ResetColor)?;
                    }
                    Cell::BarCurve => {
                        out.queue(SetForegroundColor(HIST_COLOR))?
                            .queue(Print(BAR_GLYPH))?
                            .queue(SetForegroundColor(CURVE_COLOR))?
                            .queue(Print(CURVE_GLYPH))?
                            .queue(SetForegroundColor(HIST_COLOR))?
                            .queue(Print(BAR_GLYPH))?
                            .queue(ResetColor)?;
                    }
                }
            }
            out.queue(Print("\r\n"))?;
        }

        let span = hist.counts.len() * COLUMN_WIDTH;
        out.queue(Print(format!(
            "{:>w$} └{}\r\n",
            "0",
            "─".repeat(span),
            w = axis_width
        )))?;
        let ticks = format!(
            "{:<half$}{:<rest$}{}",
            format!("{:.1}", hist.min),
            "0.0",
            format!("{:.1}", hist.max),
            half = span / 2,
            rest = (span - span / 2).saturating_sub(3),
        );
        out.queue(Print(format!("{} {}\r\n", " ".repeat(axis_width + 1), ticks)))?;
        Ok(())
    }
}

impl ChartRenderer for TerminalChartRenderer {
    fn render(&self, bar: &BarChart, histogram: &Histogram) -> Result<(), DomainError> {
        let mut out = stdout().lock();
        self.draw(&mut out, bar, histogram)
            .map_err(|e| DomainError::Render(e.to_string()))
    }
}
