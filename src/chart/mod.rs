//! Comparison chart rendering
//!
//! Height on x, seconds on y, one labeled line per builder, with grid,
//! legend, axis titles and a chart title. Output is a standalone SVG
//! document; a plain-text table covers terminals.

mod table;

pub use table::render_table;

use std::fmt::Write;

use crate::sweep::Comparison;
use crate::tree::Builder;
use crate::BenchError;

/// Text and size of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Chart title
    pub title: String,

    /// x axis title
    pub x_label: String,

    /// y axis title
    pub y_label: String,

    /// Canvas width in px
    pub width: u32,

    /// Canvas height in px
    pub height: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Binary tree construction: recursive vs iterative".to_string(),
            x_label: "Tree height".to_string(),
            y_label: "Time (s)".to_string(),
            width: 800,
            height: 500,
        }
    }
}

const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 170.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const Y_TICKS: usize = 5;

/// Line color per builder
fn color(builder: Builder) -> &'static str {
    match builder {
        Builder::Recursive => "blue",
        Builder::Iterative => "green",
        Builder::BottomUp => "orange",
    }
}

/// Minimal XML text escaping for labels
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Maps data coordinates onto the plot area
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    x_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Frame {
    fn x(&self, value: f64) -> f64 {
        self.left + (value - self.x_min) / (self.x_max - self.x_min) * (self.right - self.left)
    }

    fn y(&self, value: f64) -> f64 {
        self.bottom - value / self.y_max * (self.bottom - self.top)
    }
}

/// Render `comparison` as an SVG line chart
pub fn render_svg(comparison: &Comparison, style: &ChartStyle) -> Result<String, BenchError> {
    let (Some(&first), Some(&last)) = (comparison.heights.first(), comparison.heights.last())
    else {
        return Err(BenchError::EmptySweep);
    };
    if comparison.series.is_empty() {
        return Err(BenchError::EmptySweep);
    }

    let width = f64::from(style.width);
    let height = f64::from(style.height);
    // A single height still needs a non-zero x span
    let (x_min, x_max) = if first == last {
        (f64::from(first) - 1.0, f64::from(last) + 1.0)
    } else {
        (f64::from(first), f64::from(last))
    };
    let peak = comparison.max_time_secs();
    let frame = Frame {
        left: MARGIN_LEFT,
        right: (width - MARGIN_RIGHT).max(MARGIN_LEFT + 1.0),
        top: MARGIN_TOP,
        bottom: (height - MARGIN_BOTTOM).max(MARGIN_TOP + 1.0),
        x_min,
        x_max,
        y_max: if peak > 0.0 { peak * 1.05 } else { 1e-9 },
    };

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="12">"#,
        w = style.width,
        h = style.height
    )?;
    writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

    write_grid(&mut svg, &frame, &comparison.heights)?;
    write_axes(&mut svg, &frame, style)?;

    for series in &comparison.series {
        let points: Vec<String> = comparison
            .heights
            .iter()
            .zip(&series.times_secs)
            .map(|(&h, &t)| format!("{:.2},{:.2}", frame.x(f64::from(h)), frame.y(t)))
            .collect();
        writeln!(
            svg,
            r#"<polyline fill="none" stroke="{}" stroke-width="2" points="{}"/>"#,
            color(series.builder),
            points.join(" ")
        )?;
    }

    write_legend(&mut svg, &frame, comparison)?;

    writeln!(
        svg,
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="16">{}</text>"#,
        width / 2.0,
        MARGIN_TOP / 2.0 + 6.0,
        escape(&style.title)
    )?;
    svg.push_str("</svg>\n");

    Ok(svg)
}

fn write_grid(svg: &mut String, frame: &Frame, heights: &[u32]) -> Result<(), BenchError> {
    writeln!(svg, r##"<g stroke="#dddddd" stroke-width="1">"##)?;
    for i in 0..=Y_TICKS {
        let value = frame.y_max * i as f64 / Y_TICKS as f64;
        let y = frame.y(value);
        writeln!(
            svg,
            r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}"/>"#,
            frame.left, frame.right
        )?;
    }
    let stride = heights.len().div_ceil(20).max(1);
    for &h in heights.iter().step_by(stride) {
        let x = frame.x(f64::from(h));
        writeln!(
            svg,
            r#"<line x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}"/>"#,
            frame.top, frame.bottom
        )?;
    }
    writeln!(svg, "</g>")?;

    for i in 0..=Y_TICKS {
        let value = frame.y_max * i as f64 / Y_TICKS as f64;
        writeln!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="end">{value:.2e}</text>"#,
            frame.left - 6.0,
            frame.y(value) + 4.0
        )?;
    }
    for &h in heights.iter().step_by(stride) {
        writeln!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle">{h}</text>"#,
            frame.x(f64::from(h)),
            frame.bottom + 18.0
        )?;
    }
    Ok(())
}

fn write_axes(svg: &mut String, frame: &Frame, style: &ChartStyle) -> Result<(), BenchError> {
    writeln!(
        svg,
        r#"<polyline fill="none" stroke="black" points="{l:.2},{t:.2} {l:.2},{b:.2} {r:.2},{b:.2}"/>"#,
        l = frame.left,
        t = frame.top,
        b = frame.bottom,
        r = frame.right
    )?;
    writeln!(
        svg,
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
        (frame.left + frame.right) / 2.0,
        frame.bottom + 42.0,
        escape(&style.x_label)
    )?;
    let mid_y = (frame.top + frame.bottom) / 2.0;
    writeln!(
        svg,
        r#"<text x="20" y="{mid_y:.2}" text-anchor="middle" transform="rotate(-90 20 {mid_y:.2})">{}</text>"#,
        escape(&style.y_label)
    )?;
    Ok(())
}

fn write_legend(svg: &mut String, frame: &Frame, comparison: &Comparison) -> Result<(), BenchError> {
    let x = frame.right + 16.0;
    for (i, series) in comparison.series.iter().enumerate() {
        let y = frame.top + 10.0 + 20.0 * i as f64;
        writeln!(
            svg,
            r#"<line x1="{x:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{}" stroke-width="2"/>"#,
            x + 24.0,
            color(series.builder)
        )?;
        writeln!(
            svg,
            r#"<text x="{:.2}" y="{:.2}">{}</text>"#,
            x + 30.0,
            y + 4.0,
            escape(series.builder.label())
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::Series;

    fn sample() -> Comparison {
        Comparison {
            heights: vec![1, 2, 3],
            series: vec![
                Series {
                    builder: Builder::Recursive,
                    times_secs: vec![1e-6, 2e-6, 4e-6],
                },
                Series {
                    builder: Builder::Iterative,
                    times_secs: vec![1.5e-6, 2.5e-6, 5e-6],
                },
            ],
        }
    }

    #[test]
    fn test_svg_contains_series_and_labels() {
        let svg = render_svg(&sample(), &ChartStyle::default()).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches(r#"<polyline fill="none" stroke="blue""#).count(), 1);
        assert_eq!(svg.matches(r#"<polyline fill="none" stroke="green""#).count(), 1);
        assert!(svg.contains(">Recursive</text>"));
        assert!(svg.contains(">Iterative</text>"));
        assert!(svg.contains(">Tree height</text>"));
        assert!(svg.contains(">Time (s)</text>"));
        assert!(svg.contains("recursive vs iterative"));
    }

    #[test]
    fn test_labels_escaped() {
        let style = ChartStyle {
            title: "a < b & c".to_string(),
            ..ChartStyle::default()
        };
        let svg = render_svg(&sample(), &style).unwrap();
        assert!(svg.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_single_height() {
        let comparison = Comparison {
            heights: vec![4],
            series: vec![Series {
                builder: Builder::BottomUp,
                times_secs: vec![0.0],
            }],
        };
        let svg = render_svg(&comparison, &ChartStyle::default()).unwrap();
        assert!(svg.contains("orange"));
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn test_empty_rejected() {
        let comparison = Comparison {
            heights: Vec::new(),
            series: Vec::new(),
        };
        assert!(matches!(
            render_svg(&comparison, &ChartStyle::default()),
            Err(BenchError::EmptySweep)
        ));
    }
}
