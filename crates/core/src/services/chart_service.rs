use crate::models::chart::{
    Axis, ChartDescriptor, ChartLayout, Font, LineStyle, LineTrace, Margin, MarkerStyle, TitleText,
};
use crate::models::coin::{Coin, RangeDays};
use crate::models::history::HistorySeries;

// Fixed dark styling of the price chart.
const LINE_COLOR: &str = "#00cc96";
const LINE_WIDTH: u32 = 3;
const MARKER_SIZE: u32 = 5;
const BACKGROUND: &str = "#0e1117";
const FONT_COLOR: &str = "white";
const FONT_SIZE: u32 = 14;
// Axis colors of the dark theme. Plotly.js ignores template names.
const GRID_COLOR: &str = "#283442";
const AXIS_LINE_COLOR: &str = "#506784";
const HOVER_MODE: &str = "x unified";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Generates chart descriptors from price history.
///
/// The core computes all the numbers and styles; the frontend only renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Build the single-line price chart for `series`.
    ///
    /// Title and trace name come from `coin`/`range` rather than the series
    /// so the chart always describes what was asked for. An empty series
    /// yields a trace with no points.
    pub fn render_chart(&self, series: &HistorySeries, coin: Coin, range: RangeDays) -> ChartDescriptor {
        let (x, y): (Vec<String>, Vec<f64>) = series
            .points
            .iter()
            .map(|p| (p.timestamp.format(TIMESTAMP_FORMAT).to_string(), p.price))
            .unzip();

        let trace = LineTrace {
            kind: "scatter".to_string(),
            mode: "lines+markers".to_string(),
            name: coin.display_name().to_string(),
            x,
            y,
            line: LineStyle {
                color: LINE_COLOR.to_string(),
                width: LINE_WIDTH,
            },
            marker: MarkerStyle { size: MARKER_SIZE },
        };

        ChartDescriptor {
            data: vec![trace],
            layout: dark_layout(chart_title(coin, range)),
        }
    }

    /// Chart shown before any history has been fetched.
    pub fn empty_chart(&self, coin: Coin, range: RangeDays) -> ChartDescriptor {
        self.render_chart(&HistorySeries::empty(coin, range), coin, range)
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

/// e.g. "Bitcoin Price Trend (Last 7 Days)"
pub fn chart_title(coin: Coin, range: RangeDays) -> String {
    format!(
        "{} Price Trend (Last {} Days)",
        coin.display_name(),
        range.days()
    )
}

fn dark_layout(title: String) -> ChartLayout {
    ChartLayout {
        title: TitleText { text: title },
        margin: Margin {
            l: 20,
            r: 20,
            t: 60,
            b: 40,
        },
        xaxis: dark_axis("Date"),
        yaxis: dark_axis("Price (USD)"),
        paper_bgcolor: BACKGROUND.to_string(),
        plot_bgcolor: BACKGROUND.to_string(),
        font: Font {
            color: FONT_COLOR.to_string(),
            size: FONT_SIZE,
        },
        hovermode: HOVER_MODE.to_string(),
    }
}

fn dark_axis(title: &str) -> Axis {
    Axis {
        title: TitleText {
            text: title.to_string(),
        },
        gridcolor: GRID_COLOR.to_string(),
        zerolinecolor: GRID_COLOR.to_string(),
        linecolor: AXIS_LINE_COLOR.to_string(),
    }
}
