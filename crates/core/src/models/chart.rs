use serde::{Deserialize, Serialize};

/// A chart ready for the browser.
///
/// Serializes to a Plotly figure (`{ "data": [...], "layout": {...} }`),
/// so the page hands it straight to `Plotly.react`. The core computes
/// every number and style; the frontend only draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    /// Always exactly one trace
    pub data: Vec<LineTrace>,
    pub layout: ChartLayout,
}

impl ChartDescriptor {
    /// The single price trace.
    pub fn trace(&self) -> Option<&LineTrace> {
        self.data.first()
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }
}

/// One line+markers series. `x` holds UTC timestamps formatted as
/// `%Y-%m-%d %H:%M:%S`, which Plotly parses as dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTrace {
    #[serde(rename = "type")]
    pub kind: String,
    pub mode: String,
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub line: LineStyle,
    pub marker: MarkerStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub title: TitleText,
    pub margin: Margin,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    pub font: Font,
    pub hovermode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleText {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: TitleText,
    pub gridcolor: String,
    pub zerolinecolor: String,
    pub linecolor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub color: String,
    pub size: u32,
}
