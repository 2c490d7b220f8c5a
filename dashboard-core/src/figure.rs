use serde::{Deserialize, Serialize};

use crate::components::Scalar;

/// Title block, shaped as the renderer's `layout.title` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

/// Axis block carrying the source column label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
}

impl Axis {
    fn labeled(text: &str) -> Self {
        Axis {
            title: Title {
                text: text.to_string(),
            },
        }
    }
}

/// Figure-level layout: title, optional axis labels, optional bar mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub title: Title,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
}

/// One data series, tagged the way the browser-side renderer expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter {
        x: Vec<Scalar>,
        y: Vec<f64>,
        mode: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Bar {
        x: Vec<Scalar>,
        y: Vec<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Pie {
        labels: Vec<String>,
        values: Vec<f64>,
    },
}

/// Named series for one color bucket of a grouped bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub x: Vec<Scalar>,
    pub y: Vec<f64>,
}

/// A complete chart specification. Its JSON form feeds straight into the
/// shell's `Plotly.newPlot(div, figure.data, figure.layout)` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: LayoutSpec,
}

impl Figure {
    /// Single-series line chart.
    pub fn line(
        title: impl Into<String>,
        x_label: &str,
        y_label: &str,
        x: Vec<Scalar>,
        y: Vec<f64>,
    ) -> Self {
        Figure {
            data: vec![Trace::Scatter {
                x,
                y,
                mode: "lines".to_string(),
                name: None,
            }],
            layout: cartesian_layout(title.into(), x_label, y_label, None),
        }
    }

    /// Single-series bar chart.
    pub fn bar(
        title: impl Into<String>,
        x_label: &str,
        y_label: &str,
        x: Vec<Scalar>,
        y: Vec<f64>,
    ) -> Self {
        Figure {
            data: vec![Trace::Bar { x, y, name: None }],
            layout: cartesian_layout(title.into(), x_label, y_label, None),
        }
    }

    /// Grouped bar chart, one named series per group.
    pub fn grouped_bar(
        title: impl Into<String>,
        x_label: &str,
        y_label: &str,
        series: Vec<BarSeries>,
    ) -> Self {
        Figure {
            data: series
                .into_iter()
                .map(|s| Trace::Bar {
                    x: s.x,
                    y: s.y,
                    name: Some(s.name),
                })
                .collect(),
            layout: cartesian_layout(title.into(), x_label, y_label, Some("group")),
        }
    }

    /// Pie chart; the renderer derives slice shares from the raw values.
    pub fn pie(title: impl Into<String>, labels: Vec<String>, values: Vec<f64>) -> Self {
        Figure {
            data: vec![Trace::Pie { labels, values }],
            layout: LayoutSpec {
                title: Title { text: title.into() },
                xaxis: None,
                yaxis: None,
                barmode: None,
            },
        }
    }

    pub fn title_text(&self) -> &str {
        &self.layout.title.text
    }
}

fn cartesian_layout(
    title: String,
    x_label: &str,
    y_label: &str,
    barmode: Option<&str>,
) -> LayoutSpec {
    LayoutSpec {
        title: Title { text: title },
        xaxis: Some(Axis::labeled(x_label)),
        yaxis: Some(Axis::labeled(y_label)),
        barmode: barmode.map(str::to_string),
    }
}
