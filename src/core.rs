use serde::{Deserialize, Serialize};

/// Common metadata for one panel
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PanelMeta {
    /// Title displayed at the top of the panel
    pub title: Option<String>,
    /// X-axis label (e.g., "random variable")
    pub x_label: Option<String>,
    /// Y-axis label (e.g., "pdf")
    pub y_label: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineDash {
    #[default]
    Solid,
    Dash,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub dash: LineDash,
    pub width: f32, // line width in pixels
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            dash: LineDash::Solid,
            width: 2.0,
        }
    }
}

impl LineStyle {
    pub const fn solid(width: f32) -> Self {
        Self {
            dash: LineDash::Solid,
            width,
        }
    }

    pub const fn dashed(width: f32) -> Self {
        Self {
            dash: LineDash::Dash,
            width,
        }
    }
}

/// Baseline-fill semantics for a curve entry. `ToZeroY` tells the renderer
/// to close the area between the curve and y=0 instead of stroking a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    #[default]
    None,
    ToZeroY,
}

/// One curve description within a panel: index-aligned x/y sample arrays
/// plus display metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Curve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Legend label; `None` for annotation-only entries
    pub name: Option<String>,
    pub show_legend: bool,
    pub line: LineStyle,
    pub fill: Fill,
    /// Text surfaced on hover (fill entries carry their area annotation here)
    pub hover_text: Option<String>,
}

impl Curve {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            name: None,
            show_legend: true,
            line: LineStyle::default(),
            fill: Fill::None,
            hover_text: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_hover_text(mut self, text: impl Into<String>) -> Self {
        self.hover_text = Some(text.into());
        self
    }

    pub fn with_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    /// Number of samples in this curve
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// The ordered list of curve descriptions handed to the rendering boundary
/// for one panel.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CurveSet {
    pub meta: PanelMeta,
    pub curves: Vec<Curve>,
}

impl CurveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.meta.x_label = Some(label.into());
        self
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.meta.y_label = Some(label.into());
        self
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curves.push(curve);
        self
    }

    /// Data-space bounding box over all curves, skipping non-finite samples
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut min = [f64::INFINITY; 2];
        let mut max = [f64::NEG_INFINITY; 2];
        let mut any = false;
        for c in &self.curves {
            for (&x, &y) in c.x.iter().zip(&c.y) {
                if !x.is_finite() || !y.is_finite() {
                    continue;
                }
                min[0] = min[0].min(x);
                min[1] = min[1].min(y);
                max[0] = max[0].max(x);
                max[1] = max[1].max(y);
                any = true;
            }
        }
        any.then_some((min, max))
    }
}
