//! Assembles the pdf and cdf view payloads for the rendering boundary.
//!
//! Both compose functions are pure: one call per user interaction, no state
//! carried between calls. The boundary re-sends the slider value and the
//! most recent click together on every update, so a stale click is always
//! interpreted against the currently selected curve's data.

use serde::{Deserialize, Serialize};

use crate::core::{Curve, CurveSet, Fill, LineStyle};
use crate::dist::{DistributionCache, SigmaEntry, SigmaKey};

/// Position of the sigma-selected curve within both panels. The reference
/// curve always renders first, at index 0.
pub const VARIABLE_CURVE: usize = 1;

const REFERENCE_NAME: &str = "standard normal distribution";

const REFERENCE_LINE: LineStyle = LineStyle::dashed(1.5);
const VARIABLE_LINE: LineStyle = LineStyle::solid(3.0);

/// A click on the cdf panel, as reported by the boundary. Ephemeral:
/// constructed from one raw interaction event, consumed once, discarded.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ClickSelection {
    /// Which rendered curve was hit (only [`VARIABLE_CURVE`] triggers shading)
    pub curve_index: usize,
    /// Index into the rendered sample grid
    pub sample_index: usize,
    /// The clicked x-position in data space
    pub x_value: f64,
}

fn variable_name(key: SigmaKey) -> String {
    format!("normal distribution (sigma={:.1})", key.sigma())
}

fn reference_curve(x: &[f64], values: &[f64]) -> Curve {
    Curve::new(x.to_vec(), values.to_vec())
        .with_name(REFERENCE_NAME)
        .with_line(REFERENCE_LINE)
}

fn variable_curve(x: &[f64], values: &[f64], key: SigmaKey) -> Curve {
    Curve::new(x.to_vec(), values.to_vec())
        .with_name(variable_name(key))
        .with_line(VARIABLE_LINE)
}

/// The pdf panel: reference curve, selected curve, and (when the boundary
/// reports a click on the selected cdf curve) a third entry shading the
/// area under the selected pdf from the left edge up to the clicked x.
pub fn compose_pdf_view(
    cache: &DistributionCache,
    key: SigmaKey,
    click: Option<&ClickSelection>,
) -> CurveSet {
    let x = cache.grid().points();
    let entry = cache.get(key);

    let mut set = CurveSet::new()
        .with_title("Probability density function")
        .with_x_label("random variable")
        .with_y_label("pdf")
        .with_curve(reference_curve(x, cache.reference().pdf.values()))
        .with_curve(variable_curve(x, entry.pdf.values(), key));

    if let Some(click) = click {
        if click.curve_index == VARIABLE_CURVE {
            set = set.with_curve(shaded_area(x, entry, click));
        }
        // Clicks on the reference curve (or anything else) never shade.
    }
    set
}

/// The cdf panel: always exactly two curves. Clicks here are consumed as
/// input for the pdf panel, never visualized on this one.
pub fn compose_cdf_view(cache: &DistributionCache, key: SigmaKey) -> CurveSet {
    let x = cache.grid().points();
    CurveSet::new()
        .with_title("Cumulative distribution function")
        .with_x_label("random variable")
        .with_y_label("cdf")
        .with_curve(reference_curve(x, cache.reference().cdf.values()))
        .with_curve(variable_curve(x, cache.get(key).cdf.values(), key))
}

/// The fill entry: the selected pdf truncated to the closed prefix up to
/// the clicked sample, annotated with the exact cumulative mass at the
/// clicked x. Carries no line geometry and stays out of the legend.
fn shaded_area(x: &[f64], entry: &SigmaEntry, click: &ClickSelection) -> Curve {
    // The boundary only reports indices it rendered; clamp anyway.
    let end = click.sample_index.min(x.len() - 1);
    let mass = entry.cdf_at(click.x_value);
    Curve::new(x[..=end].to_vec(), entry.pdf.values()[..=end].to_vec())
        .with_fill(Fill::ToZeroY)
        .with_hover_text(format!("area: {mass:.3}"))
        .with_legend(false)
}
