//! Integration tests for the distribution cache and the view composer:
//! cache-wide numeric properties plus the exact payload shapes the
//! rendering boundary depends on.

use gauss_charts::compose::{ClickSelection, compose_cdf_view, compose_pdf_view};
use gauss_charts::dist::{DistributionCache, SIGMA_MAX, SIGMA_MIN, SigmaKey};
use gauss_charts::grid::GRID_POINTS;

fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) / 2.0)
        .sum()
}

#[test]
fn pdf_mass_matches_the_truncated_cdf_mass_for_every_key() {
    let cache = DistributionCache::build().unwrap();
    let x = cache.grid().points();
    for raw in SIGMA_MIN..=SIGMA_MAX {
        let entry = cache.get(SigmaKey::new(raw).unwrap());
        let integral = trapezoid(x, entry.pdf.values());
        // The grid truncates the domain at +-5, so the trapezoidal mass
        // should agree with cdf(5) - cdf(-5), not necessarily with 1.
        let expected = entry.cdf_at(5.0) - entry.cdf_at(-5.0);
        assert!(
            (integral - expected).abs() < 1e-3,
            "key {raw}: integral {integral} vs truncated mass {expected}"
        );
    }
}

#[test]
fn pdf_mass_is_near_unity_for_moderate_sigma() {
    let cache = DistributionCache::build().unwrap();
    let x = cache.grid().points();
    // Up to sigma = 1.5 the domain still covers > 3.3 standard deviations,
    // so the truncated mass is within 1e-2 of 1.
    for raw in SIGMA_MIN..=15 {
        let entry = cache.get(SigmaKey::new(raw).unwrap());
        let integral = trapezoid(x, entry.pdf.values());
        assert!(
            (integral - 1.0).abs() < 1e-2,
            "key {raw}: integral {integral}"
        );
    }
}

#[test]
fn cdf_is_non_decreasing_and_within_unit_range() {
    let cache = DistributionCache::build().unwrap();
    for raw in SIGMA_MIN..=SIGMA_MAX {
        let values = cache.get(SigmaKey::new(raw).unwrap()).cdf.values();
        for pair in values.windows(2) {
            assert!(pair[0] <= pair[1], "key {raw}: cdf decreases at {:?}", pair);
        }
        assert!(values.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }
}

#[test]
fn pdf_is_symmetric_about_the_grid_midpoint() {
    let cache = DistributionCache::build().unwrap();
    for raw in SIGMA_MIN..=SIGMA_MAX {
        let values = cache.get(SigmaKey::new(raw).unwrap()).pdf.values();
        for i in 0..values.len() {
            let mirrored = values[values.len() - 1 - i];
            assert!(
                (values[i] - mirrored).abs() < 1e-9,
                "key {raw}: asymmetric at index {i}"
            );
        }
    }
}

#[test]
fn pdf_view_without_click_has_no_fill_entry() {
    let cache = DistributionCache::build().unwrap();
    let set = compose_pdf_view(&cache, SigmaKey::STANDARD, None);
    assert_eq!(set.curves.len(), 2);
    assert!(set.curves.iter().all(|c| c.hover_text.is_none()));
}

#[test]
fn click_at_the_mean_annotates_half_the_mass() {
    let cache = DistributionCache::build().unwrap();
    let click = ClickSelection {
        curve_index: 1,
        sample_index: 74,
        x_value: 0.0,
    };
    let set = compose_pdf_view(&cache, SigmaKey::clamped(13), Some(&click));
    assert_eq!(set.curves.len(), 3);
    assert_eq!(set.curves[2].hover_text.as_deref(), Some("area: 0.500"));
}

#[test]
fn click_on_the_reference_curve_suppresses_shading() {
    let cache = DistributionCache::build().unwrap();
    let click = ClickSelection {
        curve_index: 0,
        sample_index: 74,
        x_value: 0.0,
    };
    let set = compose_pdf_view(&cache, SigmaKey::clamped(13), Some(&click));
    assert_eq!(set.curves.len(), 2);
}

#[test]
fn cdf_view_has_exactly_two_curves() {
    let cache = DistributionCache::build().unwrap();
    let set = compose_cdf_view(&cache, SigmaKey::clamped(30));
    assert_eq!(set.curves.len(), 2);
}

#[test]
fn composition_is_idempotent() {
    let cache = DistributionCache::build().unwrap();
    let click = ClickSelection {
        curve_index: 1,
        sample_index: 100,
        x_value: 1.7,
    };
    let key = SigmaKey::clamped(22);

    let pdf_a = serde_json::to_string(&compose_pdf_view(&cache, key, Some(&click))).unwrap();
    let pdf_b = serde_json::to_string(&compose_pdf_view(&cache, key, Some(&click))).unwrap();
    assert_eq!(pdf_a, pdf_b);

    let cdf_a = serde_json::to_string(&compose_cdf_view(&cache, key)).unwrap();
    let cdf_b = serde_json::to_string(&compose_cdf_view(&cache, key)).unwrap();
    assert_eq!(cdf_a, cdf_b);
}

#[test]
fn every_composed_curve_spans_the_full_grid_except_the_fill() {
    let cache = DistributionCache::build().unwrap();
    let click = ClickSelection {
        curve_index: 1,
        sample_index: 42,
        x_value: -2.18,
    };
    let set = compose_pdf_view(&cache, SigmaKey::clamped(8), Some(&click));
    assert_eq!(set.curves[0].len(), GRID_POINTS);
    assert_eq!(set.curves[1].len(), GRID_POINTS);
    assert_eq!(set.curves[2].len(), 43);
}
