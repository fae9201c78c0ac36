//! # Sales Chart Geometry
//!
//! Builds the `points` attribute of the dashboard's SVG polyline from a series of Y values.
//! The SVG viewport is [`CHART_WIDTH`] x [`CHART_HEIGHT`]; the largest value touches the top
//! edge and the smallest touches the bottom.

/// Width of the chart viewport in SVG units.
pub const CHART_WIDTH: f64 = 720.0;

/// Height of the chart viewport in SVG units.
pub const CHART_HEIGHT: f64 = 200.0;

/// Decorative waveform drawn when no series is available.
pub const STATIC_POLYLINE: &str =
    "0,200 60,190 120,180 180,170 240,190 300,150 360,160 420,130 480,150 540,120 600,130 660,100 720,115";

/// Build polyline points for `series` in a `width` x `height` viewport.
///
/// Returns [`STATIC_POLYLINE`] when the series is absent, has fewer than two values, or holds a
/// non-finite value. Every Y lands in `[0, height]`, even when the spread of the series exceeds
/// `f64::MAX`.
///
/// # Examples
///
/// ```rust
/// use shared::chart::{build_polyline_points, STATIC_POLYLINE};
///
/// assert_eq!(build_polyline_points(Some(&[0.0, 10.0, 5.0][..]), 720.0, 200.0), "0,200 360,0 720,100");
/// assert_eq!(build_polyline_points(Some(&[1.0][..]), 720.0, 200.0), STATIC_POLYLINE);
/// ```
pub fn build_polyline_points(series: Option<&[f64]>, width: f64, height: f64) -> String {
    let series = match series {
        Some(values) if values.len() >= 2 && values.iter().all(|y| y.is_finite()) => values,
        _ => return STATIC_POLYLINE.to_string(),
    };

    let step_x = width / (series.len() - 1) as f64;
    let max_y = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_y = series.iter().copied().fold(f64::INFINITY, f64::min);
    // Halved operands keep the spread finite for any pair of finite values.
    let half_range = (max_y / 2.0 - min_y / 2.0).max(0.5);

    series
        .iter()
        .enumerate()
        .map(|(i, y)| {
            let x = i as f64 * step_x;
            let normalized = ((y / 2.0 - min_y / 2.0) / half_range).clamp(0.0, 1.0);
            let y_px = height - normalized * height;
            format!("{x},{y_px}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Points for the default 720x200 chart.
pub fn chart_points(series: Option<&[f64]>) -> String {
    build_polyline_points(series, CHART_WIDTH, CHART_HEIGHT)
}

/// Close a polyline into the filled area under it.
pub fn area_points(points: &str) -> String {
    format!("0,{CHART_HEIGHT} {points} {CHART_WIDTH},{CHART_HEIGHT}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_pairs(points: &str) -> Vec<(f64, f64)> {
        points
            .split(' ')
            .map(|pair| {
                let (x, y) = pair.split_once(',').unwrap();
                (x.parse().unwrap(), y.parse().unwrap())
            })
            .collect()
    }

    #[test]
    fn test_fallback_for_missing_or_short_series() {
        assert_eq!(build_polyline_points(None, CHART_WIDTH, CHART_HEIGHT), STATIC_POLYLINE);
        assert_eq!(build_polyline_points(Some(&[] as &[f64]), CHART_WIDTH, CHART_HEIGHT), STATIC_POLYLINE);
        assert_eq!(build_polyline_points(Some(&[42.0][..]), CHART_WIDTH, CHART_HEIGHT), STATIC_POLYLINE);
    }

    #[test]
    fn test_fallback_literal_is_exact() {
        assert_eq!(
            STATIC_POLYLINE,
            "0,200 60,190 120,180 180,170 240,190 300,150 360,160 420,130 480,150 540,120 600,130 660,100 720,115"
        );
    }

    #[test]
    fn test_normalizes_into_viewport() {
        assert_eq!(chart_points(Some(&[0.0, 10.0, 5.0][..])), "0,200 360,0 720,100");
    }

    #[test]
    fn test_flat_series_sits_on_the_baseline() {
        // range is clamped to 1, so equal values normalise to zero
        assert_eq!(chart_points(Some(&[7.0, 7.0][..])), "0,200 720,200");
    }

    #[test]
    fn test_one_pair_per_value_with_increasing_x() {
        let series = [200.0, 190.0, 250.0, 120.0, 130.0, 175.5, 300.0];
        let pairs = parse_pairs(&chart_points(Some(&series[..])));

        assert_eq!(pairs.len(), series.len());
        assert!(pairs.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(pairs.iter().all(|&(_, y)| (0.0..=CHART_HEIGHT).contains(&y)));
        assert_eq!(pairs.last().map(|p| p.0), Some(CHART_WIDTH));
    }

    #[test]
    fn test_extreme_spread_stays_inside_viewport() {
        let pairs = parse_pairs(&chart_points(Some(&[-1.0e308, 1.0e308, 0.0][..])));

        assert_eq!(pairs[0], (0.0, CHART_HEIGHT));
        assert_eq!(pairs[1], (360.0, 0.0));
        assert!(pairs.iter().all(|&(_, y)| (0.0..=CHART_HEIGHT).contains(&y)));
    }

    #[test]
    fn test_non_finite_values_fall_back() {
        assert_eq!(chart_points(Some(&[1.0, f64::NAN][..])), STATIC_POLYLINE);
        assert_eq!(chart_points(Some(&[f64::INFINITY, 0.0][..])), STATIC_POLYLINE);
    }

    #[test]
    fn test_area_points_close_the_shape() {
        assert_eq!(area_points("0,200 720,0"), "0,200 0,200 720,0 720,200");
    }
}
