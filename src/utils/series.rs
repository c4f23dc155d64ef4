//! Small numeric helpers for building and labeling chart data

/// `n` evenly spaced values from `start` to `stop`, both ends included
/// Returns `[start]` for `n == 1` and an empty vector for `n == 0`
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Apply fractional changes to a baseline: `base * (1 + change)`
pub fn apply_changes(base: f64, changes: &[f64]) -> Vec<f64> {
    changes.iter().map(|c| base * (1.0 + c)).collect()
}

/// Extend a series by repeating its last value `count` more times
pub fn hold_last(mut values: Vec<f64>, count: usize) -> Vec<f64> {
    if let Some(&last) = values.last() {
        values.extend(std::iter::repeat(last).take(count));
    }
    values
}

/// Minimum and maximum across several series, `None` when all are empty
pub fn value_range<'a, I>(series: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    series
        .into_iter()
        .flat_map(|s| s.iter().copied())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Dollar amount with two decimals: `$110.00`
pub fn format_usd(value: f64) -> String {
    format!("${:.2}", value)
}

/// Percentage without trailing zeros: `5%`, `-2%`, `2.5%`
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

/// Axis tick text: whole numbers without a trailing `.0`, others to at most two decimals
pub fn format_tick(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // avoid printing `-0`
        return "0".to_string();
    }
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints_and_length() {
        let values = linspace(0.0, 0.10, 12);
        assert_eq!(values.len(), 12);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[11], 0.10);
        assert_relative_eq!(values[1], 0.10 / 11.0);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert_eq!(linspace(-0.15, -0.05, 2), vec![-0.15, -0.05]);
    }

    #[test]
    fn test_hold_last_repeats_tail() {
        let held = hold_last(vec![100.0, 99.0, 95.0], 3);
        assert_eq!(held, vec![100.0, 99.0, 95.0, 95.0, 95.0, 95.0]);
        assert!(hold_last(Vec::new(), 4).is_empty());
    }

    #[test]
    fn test_value_range_spans_all_series() {
        let a = [100.0, 110.0];
        let b = [85.0, 95.0];
        assert_eq!(value_range([&a[..], &b[..]]), Some((85.0, 110.0)));
        assert_eq!(value_range(Vec::<&[f64]>::new()), None);
    }

    #[test]
    fn test_label_formats() {
        assert_eq!(format_usd(110.0), "$110.00");
        assert_eq!(format_usd(99.00000000000001), "$99.00");
        assert_eq!(format_percent(5.0), "5%");
        assert_eq!(format_percent(-2.0), "-2%");
        assert_eq!(format_percent(2.5), "2.5%");
    }

    #[test]
    fn test_tick_labels_drop_trailing_zero() {
        assert_eq!(format_tick(120.0), "120");
        assert_eq!(format_tick(-10.0), "-10");
        assert_eq!(format_tick(87.5), "87.5");
        assert_eq!(format_tick(82.50000000000001), "82.5");
        assert_eq!(format_tick(-0.0), "0");
    }
}
