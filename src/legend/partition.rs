use crate::core::Series;

/// True when at least one series opted into the secondary legend.
///
/// Stops at the first match; series order does not affect the outcome.
#[must_use]
pub fn has_secondary_legend_series(series: &[Series]) -> bool {
    series.iter().any(Series::is_secondary)
}

/// Primary pass: hides secondary-legend series, leaves every other flag alone.
///
/// Returns the number of series that were hidden.
pub fn hide_secondary_series(series: &mut [Series]) -> usize {
    let mut hidden = 0;
    for entry in series.iter_mut().filter(|entry| entry.is_secondary()) {
        entry.options.show_in_legend = false;
        hidden += 1;
    }
    hidden
}

/// Secondary pass: exactly the secondary-legend series become visible.
///
/// Returns the number of visible series.
pub fn show_only_secondary_series(series: &mut [Series]) -> usize {
    let mut visible = 0;
    for entry in series.iter_mut() {
        let secondary = entry.is_secondary();
        entry.options.show_in_legend = secondary;
        visible += usize::from(secondary);
    }
    visible
}
