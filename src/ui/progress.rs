/// Cells in the progress bar at full width
pub const BAR_WIDTH: usize = 50;

/// Split a bar of `width` cells into (filled, empty) for `progress` in [0, 1]
pub fn bar_cells(progress: f64, width: usize) -> (usize, usize) {
    let progress = progress.clamp(0.0, 1.0);
    let filled = ((width as f64) * progress) as usize;
    (filled, width - filled)
}

/// Whole percent, truncated like the bar
pub fn percent(progress: f64) -> u8 {
    (progress.clamp(0.0, 1.0) * 100.0) as u8
}

/// Bar width that fits `available` columns next to the percentage label
pub fn fit_width(available: u16) -> usize {
    // "  100%"
    let label = 6;
    (available as usize).saturating_sub(label).min(BAR_WIDTH)
}
