//! Chart palette and color assignment.

use crate::models::Rgb;

/// The chart palette, cycled by rank.
pub const CHART_PALETTE: [Rgb; 10] = [
    Rgb::new(255, 99, 132),  // red
    Rgb::new(54, 162, 235),  // blue
    Rgb::new(255, 205, 86),  // yellow
    Rgb::new(75, 192, 192),  // green
    Rgb::new(153, 102, 255), // purple
    Rgb::new(255, 159, 64),  // orange
    Rgb::new(201, 203, 207), // gray
    Rgb::new(255, 99, 255),  // pink
    Rgb::new(50, 168, 82),   // dark green
    Rgb::new(123, 36, 28),   // brown
];

/// Returns the palette index for a rank (0 = most hours).
pub fn palette_index(rank: usize) -> usize {
    rank % CHART_PALETTE.len()
}

/// Returns the palette color for a rank.
///
/// # Examples
///
/// ```
/// use timesheet_report::calculation::{CHART_PALETTE, color_for_rank};
///
/// assert_eq!(color_for_rank(0), CHART_PALETTE[0]);
/// assert_eq!(color_for_rank(12), CHART_PALETTE[2]);
/// ```
pub fn color_for_rank(rank: usize) -> Rgb {
    CHART_PALETTE[palette_index(rank)]
}
