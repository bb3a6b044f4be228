// Layout helpers
// Decides between the stacked and the side-by-side arrangement

/// Compact layout applies to landscape windows no wider than `compact_max_width`.
pub fn is_compact(width: f32, height: f32, compact_max_width: f32) -> bool {
    width > height && width <= compact_max_width
}
