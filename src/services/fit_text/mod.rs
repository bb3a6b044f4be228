//! Auto-fit text sizing.
//!
//! Finds the largest font size (capped at a configured maximum) at which a
//! piece of text still fits its container's width. The sizing routine only
//! needs a way to measure the text at a given size, which the UI supplies
//! through [`TextMeasure`].

/// Smallest font size the shrink loop will go down to.
pub const MIN_FONT_SIZE: f32 = 1.0;
/// Largest font size the search will start from. Unit steps stay exact well
/// below this bound.
pub const MAX_FONT_SIZE: f32 = 1000.0;

/// Measures rendered text width at a given font size.
pub trait TextMeasure {
    fn text_width(&self, font_size: f32) -> f32;
}

impl<F> TextMeasure for F
where
    F: Fn(f32) -> f32,
{
    fn text_width(&self, font_size: f32) -> f32 {
        self(font_size)
    }
}

/// Compute a fitted font size.
///
/// Starts at `max_font_size` (clamped to [`MIN_FONT_SIZE`]..=[`MAX_FONT_SIZE`]),
/// grows in unit steps while the text is narrower than the container (never
/// past the maximum, stepping back on overshoot), then shrinks in unit steps
/// while it overflows. If the result is a small shrink from `previous` (ratio
/// above `tolerance`) and `previous` still fits, `previous` is kept to avoid
/// jitter.
pub fn compute_font_size(
    measure: &dyn TextMeasure,
    container_width: f32,
    max_font_size: f32,
    previous: Option<f32>,
    tolerance: f32,
) -> f32 {
    let max_font_size = max_font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    let mut font_size = max_font_size;

    while measure.text_width(font_size) < container_width && font_size < max_font_size {
        font_size += 1.0;
        if measure.text_width(font_size) > container_width {
            font_size -= 1.0;
            break;
        }
    }

    while measure.text_width(font_size) > container_width && font_size > MIN_FONT_SIZE {
        font_size = (font_size - 1.0).max(MIN_FONT_SIZE);
    }

    if let Some(previous) = previous {
        let small_shrink = font_size < previous && font_size / previous > tolerance;
        if small_shrink && measure.text_width(previous) <= container_width {
            return previous;
        }
    }

    font_size
}

/// Stateful sizer bound to one piece of text.
///
/// Re-runs on attach, when the container width changes, and when the text
/// changes. Once detached, or while no measuring surface is available, every
/// call is a no-op that reports the last applied size.
#[derive(Debug, Clone)]
pub struct FitText {
    max_font_size: f32,
    tolerance: f32,
    applied: Option<f32>,
    last_container_width: Option<f32>,
    last_text: Option<String>,
    attached: bool,
}

impl FitText {
    pub fn new(max_font_size: f32, tolerance: f32) -> Self {
        Self {
            max_font_size,
            tolerance,
            applied: None,
            last_container_width: None,
            last_text: None,
            attached: false,
        }
    }

    pub fn applied(&self) -> Option<f32> {
        self.applied
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Starts observing and performs the initial fit.
    pub fn attach(
        &mut self,
        surface: Option<&dyn TextMeasure>,
        container_width: f32,
        text: &str,
    ) -> Option<f32> {
        let measure = surface?;
        self.attached = true;
        self.fit(measure, container_width, text)
    }

    /// Re-fits when the container was resized or the text mutated.
    pub fn observe(
        &mut self,
        surface: Option<&dyn TextMeasure>,
        container_width: f32,
        text: &str,
    ) -> Option<f32> {
        if !self.attached {
            return self.applied;
        }
        let Some(measure) = surface else {
            return self.applied;
        };

        let resized = self.last_container_width != Some(container_width);
        let mutated = self.last_text.as_deref() != Some(text);
        if resized || mutated {
            return self.fit(measure, container_width, text);
        }

        self.applied
    }

    /// Stops observing. Later calls to [`FitText::observe`] do nothing.
    pub fn detach(&mut self) {
        self.attached = false;
        self.last_container_width = None;
        self.last_text = None;
    }

    fn fit(&mut self, measure: &dyn TextMeasure, container_width: f32, text: &str) -> Option<f32> {
        let size = compute_font_size(
            measure,
            container_width,
            self.max_font_size,
            self.applied,
            self.tolerance,
        );

        if self.applied != Some(size) {
            log::debug!(
                "Fitted text to {}pt (container {:.1}px, {} chars)",
                size,
                container_width,
                text.chars().count()
            );
        }

        self.applied = Some(size);
        self.last_container_width = Some(container_width);
        self.last_text = Some(text.to_string());
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Width grows linearly with font size, like a monospace run of text.
    fn linear(width_per_point: f32) -> impl Fn(f32) -> f32 {
        move |size| size * width_per_point
    }

    #[test]
    fn test_fits_at_max_when_text_is_narrow() {
        // 40px wide at size 80 inside a 200px container
        let measure = linear(0.5);
        let size = compute_font_size(&measure, 200.0, 80.0, None, 0.95);
        assert_eq!(size, 80.0);
        assert!(measure(size) <= 200.0);
    }

    #[test]
    fn test_shrinks_until_it_fits() {
        let measure = linear(5.0);
        let size = compute_font_size(&measure, 200.0, 80.0, None, 0.95);
        assert_eq!(size, 40.0);
        assert!(measure(size) <= 200.0);
    }

    #[test]
    fn test_never_goes_below_minimum() {
        let measure = linear(1000.0);
        let size = compute_font_size(&measure, 10.0, 80.0, None, 0.95);
        assert_eq!(size, MIN_FONT_SIZE);
    }

    #[test]
    fn test_huge_max_is_clamped() {
        let measure = linear(10.0);
        let size = compute_font_size(&measure, 200.0, 2.0e8, None, 0.95);
        assert_eq!(size, 20.0);

        let narrow = linear(0.01);
        let size = compute_font_size(&narrow, 200.0, 2.0e8, None, 0.95);
        assert_eq!(size, MAX_FONT_SIZE);
    }

    #[test]
    fn test_hysteresis_keeps_previous_when_it_still_fits() {
        // A fractional size applied earlier still fits, the unit-step search lands just below it.
        let measure = |size: f32| -> f32 { if size > 61.5 { 1000.0 } else { 100.0 } };
        let size = compute_font_size(&measure, 200.0, 80.0, Some(61.5), 0.95);
        assert_eq!(size, 61.5);

        let without_previous = compute_font_size(&measure, 200.0, 80.0, None, 0.95);
        assert_eq!(without_previous, 61.0);

        let jitter = |size: f32| -> f32 { if size >= 61.0 { 1000.0 } else { 100.0 } };
        let size = compute_font_size(&jitter, 200.0, 80.0, Some(61.5), 0.95);
        assert_eq!(size, 60.0, "previous no longer fits, so the shrink applies");
    }

    #[test]
    fn test_hysteresis_ignored_for_large_shrinks() {
        let measure = linear(5.0);
        let size = compute_font_size(&measure, 200.0, 80.0, Some(80.0), 0.95);
        assert_eq!(size, 40.0);
    }

    #[test]
    fn test_hysteresis_never_overflows() {
        let measure = linear(5.0);
        // 41 is within tolerance of 40 but does not fit
        let size = compute_font_size(&measure, 200.0, 80.0, Some(41.0), 0.95);
        assert_eq!(size, 40.0);
        assert!(measure(size) <= 200.0);
    }

    #[test]
    fn test_sizer_without_surface_is_noop() {
        let mut sizer = FitText::new(80.0, 0.95);
        assert_eq!(sizer.attach(None, 200.0, "hello"), None);
        assert!(!sizer.is_attached());
        assert_eq!(sizer.observe(None, 300.0, "hello"), None);
    }

    #[test]
    fn test_sizer_refits_on_resize_and_mutation_only() {
        let calls = Cell::new(0);
        let measure = |size: f32| -> f32 {
            calls.set(calls.get() + 1);
            size * 5.0
        };

        let mut sizer = FitText::new(80.0, 0.95);
        assert_eq!(sizer.attach(Some(&measure), 200.0, "abc"), Some(40.0));

        let after_attach = calls.get();
        assert_eq!(sizer.observe(Some(&measure), 200.0, "abc"), Some(40.0));
        assert_eq!(calls.get(), after_attach, "unchanged input must not re-measure");

        assert_eq!(sizer.observe(Some(&measure), 100.0, "abc"), Some(20.0));
        assert!(calls.get() > after_attach);

        let after_resize = calls.get();
        sizer.observe(Some(&measure), 100.0, "abcd");
        assert!(calls.get() > after_resize);
    }

    #[test]
    fn test_detached_sizer_stops_observing() {
        let measure = linear(5.0);
        let mut sizer = FitText::new(80.0, 0.95);
        sizer.attach(Some(&measure), 200.0, "abc");
        sizer.detach();

        assert_eq!(sizer.observe(Some(&measure), 50.0, "abc"), Some(40.0));
        assert!(!sizer.is_attached());
    }
}
