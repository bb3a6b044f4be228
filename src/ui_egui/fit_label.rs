//! Labels whose font size tracks the width of the surrounding panel.

use egui::text::LayoutJob;
use egui::{Color32, FontId, RichText};

use crate::services::fit_text::FitText;

/// Used until the first fit has happened.
const UNFITTED_FONT_SIZE: f32 = 24.0;

/// Width of `text` laid out on one line at `font_size` (proportional font).
pub fn measure_text_width(ui: &egui::Ui, text: &str, font_size: f32) -> f32 {
    let job = LayoutJob::simple_singleline(
        text.to_string(),
        FontId::proportional(font_size),
        Color32::PLACEHOLDER,
    );
    ui.fonts(|f| f.layout_job(job).size().x)
}

/// Show `text` at the largest size that fits the available width.
///
/// The first call attaches the sizer; later calls only re-fit when the panel
/// width or the text changed. A detached sizer keeps its last size.
pub fn fit_label(
    ui: &mut egui::Ui,
    sizer: &mut FitText,
    text: &str,
    strong: bool,
) -> egui::Response {
    let container_width = ui.available_width();
    let measure = |size: f32| measure_text_width(ui, text, size);

    let size = if sizer.applied().is_none() {
        sizer.attach(Some(&measure), container_width, text)
    } else {
        sizer.observe(Some(&measure), container_width, text)
    }
    .unwrap_or(UNFITTED_FONT_SIZE);

    let mut rich = RichText::new(text).size(size);
    if strong {
        rich = rich.strong();
    }

    ui.add(egui::Label::new(rich).wrap_mode(egui::TextWrapMode::Extend))
}
