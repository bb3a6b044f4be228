// Theme selection
// Follows the operating system's light/dark preference

/// Which visuals to use for a detected system mode.
pub fn visuals_for_mode(mode: dark_light::Mode) -> egui::Visuals {
    match mode {
        dark_light::Mode::Dark => egui::Visuals::dark(),
        dark_light::Mode::Light | dark_light::Mode::Default => egui::Visuals::light(),
    }
}

pub fn apply_system_theme(ctx: &egui::Context) {
    let mode = dark_light::detect();
    log::info!("Applying {:?} system theme", mode);
    ctx.set_visuals(visuals_for_mode(mode));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_mode_uses_dark_visuals() {
        assert!(visuals_for_mode(dark_light::Mode::Dark).dark_mode);
    }

    #[test]
    fn test_unknown_mode_falls_back_to_light() {
        assert!(!visuals_for_mode(dark_light::Mode::Default).dark_mode);
        assert!(!visuals_for_mode(dark_light::Mode::Light).dark_mode);
    }
}
