use super::inputs::InputCommand;
use super::CountdownApp;
use crate::ui_egui::fit_label::fit_label;

const SECTION_SPACING: f32 = 12.0;

impl CountdownApp {
    pub(super) fn render_central_panel(&mut self, ctx: &egui::Context) -> Vec<InputCommand> {
        let mut commands = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.compact {
                ui.columns(2, |columns| {
                    self.render_countdown(&mut columns[0]);
                    commands.extend(self.render_inputs(&mut columns[1]));
                    self.render_quote(&mut columns[1], &mut commands);
                });
            } else {
                ui.vertical_centered(|ui| {
                    self.render_countdown(ui);
                    ui.add_space(SECTION_SPACING);
                    commands.extend(self.render_inputs(ui));
                    ui.add_space(SECTION_SPACING);
                    self.render_quote(ui, &mut commands);
                });
            }
        });

        commands
    }

    fn render_countdown(&mut self, ui: &mut egui::Ui) {
        let display = self.countdown.display();

        ui.vertical_centered(|ui| {
            let heading = fit_label(ui, &mut self.title_fit, &display.countdown_title, true);
            if display.title_present {
                if let Some(target) = self.countdown.target() {
                    heading.on_hover_text(target.format("%A, %d %B %Y at %H:%M").to_string());
                }
            }

            fit_label(ui, &mut self.time_left_fit, &display.time_left_title, false);
        });
    }

    fn render_inputs(&mut self, ui: &mut egui::Ui) -> Vec<InputCommand> {
        let has_date = self.countdown.date().is_some();
        egui::Frame::group(ui.style())
            .show(ui, |ui| self.inputs.render(ui, has_date))
            .inner
    }

    fn render_quote(&self, ui: &mut egui::Ui, commands: &mut Vec<InputCommand>) {
        ui.separator();

        if self.quote.is_loading() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading quote...");
            });
            return;
        }

        if let Some(quote) = self.quote.quote() {
            ui.label(egui::RichText::new(quote).italics());
        }
        if let Some(author) = self.quote.author() {
            ui.label(egui::RichText::new(author).weak());
        }

        if self.quote_source.is_some() && ui.small_button("New quote").clicked() {
            commands.push(InputCommand::RefreshQuote);
        }
    }
}
