use chrono::{DateTime, Local, NaiveDate, NaiveTime, Timelike};
use egui_extras::DatePickerButton;

use crate::models::countdown::TARGET_INPUT_FORMAT;

/// Changes requested by the input widgets, applied after the frame is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum InputCommand {
    SetTitle(Option<String>),
    SetDate(Option<String>),
    RefreshQuote,
}

pub(super) struct InputState {
    pub(super) title: String,
    pub(super) date: NaiveDate,
    pub(super) hour: u32,
    pub(super) minute: u32,
}

impl InputState {
    /// Seeds the drafts from the stored values. Without a target the pickers
    /// start at today, midnight.
    pub(super) fn new(
        title: Option<&str>,
        target: Option<DateTime<Local>>,
        today: NaiveDate,
    ) -> Self {
        let (date, hour, minute) = match target {
            Some(target) => (target.date_naive(), target.hour(), target.minute()),
            None => (today, 0, 0),
        };

        Self {
            title: title.unwrap_or_default().to_string(),
            date,
            hour,
            minute,
        }
    }

    /// The draft date and time in the stored `YYYY-MM-DDTHH:MM` shape.
    pub(super) fn date_value(&self) -> String {
        let time = NaiveTime::from_hms_opt(self.hour.min(23), self.minute.min(59), 0)
            .unwrap_or_default();
        self.date.and_time(time).format(TARGET_INPUT_FORMAT).to_string()
    }

    pub(super) fn render(&mut self, ui: &mut egui::Ui, has_date: bool) -> Vec<InputCommand> {
        let mut commands = Vec::new();

        ui.horizontal(|ui| {
            ui.label("Event");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.title)
                    .hint_text("What are you counting down to?")
                    .desired_width(220.0),
            );
            if response.changed() {
                let title = Some(self.title.clone()).filter(|title| !title.is_empty());
                commands.push(InputCommand::SetTitle(title));
            }
        });

        ui.horizontal(|ui| {
            ui.label("Date");
            let mut changed = ui
                .add(DatePickerButton::new(&mut self.date).id_source("countdown_target_date"))
                .changed();

            changed |= ui
                .add(
                    egui::DragValue::new(&mut self.hour)
                        .range(0..=23)
                        .custom_formatter(|value, _| format!("{:02}", value as u32)),
                )
                .changed();
            ui.label(":");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut self.minute)
                        .range(0..=59)
                        .custom_formatter(|value, _| format!("{:02}", value as u32)),
                )
                .changed();

            if changed {
                commands.push(InputCommand::SetDate(Some(self.date_value())));
            }

            if ui
                .add_enabled(has_date, egui::Button::new("Clear date"))
                .clicked()
            {
                commands.push(InputCommand::SetDate(None));
            }
        });

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    #[test]
    fn test_drafts_default_to_today_midnight() {
        let inputs = InputState::new(None, None, today());
        assert_eq!(inputs.title, "");
        assert_eq!(inputs.date_value(), "2025-05-20T00:00");
    }

    #[test]
    fn test_drafts_follow_stored_target() {
        let target = Local.with_ymd_and_hms(2025, 8, 1, 18, 45, 0).unwrap();
        let inputs = InputState::new(Some("Concert"), Some(target), today());

        assert_eq!(inputs.title, "Concert");
        assert_eq!((inputs.hour, inputs.minute), (18, 45));
        assert_eq!(inputs.date_value(), "2025-08-01T18:45");
    }

    #[test]
    fn test_date_value_clamps_out_of_range_time() {
        let mut inputs = InputState::new(None, None, today());
        inputs.hour = 99;
        inputs.minute = 75;
        assert_eq!(inputs.date_value(), "2025-05-20T23:59");
    }
}
