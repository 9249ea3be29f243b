use eframe::egui::Ui;

use crate::timer::Timer;

/// A status line that disappears once its timer runs out.
pub struct Message {
    header: Option<String>,
    message: String,
    timer: Timer,
}

impl Message {
    pub fn new_default_duration(header: Option<String>, message: String) -> Message {
        Message {
            header,
            message,
            timer: Timer::default(),
        }
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn text(&self) -> &str {
        self.message.as_str()
    }

    pub fn display(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if let Some(header) = self.header() {
                ui.strong(header);
            }
            ui.label(self.text());
        });
    }

    pub fn is_complete(&self) -> bool {
        self.timer.is_complete()
    }
}
