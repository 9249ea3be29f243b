pub mod message;

use crate::config::{self, GuiConfig, MAX_SCALE, MIN_SCALE};
use crate::gui::message::Message;

use std::time::Duration;

use eframe::egui::{self, Key, Modifiers};
use log::{info, warn};

use pwgen_lib::{
    charset::{CharacterClass, CharacterClasses},
    error::RequestError,
    mask::mask,
    request::{GeneratedOutput, GenerationRequest},
    zeroize::{Zeroize, Zeroizing},
};

pub const TITLE: &str = "Password Generator";
const CLIPBOARD_HEADER: &str = "Clipboard";

pub struct Gui {
    scale: f32,
    update_scale: bool,
    dark: bool,
    length: String,
    classes: CharacterClasses,
    show_password: bool,
    generated: Option<GeneratedOutput>,
    error: Option<RequestError>,
    // Written to the system clipboard on the next frame
    clipboard_string: Option<Zeroizing<String>>,
    messages: Vec<Message>,
}

impl Gui {
    pub fn new(cc: &eframe::CreationContext<'_>, config: GuiConfig) -> Self {
        let gui = Self::from_config(config);
        cc.egui_ctx.set_visuals(gui.visuals());
        gui
    }

    pub fn from_config(config: GuiConfig) -> Self {
        Self {
            scale: config.scale,
            update_scale: true,
            dark: config.dark,
            length: config.length,
            classes: config.classes,
            show_password: config.show_password,
            generated: None,
            error: None,
            clipboard_string: None,
            messages: Vec::new(),
        }
    }

    pub fn config(&self) -> GuiConfig {
        GuiConfig {
            dark: self.dark,
            scale: self.scale,
            length: self.length.clone(),
            classes: self.classes,
            show_password: self.show_password,
        }
    }

    fn visuals(&self) -> egui::Visuals {
        if self.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }

    /// Validates the current form and, when it passes, replaces the generated
    /// password. A rejected form keeps the previous password staged for copying.
    pub fn generate(&mut self) {
        let result = GenerationRequest::parse(self.length.as_str(), self.classes)
            // Masking follows the checkbox live, so the display copy is never unmasked
            .and_then(|request| request.run(false));

        match result {
            Ok(output) => {
                info!(
                    "generated password of length {} with strength {}",
                    output.password.chars().count(),
                    output.label
                );
                self.generated = Some(output);
                self.error = None;
            }
            Err(error) => {
                warn!("password generation rejected: {}", error);
                self.error = Some(error);
            }
        }
    }

    pub fn copy_to_clipboard(&mut self) {
        match &self.generated {
            Some(output) => {
                self.clipboard_string = Some(output.password.clone());
                self.add_message(Some(CLIPBOARD_HEADER), String::from("Copied to clipboard"));
            }
            None => {
                self.add_message(None, String::from("Nothing to copy, generate a password first"));
            }
        }
    }

    pub fn clear_clipboard(&mut self) {
        // egui skips empty clipboard writes
        self.clipboard_string = Some(Zeroizing::new(String::from(" ")));
        self.add_message(Some(CLIPBOARD_HEADER), String::from("Clipboard cleared"));
    }

    fn add_message(&mut self, header: Option<&str>, message: String) {
        self.messages
            .push(Message::new_default_duration(header.map(String::from), message));
    }

    pub fn password_text(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Your Password: {}", error);
        }

        match &self.generated {
            Some(output) if self.show_password => {
                format!("Your Password: {}", output.password.as_str())
            }
            Some(output) => format!("Your Password: {}", mask(&output.password)),
            None => String::from("Your Password: "),
        }
    }

    pub fn strength_text(&self) -> String {
        match &self.generated {
            Some(output) => format!("Password Strength: {}", output.label),
            None => String::from("Password Strength: "),
        }
    }

    fn display_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.menu_button("Options", |ui| {
                if !ui
                    .add(egui::Slider::new(&mut self.scale, MIN_SCALE..=MAX_SCALE).text("UI Scale"))
                    .dragged()
                {
                    self.update_scale = true;
                } else {
                    self.update_scale = false;
                };

                if ui.checkbox(&mut self.dark, "Dark mode").changed() {
                    ui.ctx().set_visuals(self.visuals());
                }
            });

            if ui.button("Clear Clipboard").clicked() {
                self.clear_clipboard();
            }
        });

        ui.separator();
    }

    fn display_form(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.label(self.password_text());

            if ui.button("Generate Password").clicked() {
                self.generate();
            }

            ui.checkbox(&mut self.show_password, "Show Password");

            let response = ui.add_sized(
                [100.0, 20.0],
                egui::TextEdit::singleline(&mut self.length).hint_text("Length"),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                self.generate();
            }

            for class in CharacterClass::ALL {
                ui.checkbox(self.classes.flag_mut(class), class.name());
            }

            if ui.button("Copy to Clipboard").clicked() {
                self.copy_to_clipboard();
            }

            ui.label(self.strength_text());
        });
    }

    fn display_messages(&mut self, ui: &mut egui::Ui) {
        self.messages.retain(|message| !message.is_complete());

        if self.messages.is_empty() {
            return;
        }

        ui.separator();

        for message in self.messages.iter() {
            message.display(ui);
        }

        // Keep repainting so expired messages go away without input
        ui.ctx().request_repaint_after(Duration::from_millis(250));
    }

    fn handle_keybinds(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.modifiers.matches_exact(Modifiers::CTRL) && i.key_pressed(Key::G)) {
            self.generate();
            info!("Generate");
        }
        if ctx.input(|i| {
            i.modifiers
                .matches_exact(Modifiers::CTRL | Modifiers::SHIFT)
                && i.key_pressed(Key::C)
        }) {
            self.copy_to_clipboard();
            info!("Copy");
        }
    }
}

impl eframe::App for Gui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.update_scale {
                ctx.set_pixels_per_point(self.scale);
            }

            self.handle_keybinds(ctx);

            self.display_header(ui);
            self.display_form(ui);
            self.display_messages(ui);

            // Handle clipboard
            if let Some(result) = self.clipboard_string.take() {
                ui.output_mut(|o| {
                    o.copied_text.zeroize();
                    o.copied_text = result.as_str().to_string();
                });
            }
        });
    }
}

impl Drop for Gui {
    fn drop(&mut self) {
        config::write_config(&self.config());
    }
}
