mod config;
mod gui;
mod timer;

use eframe::egui;
use log::info;

use crate::gui::{Gui, TITLE};

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config = config::get_config();
    info!("starting with scale {} and dark mode {}", config.scale, config.dark);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([420.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(|cc| Ok(Box::new(Gui::new(cc, config)))),
    )
}
