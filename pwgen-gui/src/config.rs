use std::env::VarError;
use std::path::Path;

use json::JsonValue;
use log::{info, warn};
use pwgen_lib::charset::CharacterClasses;

pub const MIN_SCALE: f32 = 1.0;
pub const MAX_SCALE: f32 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GuiConfig {
    pub dark: bool,
    pub scale: f32,
    pub length: String,
    pub classes: CharacterClasses,
    pub show_password: bool,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            dark: true,
            scale: 1.5,
            length: String::from("12"),
            classes: CharacterClasses::all(),
            show_password: false,
        }
    }
}

impl GuiConfig {
    // Missing or mistyped keys keep their default
    pub fn from_json(value: &JsonValue) -> GuiConfig {
        let default = GuiConfig::default();

        let scale = value["scale"]
            .as_f32()
            .unwrap_or(default.scale)
            .clamp(MIN_SCALE, MAX_SCALE);

        GuiConfig {
            dark: value["dark"].as_bool().unwrap_or(default.dark),
            scale,
            length: value["length"]
                .as_str()
                .map(String::from)
                .unwrap_or(default.length),
            classes: CharacterClasses {
                uppercase: value["uppercase"]
                    .as_bool()
                    .unwrap_or(default.classes.uppercase),
                lowercase: value["lowercase"]
                    .as_bool()
                    .unwrap_or(default.classes.lowercase),
                digits: value["digits"].as_bool().unwrap_or(default.classes.digits),
                special: value["special"].as_bool().unwrap_or(default.classes.special),
            },
            show_password: value["show_password"]
                .as_bool()
                .unwrap_or(default.show_password),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        let mut value = JsonValue::new_object();
        value["dark"] = self.dark.into();
        value["scale"] = self.scale.into();
        value["length"] = self.length.as_str().into();
        value["uppercase"] = self.classes.uppercase.into();
        value["lowercase"] = self.classes.lowercase.into();
        value["digits"] = self.classes.digits.into();
        value["special"] = self.classes.special.into();
        value["show_password"] = self.show_password.into();
        value
    }
}

fn get_config_dir() -> Result<std::path::PathBuf, VarError> {
    #[cfg(unix)]
    let app_data = std::env::var("HOME")? + "/.config";

    #[cfg(windows)]
    let app_data = std::env::var("APPDATA")?;

    let mut path = std::path::PathBuf::from(app_data);
    path.push("pwgen");

    create_config_dir(&path)?;

    Ok(path)
}

fn create_config_dir(path: &Path) -> Result<(), VarError> {
    if path.exists() {
        return Ok(());
    }

    match std::fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(error) => {
            warn!(
                "failed to create config directory \"{}\": {}",
                path.display(),
                error
            );
            Err(VarError::NotPresent)
        }
    }
}

fn get_config_file() -> Result<std::path::PathBuf, VarError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push("config.json");

    Ok(config_dir)
}

pub fn get_config() -> GuiConfig {
    let file = match get_config_file() {
        Ok(file) => file,
        Err(error) => {
            warn!("failed to get config: {}", error.to_string());
            return GuiConfig::default();
        }
    };

    if !file.exists() {
        info!("no config at \"{}\", using defaults", file.display());
        return GuiConfig::default();
    }

    info!("reading from file \"{}\"", file.display());

    let file = match std::fs::read_to_string(file) {
        Ok(file) => file,
        Err(error) => {
            warn!("failed to read config: {}", error.to_string());
            return GuiConfig::default();
        }
    };

    match json::parse(file.as_str()) {
        Ok(parsed) => GuiConfig::from_json(&parsed),
        Err(error) => {
            warn!("failed to parse config: {}", error.to_string());
            GuiConfig::default()
        }
    }
}

pub fn write_config(config: &GuiConfig) {
    let file = match get_config_file() {
        Ok(file) => file,
        Err(error) => {
            warn!("failed to get config: {}", error.to_string());
            return;
        }
    };

    info!("writing to file \"{}\"", file.display());

    if let Err(error) = std::fs::write(file, config.to_json().pretty(4)) {
        warn!("failed to write config: {}", error.to_string());
    }
}
