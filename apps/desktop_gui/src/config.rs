use std::{collections::HashMap, fs, path::Path};

#[derive(Debug, Clone)]
pub struct Settings {
    pub studio_name: String,
    pub window_title: String,
    /// Hour count quoted in acknowledgment messages.
    pub response_hours: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            studio_name: "BrightPath Career Studio".into(),
            window_title: "Service Intake Desk".into(),
            response_hours: 24,
        }
    }
}

/// File values override defaults; `APP__*` environment variables override
/// both. Unreadable or malformed sources are skipped silently.
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("studio_name") {
                settings.studio_name = v.clone();
            }
            if let Some(v) = file_cfg.get("window_title") {
                settings.window_title = v.clone();
            }
            if let Some(v) = file_cfg.get("response_hours") {
                if let Ok(parsed) = v.parse::<u32>() {
                    settings.response_hours = parsed;
                }
            }
        }
    }

    if let Ok(v) = std::env::var("APP__STUDIO_NAME") {
        settings.studio_name = v;
    }
    if let Ok(v) = std::env::var("APP__WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Ok(v) = std::env::var("APP__RESPONSE_HOURS") {
        if let Ok(parsed) = v.parse::<u32>() {
            settings.response_hours = parsed;
        }
    }

    settings
}

#[cfg(test)]
mod tests {
    use std::{
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let settings = load_settings(Path::new("./no-such-intake.toml"));
        assert_eq!(settings.response_hours, 24);
        assert_eq!(settings.window_title, "Service Intake Desk");
    }

    #[test]
    fn file_values_override_defaults() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("intake_settings_test_{suffix}.toml"));

        fs::write(
            &path,
            "studio_name = \"Northside Desk\"\nresponse_hours = \"48\"\n",
        )
        .expect("write settings file");

        let settings = load_settings(&path);
        assert_eq!(settings.studio_name, "Northside Desk");
        assert_eq!(settings.response_hours, 48);
        // Keys absent from the file keep their defaults.
        assert_eq!(settings.window_title, "Service Intake Desk");

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn unparseable_hours_keep_the_default() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("intake_settings_bad_{suffix}.toml"));

        fs::write(&path, "response_hours = \"soon\"\n").expect("write settings file");
        assert_eq!(load_settings(&path).response_hours, 24);

        fs::remove_file(path).expect("cleanup");
    }
}
