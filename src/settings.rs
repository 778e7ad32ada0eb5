use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Optional `config.toml` contents. Every field may be omitted.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub life: LifeSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LifeSettings {
    pub fps: Option<u32>,
    pub cell_size: Option<usize>,
    pub draw_char: Option<char>,
    pub color_scheme: Option<u8>,
    pub density: Option<f64>,
}

impl Settings {
    /// Load from `path`, or the per-user config file when `None`.
    /// Missing files give defaults; unreadable or malformed ones are logged and ignored.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);
        if !path.exists() {
            debug!(path = %path.display(), "no settings file");
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|err| {
                warn!(path = %path.display(), %err, "ignoring malformed settings file");
                Self::default()
            }),
            Err(err) => {
                warn!(path = %path.display(), %err, "could not read settings file");
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termlife")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let settings = Settings::parse("").unwrap();
        assert!(settings.life.fps.is_none());
        assert!(settings.life.draw_char.is_none());
    }

    #[test]
    fn life_section() {
        let settings = Settings::parse(
            r##"
            [life]
            fps = 30
            cell_size = 2
            draw_char = "@"
            color_scheme = 3
            density = 0.25
            "##,
        )
        .unwrap();
        assert_eq!(settings.life.fps, Some(30));
        assert_eq!(settings.life.cell_size, Some(2));
        assert_eq!(settings.life.draw_char, Some('@'));
        assert_eq!(settings.life.color_scheme, Some(3));
        assert_eq!(settings.life.density, Some(0.25));
    }

    #[test]
    fn typos_are_rejected() {
        assert!(Settings::parse("[life]\nfsp = 30\n").is_err());
        assert!(Settings::parse("[life]\nfps = \"fast\"\n").is_err());
    }

    #[test]
    fn missing_file_is_default() {
        let settings = Settings::load(Some(Path::new("/nonexistent/termlife/config.toml")));
        assert!(settings.life.cell_size.is_none());
    }

    #[test]
    fn config_path_is_namespaced() {
        assert!(Settings::config_path().ends_with("termlife/config.toml"));
    }
}
