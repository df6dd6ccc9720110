use std::path::{Path, PathBuf};
use std::str::FromStr;
use ini::{Ini, Properties};
use tracing::{info, warn};
use blit_lib::Layout;

pub const DEFAULT_PATH: &str = "assets/config/blit.ini";

#[derive(Clone, PartialEq, Debug)]
pub struct WindowSettings {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        WindowSettings {
            title: "SDL Lesson 2".to_string(),
            x: 100,
            y: 100,
            width: 640,
            height: 480,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct AssetSettings {
    pub background: PathBuf,
    pub foreground: PathBuf,
}

impl Default for AssetSettings {
    fn default() -> Self {
        AssetSettings {
            background: PathBuf::from("assets/tilesett-960x240.png"),
            foreground: PathBuf::from("assets/image.png"),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Settings {
    pub window: WindowSettings,
    pub assets: AssetSettings,
    pub layout: Layout,
}

impl Settings {
    /// Reads settings from an INI file. Never fails: a missing or broken file
    /// gives the defaults.
    pub fn load(path: &Path) -> Self {
        match Ini::load_from_file(path) {
            Ok(ini) => {
                info!("Loaded settings from {}", path.display());
                Settings::from(&ini)
            }
            Err(e) => {
                warn!("Could not read settings file {}: {}. Using defaults", path.display(), e);
                Settings::default()
            }
        }
    }
}

/// Value of `key`, or `default` when it is absent or unparsable.
fn read<T: FromStr>(section: Option<&Properties>, name: &str, key: &str, default: T) -> T {
    let Some(value) = section.and_then(|s| s.get(key)) else {
        return default;
    };

    match value.trim().parse::<T>() {
        Ok(v) => v,
        Err(_) => {
            warn!("Invalid value in settings: [{}] {} = {}", name, key, value);
            default
        }
    }
}

impl From<&Ini> for Settings {
    fn from(ini: &Ini) -> Self {
        let defaults = Settings::default();

        let wnd = ini.section(Some("Window"));
        let window = WindowSettings {
            title: read(wnd, "Window", "Title", defaults.window.title),
            x: read(wnd, "Window", "X", defaults.window.x),
            y: read(wnd, "Window", "Y", defaults.window.y),
            width: read(wnd, "Window", "Width", defaults.window.width),
            height: read(wnd, "Window", "Height", defaults.window.height),
        };

        let assets_sec = ini.section(Some("Assets"));
        let assets = AssetSettings {
            background: read(assets_sec, "Assets", "Background", defaults.assets.background),
            foreground: read(assets_sec, "Assets", "Foreground", defaults.assets.foreground),
        };

        let layout_sec = ini.section(Some("Layout"));
        let scale = read(layout_sec, "Layout", "BackgroundScale", defaults.layout.background_scale.0);
        let layout = Layout {
            background_scale: (scale, scale),
            background_columns: read(
                layout_sec,
                "Layout",
                "BackgroundColumns",
                defaults.layout.background_columns,
            ),
            tileset_columns: read(layout_sec, "Layout", "TilesetColumns", defaults.layout.tileset_columns),
            tileset_rows: read(layout_sec, "Layout", "TilesetRows", defaults.layout.tileset_rows),
        };

        Settings {
            window,
            assets,
            layout,
        }
    }
}
