use crate::gesture::DEFAULT_DRAG_UNITS_PER_RADIAN;
use crate::puzzle::FaceColor;
use crate::util::color;
use crate::util::color::Color;
use enum_map::enum_map;
use enum_map::EnumMap;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

const PREFS_PATH: &str = "./preferences.json";

fn color_default() -> EnumMap<FaceColor, Color> {
    enum_map! {
        FaceColor::White => color::WHITE,
        FaceColor::Yellow => color::YELLOW,
        FaceColor::Green => color::GREEN,
        FaceColor::Blue => color::BLUE,
        FaceColor::Orange => color::ORANGE,
        FaceColor::Red => color::RED,
    }
}

fn drag_units_per_radian_default() -> f32 {
    DEFAULT_DRAG_UNITS_PER_RADIAN
}

fn scramble_turns_default() -> usize {
    5
}

fn celebration_spin_default() -> f32 {
    0.07
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionPreferences {
    /// Screen units of drag per radian of slice twist.
    #[serde(default = "drag_units_per_radian_default")]
    pub drag_units_per_radian: f32,
    /// Random turns per scramble batch.
    #[serde(default = "scramble_turns_default")]
    pub scramble_turns: usize,
    /// Radians per frame about each axis once solved.
    #[serde(default = "celebration_spin_default")]
    pub celebration_spin: f32,
}

impl Default for InteractionPreferences {
    fn default() -> Self {
        Self {
            drag_units_per_radian: drag_units_per_radian_default(),
            scramble_turns: scramble_turns_default(),
            celebration_spin: celebration_spin_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "color_default")]
    pub colors: EnumMap<FaceColor, Color>,
    #[serde(default)]
    pub interaction: InteractionPreferences,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            colors: color_default(),
            interaction: InteractionPreferences::default(),
        }
    }
}

impl Preferences {
    pub fn save(&self) -> eyre::Result<()> {
        self.save_to(PREFS_PATH)
    }

    pub fn load() -> eyre::Result<Self> {
        Self::load_from(PREFS_PATH)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> eyre::Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Loads preferences from `path`, or the defaults if there is no file
    /// there.
    pub fn load_from(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no preferences at {}, using defaults", path.display());
            return Ok(Default::default());
        }
        let reader = std::io::BufReader::new(std::fs::File::open(path)?);
        let prefs: Self = serde_json::from_reader(reader)?;
        prefs.validate()?;
        Ok(prefs)
    }

    pub fn validate(&self) -> eyre::Result<()> {
        let interaction = &self.interaction;
        eyre::ensure!(
            interaction.drag_units_per_radian.is_finite() && interaction.drag_units_per_radian > 0.0,
            "drag_units_per_radian must be positive, got {}",
            interaction.drag_units_per_radian
        );
        eyre::ensure!(
            interaction.scramble_turns >= 1,
            "scramble_turns must be at least 1"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_is_default() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
        prefs.validate().unwrap();
    }

    #[test]
    fn partial_override() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"interaction": {"scramble_turns": 20}}"#).unwrap();
        assert_eq!(prefs.interaction.scramble_turns, 20);
        assert_eq!(prefs.interaction.drag_units_per_radian, 70.0);
        assert_eq!(prefs.colors[FaceColor::Red], color::RED);
    }

    #[test]
    fn round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("quarterturn-prefs-{}.json", std::process::id()));
        let mut prefs = Preferences::default();
        prefs.colors[FaceColor::Green] = Color::new(1, 2, 3);
        prefs.interaction.celebration_spin = 0.1;
        prefs.save_to(&path).unwrap();
        let loaded = Preferences::load_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn missing_file_is_default() {
        let path = std::env::temp_dir().join("quarterturn-prefs-does-not-exist.json");
        assert_eq!(Preferences::load_from(path).unwrap(), Preferences::default());
    }

    #[test]
    fn invalid_values_rejected() {
        let mut prefs = Preferences::default();
        prefs.interaction.scramble_turns = 0;
        assert!(prefs.validate().is_err());

        let mut prefs = Preferences::default();
        prefs.interaction.drag_units_per_radian = -3.0;
        assert!(prefs.validate().is_err());
    }
}
