//! Loot configuration loaded once at startup from `config/loot.toml`.
use std::{fs, path::Path, time::Duration};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/loot.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawLootConfig {
    #[serde(default)]
    objects: RawObjects,
    #[serde(default)]
    markers: RawMarkers,
    #[serde(default)]
    blips: RawBlips,
    #[serde(default)]
    interaction: RawInteraction,
    #[serde(default)]
    rewards: RawRewards,
    #[serde(default)]
    audio: RawAudio,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawObjects {
    models: Vec<String>,
}

impl Default for RawObjects {
    fn default() -> Self {
        Self {
            models: vec![
                "dumpster_01a".to_string(),
                "dumpster_02a".to_string(),
                "dumpster_02b".to_string(),
                "dumpster_04a".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawMarkers {
    enabled: bool,
    distance: f32,
}

impl Default for RawMarkers {
    fn default() -> Self {
        Self {
            enabled: true,
            distance: 25.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawBlips {
    enabled: bool,
    color: [u8; 3],
}

impl Default for RawBlips {
    fn default() -> Self {
        Self {
            enabled: true,
            color: [229, 115, 115],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawInteraction {
    loot_distance: f32,
    fade_ms: u64,
    search_delay_ms: u64,
    cooldown_ms: u64,
}

impl Default for RawInteraction {
    fn default() -> Self {
        Self {
            loot_distance: 1.5,
            fade_ms: 500,
            search_delay_ms: 1000,
            cooldown_ms: 90_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawRewards {
    money_min: i64,
    money_max: i64,
    items: Vec<RawItem>,
}

impl Default for RawRewards {
    fn default() -> Self {
        Self {
            money_min: 10,
            money_max: 60,
            items: vec![
                RawItem::new("hot dog", 25.0),
                RawItem::new("hamburger", 25.0),
                RawItem::new("moldy hot dog", 0.0),
                RawItem::new("moldy hamburger", 0.0),
                RawItem::new("old boot", 0.0),
                RawItem::new("dead fish", 0.0),
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawItem {
    name: String,
    heal: f32,
}

impl RawItem {
    fn new(name: &str, heal: f32) -> Self {
        Self {
            name: name.to_string(),
            heal,
        }
    }
}

impl Default for RawItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            heal: 0.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawAudio {
    enabled: bool,
}

impl Default for RawAudio {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// An entry of the searchable-item catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct LootItem {
    pub name: String,
    /// Health restored when the item is picked up (0 for junk).
    pub heal: f32,
}

/// Validated runtime configuration derived from `config/loot.toml`.
#[derive(Resource, Debug, Clone)]
pub struct LootConfig {
    /// Model names eligible for searching.
    pub descriptors: Vec<String>,
    pub markers_enabled: bool,
    pub marker_distance: f32,
    pub blips_enabled: bool,
    pub blip_color: Color,
    pub loot_distance: f32,
    pub fade: Duration,
    /// Bounded lead-in pause between committing to a search and resolving it.
    pub search_delay: Duration,
    /// Per-prop cooldown after a search; zero disables cooldowns.
    pub cooldown_ms: u64,
    pub money_min: i64,
    pub money_max: i64,
    pub items: Vec<LootItem>,
    pub audio_enabled: bool,
}

impl LootConfig {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<RawLootConfig>(&raw) {
                Ok(parsed) => parsed.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawLootConfig::default().into()
                }
            },
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawLootConfig::default().into()
            }
        }
    }
}

impl From<RawLootConfig> for LootConfig {
    fn from(value: RawLootConfig) -> Self {
        let descriptors = value
            .objects
            .models
            .iter()
            .map(|model| model.trim().to_string())
            .filter(|model| !model.is_empty())
            .collect();

        let (money_min, money_max) = if value.rewards.money_min <= value.rewards.money_max {
            (value.rewards.money_min, value.rewards.money_max)
        } else {
            (value.rewards.money_max, value.rewards.money_min)
        };

        let items = value
            .rewards
            .items
            .into_iter()
            .filter(|item| !item.name.trim().is_empty())
            .map(|item| LootItem {
                name: item.name.trim().to_string(),
                heal: item.heal.max(0.0),
            })
            .collect();

        let [r, g, b] = value.blips.color;

        Self {
            descriptors,
            markers_enabled: value.markers.enabled,
            marker_distance: value.markers.distance.max(0.0),
            blips_enabled: value.blips.enabled,
            blip_color: Color::srgb_u8(r, g, b),
            loot_distance: value.interaction.loot_distance.max(0.0),
            fade: Duration::from_millis(value.interaction.fade_ms),
            search_delay: Duration::from_millis(value.interaction.search_delay_ms.min(5_000)),
            cooldown_ms: value.interaction.cooldown_ms,
            money_min,
            money_max,
            items,
            audio_enabled: value.audio.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LootConfig::from(RawLootConfig::default());
        assert!(!config.descriptors.is_empty());
        assert!(config.loot_distance > 0.0);
        assert!(config.marker_distance >= config.loot_distance);
        assert!(config.money_min <= config.money_max);
        assert!(!config.items.is_empty());
    }

    #[test]
    fn inverted_money_range_is_normalized() {
        let mut raw = RawLootConfig::default();
        raw.rewards.money_min = 100;
        raw.rewards.money_max = 5;

        let config = LootConfig::from(raw);
        assert_eq!((config.money_min, config.money_max), (5, 100));
    }

    #[test]
    fn blank_entries_are_dropped() {
        let mut raw = RawLootConfig::default();
        raw.objects.models.push("  ".to_string());
        raw.rewards.items.push(RawItem::new("", 10.0));

        let config = LootConfig::from(raw);
        assert!(config.descriptors.iter().all(|model| !model.is_empty()));
        assert!(config.items.iter().all(|item| !item.name.is_empty()));
    }

    #[test]
    fn negative_heal_is_clamped() {
        let mut raw = RawLootConfig::default();
        raw.rewards.items = vec![RawItem::new("suspect sandwich", -3.0)];

        let config = LootConfig::from(raw);
        assert_eq!(config.items[0].heal, 0.0);
    }

    #[test]
    fn search_delay_is_bounded() {
        let mut raw = RawLootConfig::default();
        raw.interaction.search_delay_ms = 60_000;

        let config = LootConfig::from(raw);
        assert!(config.search_delay <= Duration::from_secs(5));
    }
}
