use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::Storage;

use shared::quiz::{GameProgress, QuizConfig};
use shared::validation::validate_config;

const CONFIG_KEY: &str = "quiz_game_config";
const PROGRESS_KEY: &str = "quiz_game_state";

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Loads the saved configuration, falling back to the defaults when
/// nothing is stored or the stored value no longer parses or validates.
/// A config that parses but fails validation (an empty palette, a
/// correct index out of range) would leave the views with undefined
/// geometry, so it is treated the same as corrupt data.
pub fn load_config() -> QuizConfig {
    match read_json(CONFIG_KEY) {
        Some(config) if validate_config(&config).is_ok() => config,
        Some(_) => {
            log::warn!("discarding saved configuration that fails validation");
            QuizConfig::default()
        }
        None => QuizConfig::default(),
    }
}

pub fn save_config(config: &QuizConfig) {
    write_json(CONFIG_KEY, config);
}

pub fn load_progress() -> GameProgress {
    read_json(PROGRESS_KEY).unwrap_or_default()
}

pub fn save_progress(progress: &GameProgress) {
    write_json(PROGRESS_KEY, progress);
}

/// Wipes both keys; the next load starts from factory defaults.
pub fn clear_all() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(CONFIG_KEY);
        let _ = storage.remove_item(PROGRESS_KEY);
    }
}

fn read_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = local_storage()?.get_item(key).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding unreadable saved data under {}: {}", key, err);
            None
        }
    }
}

fn write_json<T: Serialize>(key: &str, value: &T) {
    let storage = match local_storage() {
        Some(storage) => storage,
        None => return,
    };
    match serde_json::to_string(value) {
        Ok(raw) => {
            if storage.set_item(key, &raw).is_err() {
                log::error!("failed to persist {}", key);
            }
        }
        Err(err) => log::error!("failed to encode {}: {}", key, err),
    }
}
