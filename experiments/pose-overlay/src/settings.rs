//! Values the app keeps between runs.

use posecam_base::Vec2;
use posecam_store::{KeyValueStore, Storage};
use serde_json::json;

pub const FLIP_HORIZONTAL_KEY: &str = "flipHorizontal";
pub const FOUND_POSITION_KEY: &str = "foundPosition";

/// The saved mirror setting, or `default` when nothing usable is stored.
pub fn restore_flip_horizontal<S: Storage>(store: &KeyValueStore<S>, default: bool) -> bool {
    store
        .load(FLIP_HORIZONTAL_KEY)
        .and_then(|value| value.as_bool())
        .unwrap_or(default)
}

pub fn persist_flip_horizontal<S: Storage>(store: &mut KeyValueStore<S>, flip: bool) {
    store.store(FLIP_HORIZONTAL_KEY, flip);
}

pub fn persist_found_position<S: Storage>(store: &mut KeyValueStore<S>, position: Vec2<f32>) {
    store.store(FOUND_POSITION_KEY, json!({ "x": position.x, "y": position.y }));
}

pub fn restore_found_position<S: Storage>(store: &KeyValueStore<S>) -> Option<Vec2<f32>> {
    let value = store.load(FOUND_POSITION_KEY)?;
    let json = value.as_json()?;
    let x = json.get("x")?.as_f64()?;
    let y = json.get("y")?.as_f64()?;
    Some(Vec2::new(x as f32, y as f32))
}
