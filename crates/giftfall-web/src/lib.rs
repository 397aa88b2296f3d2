use std::cell::RefCell;

use glam::Vec3;
use wasm_bindgen::prelude::*;

pub mod runner;

pub use runner::SimRunner;

thread_local! {
    static RUNNER: RefCell<Option<SimRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the live runner. Before `sim_init` succeeds every call is
/// a no-op that warns on the browser console and yields `None`.
fn with_runner<R>(f: impl FnOnce(&mut SimRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => Some(f(runner)),
        None => {
            web_sys::console::warn_1(&"giftfall: not initialized, call sim_init() first".into());
            None
        }
    })
}

/// Create the simulation from the page's JSON documents.
/// Pass an empty `config_json` for defaults.
#[wasm_bindgen]
pub fn sim_init(config_json: &str, gifts_json: &str, scene_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = SimRunner::from_json(config_json, gifts_json, scene_json).map_err(|e| {
        log::error!("giftfall: {}", e);
        JsValue::from_str(&e.to_string())
    })?;
    let count = runner.system().len();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("giftfall: initialized with {} gifts", count);
    Ok(())
}

#[wasm_bindgen]
pub fn sim_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn sim_set_emitter(x: f32, y: f32, z: f32) {
    with_runner(|r| r.set_emitter(Vec3::new(x, y, z)));
}

#[wasm_bindgen]
pub fn sim_clear_emitter() {
    with_runner(|r| r.clear_emitter());
}

/// Hovering a gift pauses the drop; returns false for an unknown id.
#[wasm_bindgen]
pub fn sim_set_hovered(id: u32, hovered: bool) -> bool {
    with_runner(|r| r.set_hovered(id, hovered)).unwrap_or(false)
}

#[wasm_bindgen]
pub fn sim_is_paused() -> bool {
    with_runner(|r| r.is_paused()).unwrap_or(false)
}

/// Gift keys in body-id order.
#[wasm_bindgen]
pub fn sim_gift_keys() -> js_sys::Array {
    with_runner(|r| {
        r.gift_keys()
            .into_iter()
            .map(|key| JsValue::from_str(&key))
            .collect::<js_sys::Array>()
    })
    .unwrap_or_else(js_sys::Array::new)
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_instance_floats() -> u32 {
    giftfall::RenderInstance::FLOATS as u32
}

#[wasm_bindgen]
pub fn get_event_floats() -> u32 {
    giftfall::EventRecord::FLOATS as u32
}
