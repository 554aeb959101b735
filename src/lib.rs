mod utils;
pub mod animator;
pub mod color;
pub mod config;
pub mod field;
pub mod particle;
pub mod renderer;
pub mod risk;

use wasm_bindgen::prelude::*;
use web_sys::console;

pub use animator::AnimationHandle;
pub use config::FieldConfig;
pub use field::ParticleField;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// Mounts the particle backdrop into the first element matching `container_selector`
/// (`.floating-shapes` when omitted). Resolves to `undefined` when no such element exists.
/// Passing `profile = true` wraps every frame in `console.time` / `console.timeEnd`.
#[wasm_bindgen]
pub fn start_particle_field(
    container_selector: Option<String>,
    profile: Option<bool>,
) -> Result<Option<AnimationHandle>, JsValue> {
    let mut config = FieldConfig::default();
    if let Some(selector) = container_selector {
        config.container_selector = selector;
    }
    config.profile_frames = profile.unwrap_or(false);
    animator::mount(config)
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
