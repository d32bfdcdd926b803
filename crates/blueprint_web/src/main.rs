//! Trunk entry point. `wasm_start` runs when the module loads; a native build
//! has nothing to run.

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    blueprint_web::start();
}

fn main() {}
