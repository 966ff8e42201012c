//! WebGPU client for the two-player Pong game
//!
//! Engine-free rendering using wgpu's WebGPU backend. The browser owns the
//! loop: key events and requestAnimationFrame callbacks arrive through the
//! exported hooks, and phase alone decides whether a frame simulates.
//!
//! Note: Canvas surface creation is only available when compiling for the
//! wasm32 target.

#![cfg(target_arch = "wasm32")]

mod audio;
mod camera;
mod game;
mod hud;
mod input;
mod mesh;
mod renderer;

use game::Client;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

// Global client storage for WASM bindings
static mut CLIENT: Option<Client> = None;

fn with_client<R>(f: impl FnOnce(&mut Client) -> R) -> Result<R, JsValue> {
    unsafe {
        if let Some(ref mut client) = CLIENT {
            Ok(f(client))
        } else {
            Err(JsValue::from_str("Client not initialized"))
        }
    }
}

/// Create the client against the given canvas. Resolves once the WebGPU
/// surface is ready.
#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement) -> js_sys::Promise {
    console_error_panic_hook::set_once();
    wasm_bindgen_futures::future_to_promise(async move {
        match Client::new(canvas).await {
            Ok(client) => {
                unsafe {
                    CLIENT = Some(client);
                }
                web_sys::console::log_1(&"pong client initialized".into());
                Ok(JsValue::UNDEFINED)
            }
            Err(e) => Err(JsValue::from_str(&e)),
        }
    })
}

/// Raw key-down from the page (`KeyboardEvent.key`). Unrecognized keys are
/// ignored.
#[wasm_bindgen]
pub fn on_key_down(key: &str) -> Result<(), JsValue> {
    with_client(|client| client.key_down(key))
}

/// Raw key-up from the page (`KeyboardEvent.key`).
#[wasm_bindgen]
pub fn on_key_up(key: &str) -> Result<(), JsValue> {
    with_client(|client| client.key_up(key))
}

/// Begin the match from the menu (start button).
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    with_client(|client| client.start())
}

/// Clear the score and play again after game over (restart button).
#[wasm_bindgen]
pub fn restart_game() -> Result<(), JsValue> {
    with_client(|client| client.restart())
}

/// One driver callback: tick the simulation (phase permitting) and paint.
#[wasm_bindgen]
pub fn frame() -> Result<(), JsValue> {
    with_client(|client| client.frame())?.map_err(|e| JsValue::from_str(&e))
}

/// Resize the rendering surface to the canvas size.
#[wasm_bindgen]
pub fn resize(width: u32, height: u32) -> Result<(), JsValue> {
    with_client(|client| client.resize(width, height))
}
