//! WASM bindings for the browser frontend

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{resolve, GameConfig, Move, Session, SeededRng, INTRO};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
}

/// Seed from the browser's `Math.random`
fn browser_seed() -> u64 {
    let hi = (js_sys::Math::random() * 4_294_967_296.0) as u64;
    let lo = (js_sys::Math::random() * 4_294_967_296.0) as u64;
    (hi << 32) | lo
}

fn parse_move(text: &str) -> Result<Move, JsError> {
    text.parse::<Move>().map_err(|e| JsError::new(&e.to_string()))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// A game session driven from JavaScript
///
/// Every mutating call returns the fresh view so the page can redraw.
#[wasm_bindgen]
pub struct WasmGame {
    session: Session<SeededRng>,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a session, optionally from a JSON `GameConfig`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WasmGame, JsError> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json)
                .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?,
            None => GameConfig::default(),
        };
        Ok(WasmGame {
            session: Session::new(config, SeededRng::from_u64(browser_seed())),
        })
    }

    /// Submit the setup form fields as typed by the user
    pub fn submit_setup(&mut self, name: &str, rounds: &str) -> Result<JsValue, JsError> {
        self.session
            .submit_setup(name, rounds)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&self.session.view())
    }

    /// Play "rock", "paper" or "scissors"; returns the round report
    pub fn play(&mut self, player_move: &str) -> Result<JsValue, JsError> {
        let report = self
            .session
            .play_str(player_move)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&report)
    }

    pub fn dismiss_intro(&mut self) -> Result<JsValue, JsError> {
        self.session.dismiss_intro();
        to_js(&self.session.view())
    }

    pub fn view(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.view())
    }

    pub fn intro(&self) -> String {
        INTRO.to_string()
    }
}

/// Resolve a round without a session
#[wasm_bindgen]
pub fn resolve_round(player_move: &str, computer_move: &str) -> Result<JsValue, JsError> {
    let verdict = resolve(parse_move(player_move)?, parse_move(computer_move)?);
    to_js(&verdict)
}

/// Move names in draw order
#[wasm_bindgen]
pub fn get_move_options() -> Result<JsValue, JsError> {
    to_js(&Move::ALL)
}
