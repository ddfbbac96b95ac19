//! Browser entry points: one client per page, driven by the page's timer

use std::cell::RefCell;

use game_core::{step, Config, Control, GameWorld, InputMapper, Params};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::error::ClientError;
use crate::input::{handle_key_down, handle_key_up};
use crate::renderer::Renderer;
use crate::scene::build_scene;

/// Main client state
struct Client {
    game: GameWorld,
    input: InputMapper,
    renderer: Renderer,
    running: bool,
}

impl Client {
    async fn new(canvas: HtmlCanvasElement) -> Result<Self, ClientError> {
        let config = Config::default();
        config.validate()?;

        let renderer = Renderer::new(canvas, &config).await?;

        Ok(Self {
            game: GameWorld::new(config),
            input: InputMapper::new(),
            renderer,
            running: true,
        })
    }

    /// Simulate and draw one frame; false once the player has quit
    fn frame(&mut self) -> Result<bool, ClientError> {
        if !self.running {
            return Ok(false);
        }

        let commands = self.input.take_commands();
        if step(&mut self.game, &commands) == Control::Quit {
            log::info!("quit requested");
            self.running = false;
            return Ok(false);
        }

        let quads = build_scene(&self.game);
        self.renderer.draw(&quads)?;
        Ok(true)
    }
}

thread_local! {
    static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
}

fn with_client<T>(f: impl FnOnce(&mut Client) -> Result<T, ClientError>) -> Result<T, JsValue> {
    CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
        Some(client) => f(client).map_err(JsValue::from),
        None => Err(ClientError::NotInitialized.into()),
    })
}

/// Set up logging and WebGPU; the promise rejects if initialization fails
#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement) -> js_sys::Promise {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed by an earlier call
    let _ = console_log::init_with_level(log::Level::Info);

    wasm_bindgen_futures::future_to_promise(async move {
        match Client::new(canvas).await {
            Ok(client) => {
                CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
                log::info!("Pong client ready");
                Ok(JsValue::UNDEFINED)
            }
            Err(e) => {
                log::error!("client initialization failed: {}", e);
                Err(e.into())
            }
        }
    })
}

#[wasm_bindgen]
pub fn key_down(key: &str) -> Result<(), JsValue> {
    with_client(|client| {
        handle_key_down(&mut client.input, key);
        Ok(())
    })
}

#[wasm_bindgen]
pub fn key_up(key: &str) -> Result<(), JsValue> {
    with_client(|client| {
        handle_key_up(&mut client.input, key);
        Ok(())
    })
}

/// Advance and draw one frame. Returns false once the game has quit.
#[wasm_bindgen]
pub fn render_frame() -> Result<bool, JsValue> {
    with_client(Client::frame)
}

/// Delay the page should wait between frames
#[wasm_bindgen]
pub fn frame_interval_ms() -> u32 {
    CLIENT.with(|cell| {
        cell.borrow()
            .as_ref()
            .map_or(Params::FRAME_MILLIS, |client| client.game.config.frame_millis)
    })
}
