//! WebGPU client for Pong
//!
//! Engine-free rendering using wgpu with the "webgpu" feature. Scene building
//! and key mapping are plain Rust and build on any target; the renderer and
//! the JS bindings only exist on wasm32.

pub mod camera;
pub mod error;
pub mod glyphs;
pub mod input;
pub mod scene;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod mesh;
#[cfg(target_arch = "wasm32")]
mod renderer;

pub use error::ClientError;
pub use scene::{build_scene, Quad};
