use game_core::ConfigError;
use thiserror::Error;

/// Everything that can go wrong in the browser client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to create surface: {0}")]
    Surface(String),
    #[error("failed to find adapter")]
    Adapter,
    #[error("failed to create device: {0}")]
    Device(String),
    #[error("surface reports no texture formats")]
    NoSurfaceFormat,
    #[error("failed to get current texture: {0}")]
    Frame(String),
    #[error("client not initialized")]
    NotInitialized,
}

#[cfg(target_arch = "wasm32")]
impl From<ClientError> for wasm_bindgen::JsValue {
    fn from(err: ClientError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
