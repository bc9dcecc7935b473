//! Entry point for the WASM application

pub fn main() {
    upscaler_frontend::start();
}
