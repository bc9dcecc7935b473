//! Upscaler - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads images and videos to the upscaling
//! server, follows video jobs through progress polling and shows the
//! upscaled result next to the original.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns the UpscaleController)                    │
//! │  ├── Hero (title, description)                               │
//! │  ├── UploadForm (file, model, scale, interpolation)          │
//! │  ├── ProgressPanel (#progressArea)                           │
//! │  └── ResultPanel (#resultArea, download)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Request, response, media and error types
//! - [`state`] - The page state record and its handlers
//! - [`controller`] - Runs handler effects against the browser
//! - [`components`] - UI components
//! - [`services`] - Server calls, polling and downloads

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod controller;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Requests
    SelectedFile, UploadRequest,
    // API
    UpscaleResponse, UpscaleOutcome, ProgressResponse, ProgressUpdate,
    // Media
    MediaKind, MediaSource, ResultView,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{Effect, Screen, UiState};
pub use controller::UpscaleController;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and the panic hook, then mount the application.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Upscaler - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="AI Upscaler"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let controller = UpscaleController::new();

    view! {
        <div class="container py-4">
            <Hero/>
            <UploadForm controller=controller/>
            <ProgressPanel controller=controller/>
            <ResultPanel controller=controller/>
        </div>

        <Footer/>
    }
}
