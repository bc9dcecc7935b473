//! UI Components for the upscaler page.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadForm`] - File picker, sliders and model select
//! - [`ProgressPanel`] - Progress bar and status line
//! - [`ResultPanel`] - Original vs. upscaled media and download

mod hero;
mod upload;
mod progress;
mod result;
mod footer;

pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use result::*;
pub use footer::*;
