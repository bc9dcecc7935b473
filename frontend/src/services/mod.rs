//! Browser and server services.
//!
//! # Services
//!
//! - [`upscale`] - multipart upload and progress requests
//! - [`poller`] - cancellable progress poll task
//! - [`download`] - synthesized anchor downloads

pub mod upscale;
pub mod poller;
pub mod download;

pub use upscale::*;
pub use poller::*;
pub use download::*;
