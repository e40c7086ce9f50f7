mod client;
mod controller;
mod draft;
mod error;
mod state;

pub use client::*;
pub use controller::*;
pub use draft::*;
pub use error::*;
pub use state::*;
