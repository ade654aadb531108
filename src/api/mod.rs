//! Client side of the comic generation service.
//!
//! [`ComicClient`] performs the single `POST /generate_comic` round-trip of a
//! submission, and [`ImageLoader`] fetches the panel images named in the
//! response so they can be drawn in the terminal.

mod client;
mod error;
mod images;
mod types;

pub use client::ComicClient;
pub use error::{ImageError, SubmitError};
pub use images::{ImageLoader, IMAGE_FETCH_TIMEOUT, MAX_IMAGE_EDGE};
pub use types::{ComicRequest, ComicResponse, ErrorBody, PANEL_COUNT};
