//! Presentational primitives.
//!
//! Each wraps one display element, forwards the attributes it is given and
//! merges a fixed base style with the caller's style (`base.patch(caller)`).
//! None of them hold state or validate anything.

mod button;
mod card;
mod input;
mod label;
mod logo;

pub use button::Button;
pub use card::{Card, CardContent};
pub use input::Input;
pub use label::Label;
pub use logo::Logo;
