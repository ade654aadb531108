use crate::api::{ComicRequest, ComicResponse};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PageIntent {
    /// Type a character into the focused field.
    Insert(char),
    Backspace,
    /// Empty the focused field.
    ClearField,
    FocusNext,
    FocusPrev,
    /// Start a submission. No-op unless the form is submittable.
    Submit,
    /// The generation call returned a comic for `request`.
    Succeeded {
        request: ComicRequest,
        response: ComicResponse,
    },
    /// The generation call failed; `message` is already user-facing.
    Failed { message: String },
}

impl Intent for PageIntent {}
