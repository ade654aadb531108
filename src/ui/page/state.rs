use crate::api::ComicRequest;
use crate::ui::mvi::UiState;

/// Focusable form elements, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Description,
    Submit,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Description,
            Field::Description => Field::Submit,
            Field::Submit => Field::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Submit,
            Field::Description => Field::Name,
            Field::Submit => Field::Description,
        }
    }
}

/// Everything the page shows, owned by the UI thread.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    pub product_name: String,
    pub product_description: String,
    pub focus: Field,
    pub is_loading: bool,
    pub error: Option<String>,
    pub show_panels: bool,
    pub image_urls: Vec<String>,
    pub panel_texts: Vec<String>,
    /// Append-only log of past submissions.
    pub messages: Vec<String>,
}

impl UiState for PageState {}

impl PageState {
    /// Both fields non-blank after trimming, and nothing in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_loading
            && !self.product_name.trim().is_empty()
            && !self.product_description.trim().is_empty()
    }

    /// Request body built from the current field values, untrimmed.
    pub fn payload(&self) -> ComicRequest {
        ComicRequest::new(
            self.product_name.clone(),
            self.product_description.clone(),
        )
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_loading {
            "Generating..."
        } else {
            "Generate comic"
        }
    }

    pub(crate) fn focused_value_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Name => Some(&mut self.product_name),
            Field::Description => Some(&mut self.product_description),
            Field::Submit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_all_fields() {
        assert_eq!(Field::Name.next().next().next(), Field::Name);
        assert_eq!(Field::Name.prev(), Field::Submit);
        assert_eq!(Field::Submit.prev(), Field::Description);
    }

    #[test]
    fn whitespace_only_fields_are_blank() {
        let state = PageState {
            product_name: "   ".to_string(),
            product_description: "Smells nice".to_string(),
            ..PageState::default()
        };
        assert!(!state.can_submit());
    }

    #[test]
    fn payload_keeps_surrounding_whitespace() {
        let state = PageState {
            product_name: " Soap ".to_string(),
            product_description: "Smells nice".to_string(),
            ..PageState::default()
        };
        assert_eq!(state.payload().product_name, " Soap ");
    }

    #[test]
    fn button_label_follows_loading() {
        let mut state = PageState::default();
        assert_eq!(state.button_label(), "Generate comic");
        state.is_loading = true;
        assert_eq!(state.button_label(), "Generating...");
    }
}
