use crate::api::ComicRequest;
use crate::ui::mvi::Reducer;
use crate::ui::page::intent::PageIntent;
use crate::ui::page::state::PageState;

pub struct PageReducer;

impl Reducer for PageReducer {
    type State = PageState;
    type Intent = PageIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PageIntent::Insert(ch) => {
                if !state.is_loading {
                    if let Some(value) = state.focused_value_mut() {
                        value.push(ch);
                    }
                }
                state
            }
            PageIntent::Backspace => {
                if !state.is_loading {
                    if let Some(value) = state.focused_value_mut() {
                        value.pop();
                    }
                }
                state
            }
            PageIntent::ClearField => {
                if !state.is_loading {
                    if let Some(value) = state.focused_value_mut() {
                        value.clear();
                    }
                }
                state
            }
            PageIntent::FocusNext => {
                state.focus = state.focus.next();
                state
            }
            PageIntent::FocusPrev => {
                state.focus = state.focus.prev();
                state
            }
            PageIntent::Submit => {
                if state.can_submit() {
                    state.is_loading = true;
                    state.error = None;
                }
                state
            }
            PageIntent::Succeeded { request, response } => {
                state.messages.extend(log_lines(&request));
                state.image_urls = response.image_urls;
                state.panel_texts = response.texts;
                state.show_panels = true;
                finish_submission(state)
            }
            PageIntent::Failed { message } => {
                state.error = Some(message);
                finish_submission(state)
            }
        }
    }
}

/// Log entries appended for a successful submission.
pub fn log_lines(request: &ComicRequest) -> [String; 3] {
    [
        format!("Product: {}", request.product_name),
        format!("Description: {}", request.product_description),
        "System: comic generated".to_string(),
    ]
}

fn finish_submission(mut state: PageState) -> PageState {
    state.is_loading = false;
    state.product_name.clear();
    state.product_description.clear();
    state
}
