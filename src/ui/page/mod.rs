mod intent;
mod reducer;
mod state;

pub use intent::PageIntent;
pub use reducer::{log_lines, PageReducer};
pub use state::{Field, PageState};
