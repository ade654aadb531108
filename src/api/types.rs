use serde::{Deserialize, Serialize};

/// Number of panels in a generated comic.
pub const PANEL_COUNT: usize = 4;

/// Body of a generation request.
///
/// Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComicRequest {
    pub product_name: String,
    pub product_description: String,
}

/// Successful generation result, indexed by panel position.
///
/// Both fields are required; fewer than [`PANEL_COUNT`] entries is accepted
/// and rendered with placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComicResponse {
    pub image_urls: Vec<String>,
    pub texts: Vec<String>,
}

/// Error body returned by the service on a non-success status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ComicRequest {
    pub fn new(product_name: impl Into<String>, product_description: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            product_description: product_description.into(),
        }
    }
}
