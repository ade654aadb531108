//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use mangagen::api::ComicClient;
use mangagen::config::ApiConfig;
use mangagen::ui::app::App;
use mangagen::ui::page::PageIntent;
use std::io::Cursor;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Client pointed at `endpoint` with default timeouts.
pub fn client_for(endpoint: &str) -> ComicClient {
    client_with(ApiConfig {
        endpoint: endpoint.to_string(),
        ..ApiConfig::default()
    })
}

pub fn client_with(config: ApiConfig) -> ComicClient {
    ComicClient::new(&config).expect("Failed to build client")
}

/// Solid-colour PNG of the given size.
pub fn png_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("Failed to encode png");
    bytes
}

// -- App helpers --------------------------------------------------------------

/// Type `text` into the focused field, one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.dispatch_page(PageIntent::Insert(ch));
    }
}

/// App with both fields filled and focus back on the name field.
pub fn filled_app(name: &str, description: &str) -> App {
    let mut app = App::new();
    type_text(&mut app, name);
    app.dispatch_page(PageIntent::FocusNext);
    type_text(&mut app, description);
    app.dispatch_page(PageIntent::FocusPrev);
    app
}

pub const SAMPLE_RESPONSE: &str = r#"{
    "image_urls": ["http://img/1.png", "http://img/2.png", "http://img/3.png", "http://img/4.png"],
    "texts": ["One", "Two", "Three", "Four"]
}"#;
