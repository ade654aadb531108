pub mod app;
pub mod components;
pub mod events;
pub mod footer;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod page;
pub mod panel_image;
pub mod panels;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
