pub mod contact;
pub mod content;
pub mod navigation;
pub mod reveal;
pub mod sections;
pub mod theme;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
pub mod frontend;
