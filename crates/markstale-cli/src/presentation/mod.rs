pub mod console;
pub mod json;
pub mod traits;
pub mod view_models;

pub use console::ConsoleView;
pub use json::JsonView;
pub use traits::ScanView;
pub use view_models::{ScanHeader, ScanReport};
