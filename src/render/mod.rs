//! Dumps of a laid-out document for debugging and tooling.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::{to_text, PAGE_SEPARATOR};
