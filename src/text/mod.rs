pub mod concat;
pub mod constants;
pub mod template;
pub mod text_macros;

pub use concat::concat;
pub use template::{format, placeholder_count};
