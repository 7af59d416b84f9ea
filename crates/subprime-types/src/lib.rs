pub mod color;
pub mod content;
pub mod document;
pub mod error;
pub mod keys;
pub mod locale;

pub use color::Rgb;
pub use content::*;
pub use document::*;
pub use error::{Error, Rejection, Result};
pub use keys::*;
pub use locale::Locale;
