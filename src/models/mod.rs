mod document;
mod media;
mod upload;

pub use document::*;
pub use media::*;
pub use upload::*;
