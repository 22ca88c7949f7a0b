//! Study workspace: uploaded documents and generated material

pub mod documents;
pub mod generator;
pub mod types;

pub use documents::DocumentLibrary;
pub use generator::ContentGenerator;
pub use types::{ContentKind, GeneratedContent, UploadedDocument};
