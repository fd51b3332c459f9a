// vidmark shared type definitions
// Records, drafts, category outcomes, settings and errors used across the crate.

pub mod bookmark;
pub mod category;
pub mod errors;
pub mod settings;
