//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the switching core and an
//! external system (disk, the person at the keyboard, the editor).
//! Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod opener;
pub mod prompt;

pub use filesystem::FileSystem;
pub use opener::Opener;
pub use prompt::Prompt;
