//! Port implementations.
//!
//! - `live`: the real disk, dialog command and editor.
//! - `recording`: wraps another adapter and writes what it saw to a cassette.
//! - `replaying`: answers from a cassette without touching anything.

pub mod live;
pub mod recording;
pub mod replaying;
