//! Platform-independent logic for the playback-fx engine.
//!
//! Everything in this crate is pure Rust with no web API dependencies, so it
//! compiles and tests on the host. The wasm frontend (`fx-web`) consumes these
//! types to drive the actual media elements and audio nodes.

pub mod prefs;
pub mod preset;
pub mod ramp;
pub mod routing;
pub mod speed;

pub use prefs::*;
pub use preset::*;
pub use ramp::*;
pub use routing::*;
pub use speed::*;
