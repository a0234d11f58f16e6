//! Infrastructure adapters bridging the engine to presentation layers.

pub mod observer;

#[cfg(not(target_arch = "wasm32"))]
pub use observer::ChannelObserver;
pub use observer::{CountingObserver, WatchObserver};
