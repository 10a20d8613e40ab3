//! GestureFlow - gesture control dashboard driven by a simulated camera feed.
//!
//! This library exposes the core components for testing.

pub mod app;
pub mod feed;
pub mod message;
pub mod simulator;
pub mod subscription;
pub mod view;

// Re-export commonly used types
pub use app::GestureFlow;
pub use feed::{DetectionFeed, FeedStatus};
pub use message::Message;
