//! Timers driving the simulated detection feed.

use std::time::Duration;

use iced::{Subscription, Task};

use crate::feed::SessionId;
use crate::message::Message;

/// Emit a feed tick for `session` every `interval`.
///
/// The session is part of the subscription identity, so a restarted feed
/// gets a fresh interval rather than inheriting the old one.
pub fn feed_tick_subscription(session: SessionId, interval: Duration) -> Subscription<Message> {
    iced::time::every(interval)
        .with(session)
        .map(|(session, _)| Message::FeedTick(session))
}

/// Deliver the connect message for `session` once `delay` has elapsed.
pub fn connect_after(session: SessionId, delay: Duration) -> Task<Message> {
    Task::perform(tokio::time::sleep(delay), move |_| {
        Message::FeedConnected(session)
    })
}
