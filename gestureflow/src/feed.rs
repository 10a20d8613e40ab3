//! Detection feed state machine.
//!
//! ```text
//! idle --start--> connecting --connect(session)--> connected
//! connecting --stop--> idle
//! connected --stop--> idle
//! connecting --connect(session), camera unavailable--> error
//! error --stop--> idle
//! ```
//!
//! Timers live in the iced runtime, so they cannot be cancelled directly.
//! Instead every `start` and `stop` opens a new session, and timer messages
//! carry the session they were scheduled for. A message from any other
//! session is ignored, so nothing scheduled before `stop` can change state
//! after it.

use std::time::Duration;

use gestureflow_common::{FeedConfig, GestureDetection};

use crate::simulator::DetectionSimulator;

/// Identifies one start/stop cycle of the feed.
pub type SessionId = u64;

/// Feed activation status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedStatus {
    /// Camera off; nothing is emitted.
    #[default]
    Idle,
    /// Waiting for the simulated camera to come up.
    Connecting,
    /// Emitting a detection every tick.
    Connected,
    /// The simulated camera could not be opened.
    Error(String),
}

impl FeedStatus {
    /// Short badge label.
    pub fn badge(&self) -> &'static str {
        match self {
            FeedStatus::Idle => "Off",
            FeedStatus::Connecting => "Connecting",
            FeedStatus::Connected => "Live",
            FeedStatus::Error(_) => "Error",
        }
    }

    /// Longer description for the status card.
    pub fn description(&self) -> &'static str {
        match self {
            FeedStatus::Idle => "Camera off",
            FeedStatus::Connecting => "Initializing camera",
            FeedStatus::Connected => "Active and tracking",
            FeedStatus::Error(_) => "Camera error",
        }
    }
}

impl std::fmt::Display for FeedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedStatus::Error(reason) => write!(f, "error ({})", reason),
            other => write!(f, "{}", other.badge().to_lowercase()),
        }
    }
}

/// Message shown when the simulated camera is unavailable.
pub const CAMERA_DENIED: &str = "Camera access denied";

/// Simulated detection feed.
pub struct DetectionFeed {
    status: FeedStatus,
    session: SessionId,
    /// Most recent sample of the live session, including "no gesture" ones.
    current: Option<GestureDetection>,
    simulator: DetectionSimulator,
    tick_interval: Duration,
    connect_delay: Duration,
    camera_available: bool,
}

impl DetectionFeed {
    /// Create an idle feed from configuration.
    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(DetectionSimulator::from_config(config), config)
    }

    /// Create an idle feed with an explicit simulator.
    pub fn new(simulator: DetectionSimulator, config: &FeedConfig) -> Self {
        Self {
            status: FeedStatus::Idle,
            session: 0,
            current: None,
            simulator,
            tick_interval: Duration::from_millis(config.tick_interval_ms),
            connect_delay: Duration::from_millis(config.connect_delay_ms),
            camera_available: config.camera_available,
        }
    }

    pub fn status(&self) -> &FeedStatus {
        &self.status
    }

    /// Session of the current start/stop cycle.
    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Whether the feed has been started and not stopped.
    pub fn is_running(&self) -> bool {
        matches!(self.status, FeedStatus::Connecting | FeedStatus::Connected)
    }

    pub fn is_connected(&self) -> bool {
        self.status == FeedStatus::Connected
    }

    /// Most recent detection of the live session.
    pub fn current(&self) -> Option<&GestureDetection> {
        self.current.as_ref()
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn connect_delay(&self) -> Duration {
        self.connect_delay
    }

    /// Begin connecting.
    ///
    /// Returns the new session, whose `connect` must be delivered after the
    /// connect delay. Returns `None` if the feed is already running.
    pub fn start(&mut self) -> Option<SessionId> {
        if self.is_running() {
            tracing::debug!(status = %self.status, "Feed already running");
            return None;
        }

        self.session += 1;
        self.status = FeedStatus::Connecting;
        self.current = None;
        tracing::info!(session = self.session, "Connecting to camera");
        Some(self.session)
    }

    /// Finish connecting.
    ///
    /// Only applies to the current session while connecting; returns
    /// whether the state changed.
    pub fn connect(&mut self, session: SessionId) -> bool {
        if session != self.session || self.status != FeedStatus::Connecting {
            tracing::debug!(
                session,
                current = self.session,
                status = %self.status,
                "Ignoring stale connect"
            );
            return false;
        }

        if self.camera_available {
            self.status = FeedStatus::Connected;
            tracing::info!(session, "Camera connected");
        } else {
            self.status = FeedStatus::Error(CAMERA_DENIED.to_string());
            tracing::warn!(session, "Camera unavailable");
        }
        true
    }

    /// Stop the feed and invalidate every pending timer message.
    pub fn stop(&mut self) {
        if self.status == FeedStatus::Idle {
            return;
        }

        self.session += 1;
        self.status = FeedStatus::Idle;
        self.current = None;
        tracing::info!("Camera stopped");
    }

    /// Emit one detection for a tick of `session`.
    ///
    /// Returns `None` unless connected and `session` is current.
    pub fn tick(&mut self, session: SessionId, timestamp: i64) -> Option<GestureDetection> {
        if session != self.session || !self.is_connected() {
            tracing::debug!(session, current = self.session, "Ignoring stale tick");
            return None;
        }

        let detection = self.simulator.sample(timestamp);
        self.current = Some(detection.clone());
        Some(detection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed() -> DetectionFeed {
        let config = FeedConfig {
            seed: Some(11),
            ..FeedConfig::default()
        };
        DetectionFeed::from_config(&config)
    }

    #[test]
    fn test_initial_state() {
        let mut feed = feed();
        assert_eq!(feed.status(), &FeedStatus::Idle);
        assert_eq!(feed.tick_interval(), Duration::from_millis(2000));
        assert_eq!(feed.connect_delay(), Duration::from_millis(1500));
        // Nothing is emitted before start
        assert!(feed.tick(feed.session(), 1).is_none());
    }

    #[test]
    fn test_start_connect_tick() {
        let mut feed = feed();
        let session = feed.start().unwrap();
        assert_eq!(feed.status(), &FeedStatus::Connecting);

        // Connecting emits nothing
        assert!(feed.tick(session, 1).is_none());

        assert!(feed.connect(session));
        assert_eq!(feed.status(), &FeedStatus::Connected);

        let detection = feed.tick(session, 2).unwrap();
        assert_eq!(detection.timestamp, 2);
        assert_eq!(feed.current(), Some(&detection));
    }

    #[test]
    fn test_stop_while_connecting_cancels_connect() {
        let mut feed = feed();
        let session = feed.start().unwrap();
        feed.stop();

        // The delayed connect arrives late
        assert!(!feed.connect(session));
        assert_eq!(feed.status(), &FeedStatus::Idle);
        assert!(feed.tick(session, 5).is_none());
    }

    #[test]
    fn test_stale_connect_after_restart() {
        let mut feed = feed();
        let first = feed.start().unwrap();
        feed.stop();
        let second = feed.start().unwrap();
        assert_ne!(first, second);

        assert!(!feed.connect(first));
        assert_eq!(feed.status(), &FeedStatus::Connecting);
        assert!(feed.connect(second));
        assert!(feed.tick(first, 1).is_none());
        assert!(feed.tick(second, 2).is_some());
    }

    #[test]
    fn test_stop_clears_current_and_blocks_ticks() {
        let mut feed = feed();
        let session = feed.start().unwrap();
        feed.connect(session);
        feed.tick(session, 1);
        assert!(feed.current().is_some());

        feed.stop();
        assert!(feed.current().is_none());
        assert!(feed.tick(session, 2).is_none());
    }

    #[test]
    fn test_start_while_running_is_ignored() {
        let mut feed = feed();
        let session = feed.start().unwrap();
        assert!(feed.start().is_none());
        assert_eq!(feed.session(), session);

        feed.connect(session);
        assert!(feed.start().is_none());
        assert!(feed.is_connected());
    }

    #[test]
    fn test_camera_unavailable_enters_error() {
        let config = FeedConfig {
            camera_available: false,
            ..FeedConfig::default()
        };
        let mut feed = DetectionFeed::from_config(&config);
        let session = feed.start().unwrap();
        assert!(feed.connect(session));
        assert_eq!(
            feed.status(),
            &FeedStatus::Error(CAMERA_DENIED.to_string())
        );
        assert!(feed.tick(session, 1).is_none());

        // Error is not running; stop returns to idle and start is allowed
        assert!(!feed.is_running());
        feed.stop();
        assert_eq!(feed.status(), &FeedStatus::Idle);
        assert!(feed.start().is_some());
    }

    #[test]
    fn test_seeded_feed_is_deterministic() {
        let run = || {
            let mut feed = feed();
            let session = feed.start().unwrap();
            feed.connect(session);
            (0..20)
                .map(|ts| feed.tick(session, ts).unwrap().gesture_id)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(FeedStatus::Idle.badge(), "Off");
        assert_eq!(FeedStatus::Connected.description(), "Active and tracking");
        assert_eq!(FeedStatus::Connecting.to_string(), "connecting");
        assert_eq!(
            FeedStatus::Error("boom".to_string()).to_string(),
            "error (boom)"
        );
    }
}
