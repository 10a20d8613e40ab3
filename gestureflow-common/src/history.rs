//! Bounded detection history and usage statistics.

use std::collections::{HashMap, VecDeque};

use crate::gesture::{GestureDetection, display_name};

/// Default number of retained detections.
pub const DEFAULT_CAPACITY: usize = 10;

/// Default number of detections shown as recent activity.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Usage count for one gesture in the retained history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEntry {
    /// Gesture id.
    pub gesture_id: String,
    /// Occurrences within the retained history.
    pub count: usize,
    /// Label derived from the id (first underscore replaced by a space).
    pub display_name: String,
}

impl UsageEntry {
    /// Bar width relative to the most used gesture, in [0, 1].
    pub fn bar_ratio(&self, max_count: usize) -> f32 {
        if max_count == 0 {
            0.0
        } else {
            self.count as f32 / max_count as f32
        }
    }
}

/// Rolling log of recognized detections, newest first.
///
/// Detections without a gesture id are never stored. Once `capacity` is
/// reached the oldest entry is dropped.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<GestureDetection>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl History {
    /// Create an empty history with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history retaining at most `capacity` detections.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of retained detections.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record a detection.
    ///
    /// Returns `false` (and stores nothing) for a "no gesture" sample.
    pub fn record(&mut self, detection: GestureDetection) -> bool {
        if detection.gesture_id.is_none() {
            return false;
        }

        self.entries.push_front(detection);
        self.entries.truncate(self.capacity);
        true
    }

    /// Up to `n` most recent detections, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &GestureDetection> {
        self.entries.iter().take(n)
    }

    /// All retained detections, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &GestureDetection> {
        self.entries.iter()
    }

    /// Per-gesture usage over the retained history.
    ///
    /// Entries appear in the order each gesture was first recorded among
    /// the retained detections.
    pub fn usage_summary(&self) -> Vec<UsageEntry> {
        let mut summary: Vec<UsageEntry> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for id in self.entries.iter().rev().filter_map(|d| d.gesture_id.as_deref()) {
            match index.get(id) {
                Some(&i) => summary[i].count += 1,
                None => {
                    index.insert(id, summary.len());
                    summary.push(UsageEntry {
                        gesture_id: id.to_string(),
                        count: 1,
                        display_name: display_name(id),
                    });
                }
            }
        }

        summary
    }

    /// Usage summary paired with each entry's relative bar width.
    pub fn usage_bars(&self) -> Vec<(UsageEntry, f32)> {
        let summary = self.usage_summary();
        let max_count = summary.iter().map(|e| e.count).max().unwrap_or(0);
        summary
            .into_iter()
            .map(|entry| {
                let ratio = entry.bar_ratio(max_count);
                (entry, ratio)
            })
            .collect()
    }

    /// Number of retained detections.
    pub fn total_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of distinct gestures in the retained history.
    pub fn unique_count(&self) -> usize {
        self.usage_summary().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detection(id: &str, timestamp: i64) -> GestureDetection {
        GestureDetection::new(Some(id.to_string()), 0.8, timestamp)
    }

    #[test]
    fn test_none_samples_are_discarded() {
        let mut history = History::new();
        assert!(!history.record(GestureDetection::none(0.9, 1)));
        assert!(history.is_empty());
        assert!(history.record(detection("pinch", 2)));
        assert_eq!(history.total_count(), 1);
    }

    #[test]
    fn test_capacity_bound() {
        let mut history = History::new();
        for ts in 0..25 {
            history.record(detection("zoom", ts));
            assert!(history.total_count() <= DEFAULT_CAPACITY);
        }
        assert_eq!(history.total_count(), 10);

        // Oldest entries are dropped first.
        let timestamps: Vec<i64> = history.iter().map(|d| d.timestamp).collect();
        assert_eq!(timestamps, (15..25).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_recent_is_newest_first_prefix() {
        let mut history = History::new();
        for (ts, id) in ["swipe_left", "pinch", "zoom", "pinch", "swipe_right", "zoom"]
            .iter()
            .enumerate()
        {
            history.record(detection(id, ts as i64));
        }

        let recent: Vec<_> = history.recent(DEFAULT_RECENT_LIMIT).collect();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].timestamp, 5);
        assert!(recent.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));

        assert_eq!(history.recent(100).count(), 6);
        assert_eq!(history.recent(0).count(), 0);
    }

    #[test]
    fn test_usage_summary_order_and_counts() {
        let mut history = History::new();
        for (ts, id) in ["pinch", "pinch", "zoom"].iter().enumerate() {
            history.record(detection(id, ts as i64));
        }

        let summary = history.usage_summary();
        let pairs: Vec<_> = summary
            .iter()
            .map(|e| (e.gesture_id.as_str(), e.count))
            .collect();
        assert_eq!(pairs, vec![("pinch", 2), ("zoom", 1)]);
        assert_eq!(history.total_count(), 3);
        assert_eq!(history.unique_count(), 2);
    }

    #[test]
    fn test_usage_counts_sum_to_total() {
        let mut history = History::new();
        let ids = ["pinch", "zoom", "swipe_left", "pinch", "swipe_right"];
        for ts in 0..17 {
            history.record(detection(ids[ts % ids.len()], ts as i64));
        }

        let sum: usize = history.usage_summary().iter().map(|e| e.count).sum();
        assert_eq!(sum, history.total_count());
    }

    #[test]
    fn test_usage_display_name_quirk() {
        let mut history = History::new();
        history.record(detection("two_finger_tap", 1));
        assert_eq!(history.usage_summary()[0].display_name, "two finger_tap");
    }

    #[test]
    fn test_usage_bars_scale_to_max() {
        let mut history = History::new();
        for (ts, id) in ["pinch", "zoom", "pinch", "pinch", "zoom", "wave"]
            .iter()
            .enumerate()
        {
            history.record(detection(id, ts as i64));
        }

        let bars: Vec<_> = history
            .usage_bars()
            .into_iter()
            .map(|(e, ratio)| (e.gesture_id, ratio))
            .collect();
        assert_eq!(bars[0], ("pinch".to_string(), 1.0));
        assert!((bars[1].1 - 2.0 / 3.0).abs() < f32::EPSILON);
        assert!((bars[2].1 - 1.0 / 3.0).abs() < f32::EPSILON);

        assert!(History::new().usage_bars().is_empty());
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut history = History::with_capacity(0);
        history.record(detection("pinch", 1));
        history.record(detection("zoom", 2));
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.iter().next().unwrap().timestamp, 2);
    }
}
