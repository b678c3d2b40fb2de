use std::time::Duration;
use std::time::Instant;

use super::state::ViewportClass;

/// Pure width classification; `width < breakpoint` is mobile.
pub fn classify(width: u16, breakpoint: u16) -> ViewportClass {
    if width < breakpoint {
        ViewportClass::Mobile
    } else {
        ViewportClass::Desktop
    }
}

/// Collapses bursts of resize events into at most one viewport change.
///
/// `observe` records every raw width; `poll` emits a class only once the
/// window has been quiet for the debounce interval and the class differs from
/// the last one emitted.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    breakpoint: u16,
    interval: Duration,
    current: ViewportClass,
    pending: Option<(u16, Instant)>,
}

impl ResizeDebouncer {
    pub fn new(breakpoint: u16, interval: Duration, initial_width: u16) -> Self {
        Self {
            breakpoint,
            interval,
            current: classify(initial_width, breakpoint),
            pending: None,
        }
    }

    pub fn current(&self) -> ViewportClass {
        self.current
    }

    pub fn observe(&mut self, width: u16, now: Instant) {
        self.pending = Some((width, now));
    }

    pub fn poll(&mut self, now: Instant) -> Option<ViewportClass> {
        let (width, seen_at) = self.pending?;
        if now.saturating_duration_since(seen_at) < self.interval {
            return None;
        }
        self.pending = None;
        let class = classify(width, self.breakpoint);
        if class == self.current {
            return None;
        }
        tracing::debug!(width, class = class.label(), "viewport class changed");
        self.current = class;
        Some(class)
    }

    /// Time until a pending resize settles, for sizing the event poll.
    pub fn time_to_settle(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, seen_at)| self.interval.saturating_sub(now.saturating_duration_since(seen_at)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const BREAKPOINT: u16 = 100;

    fn debouncer(width: u16) -> ResizeDebouncer {
        ResizeDebouncer::new(BREAKPOINT, Duration::from_millis(150), width)
    }

    #[test]
    fn classification_threshold_is_exclusive() {
        assert_eq!(classify(99, BREAKPOINT), ViewportClass::Mobile);
        assert_eq!(classify(100, BREAKPOINT), ViewportClass::Desktop);
        assert_eq!(classify(0, BREAKPOINT), ViewportClass::Mobile);
    }

    #[test]
    fn resize_waits_for_quiet_period() {
        let start = Instant::now();
        let mut watcher = debouncer(120);
        watcher.observe(80, start);
        assert_eq!(watcher.poll(start + Duration::from_millis(100)), None);
        assert_eq!(
            watcher.poll(start + Duration::from_millis(150)),
            Some(ViewportClass::Mobile)
        );
        assert_eq!(watcher.poll(start + Duration::from_millis(400)), None);
    }

    #[test]
    fn burst_only_reports_final_width() {
        let start = Instant::now();
        let mut watcher = debouncer(120);
        watcher.observe(80, start);
        watcher.observe(90, start + Duration::from_millis(50));
        watcher.observe(130, start + Duration::from_millis(100));
        assert_eq!(watcher.poll(start + Duration::from_millis(200)), None);
        assert_eq!(watcher.poll(start + Duration::from_millis(260)), None);
        assert_eq!(watcher.current(), ViewportClass::Desktop);
    }

    #[test]
    fn same_class_resize_emits_nothing() {
        let start = Instant::now();
        let mut watcher = debouncer(60);
        watcher.observe(70, start);
        assert_eq!(watcher.poll(start + Duration::from_secs(1)), None);
        assert_eq!(watcher.time_to_settle(start), None);
    }

    #[test]
    fn time_to_settle_counts_down() {
        let start = Instant::now();
        let mut watcher = debouncer(120);
        watcher.observe(80, start);
        assert_eq!(
            watcher.time_to_settle(start + Duration::from_millis(100)),
            Some(Duration::from_millis(50))
        );
    }
}
