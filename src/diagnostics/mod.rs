// SPDX-License-Identifier: MPL-2.0
//! Diagnostic channel for non-fatal failures.
//!
//! Nothing in the showcase has a fatal error class: a failed catalog fetch,
//! an aborted navigation, or a dropped price poll degrades one widget and
//! never interrupts the page. Each such failure lands here as a typed event
//! in a memory-bounded ring buffer, alongside an `eprintln!` at the failure
//! site, so a session's degradations can be inspected without a debugger.

use std::collections::VecDeque;
use std::time::Instant;

/// Default number of retained events.
pub const DEFAULT_LOG_CAPACITY: usize = 256;

/// One recorded degradation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// The gallery listing endpoint failed; the inline error panel is up.
    CatalogLoadFailed { detail: String },
    /// A transition targeted a view id the surface does not know.
    NavigationAborted { target: String },
    /// One lazy media payload failed; the item stays a placeholder.
    MediaLoadFailed { path: String, detail: String },
    /// A price poll failed; the ticker shows its unavailable label.
    PriceFetchFailed { ticker: String, detail: String },
}

impl DiagnosticEvent {
    pub fn summary(&self) -> String {
        match self {
            DiagnosticEvent::CatalogLoadFailed { detail } => {
                format!("gallery catalog load failed: {}", detail)
            }
            DiagnosticEvent::NavigationAborted { target } => {
                format!("navigation aborted: no view '{}'", target)
            }
            DiagnosticEvent::MediaLoadFailed { path, detail } => {
                format!("media load failed for {}: {}", path, detail)
            }
            DiagnosticEvent::PriceFetchFailed { ticker, detail } => {
                format!("{} price fetch failed: {}", ticker, detail)
            }
        }
    }
}

/// Timestamped entry in the log.
#[derive(Debug, Clone)]
pub struct LoggedEvent {
    pub at: Instant,
    pub event: DiagnosticEvent,
}

/// Ring buffer of diagnostic events. When full, pushing evicts the oldest
/// entry; entries iterate oldest first.
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    events: VecDeque<LoggedEvent>,
    capacity: usize,
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}

impl DiagnosticsLog {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records an event, echoing its summary to stderr.
    pub fn record(&mut self, event: DiagnosticEvent) {
        eprintln!("{}", event.summary());
        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(LoggedEvent {
            at: Instant::now(),
            event,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoggedEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_chronological_order() {
        let mut log = DiagnosticsLog::with_capacity(10);
        log.record(DiagnosticEvent::NavigationAborted {
            target: "vault".into(),
        });
        log.record(DiagnosticEvent::CatalogLoadFailed {
            detail: "status 500".into(),
        });

        let kinds: Vec<_> = log.iter().map(|e| e.event.clone()).collect();
        assert!(matches!(kinds[0], DiagnosticEvent::NavigationAborted { .. }));
        assert!(matches!(kinds[1], DiagnosticEvent::CatalogLoadFailed { .. }));
    }

    #[test]
    fn full_log_evicts_oldest() {
        let mut log = DiagnosticsLog::with_capacity(2);
        for target in ["a", "b", "c"] {
            log.record(DiagnosticEvent::NavigationAborted {
                target: target.into(),
            });
        }

        assert_eq!(log.len(), 2);
        let first = log.iter().next().expect("entry");
        assert_eq!(
            first.event,
            DiagnosticEvent::NavigationAborted { target: "b".into() }
        );
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut log = DiagnosticsLog::with_capacity(0);
        log.record(DiagnosticEvent::NavigationAborted { target: "x".into() });
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn summaries_name_the_failure() {
        let event = DiagnosticEvent::MediaLoadFailed {
            path: "assets/gallery/a.png".into(),
            detail: "timed out".into(),
        };
        let summary = event.summary();
        assert!(summary.contains("a.png"));
        assert!(summary.contains("timed out"));
    }
}
