// SPDX-License-Identifier: MPL-2.0
//! View transition state machine for the showcase.
//!
//! The navigator owns "which logical view is active" and mediates every
//! transition between in-page sections, the embedded external-content frame,
//! and sequential prev/next stepping. Transitions are phased: `navigate_to`
//! (or `open_external`) arms a transition, `complete_exit` runs once the
//! exit fade has finished, and `complete_entry` runs once the entrance fade
//! has finished. The Iced shell sequences the phases with timed tasks; tests
//! drive them synchronously.
//!
//! A single `transitioning` flag makes transitions single-flight: calls that
//! arrive while one is in progress are silently dropped, never queued.

mod sequence;

pub use crate::host::{pause_scene, resume_scene, SceneControl, ViewHost};
pub use sequence::{NavigationSequence, ViewEntry, ViewKind};

/// Pseudo-view id backing the embedded external-content frame.
pub const FRAME_VIEW: &str = "frame-content";

/// Direction for sequential stepping through the navigation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// State machine owning the active view and the transition lifecycle.
#[derive(Debug, Clone)]
pub struct Navigator {
    sequence: NavigationSequence,
    home: String,
    /// Logical active view. Updated as soon as a transition is armed, so a
    /// transition aborted by an unknown id leaves this pointing at the
    /// requested id (the surface keeps no active marker in that case).
    active: String,
    transitioning: bool,
    pending: Option<String>,
    frame_url: Option<String>,
}

impl Navigator {
    pub fn new(sequence: NavigationSequence, home: &str) -> Self {
        Self {
            sequence,
            home: home.to_string(),
            active: home.to_string(),
            transitioning: false,
            pending: None,
            frame_url: None,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn frame_url(&self) -> Option<&str> {
        self.frame_url.as_deref()
    }

    /// Target of the armed transition, until `complete_exit` consumes it.
    pub fn pending_target(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn sequence(&self) -> &NavigationSequence {
        &self.sequence
    }

    /// Arms a transition to an in-page section. Returns `false` when a
    /// transition is already in flight. Resumes the background scene, since
    /// every section target leaves the frame view behind.
    pub fn navigate_to(
        &mut self,
        target: &str,
        scene: Option<&mut dyn SceneControl>,
    ) -> bool {
        if self.transitioning {
            return false;
        }
        resume_scene(scene);
        self.arm(target);
        true
    }

    /// Points the content frame at `url`, pauses the background scene, and
    /// arms a transition to the frame view.
    pub fn open_external(
        &mut self,
        url: &str,
        host: &mut dyn ViewHost,
        scene: Option<&mut dyn SceneControl>,
    ) -> bool {
        if self.transitioning {
            return false;
        }
        self.frame_url = Some(url.to_string());
        host.set_frame_source(url);
        pause_scene(scene);
        self.arm(FRAME_VIEW);
        true
    }

    /// Unloads the content frame, resumes the scene, and heads home.
    pub fn close_frame(
        &mut self,
        host: &mut dyn ViewHost,
        scene: Option<&mut dyn SceneControl>,
    ) -> bool {
        if self.transitioning {
            return false;
        }
        self.frame_url = None;
        host.set_frame_source("");
        resume_scene(scene);
        let home = self.home.clone();
        self.arm(&home);
        true
    }

    fn arm(&mut self, target: &str) {
        self.transitioning = true;
        self.active = target.to_string();
        self.pending = Some(target.to_string());
    }

    /// Second transition phase, run after the exit fade. Deactivates every
    /// view, then activates the pending target. When the target does not
    /// exist on the surface the transition silently aborts: no view is
    /// activated and the transitioning flag clears immediately.
    ///
    /// Returns the id of the activated view so the caller can run
    /// view-specific follow-ups (first gallery entry triggers the catalog
    /// fetch).
    pub fn complete_exit(&mut self, host: &mut dyn ViewHost) -> Option<String> {
        let target = self.pending.take()?;
        host.deactivate_all();
        if host.activate_view(&target) {
            host.set_fragment(&target);
            host.set_nav_highlight(&target);
            let (prev, next) = self.step_controls();
            host.set_step_controls(prev, next);
            Some(target)
        } else {
            self.transitioning = false;
            None
        }
    }

    /// Final transition phase, run after the entrance fade.
    pub fn complete_entry(&mut self) {
        self.transitioning = false;
    }

    /// Position of the active view in the navigation sequence. The frame
    /// view is matched through the trailing path segment of the loaded URL.
    pub fn current_index(&self) -> Option<usize> {
        if self.active == FRAME_VIEW {
            let url = self.frame_url.as_deref()?;
            self.sequence.index_of_frame_url(url)
        } else {
            self.sequence.index_of_section(&self.active)
        }
    }

    /// Whether the prev/next step affordances should be enabled. A view
    /// outside the sequence disables prev but leaves next enabled, matching
    /// the clamping in [`Navigator::step`].
    pub fn step_controls(&self) -> (bool, bool) {
        match self.current_index() {
            Some(index) => (index > 0, index + 1 < self.sequence.len()),
            None => (false, true),
        }
    }

    /// Steps to the adjacent sequence entry. The target index is clamped to
    /// the sequence bounds, so stepping past either end is a no-op. Returns
    /// whether a transition was armed.
    pub fn step(
        &mut self,
        direction: Direction,
        host: &mut dyn ViewHost,
        scene: Option<&mut dyn SceneControl>,
    ) -> bool {
        if self.transitioning {
            return false;
        }
        let Some(current) = self.current_index() else {
            return false;
        };
        let target_index = match direction {
            Direction::Prev => current.saturating_sub(1),
            Direction::Next => (current + 1).min(self.sequence.len() - 1),
        };
        if target_index == current {
            return false;
        }
        let entry = match self.sequence.get(target_index) {
            Some(entry) => entry.clone(),
            None => return false,
        };
        match entry.kind {
            ViewKind::External => self.open_external(&entry.id, host, scene),
            ViewKind::Section => self.navigate_to(&entry.id, scene),
        }
    }
}
