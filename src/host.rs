// SPDX-License-Identifier: MPL-2.0
//! Capability surfaces the state machines drive instead of touching widgets.
//!
//! Neither the navigator nor the gallery talks to a rendering surface
//! directly. Everything user-visible goes through [`ViewHost`], so both can
//! be exercised in tests with a recording fake, while the Iced shell
//! implements the trait by mutating the state its `view()` function reads.

use crate::gallery::catalog::MediaEntry;

/// Rendering-surface capabilities consumed by the navigator and the gallery.
pub trait ViewHost {
    /// Removes the active marker from every view.
    fn deactivate_all(&mut self);

    /// Marks `id` active. Returns `false` when no such view exists, in
    /// which case the transition silently aborts.
    fn activate_view(&mut self, id: &str) -> bool;

    /// Reflects the active view in the addressable location, without
    /// scrolling or reloading anything.
    fn set_fragment(&mut self, id: &str);

    /// Points the embedded content frame at an external URL. An empty
    /// string unloads the frame.
    fn set_frame_source(&mut self, url: &str);

    /// Highlights the navigation entry matching the active view.
    fn set_nav_highlight(&mut self, id: &str);

    /// Enables or disables the prev/next step affordances.
    fn set_step_controls(&mut self, prev_enabled: bool, next_enabled: bool);

    /// Materializes one gallery item in placeholder state. `index` is the
    /// item's position in the rendered window.
    fn render_item(&mut self, index: usize, entry: &MediaEntry);

    /// Hides or reveals a rendered gallery item without removing it.
    fn set_item_hidden(&mut self, index: usize, hidden: bool);

    /// Shows or clears the gallery loading indicator.
    fn set_gallery_loading(&mut self, loading: bool);

    /// Replaces the gallery content with an inline error panel.
    fn show_gallery_error(&mut self, message: &str);

    /// Shows or hides the modal prev/next controls.
    fn set_modal_controls(&mut self, visible: bool);
}

/// Best-effort advisory control over the decorative background scene.
/// Callers tolerate its absence; no call blocks or acknowledges.
pub trait SceneControl {
    fn pause(&mut self);
    fn resume(&mut self);
}

/// Pauses the scene if one is attached.
pub fn pause_scene(scene: Option<&mut dyn SceneControl>) {
    if let Some(scene) = scene {
        scene.pause();
    }
}

/// Resumes the scene if one is attached.
pub fn resume_scene(scene: Option<&mut dyn SceneControl>) {
    if let Some(scene) = scene {
        scene.resume();
    }
}
