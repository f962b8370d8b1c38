// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the showcase surface.
//!
//! - **Palette**: the dark ether theme
//! - **Opacity**: overlay levels
//! - **Spacing**: 8px baseline grid
//! - **Sizing**: component dimensions
//! - **Typography**: font size scale
//! - **Radius**: border radii

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Surface scale, near-black violet to pale text
    pub const SURFACE_900: Color = Color::from_rgb(0.043, 0.043, 0.078);
    pub const SURFACE_800: Color = Color::from_rgb(0.078, 0.078, 0.125);
    pub const SURFACE_700: Color = Color::from_rgb(0.125, 0.125, 0.19);
    pub const SURFACE_500: Color = Color::from_rgb(0.25, 0.25, 0.34);

    pub const TEXT: Color = Color::from_rgb(0.91, 0.92, 0.96);
    pub const TEXT_DIM: Color = Color::from_rgb(0.56, 0.58, 0.68);

    // Accent scale, the ether blue
    pub const ACCENT_400: Color = Color::from_rgb(0.63, 0.70, 0.95);
    pub const ACCENT_500: Color = Color::from_rgb(0.54, 0.64, 0.93);
    pub const ACCENT_700: Color = Color::from_rgb(0.33, 0.40, 0.68);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);

    // Background scene
    pub const SCENE_BACKDROP: Color = SURFACE_900;
    pub const SCENE_GLYPH: Color = Color::from_rgb(0.42, 0.48, 0.72);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Width of the slide-in navigation panel.
    pub const NAV_PANEL_WIDTH: f32 = 260.0;

    /// Vertical extent of one laid-out gallery cell, spacing excluded.
    pub const GALLERY_CELL_HEIGHT: f32 = 220.0;

    /// Widest the modal media area grows.
    pub const MODAL_MEDIA_MAX: f32 = 720.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const TITLE_XL: f32 = 44.0;
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 16.0;
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Radii
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
}

// Compile-time sanity checks on scale ordering.
const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);
    assert!(spacing::XL < spacing::XXL);
    assert!(typography::CAPTION < typography::BODY);
    assert!(typography::BODY < typography::TITLE_MD);
    assert!(typography::TITLE_MD < typography::TITLE_LG);
    assert!(typography::TITLE_LG < typography::TITLE_XL);
    assert!(radius::SM < radius::MD);
    assert!(radius::MD < radius::LG);
};
