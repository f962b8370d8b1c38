// SPDX-License-Identifier: MPL-2.0
//! Built-in endpoint and layout defaults.

/// Listing endpoint answering `{ "files": [...] }` for the gallery.
pub const DEFAULT_GALLERY_URL: &str = "https://captain.example.com/get-gallery-contents";

/// Base path prepended to listing entries that only carry a name.
pub const DEFAULT_MEDIA_BASE: &str = "assets/gallery/";

/// GeckoTerminal-style endpoint for the showcase token.
pub const DEFAULT_TOKEN_PRICE_URL: &str =
    "https://api.geckoterminal.com/api/v2/networks/eth/tokens/0xcomingsoon";

/// GeckoTerminal-style endpoint for wrapped ETH.
pub const DEFAULT_ETH_PRICE_URL: &str =
    "https://api.geckoterminal.com/api/v2/networks/eth/tokens/0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";

/// Section shown when no fragment or flag selects one.
pub const DEFAULT_HOME_SECTION: &str = "hero";

/// Contract address offered by the hero section's copy button.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0xcomingsoon";
