/// Shared Tailwind spacing classes so pages line up

/// Main content area padding (32px on every side)
pub const CONTENT_PADDING: &str = "p-8";

/// Vertical gap between stacked blocks inside a card (16px)
pub const SECTION_SPACING: &str = "space-y-4";

/// Vertical gap between the sections of a utility page (40px)
pub const SECTION_SPACING_LG: &str = "space-y-10";

/// Gap for grids of cards and callouts (8px)
pub const GAP_SPACING: &str = "gap-2";

/// Inner padding of cards (16px)
pub const CARD_PADDING: &str = "p-4";
