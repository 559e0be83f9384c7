use eframe::egui::Vec2;

/// Sizes derived from the grid cell size, so every component scales with
/// the window.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutScale {
    pub(crate) cell_size: f32,
    pub(crate) spacing: Vec2,
}

impl LayoutScale {
    pub(crate) const SPACING_FACTOR: Vec2 = Vec2::new(0.25, 0.25);
    pub(crate) const MIN_CELL_SIZE: f32 = 24.0;
    pub(crate) const MAX_CELL_SIZE: f32 = 72.0;

    #[must_use]
    pub(crate) fn new(cell_size: f32) -> Self {
        let cell_size = cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE);
        let spacing = Vec2::splat(cell_size) * Self::SPACING_FACTOR;
        Self { cell_size, spacing }
    }

    /// Picks the largest cell size at which `units` fit into `available`.
    #[must_use]
    pub(crate) fn fit(available: Vec2, units: ComponentUnits) -> Self {
        let cell_size = f32::min(available.x / units.width, available.y / units.height);
        Self::new(cell_size)
    }
}

/// Size of a component measured in grid cells.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ComponentUnits {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl ComponentUnits {
    #[must_use]
    pub(crate) const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
