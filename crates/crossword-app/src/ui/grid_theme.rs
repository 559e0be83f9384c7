use eframe::egui::{Color32, Visuals};

/// Color palette for crossword grid rendering.
#[derive(Debug, Clone)]
pub(crate) struct GridPalette {
    pub(crate) cell_bg_default: Color32,
    pub(crate) cell_bg_selected: Color32,
    pub(crate) cell_bg_active_entry: Color32,
    pub(crate) block: Color32,

    pub(crate) border_inactive: Color32,
    pub(crate) border_selected: Color32,

    pub(crate) text_guess: Color32,
    pub(crate) text_number: Color32,
}

impl GridPalette {
    fn light(visuals: &Visuals) -> Self {
        Self {
            block: Color32::from_gray(24),
            ..Self::from_visuals(visuals)
        }
    }

    fn dark(visuals: &Visuals) -> Self {
        Self {
            block: Color32::from_gray(8),
            ..Self::from_visuals(visuals)
        }
    }

    fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            cell_bg_default: visuals.text_edit_bg_color(),
            cell_bg_selected: visuals.selection.bg_fill,
            cell_bg_active_entry: visuals.widgets.hovered.bg_fill,
            block: visuals.strong_text_color(),

            border_inactive: visuals.widgets.inactive.fg_stroke.color,
            border_selected: visuals.selection.stroke.color,

            text_guess: visuals.strong_text_color(),
            text_number: visuals.weak_text_color(),
        }
    }
}

/// Holds light/dark palettes and selects one based on current visuals.
#[derive(Debug, Clone)]
pub(crate) struct GridTheme {
    light: GridPalette,
    dark: GridPalette,
}

impl GridTheme {
    #[must_use]
    pub(crate) fn from_visuals(visuals: &Visuals) -> Self {
        Self {
            light: GridPalette::light(visuals),
            dark: GridPalette::dark(visuals),
        }
    }

    #[must_use]
    pub(crate) fn palette_for(&self, visuals: &Visuals) -> &GridPalette {
        if visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}
