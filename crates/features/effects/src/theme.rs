use folio_kernel::domain::theme::Theme;
use folio_kernel::dom::ids::{NIGHT_MODE_CLASS, THEME_ICON, THEME_TEXT};
use folio_kernel::prelude::*;
use tracing::info;

#[derive(Debug)]
pub struct ThemeController {
    theme: Theme,
}

impl ThemeController {
    #[must_use]
    pub const fn new(initial: Theme) -> Self {
        Self { theme: initial }
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Reflects the current theme into the page without touching the title.
    pub fn apply(&self, doc: &mut impl Document) {
        doc.set_body_class(NIGHT_MODE_CLASS, self.theme == Theme::Night);
        doc.set_attribute(THEME_ICON, "class", self.theme.toggle_icon());
        // the button offers the other theme
        doc.set_text(THEME_TEXT, self.theme.toggled().label());
    }

    /// Switches between day and night.
    pub fn toggle(&mut self, doc: &mut impl Document) -> Cue {
        let previous = self.theme;
        self.theme = previous.toggled();
        self.apply(doc);

        let title = doc.title();
        doc.set_title(&title.replacen(previous.label(), self.theme.label(), 1));

        info!(theme = self.theme.label(), "Theme switched");
        Cue::Click
    }
}
