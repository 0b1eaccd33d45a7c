use crate::constants::ALL;
use crate::content::Category;
use bitflags::bitflags;

bitflags! {
    /// A set of project categories, used as the active gallery filter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CategorySet: u8 {
        const ART = 1 << 0;
        const UI = 1 << 1;
        const WEB = 1 << 2;
        const GAME = 1 << 3;

        const ALL = Self::ART.bits() | Self::UI.bits() | Self::WEB.bits() | Self::GAME.bits();
    }
}

impl CategorySet {
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        self.contains(category.into())
    }
}

impl From<Category> for CategorySet {
    fn from(category: Category) -> Self {
        match category {
            Category::Art => Self::ART,
            Category::Ui => Self::UI,
            Category::Web => Self::WEB,
            Category::Game => Self::GAME,
        }
    }
}

impl From<&str> for CategorySet {
    fn from(s: &str) -> Self {
        match s {
            ALL | "*" => Self::ALL,
            other => Category::parse(other).map_or_else(Self::empty, Self::from),
        }
    }
}
