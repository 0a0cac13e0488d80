//! Mobile navigation menu

use crate::config::MenuConfig;
use crate::host::ClassMarker;

/// Hamburger-driven navigation menu
///
/// The hamburger and the nav menu always carry the open class together.
pub struct MobileMenu<M: ClassMarker> {
    hamburger: M,
    nav_menu: M,
    open_class: String,
    open: bool,
}

impl<M: ClassMarker> MobileMenu<M> {
    /// Wrap the two menu elements; it starts open only if both already carry the class
    pub fn new(hamburger: M, nav_menu: M, config: &MenuConfig) -> Self {
        let open =
            hamburger.has_class(&config.open_class) && nav_menu.has_class(&config.open_class);
        Self {
            hamburger,
            nav_menu,
            open_class: config.open_class.clone(),
            open,
        }
    }

    /// Hamburger clicked
    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    /// A link inside the menu was followed
    pub fn on_link_click(&mut self) {
        self.set_open(false);
    }

    /// Any click on the document; `inside` is true when the target lies
    /// within the hamburger or the nav menu
    pub fn on_document_click(&mut self, inside: bool) {
        if !inside {
            self.set_open(false);
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
        self.hamburger.set_class(&self.open_class, open);
        self.nav_menu.set_class(&self.open_class, open);
    }
}
