/// A top-level navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        name: "Home",
        path: "/",
    },
    NavLink {
        name: "Products",
        path: "/products",
    },
    NavLink {
        name: "About",
        path: "/about",
    },
    NavLink {
        name: "Contact",
        path: "/contact",
    },
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub mobile_menu_open: bool,
    pub cart_item_count: usize,
}

impl NavbarState {
    #[must_use]
    pub fn with_cart_items(cart_item_count: usize) -> Self {
        Self {
            mobile_menu_open: false,
            cart_item_count,
        }
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Following a link closes the mobile menu.
    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    #[must_use]
    pub fn shows_cart_badge(&self) -> bool {
        self.cart_item_count > 0
    }
}
