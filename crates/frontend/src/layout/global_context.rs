use leptos::prelude::*;

/// Pages reachable from the sidebar
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Page {
    #[default]
    Products,
    Orders,
    Customers,
}

impl Page {
    pub fn key(&self) -> &'static str {
        match self {
            Page::Products => "products",
            Page::Orders => "orders",
            Page::Customers => "customers",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Products => "Products",
            Page::Orders => "Orders",
            Page::Customers => "Customers",
        }
    }

    pub fn all() -> [Page; 3] {
        [Page::Products, Page::Orders, Page::Customers]
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
        }
    }

    pub fn open(&self, page: Page) {
        log::debug!("open page {}", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
