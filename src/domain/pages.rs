//! Route table for the two views.
//!
//! Built once at startup and shared read-only (`Arc<PageRegistry>`).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    Success,
}

impl ViewId {
    pub const ALL: [ViewId; 2] = [ViewId::Home, ViewId::Success];

    /// Registry key, e.g. `"home"`.
    pub fn key(&self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Success => "success",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Path metadata for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: ViewId,
    pub name: &'static str,
    pub path: &'static str,
    pub anchorable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRegistry {
    pages: Vec<Page>,
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRegistry {
    pub fn new() -> Self {
        Self {
            pages: vec![
                Page {
                    id: ViewId::Home,
                    name: "Home",
                    path: "/",
                    anchorable: true,
                },
                Page {
                    id: ViewId::Success,
                    name: "Success",
                    path: "/success",
                    anchorable: true,
                },
            ],
        }
    }

    /// Every [`ViewId`] has an entry, so this never misses.
    pub fn get(&self, id: ViewId) -> &Page {
        self.pages
            .iter()
            .find(|page| page.id == id)
            .unwrap_or_else(|| unreachable!("registry covers every ViewId"))
    }

    pub fn by_key(&self, key: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.id.key() == key)
    }

    /// Resolves a route path. A single trailing slash is ignored (`/success/`).
    pub fn by_path(&self, path: &str) -> Option<&Page> {
        let normalized = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(stripped) => stripped,
        };
        self.pages.iter().find(|page| page.path == normalized)
    }

    pub fn path(&self, id: ViewId) -> &'static str {
        self.get(id).path
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }
}
