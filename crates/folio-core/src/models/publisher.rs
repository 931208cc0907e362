//! Publisher catalog
//!
//! The catalog is fixed: submissions must name one of these publishers, and
//! the public list views are scoped by publisher slug.

use serde::Serialize;

/// A publisher in the catalog, addressed by URL slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Publisher {
    pub slug: &'static str,
    pub name: &'static str,
}

pub const CATALOG: &[Publisher] = &[
    Publisher {
        slug: "dhara-sci-tech",
        name: "Dhara Sci Tech Publications",
    },
    Publisher {
        slug: "yar-tech",
        name: "Yar Tech Publications",
    },
    Publisher {
        slug: "am-technical",
        name: "AM Technical Publications",
    },
    Publisher {
        slug: "dhara-publications",
        name: "Dhara Publications",
    },
    Publisher {
        slug: "as-nextgen",
        name: "AS NextGen Publishing Home",
    },
];

pub fn by_slug(slug: &str) -> Option<&'static Publisher> {
    CATALOG.iter().find(|p| p.slug == slug)
}

pub fn by_name(name: &str) -> Option<&'static Publisher> {
    CATALOG.iter().find(|p| p.name == name)
}

pub fn is_known_name(name: &str) -> bool {
    by_name(name).is_some()
}
