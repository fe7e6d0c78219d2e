//! Navigation view models
//!
//! The header either offers auth links to a guest or a user menu to a
//! signed-in member. The two are variants of one enum, so a single view can
//! never carry both.

use serde::Serialize;

/// A plain link in the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Dropdown shown to a signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserMenu {
    pub name: String,
    pub email: String,
    pub items: Vec<NavLink>,
}

/// Header state for the current request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Navigation {
    Guest { links: Vec<NavLink> },
    Member { menu: UserMenu },
}
