//! The closed set of output categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the fixed classifications used to partition split content.
///
/// The set is closed: a split result contains some subset of these five,
/// in whatever order the model emitted them. No category is required to
/// appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Introduction,
    Task,
    Profile,
    Offer,
    Contact,
}

impl Category {
    /// Every category, in prompt and display order.
    pub const ALL: [Category; 5] = [
        Category::Introduction,
        Category::Task,
        Category::Profile,
        Category::Offer,
        Category::Contact,
    ];

    /// The element tag this category is emitted as.
    pub fn tag(&self) -> &'static str {
        match self {
            Category::Introduction => "introduction",
            Category::Task => "task",
            Category::Profile => "profile",
            Category::Offer => "offer",
            Category::Contact => "contact",
        }
    }

    /// Capitalized label for prose.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Introduction => "Introduction",
            Category::Task => "Task",
            Category::Profile => "Profile",
            Category::Offer => "Offer",
            Category::Contact => "Contact",
        }
    }

    /// The category an element tag names, if it is one of the five.
    pub fn from_tag(tag: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.tag() == tag)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
