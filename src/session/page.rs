use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of screens the UI can display.
///
/// `Home` is the initial page. Every other page leads back to `Home`
/// and `Home` leads to every other page; there is no history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    #[default]
    Home,
    Categories,
    Search,
    Authors,
    Books,
    Wishlist,
    Reviews,
    BorrowBuy,
    Operations,
}

impl PageId {
    pub const ALL: [PageId; 9] = [
        PageId::Home,
        PageId::Categories,
        PageId::Search,
        PageId::Authors,
        PageId::Books,
        PageId::Wishlist,
        PageId::Reviews,
        PageId::BorrowBuy,
        PageId::Operations,
    ];

    /// Identifier used in forms and query strings
    pub fn slug(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Categories => "categories",
            PageId::Search => "search",
            PageId::Authors => "authors",
            PageId::Books => "books",
            PageId::Wishlist => "wishlist",
            PageId::Reviews => "reviews",
            PageId::BorrowBuy => "borrow_buy",
            PageId::Operations => "operations",
        }
    }

    /// Label shown on navigation buttons
    pub fn title(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Categories => "Categories",
            PageId::Search => "Search for a Book",
            PageId::Authors => "Authors",
            PageId::Books => "Books",
            PageId::Wishlist => "Wishlist",
            PageId::Reviews => "Reviews",
            PageId::BorrowBuy => "Borrow & Buy",
            PageId::Operations => "Operations",
        }
    }

    /// Pages reachable from `Home`
    pub fn destinations() -> impl Iterator<Item = PageId> {
        PageId::ALL.into_iter().filter(|p| *p != PageId::Home)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|p| p.slug() == s)
            .ok_or_else(|| format!("unknown page '{}'", s))
    }
}
