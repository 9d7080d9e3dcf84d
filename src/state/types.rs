//! Page identity.

use serde::{Deserialize, Serialize};

/// Identifies one of the site's pages.
///
/// The set is closed. Anything outside it is mapped to `Home` at the slug
/// boundary ([`PageId::from_slug`]), so code past that boundary can never
/// hold an out-of-set identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageId {
    #[default]
    Home,
    About,
    Services,
    /// "Our Team" — the historical slug is `more-about`.
    #[serde(rename = "more-about")]
    Team,
    Structure,
}

impl PageId {
    /// Header navigation order.
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::About,
        PageId::Services,
        PageId::Team,
        PageId::Structure,
    ];

    /// Link label shown in the header.
    pub fn label(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::About => "About Us",
            PageId::Services => "Products & Services",
            PageId::Team => "Our Team",
            PageId::Structure => "Company Structure",
        }
    }

    /// Stable slug for the page.
    pub fn slug(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Services => "services",
            PageId::Team => "more-about",
            PageId::Structure => "structure",
        }
    }

    /// Parses a slug. Unrecognized input falls back to `Home`.
    pub fn from_slug(slug: &str) -> PageId {
        match slug {
            "about" => PageId::About,
            "services" => PageId::Services,
            "more-about" => PageId::Team,
            "structure" => PageId::Structure,
            _ => PageId::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for page in PageId::ALL {
            assert_eq!(PageId::from_slug(page.slug()), page);
        }
    }

    #[test]
    fn test_unknown_slug_falls_back_to_home() {
        assert_eq!(PageId::from_slug("contact"), PageId::Home);
        assert_eq!(PageId::from_slug(""), PageId::Home);
        assert_eq!(PageId::from_slug("More-About"), PageId::Home);
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(PageId::default(), PageId::Home);
    }

    #[test]
    fn test_serde_uses_slugs() {
        for page in PageId::ALL {
            let json = serde_json::to_string(&page).unwrap();
            assert_eq!(json, format!("\"{}\"", page.slug()));
            let back: PageId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, page);
        }
    }
}
