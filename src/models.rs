//! Content Models
//!
//! Data structures matching the bundled content documents.

use serde::{Deserialize, Serialize};

/// Marker that turns a map URL into an iframe-only embed URL
const EMBED_MARKER: &str = "output=embed";

/// Shop metadata (matches `content/shop.json`)
///
/// Every field is optional; absence is handled at presentation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopInfo {
    pub name: Option<String>,
    pub catch: Option<String>,
    pub tel: Option<String>,
    pub tel_label: Option<String>,
    pub reserve_url: Option<String>,
    pub address: Option<String>,
    pub hours: Option<String>,
    pub closed: Option<String>,
    pub access: Option<String>,
    #[serde(default)]
    pub news: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
    pub map_embed_url: Option<String>,
    #[serde(default)]
    pub photo_credits: Vec<String>,
    pub footer: Option<String>,
}

impl ShopInfo {
    /// Non-embed map URL derived from `mapEmbedUrl`
    ///
    /// Drops the `output=embed` query parameter, keeping every other
    /// parameter in order.
    pub fn google_map_url(&self) -> Option<String> {
        let embed = self.map_embed_url.as_deref()?.trim();
        if embed.is_empty() {
            return None;
        }
        Some(strip_embed_marker(embed))
    }
}

fn strip_embed_marker(url: &str) -> String {
    let (base, query) = match url.split_once('?') {
        Some(parts) => parts,
        None => return url.to_string(),
    };
    let kept: Vec<&str> = query
        .split('&')
        .filter(|param| !param.is_empty() && *param != EMBED_MARKER)
        .collect();
    if kept.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, kept.join("&"))
    }
}

/// A priced menu entry. `name` is the display key within its list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: String,
}

impl MenuItem {
    #[cfg(test)]
    pub fn new(name: &str, price: &str) -> Self {
        Self {
            name: name.to_string(),
            price: price.to_string(),
        }
    }
}

/// Lunch and dinner lists (matches `content/menu.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuCatalog {
    pub lunch: Vec<MenuItem>,
    pub dinner: Vec<MenuItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop_with_map(url: &str) -> ShopInfo {
        ShopInfo {
            map_embed_url: Some(url.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_google_map_url_strips_trailing_marker() {
        let shop = shop_with_map("https://maps.google.com/maps?q=yabuzuki&output=embed");
        assert_eq!(
            shop.google_map_url().as_deref(),
            Some("https://maps.google.com/maps?q=yabuzuki")
        );
    }

    #[test]
    fn test_google_map_url_strips_leading_marker() {
        let shop = shop_with_map("https://maps.google.com/maps?output=embed&q=yabuzuki&z=16");
        assert_eq!(
            shop.google_map_url().as_deref(),
            Some("https://maps.google.com/maps?q=yabuzuki&z=16")
        );
    }

    #[test]
    fn test_google_map_url_without_query_is_unchanged() {
        let shop = shop_with_map("https://maps.example.com/place");
        assert_eq!(shop.google_map_url().as_deref(), Some("https://maps.example.com/place"));
    }

    #[test]
    fn test_google_map_url_absent() {
        assert_eq!(ShopInfo::default().google_map_url(), None);
        assert_eq!(shop_with_map("  ").google_map_url(), None);
    }

    #[test]
    fn test_shop_info_camel_case_keys() {
        let shop: ShopInfo = serde_json::from_str(
            r#"{"telLabel":"03-1234-5678","reserveUrl":"https://r.example","photoCredits":["Unsplash"]}"#,
        )
        .unwrap();
        assert_eq!(shop.tel_label.as_deref(), Some("03-1234-5678"));
        assert_eq!(shop.reserve_url.as_deref(), Some("https://r.example"));
        assert_eq!(shop.photo_credits, vec!["Unsplash".to_string()]);
        assert!(shop.news.is_empty());
    }
}
