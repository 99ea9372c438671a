//! Content Model
//!
//! Immutable view over the shop and menu documents, loaded once at startup.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{MenuCatalog, ShopInfo};

const BUNDLED_SHOP: &str = include_str!("../content/shop.json");
const BUNDLED_MENU: &str = include_str!("../content/menu.json");

/// Which input document a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Shop,
    Menu,
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Document::Shop => write!(f, "shop.json"),
            Document::Menu => write!(f, "menu.json"),
        }
    }
}

/// Startup content failures
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed content in {document}: {source}")]
    Malformed {
        document: Document,
        #[source]
        source: serde_json::Error,
    },
}

pub type ContentResult<T> = Result<T, ContentError>;

/// Shop metadata and menu catalog. Read-only once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentModel {
    shop: ShopInfo,
    menu: MenuCatalog,
}

impl ContentModel {
    /// Parse both documents. Unknown fields are ignored; missing required
    /// structure (menu lists, item name/price) or wrong types fail.
    pub fn load(shop_json: &str, menu_json: &str) -> ContentResult<Self> {
        let shop = parse(Document::Shop, shop_json)?;
        let menu = parse(Document::Menu, menu_json)?;
        Ok(Self { shop, menu })
    }

    /// Load the documents compiled into the binary
    pub fn bundled() -> ContentResult<Self> {
        Self::load(BUNDLED_SHOP, BUNDLED_MENU)
    }

    /// Build directly from already-typed documents
    #[cfg(test)]
    pub fn from_parts(shop: ShopInfo, menu: MenuCatalog) -> Self {
        Self { shop, menu }
    }

    pub fn shop(&self) -> &ShopInfo {
        &self.shop
    }

    pub fn menu(&self) -> &MenuCatalog {
        &self.menu
    }
}

fn parse<T: DeserializeOwned>(document: Document, json: &str) -> ContentResult<T> {
    serde_json::from_str(json).map_err(|source| ContentError::Malformed { document, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU_OK: &str = r#"{"lunch":[],"dinner":[{"name":"かけそば","price":"¥600"}]}"#;

    #[test]
    fn test_bundled_content_loads() {
        let content = ContentModel::bundled().expect("bundled content");
        assert!(content.shop().name.is_some());
        assert!(!content.menu().lunch.is_empty());
        assert!(!content.menu().dinner.is_empty());
    }

    #[test]
    fn test_minimal_shop_document() {
        let content = ContentModel::load("{}", MENU_OK).unwrap();
        assert_eq!(content.shop(), &ShopInfo::default());
        assert_eq!(content.menu().dinner.len(), 1);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let content = ContentModel::load(r#"{"name":"藪月","instagram":"@yabu"}"#, MENU_OK).unwrap();
        assert_eq!(content.shop().name.as_deref(), Some("藪月"));
    }

    #[test]
    fn test_menu_missing_list_is_malformed() {
        let err = ContentModel::load("{}", r#"{"lunch":[]}"#).unwrap_err();
        match err {
            ContentError::Malformed { document, .. } => assert_eq!(document, Document::Menu),
        }
    }

    #[test]
    fn test_menu_item_missing_price_is_malformed() {
        let result = ContentModel::load("{}", r#"{"lunch":[{"name":"もり"}],"dinner":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_shop_not_an_object_is_malformed() {
        let err = ContentModel::load("[]", MENU_OK).unwrap_err();
        assert!(err.to_string().starts_with("malformed content in shop.json"));
    }

    #[test]
    fn test_shop_news_wrong_type_is_malformed() {
        assert!(ContentModel::load(r#"{"news":"本日休業"}"#, MENU_OK).is_err());
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        assert!(ContentModel::load("{", MENU_OK).is_err());
    }
}
