//! Asset References
//!
//! Builds image URLs from the deployment base path. Nothing is fetched here.

/// Fixed site images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Hero,
    Interior,
    Exterior,
    Food,
    Soba,
    Kamonan,
}

impl Asset {
    pub fn file(&self) -> &'static str {
        match self {
            Asset::Hero => "images/hero.png",
            Asset::Interior => "images/interior.png",
            Asset::Exterior => "images/exterior.png",
            Asset::Food => "images/food.png",
            Asset::Soba => "images/soba.jpg",
            Asset::Kamonan => "images/kamonan.jpg",
        }
    }

    /// Alt text for the image
    pub fn alt(&self) -> &'static str {
        match self {
            Asset::Hero => "やぶ月の店内とせいろ",
            Asset::Interior => "店内の様子",
            Asset::Exterior => "店舗外観",
            Asset::Food => "天ざるとせいろ",
            Asset::Soba => "手打ちの蕎麦",
            Asset::Kamonan => "鴨南蛮",
        }
    }
}

/// Base path joined with asset filenames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    base: String,
}

impl AssetPaths {
    pub fn new(base: &str) -> Self {
        Self { base: base.to_string() }
    }

    pub fn url(&self, asset: Asset) -> String {
        join(&self.base, asset.file())
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::new("/")
    }
}

/// Join with exactly one `/` between base and relative path
fn join(base: &str, relative: &str) -> String {
    let base = base.trim_end_matches('/');
    let relative = relative.trim_start_matches('/');
    format!("{}/{}", base, relative)
}
