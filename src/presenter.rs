//! Field Presenter
//!
//! Decides, per optional shop field, whether it is rendered and with what
//! fallback. Every helper reads exactly one field (or one fixed group for the
//! reserve / contact affordances), so absence of one field never affects
//! another.

use crate::models::ShopInfo;

pub const DEFAULT_SHOP_NAME: &str = "手打ち蕎麦 やぶ月";
pub const DEFAULT_TAGLINE: &str = "石臼挽きの香り、手打ちの喉ごし。";

/// Wording used when an external reservation page exists
pub const RESERVE_WORDING: &str = "オンラインで予約する";
/// Wording used when reservations go through the phone
pub const CALL_WORDING: &str = "電話で予約・問い合わせ";
pub const MAP_OPEN_LABEL: &str = "Googleマップで開く";

/// Same-page anchor used when there is neither a reservation URL nor a phone
pub const RESERVE_ANCHOR_FALLBACK: &str = "#contact";

const SENTENCE_END: char = '。';

/// Outcome of presenting an optional field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presented<T> {
    Renderable(T),
    Absent,
}

impl<T> Presented<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Presented::Absent)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Presented::Renderable(value) => Some(value),
            Presented::Absent => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Presented<U> {
        match self {
            Presented::Renderable(value) => Presented::Renderable(f(value)),
            Presented::Absent => Presented::Absent,
        }
    }
}

/// Whether a value counts as "present" for rendering
pub trait Presentable {
    fn is_present(&self) -> bool;
}

impl Presentable for &str {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Presentable for String {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl<T> Presentable for &[T] {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presentable for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

/// Present field → field; absent with fallback → fallback; otherwise Absent.
/// A blank fallback is as absent as a blank field.
pub fn present<T: Presentable>(field: Option<T>, fallback: Option<T>) -> Presented<T> {
    match field
        .filter(Presentable::is_present)
        .or_else(|| fallback.filter(Presentable::is_present))
    {
        Some(value) => Presented::Renderable(value),
        None => Presented::Absent,
    }
}

/// Link target plus its visible wording
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub href: String,
    pub label: String,
}

/// One labelled row of the shop info card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

// ========================
// Per-field presenters
// ========================

pub fn shop_name(shop: &ShopInfo) -> Presented<&str> {
    present(shop.name.as_deref(), Some(DEFAULT_SHOP_NAME))
}

pub fn tagline(shop: &ShopInfo) -> Presented<&str> {
    present(shop.catch.as_deref(), Some(DEFAULT_TAGLINE))
}

/// Tagline broken into display lines, one per sentence
pub fn tagline_lines(shop: &ShopInfo) -> Vec<String> {
    match tagline(shop) {
        Presented::Renderable(text) => text
            .split(SENTENCE_END)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("{}{}", s, SENTENCE_END))
            .collect(),
        Presented::Absent => Vec::new(),
    }
}

/// Visible phone text: `telLabel`, else `tel`
pub fn tel_label(shop: &ShopInfo) -> Presented<&str> {
    present(shop.tel_label.as_deref(), shop.tel.as_deref())
}

pub fn address(shop: &ShopInfo) -> Presented<&str> {
    present(shop.address.as_deref(), None)
}

pub fn hours(shop: &ShopInfo) -> Presented<&str> {
    present(shop.hours.as_deref(), None)
}

pub fn closed(shop: &ShopInfo) -> Presented<&str> {
    present(shop.closed.as_deref(), None)
}

pub fn access(shop: &ShopInfo) -> Presented<&str> {
    present(shop.access.as_deref(), None)
}

pub fn news(shop: &ShopInfo) -> Presented<&[String]> {
    present(Some(shop.news.as_slice()), None)
}

pub fn notes(shop: &ShopInfo) -> Presented<&[String]> {
    present(Some(shop.notes.as_slice()), None)
}

pub fn photo_credits(shop: &ShopInfo) -> Presented<&[String]> {
    present(Some(shop.photo_credits.as_slice()), None)
}

pub fn footer(shop: &ShopInfo) -> Presented<&str> {
    present(shop.footer.as_deref(), None)
}

pub fn reserve_url(shop: &ShopInfo) -> Presented<&str> {
    present(shop.reserve_url.as_deref(), None)
}

fn tel_number(shop: &ShopInfo) -> Presented<&str> {
    present(shop.tel.as_deref(), None)
}

// ========================
// Composite affordances
// ========================

/// `reserveUrl`, else `tel:` URI, else the same-page contact anchor
pub fn reserve_href(shop: &ShopInfo) -> String {
    if let Presented::Renderable(url) = reserve_url(shop) {
        return url.to_string();
    }
    match tel_number(shop) {
        Presented::Renderable(tel) => format!("tel:{}", tel),
        Presented::Absent => RESERVE_ANCHOR_FALLBACK.to_string(),
    }
}

pub fn reserve_label(shop: &ShopInfo) -> String {
    if !reserve_url(shop).is_absent() {
        return RESERVE_WORDING.to_string();
    }
    match tel_label(shop) {
        Presented::Renderable(label) => format!("{}（{}）", CALL_WORDING, label),
        Presented::Absent => CALL_WORDING.to_string(),
    }
}

pub fn reserve_action(shop: &ShopInfo) -> Action {
    Action {
        href: reserve_href(shop),
        label: reserve_label(shop),
    }
}

/// Call affordance; omitted when neither `tel` nor `telLabel` is set.
///
/// The URI prefers `tel` and falls back to the label text.
pub fn contact_action(shop: &ShopInfo) -> Presented<Action> {
    tel_label(shop).map(|label| {
        let number = tel_number(shop).into_option().unwrap_or(label);
        Action {
            href: format!("tel:{}", number),
            label: label.to_string(),
        }
    })
}

/// Map-open link, gated on `mapEmbedUrl`
pub fn map_action(shop: &ShopInfo) -> Presented<Action> {
    present(shop.google_map_url(), None).map(|href| Action {
        href,
        label: MAP_OPEN_LABEL.to_string(),
    })
}

/// Address / hours / closed / access rows, each omitted when absent
pub fn info_rows(shop: &ShopInfo) -> Vec<InfoRow> {
    [
        ("住所", address(shop)),
        ("営業時間", hours(shop)),
        ("定休日", closed(shop)),
        ("アクセス", access(shop)),
    ]
    .into_iter()
    .filter_map(|(label, value)| {
        value.into_option().map(|value| InfoRow {
            label,
            value: value.to_string(),
        })
    })
    .collect()
}
