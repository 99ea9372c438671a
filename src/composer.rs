//! View Composer
//!
//! Pure mapping from (content, view) to an ordered list of display blocks.
//! The Leptos layer renders blocks; it makes no content decisions itself.

use crate::assets::{Asset, AssetPaths};
use crate::content::ContentModel;
use crate::models::MenuItem;
use crate::navigation::ViewState;
use crate::presenter::{self, Action, InfoRow, Presented};

pub const NO_NEWS_TEXT: &str = "お知らせはまだありません";
pub const MENU_PREPARING_TEXT: &str = "準備中です";
pub const MENU_DISCLAIMER: &str = "※価格はすべて税込です。仕入れの都合により内容が変わる場合がございます。";
pub const LUNCH_HEADING: &str = "昼の部";
pub const DINNER_HEADING: &str = "夜の部";

/// Used when the shop has no embeddable map of its own
pub const FALLBACK_MAP_EMBED_URL: &str = "https://maps.google.com/maps?q=Tokyo&z=12&output=embed";

pub const SOBA_CARD_TITLE: &str = "蕎麦";
pub const SOBA_CARD_BODY: &str =
    "毎朝石臼で挽いた蕎麦粉を使い、その日の気温と湿度に合わせて加水を調整しています。";
pub const BROTH_CARD_TITLE: &str = "つゆ";
pub const BROTH_CARD_BODY: &str =
    "つゆは鰹と宗田節を主体に、蕎麦の香りを引き立てる辛口に仕上げています。";

/// One row of a menu list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuLine {
    Item { name: String, price: String },
    Placeholder { text: &'static str },
}

/// One self-contained renderable unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayBlock {
    Image {
        src: String,
        alt: &'static str,
        full_bleed: bool,
    },
    BulletList {
        items: Vec<String>,
    },
    Placeholder {
        text: &'static str,
    },
    Card {
        title: &'static str,
        body: &'static str,
    },
    MenuList {
        heading: &'static str,
        lines: Vec<MenuLine>,
    },
    Disclaimer {
        text: &'static str,
    },
    InfoCard {
        title: String,
        image: String,
        rows: Vec<InfoRow>,
        notes: Vec<String>,
    },
    MapEmbed {
        src: String,
    },
    ActionLinks {
        links: Vec<Action>,
    },
    Footer {
        credits: Vec<String>,
        text: Option<String>,
    },
}

/// Blocks for `view`, in display order
pub fn compose(content: &ContentModel, view: ViewState, assets: &AssetPaths) -> Vec<DisplayBlock> {
    match view {
        ViewState::Home => compose_home(assets),
        ViewState::News => compose_news(content, assets),
        ViewState::Concept => compose_concept(assets),
        ViewState::Menu => compose_menu(content, assets),
        ViewState::Contact => compose_contact(content, assets),
    }
}

/// Credits and footer line shown under every view
pub fn compose_footer(content: &ContentModel) -> Option<DisplayBlock> {
    let shop = content.shop();
    let credits = presenter::photo_credits(shop).into_option().map(<[String]>::to_vec);
    let text = presenter::footer(shop).into_option().map(str::to_string);
    if credits.is_none() && text.is_none() {
        return None;
    }
    Some(DisplayBlock::Footer {
        credits: credits.unwrap_or_default(),
        text,
    })
}

/// Rows for a menu list: one per item in order, or a single placeholder
pub fn menu_lines(items: &[MenuItem]) -> Vec<MenuLine> {
    if items.is_empty() {
        return vec![MenuLine::Placeholder { text: MENU_PREPARING_TEXT }];
    }
    items
        .iter()
        .map(|item| MenuLine::Item {
            name: item.name.clone(),
            price: item.price.clone(),
        })
        .collect()
}

fn image(assets: &AssetPaths, asset: Asset) -> DisplayBlock {
    DisplayBlock::Image {
        src: assets.url(asset),
        alt: asset.alt(),
        full_bleed: false,
    }
}

fn compose_home(assets: &AssetPaths) -> Vec<DisplayBlock> {
    vec![DisplayBlock::Image {
        src: assets.url(Asset::Hero),
        alt: Asset::Hero.alt(),
        full_bleed: true,
    }]
}

fn compose_news(content: &ContentModel, assets: &AssetPaths) -> Vec<DisplayBlock> {
    let listing = match presenter::news(content.shop()) {
        Presented::Renderable(entries) => DisplayBlock::BulletList {
            items: entries.to_vec(),
        },
        Presented::Absent => DisplayBlock::Placeholder { text: NO_NEWS_TEXT },
    };
    vec![image(assets, Asset::Interior), listing]
}

fn compose_concept(assets: &AssetPaths) -> Vec<DisplayBlock> {
    vec![
        image(assets, Asset::Soba),
        DisplayBlock::Card {
            title: SOBA_CARD_TITLE,
            body: SOBA_CARD_BODY,
        },
        DisplayBlock::Card {
            title: BROTH_CARD_TITLE,
            body: BROTH_CARD_BODY,
        },
    ]
}

fn compose_menu(content: &ContentModel, assets: &AssetPaths) -> Vec<DisplayBlock> {
    let menu = content.menu();
    vec![
        image(assets, Asset::Food),
        image(assets, Asset::Kamonan),
        DisplayBlock::MenuList {
            heading: LUNCH_HEADING,
            lines: menu_lines(&menu.lunch),
        },
        DisplayBlock::MenuList {
            heading: DINNER_HEADING,
            lines: menu_lines(&menu.dinner),
        },
        DisplayBlock::Disclaimer { text: MENU_DISCLAIMER },
    ]
}

fn compose_contact(content: &ContentModel, assets: &AssetPaths) -> Vec<DisplayBlock> {
    let shop = content.shop();

    let info = DisplayBlock::InfoCard {
        title: presenter::shop_name(shop)
            .into_option()
            .unwrap_or(presenter::DEFAULT_SHOP_NAME)
            .to_string(),
        image: assets.url(Asset::Exterior),
        rows: presenter::info_rows(shop),
        notes: presenter::notes(shop)
            .into_option()
            .map(<[String]>::to_vec)
            .unwrap_or_default(),
    };

    let map = DisplayBlock::MapEmbed {
        src: presenter::present(shop.map_embed_url.as_deref(), Some(FALLBACK_MAP_EMBED_URL))
            .into_option()
            .unwrap_or(FALLBACK_MAP_EMBED_URL)
            .to_string(),
    };

    let links = [presenter::map_action(shop), presenter::contact_action(shop)]
        .into_iter()
        .filter_map(Presented::into_option)
        .collect();

    vec![info, map, DisplayBlock::ActionLinks { links }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MenuCatalog, ShopInfo};

    fn assets() -> AssetPaths {
        AssetPaths::new("/")
    }

    fn content_with(shop: ShopInfo, menu: MenuCatalog) -> ContentModel {
        ContentModel::from_parts(shop, menu)
    }

    fn empty_content() -> ContentModel {
        content_with(ShopInfo::default(), MenuCatalog::default())
    }

    fn menu_lists(blocks: &[DisplayBlock]) -> Vec<(&'static str, Vec<MenuLine>)> {
        blocks
            .iter()
            .filter_map(|b| match b {
                DisplayBlock::MenuList { heading, lines } => Some((*heading, lines.clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_home_is_single_full_bleed_image() {
        let blocks = compose(&empty_content(), ViewState::Home, &assets());
        assert_eq!(
            blocks,
            vec![DisplayBlock::Image {
                src: "/images/hero.png".into(),
                alt: Asset::Hero.alt(),
                full_bleed: true,
            }]
        );
    }

    #[test]
    fn test_home_ignores_content() {
        let rich = ContentModel::bundled().unwrap();
        assert_eq!(
            compose(&rich, ViewState::Home, &assets()),
            compose(&empty_content(), ViewState::Home, &assets())
        );
    }

    #[test]
    fn test_news_placeholder_when_empty() {
        let blocks = compose(&empty_content(), ViewState::News, &assets());
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], DisplayBlock::Image { .. }));
        assert_eq!(blocks[1], DisplayBlock::Placeholder { text: NO_NEWS_TEXT });
    }

    #[test]
    fn test_news_entries_in_order() {
        let shop = ShopInfo {
            news: vec!["新そば".into(), "年末営業".into()],
            ..Default::default()
        };
        let blocks = compose(&content_with(shop, MenuCatalog::default()), ViewState::News, &assets());
        assert_eq!(
            blocks[1],
            DisplayBlock::BulletList {
                items: vec!["新そば".into(), "年末営業".into()],
            }
        );
    }

    #[test]
    fn test_concept_is_static() {
        let blocks = compose(&empty_content(), ViewState::Concept, &assets());
        let cards = blocks.iter().filter(|b| matches!(b, DisplayBlock::Card { .. })).count();
        let images = blocks.iter().filter(|b| matches!(b, DisplayBlock::Image { .. })).count();
        assert_eq!(cards, 2);
        assert_eq!(images, 1);
        assert_eq!(blocks, compose(&ContentModel::bundled().unwrap(), ViewState::Concept, &assets()));
    }

    #[test]
    fn test_menu_empty_lunch_and_single_dinner() {
        let menu = MenuCatalog {
            lunch: vec![],
            dinner: vec![MenuItem::new("かけそば", "¥600")],
        };
        let blocks = compose(&content_with(ShopInfo::default(), menu), ViewState::Menu, &assets());
        let lists = menu_lists(&blocks);
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].0, LUNCH_HEADING);
        assert_eq!(lists[0].1, vec![MenuLine::Placeholder { text: MENU_PREPARING_TEXT }]);
        assert_eq!(lists[1].0, DINNER_HEADING);
        assert_eq!(
            lists[1].1,
            vec![MenuLine::Item {
                name: "かけそば".into(),
                price: "¥600".into(),
            }]
        );
    }

    #[test]
    fn test_menu_preserves_order_and_count() {
        let lunch = vec![
            MenuItem::new("天ざる", "¥1,600"),
            MenuItem::new("もりそば", "¥800"),
            MenuItem::new("鴨南蛮", "¥1,700"),
        ];
        let lines = menu_lines(&lunch);
        assert_eq!(lines.len(), lunch.len());
        let names: Vec<&str> = lines
            .iter()
            .map(|l| match l {
                MenuLine::Item { name, .. } => name.as_str(),
                MenuLine::Placeholder { .. } => panic!("unexpected placeholder"),
            })
            .collect();
        assert_eq!(names, vec!["天ざる", "もりそば", "鴨南蛮"]);
    }

    #[test]
    fn test_menu_duplicate_names_are_kept() {
        let lines = menu_lines(&[MenuItem::new("せいろ", "¥900"), MenuItem::new("せいろ", "¥1,000")]);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_menu_layout_and_disclaimer() {
        let blocks = compose(&empty_content(), ViewState::Menu, &assets());
        assert_eq!(blocks.len(), 5);
        assert!(matches!(blocks[0], DisplayBlock::Image { .. }));
        assert!(matches!(blocks[1], DisplayBlock::Image { .. }));
        assert_eq!(blocks[4], DisplayBlock::Disclaimer { text: MENU_DISCLAIMER });
    }

    #[test]
    fn test_contact_with_nothing_optional() {
        let blocks = compose(&empty_content(), ViewState::Contact, &assets());
        assert_eq!(blocks.len(), 3);
        match &blocks[0] {
            DisplayBlock::InfoCard { title, image, rows, notes } => {
                assert_eq!(title, presenter::DEFAULT_SHOP_NAME);
                assert_eq!(image, "/images/exterior.png");
                assert!(rows.is_empty());
                assert!(notes.is_empty());
            }
            other => panic!("expected info card, got {:?}", other),
        }
        assert_eq!(blocks[1], DisplayBlock::MapEmbed { src: FALLBACK_MAP_EMBED_URL.into() });
        assert_eq!(blocks[2], DisplayBlock::ActionLinks { links: vec![] });
    }

    #[test]
    fn test_contact_links_gated_individually() {
        let phone_only = ShopInfo { tel: Some("0312345678".into()), ..Default::default() };
        let blocks = compose(&content_with(phone_only, MenuCatalog::default()), ViewState::Contact, &assets());
        match &blocks[2] {
            DisplayBlock::ActionLinks { links } => {
                assert_eq!(links.len(), 1);
                assert_eq!(links[0].href, "tel:0312345678");
            }
            other => panic!("expected links, got {:?}", other),
        }

        let map_only = ShopInfo {
            map_embed_url: Some("https://maps.google.com/maps?q=yabu&output=embed".into()),
            ..Default::default()
        };
        let blocks = compose(&content_with(map_only, MenuCatalog::default()), ViewState::Contact, &assets());
        assert_eq!(
            blocks[1],
            DisplayBlock::MapEmbed { src: "https://maps.google.com/maps?q=yabu&output=embed".into() }
        );
        match &blocks[2] {
            DisplayBlock::ActionLinks { links } => {
                assert_eq!(links.len(), 1);
                assert_eq!(links[0].href, "https://maps.google.com/maps?q=yabu");
            }
            other => panic!("expected links, got {:?}", other),
        }
    }

    #[test]
    fn test_footer_gating() {
        assert_eq!(compose_footer(&empty_content()), None);

        let credited = ShopInfo { photo_credits: vec!["Unsplash".into()], ..Default::default() };
        assert_eq!(
            compose_footer(&content_with(credited, MenuCatalog::default())),
            Some(DisplayBlock::Footer { credits: vec!["Unsplash".into()], text: None })
        );
    }

    #[test]
    fn test_repeated_goto_home_composes_identically() {
        use crate::navigation::NavigationController;

        let content = ContentModel::bundled().unwrap();
        let mut nav = NavigationController::new();
        nav.goto(ViewState::Home);
        let once = compose(&content, nav.current(), &assets());
        nav.goto(ViewState::Home);
        let twice = compose(&content, nav.current(), &assets());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_compose_is_pure() {
        let content = ContentModel::bundled().unwrap();
        for view in ViewState::ALL {
            assert_eq!(compose(&content, view, &assets()), compose(&content, view, &assets()));
        }
    }
}
