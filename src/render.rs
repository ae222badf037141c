// src/render.rs
//
// Pure description of what the board shows. Front-ends (egui, HTML) draw a
// `Board`; nothing here touches a UI toolkit.

use crate::{
    config::{
        consts::{TIER_BLUE, TIER_BRONZE, TIER_GOLD, TIER_SILVER},
        state::{AppState, LoadStatus},
    },
    core::sanitize::card_image_path,
    students::StudentAggregate,
};

/// Cosmetic band of a student's total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Blue,
    Gold,
    Silver,
    Bronze,
}

impl Tier {
    /// Thresholds are checked highest first: 200, 150, 100, 50.
    pub fn for_total(total: f64) -> Option<Tier> {
        if total >= TIER_BLUE {
            Some(Tier::Blue)
        } else if total >= TIER_GOLD {
            Some(Tier::Gold)
        } else if total >= TIER_SILVER {
            Some(Tier::Silver)
        } else if total >= TIER_BRONZE {
            Some(Tier::Bronze)
        } else {
            None
        }
    }

    /// CSS class used by the HTML page.
    pub fn class(&self) -> &'static str {
        match self {
            Tier::Blue => "glow-blue",
            Tier::Gold => "glow-gold",
            Tier::Silver => "glow-silver",
            Tier::Bronze => "glow-bronze",
        }
    }

    /// RGB glow colour.
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Tier::Blue => [0x3C, 0x9E, 0xFF],
            Tier::Gold => [0xF0, 0xC0, 0x3C],
            Tier::Silver => [0xC8, 0xCE, 0xD6],
            Tier::Bronze => [0xCD, 0x7F, 0x32],
        }
    }
}

/// One achievement image on a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemView {
    /// Raw card label; escape before putting it in markup.
    pub label: String,
    /// Relative asset path, e.g. `images/scales.png`.
    pub image: String,
}

/// One student card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    /// Raw student name; escape before putting it in markup.
    pub name: String,
    pub points: i64,
    pub tier: Option<Tier>,
    pub items: Vec<ItemView>,
}

/// Message shown above (or instead of) the cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Loading,
    NoData,
    Error(String),
}

impl Notice {
    pub fn text(&self) -> String {
        match self {
            Notice::Loading => s!("Loading sheet…"),
            Notice::NoData => s!("No data rows found in sheet."),
            Notice::Error(msg) => format!("Error loading sheet: {msg}"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    pub notice: Option<Notice>,
    pub cards: Vec<CardView>,
}

/// Round half up, as the points badge has always done (2.5 → 3, -2.5 → -2).
pub fn round_points(total: f64) -> i64 {
    (total + 0.5).floor() as i64
}

pub fn card_view(student: &StudentAggregate) -> CardView {
    let total = student.total();
    CardView {
        name: s!(student.name()),
        points: round_points(total),
        tier: Tier::for_total(total),
        items: student
            .items()
            .iter()
            .map(|item| ItemView {
                label: item.card.clone(),
                image: card_image_path(&item.card),
            })
            .collect(),
    }
}

pub fn render_cards<'a, I>(students: I) -> Vec<CardView>
where
    I: IntoIterator<Item = &'a StudentAggregate>,
{
    students.into_iter().map(card_view).collect()
}

/// Board for the current state: status notice plus the display list.
pub fn render_board(state: &AppState) -> Board {
    let cards = render_cards(state.display().iter());
    let notice = match state.status() {
        LoadStatus::Loading if cards.is_empty() => Some(Notice::Loading),
        LoadStatus::NoData => Some(Notice::NoData),
        LoadStatus::Failed(msg) => Some(Notice::Error(msg.clone())),
        _ => None,
    };
    Board { notice, cards }
}
