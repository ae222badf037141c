// src/html.rs
//
// Static HTML snapshot of a board. Same markup and class names as the
// published page, so existing stylesheets and `images/` folders keep working.
// The zoom overlay uses CSS `:target`: each thumbnail links to its overlay,
// the overlay backdrop links back to `#`.

use std::fmt::Write;

use crate::{
    config::consts::FALLBACK_OPACITY,
    core::sanitize::{escape_html, missing_card_path},
    render::{Board, CardView, Notice},
};

const STYLE: &str = r#"
body { font-family: sans-serif; background: #14161c; color: #eee; margin: 0; padding: 1.5rem; }
#student-container { display: flex; flex-wrap: wrap; gap: 1rem; }
.student-card { background: #1f232d; border-radius: 12px; padding: 1rem; width: 260px; }
.student-name { font-size: 1.2rem; font-weight: bold; margin-bottom: .5rem; }
.points .label { font-size: .75rem; opacity: .7; }
.points .num { font-size: 2rem; font-weight: bold; }
.cards-container { display: flex; flex-wrap: wrap; gap: .4rem; margin-top: .6rem; }
.achievement-card { height: 72px; border-radius: 6px; cursor: zoom-in; }
.glow-blue { box-shadow: 0 0 14px 3px #3c9eff; }
.glow-gold { box-shadow: 0 0 14px 3px #f0c03c; }
.glow-silver { box-shadow: 0 0 14px 3px #c8ced6; }
.glow-bronze { box-shadow: 0 0 14px 3px #cd7f32; }
.notice { opacity: .8; }
.error { color: crimson; }
.card-overlay { display: none; position: fixed; inset: 0; align-items: center; justify-content: center; }
.card-overlay:target { display: flex; }
.card-overlay .backdrop { position: absolute; inset: 0; background: rgba(0,0,0,.8); }
.card-overlay .zoom-image { position: relative; max-width: 80vw; max-height: 80vh; box-shadow: 0 0 40px 8px rgba(255,255,255,.35); }
"#;

fn notice_html(notice: &Notice) -> String {
    match notice {
        Notice::Error(_) => format!("<p class=\"error\">{}</p>", escape_html(&notice.text())),
        _ => format!("<p class=\"notice\">{}</p>", escape_html(&notice.text())),
    }
}

fn onerror_attr() -> String {
    format!(
        "this.onerror=null; this.src='{}'; this.style.opacity={}",
        missing_card_path(),
        FALLBACK_OPACITY
    )
}

/// Markup for one student card. `first_item` numbers the overlays so ids are
/// unique across the page.
pub fn card_html(card: &CardView, first_item: usize) -> String {
    let mut out = s!();
    let class = match card.tier {
        Some(t) => format!("student-card {}", t.class()),
        None => s!("student-card"),
    };
    let _ = writeln!(out, "<div class=\"{class}\">");
    let _ = writeln!(out, "  <div class=\"student-name\">{}</div>", escape_html(&card.name));
    let _ = writeln!(
        out,
        "  <div class=\"points\"><div class=\"label\">Achievement Points</div><div class=\"num\">{}</div></div>",
        card.points
    );
    out.push_str("  <div class=\"cards-container\">");
    for (i, item) in card.items.iter().enumerate() {
        let label = escape_html(&item.label);
        let _ = write!(
            out,
            "<a href=\"#zoom-{}\"><img class=\"achievement-card\" src=\"{}\" alt=\"{label}\" title=\"{label}\" onerror=\"{}\"></a>",
            first_item + i,
            escape_html(&item.image),
            escape_html(&onerror_attr()),
        );
    }
    out.push_str("</div>\n</div>\n");
    out
}

fn overlays_html(cards: &[CardView]) -> String {
    let mut out = s!();
    let items = cards.iter().flat_map(|c| c.items.iter());
    for (n, item) in items.enumerate() {
        let _ = writeln!(
            out,
            "<div class=\"card-overlay\" id=\"zoom-{n}\"><a class=\"backdrop\" href=\"#\" aria-label=\"Close\"></a><img class=\"zoom-image\" src=\"{}\" alt=\"{}\" onerror=\"{}\"></div>",
            escape_html(&item.image),
            escape_html(&item.label),
            escape_html(&onerror_attr()),
        );
    }
    out
}

/// Full standalone page for `board`.
pub fn render_page(board: &Board, title: &str) -> String {
    let title = escape_html(title);
    let mut body = s!();

    if let Some(n) = &board.notice {
        body.push_str(&notice_html(n));
        body.push('\n');
    }

    body.push_str("<div id=\"student-container\">\n");
    let mut next_item = 0;
    for card in &board.cards {
        body.push_str(&card_html(card, next_item));
        next_item += card.items.len();
    }
    body.push_str("</div>\n");
    body.push_str(&overlays_html(&board.cards));

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n{body}</body>\n</html>\n"
    )
}
