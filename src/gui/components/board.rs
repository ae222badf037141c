// src/gui/components/board.rs
//
// Draws a `Board`. Purely a view: it reports what was clicked and leaves
// the decision to the overlay state machine.

use eframe::egui::{self, load::SizedTexture, Color32, CursorIcon, RichText, Sense, Stroke};

use crate::{
    config::consts::FALLBACK_OPACITY,
    gui::images::ImageCache,
    overlay::OverlayEvent,
    render::{Board, CardView, ItemView, Notice},
};

const CARD_W: f32 = 260.0;
const THUMB_H: f32 = 72.0;
const ERROR_RED: Color32 = Color32::from_rgb(0xDC, 0x14, 0x3C);

pub fn draw(ui: &mut egui::Ui, board: &Board, images: &mut ImageCache) -> Option<OverlayEvent> {
    if let Some(notice) = &board.notice {
        match notice {
            Notice::Error(_) => ui.colored_label(ERROR_RED, notice.text()),
            _ => ui.label(RichText::new(notice.text()).italics()),
        };
        ui.separator();
    }

    let mut event = None;
    egui::ScrollArea::vertical()
        .id_salt("board_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(14.0, 14.0);
                for card in &board.cards {
                    if let Some(ev) = draw_card(ui, card, images) {
                        event = Some(ev);
                    }
                }
            });
        });
    event
}

fn draw_card(ui: &mut egui::Ui, card: &CardView, images: &mut ImageCache) -> Option<OverlayEvent> {
    let mut frame = egui::Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(10));

    if let Some(tier) = card.tier {
        let [r, g, b] = tier.rgb();
        let glow = Color32::from_rgb(r, g, b);
        frame = frame.stroke(Stroke::new(2.0, glow)).shadow(egui::Shadow {
            offset: [0, 0],
            blur: 14,
            spread: 3,
            color: glow.gamma_multiply(0.6),
        });
    }

    let mut event = None;
    frame.show(ui, |ui| {
        ui.set_width(CARD_W);
        ui.vertical(|ui| {
            ui.label(RichText::new(&card.name).heading().strong());
            ui.label(RichText::new("Achievement Points").small().weak());
            ui.label(RichText::new(card.points.to_string()).size(28.0).strong());

            ui.horizontal_wrapped(|ui| {
                for item in &card.items {
                    if let Some(src) = draw_thumb(ui, item, images) {
                        event = Some(OverlayEvent::ImageActivated {
                            src,
                            label: item.label.clone(),
                        });
                    }
                }
            });
        });
    });
    event
}

/// One thumbnail. Returns the shown image path when it was clicked.
fn draw_thumb(ui: &mut egui::Ui, item: &ItemView, images: &mut ImageCache) -> Option<String> {
    let ctx = ui.ctx().clone();
    match images.get(&ctx, &item.image) {
        Some(img) => {
            let mut widget = egui::Image::from_texture(SizedTexture::from_handle(&img.texture))
                .max_height(THUMB_H)
                .sense(Sense::click());
            if img.substituted {
                widget = widget.tint(Color32::WHITE.gamma_multiply(FALLBACK_OPACITY));
            }
            let resp = ui
                .add(widget)
                .on_hover_text(item.label.as_str())
                .on_hover_cursor(CursorIcon::ZoomIn);
            resp.clicked().then(|| img.path.clone())
        }
        None => {
            // Neither the card art nor the fallback exists: show the label.
            let resp = ui
                .add(
                    egui::Button::new(RichText::new(item.label.as_str()).small())
                        .min_size(egui::vec2(THUMB_H * 0.7, THUMB_H)),
                )
                .on_hover_text(item.label.as_str());
            resp.clicked().then(|| item.image.clone())
        }
    }
}
