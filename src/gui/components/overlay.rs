// src/gui/components/overlay.rs
//
// Full-window zoom layer. Drawn above everything while the overlay is open.

use eframe::egui::{
    self, load::SizedTexture, Align2, Color32, CornerRadius, FontId, Order, Rect, Sense, Vec2,
};

use crate::{
    config::consts::FALLBACK_OPACITY,
    gui::images::ImageCache,
    overlay::{Overlay, OverlayEvent},
};

const MAX_UPSCALE: f32 = 4.0;

/// Fit `size` inside `max`, keeping aspect ratio.
fn fit(size: Vec2, max: Vec2) -> Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return max;
    }
    let scale = (max.x / size.x).min(max.y / size.y).min(MAX_UPSCALE);
    size * scale
}

pub fn draw(ctx: &egui::Context, overlay: &Overlay, images: &mut ImageCache) -> Option<OverlayEvent> {
    let Overlay::Open { src, label } = overlay else {
        return None;
    };

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        return Some(OverlayEvent::DismissKey);
    }

    let screen = ctx.screen_rect();
    let mut event = None;

    egui::Area::new(egui::Id::new("card_overlay"))
        .order(Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let backdrop = ui.allocate_rect(screen, Sense::click());
            ui.painter().rect_filled(screen, CornerRadius::ZERO, Color32::from_black_alpha(200));

            let zoomed = images.get(ctx, src).map(|img| {
                let size = fit(img.texture.size_vec2(), screen.size() * 0.8);
                let rect = Rect::from_center_size(screen.center(), size);
                ui.painter().rect_filled(
                    rect.expand(10.0),
                    CornerRadius::same(12),
                    Color32::from_white_alpha(40),
                );
                let mut widget = egui::Image::from_texture(SizedTexture::new(img.texture.id(), size))
                    .sense(Sense::click());
                if img.substituted {
                    widget = widget.tint(Color32::WHITE.gamma_multiply(FALLBACK_OPACITY));
                }
                ui.put(rect, widget)
            });

            ui.painter().text(
                egui::pos2(screen.center().x, screen.bottom() - 40.0),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(18.0),
                Color32::WHITE,
            );

            if zoomed.as_ref().is_some_and(|r| r.clicked()) {
                event = Some(OverlayEvent::ZoomedImageActivated);
            } else if backdrop.clicked() {
                event = Some(OverlayEvent::BackgroundActivated);
            }
        });

    // The backdrop fills the window, so the only click "outside" the overlay
    // is one that lands outside the window and takes focus away from it.
    if event.is_none() && lost_focus(ctx) {
        event = Some(OverlayEvent::OutsideActivated);
    }
    event
}

fn lost_focus(ctx: &egui::Context) -> bool {
    ctx.input(|i| i.events.iter().any(|e| matches!(e, egui::Event::WindowFocused(false))))
}
