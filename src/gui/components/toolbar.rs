// src/gui/components/toolbar.rs
//
// Search box, sort selector, Reload and Export. Edits AppState directly;
// the board is re-derived from it on the same frame.

use eframe::egui::{self, widgets::Spinner};

use crate::{gui::actions, gui::app::App, view::SortMode};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("Band Achievements");
        ui.separator();

        ui.label("Search:");
        let search = ui.add(
            egui::TextEdit::singleline(&mut app.state.view.search)
                .hint_text("Student name…")
                .desired_width(200.0),
        );
        if search.changed() {
            logd!("UI: Search → {:?}", app.state.view.search);
        }

        ui.label("Sort:");
        let before = app.state.view.sort;
        egui::ComboBox::from_id_salt("sort_select")
            .selected_text(before.label())
            .show_ui(ui, |ui| {
                for mode in SortMode::ALL {
                    ui.selectable_value(&mut app.state.view.sort, mode, mode.label());
                }
            });
        if app.state.view.sort != before {
            logf!("UI: Sort {} → {}", before, app.state.view.sort);
        }

        ui.separator();

        let loading = app.state.is_loading();
        if ui.add_enabled(!loading, egui::Button::new("Reload")).clicked() {
            let ctx = ui.ctx().clone();
            actions::load(app, &ctx);
        }
        if loading {
            ui.add(Spinner::new());
        }

        if ui.button("Export HTML").clicked() {
            actions::export(app);
        }
    });
}
