// src/gui/actions/export.rs
use crate::{
    config::consts::WINDOW_TITLE,
    file,
    gui::app::App,
    html,
    render::render_board,
};

/// Write the board as currently shown (search and sort applied) to HTML.
pub fn export(app: &mut App) {
    let board = render_board(&app.state);
    let page = html::render_page(&board, WINDOW_TITLE);
    let path = file::default_page_path();

    match file::write_page(&path, &page) {
        Ok(p) => {
            logf!("Export: OK cards={} → {}", board.cards.len(), p.display());
            app.status(format!("Exported {} card(s) → {}", board.cards.len(), p.display()));
        }
        Err(e) => {
            loge!("Export: Error {}: {e}", path.display());
            app.status(format!("Export error: {e}"));
        }
    }
}
