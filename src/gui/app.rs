// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        options::SheetSource,
        state::{AppState, LoadStatus},
    },
    error::LoadError,
    overlay::OverlayEvent,
    render::render_board,
    sheet::LoadOutcome,
};

use super::{
    actions,
    components::{board, overlay, toolbar},
    images::ImageCache,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        crate::config::consts::WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, SheetSource::from_env())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // status line (the fetch worker writes here too)
    pub status: Arc<Mutex<String>>,

    // decoded card artwork
    pub images: ImageCache,

    // result channel of the in-flight fetch, if any
    pub inbox: Option<Receiver<Result<LoadOutcome, LoadError>>>,
}

impl App {
    pub fn new(ctx: &egui::Context, source: SheetSource) -> Self {
        logf!("Init: sheet={} gid={}", source.sheet_id, source.gid);

        let mut app = Self {
            state: AppState::new(source),
            status: Arc::new(Mutex::new(s!("Idle"))),
            images: ImageCache::new(),
            inbox: None,
        };
        actions::load(&mut app, ctx);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Status line for a finished load.
    pub fn describe(status: &LoadStatus) -> String {
        match status {
            LoadStatus::Idle => s!("Idle"),
            LoadStatus::Loading => s!("Fetching sheet…"),
            LoadStatus::Loaded { rows, students } => {
                format!("Loaded {students} student(s) from {rows} row(s)")
            }
            LoadStatus::NoData => s!("No data rows found in sheet."),
            LoadStatus::Failed(msg) => format!("Error: {msg}"),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_load(self);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            toolbar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status_text()));
        });

        // One event per frame, from whichever layer was hit. The board is
        // rebuilt from state every frame, so nothing can refer to a card
        // that is no longer shown.
        let board = render_board(&self.state);
        let mut event: Option<OverlayEvent> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            event = board::draw(ui, &board, &mut self.images);
        });

        if let Some(ev) = overlay::draw(ctx, &self.state.overlay, &mut self.images) {
            event = Some(ev);
        }

        if let Some(ev) = event {
            self.state.overlay.apply(ev);
        }
    }
}
