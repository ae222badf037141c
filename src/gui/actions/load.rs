// src/gui/actions/load.rs
use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{
    error::LoadError,
    gui::{app::App, progress::GuiProgress},
    sheet,
};

/// Start a background fetch unless one is already running.
pub fn load(app: &mut App, ctx: &egui::Context) {
    if !app.state.begin_load() {
        return;
    }

    let source = app.state.source.clone();
    let status = app.status.clone();
    let ctx = ctx.clone();
    let (tx, rx) = mpsc::channel();
    app.inbox = Some(rx);
    app.images.clear();

    logf!("Load: Begin sheet={} gid={}", source.sheet_id, source.gid);

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let result = sheet::load(&source, Some(&mut prog));
        let _ = tx.send(result);
        ctx.request_repaint();
    });
}

/// Pick up a finished fetch, if there is one. Called every frame.
pub fn poll_load(app: &mut App) {
    let Some(rx) = &app.inbox else { return };

    let result = match rx.try_recv() {
        Ok(result) => result,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => Err(LoadError::Worker),
    };

    app.inbox = None;
    app.state.finish_load(result);
    app.status(App::describe(app.state.status()));
}
