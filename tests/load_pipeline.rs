// tests/load_pipeline.rs
//
// Ingest scenarios plus the real fetch path against a one-shot local HTTP
// server, so no test touches the network.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Once;
use std::thread;

use band_cards::config::state::{AppState, LoadStatus};
use band_cards::error::LoadError;
use band_cards::html::render_page;
use band_cards::progress::Progress;
use band_cards::render::{render_board, Notice};
use band_cards::sheet::{ingest, load_url, LoadOutcome};

static NO_PROXY: Once = Once::new();

/// The fetch client honours proxy variables; loopback must be reached directly.
fn direct_connections() {
    NO_PROXY.call_once(|| {
        for key in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"] {
            // SAFETY: every test that builds a fetch client calls this first, and
            // `Once` blocks those callers until the removal is done. The
            // ingest-only tests never read the environment.
            unsafe { std::env::remove_var(key) };
        }
    });
}

/// Serve `response` verbatim to the first connection; return a URL for it.
fn serve_once(response: String) -> String {
    direct_connections();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });
    format!("http://{addr}/spreadsheets/d/test/export?format=csv&gid=0")
}

fn ok_response(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    )
}

#[derive(Default)]
struct Recorder {
    lines: Vec<String>,
    begun: bool,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self) {
        self.begun = true;
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn header_only_sheet_is_no_data() {
    assert_eq!(ingest("Student,Card,Points\n"), LoadOutcome::NoData);
    assert_eq!(ingest(""), LoadOutcome::NoData);
    assert_eq!(ingest("\n\r\n  \n"), LoadOutcome::NoData);
}

#[test]
fn ingest_counts_rows_and_students() {
    match ingest("Student,Card,Points\nAlice,Scales,10\nBob,Theory,5\nAlice,Rhythm,20\n") {
        LoadOutcome::Loaded { students, rows } => {
            assert_eq!(rows, 3);
            assert_eq!(students.len(), 2);
            assert_eq!(students[0].name(), "Alice");
        }
        other => panic!("expected data, got {other:?}"),
    }
}

#[test]
fn no_data_replaces_previous_students() {
    let mut state = AppState::default();
    state.begin_load();
    state.finish_load(Ok(ingest("Student,Card,Points\nAlice,Scales,10\n")));
    assert_eq!(state.students().len(), 1);

    state.begin_load();
    state.finish_load(Ok(ingest("Student,Card,Points")));
    assert_eq!(state.status(), &LoadStatus::NoData);
    assert!(state.students().is_empty());
    assert!(state.display().is_empty());
}

#[test]
fn fetch_success_loads_students() {
    let url = serve_once(ok_response("Student,Card,Points\r\nAlice,Scales,10\r\nBob,Theory,5\r\n"));
    let mut prog = Recorder::default();
    let outcome = load_url(&url, Some(&mut prog)).unwrap();

    assert_eq!(outcome.students().len(), 2);
    assert!(prog.begun && prog.finished);
    assert!(!prog.lines.is_empty());
}

#[test]
fn http_404_is_reported_and_keeps_state() {
    let mut state = AppState::default();
    state.begin_load();
    state.finish_load(Ok(ingest("Student,Card,Points\nAlice,Scales,10\n")));
    let before = state.students().to_vec();

    let url = serve_once(
        "HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found"
            .to_string(),
    );
    let result = load_url(&url, None);
    assert!(matches!(result, Err(LoadError::Status { code: 404, .. })));

    state.begin_load();
    state.finish_load(result);
    assert!(matches!(state.status(), LoadStatus::Failed(msg) if msg.contains("404")));
    assert_eq!(state.students(), before.as_slice());

    let board = render_board(&state);
    assert!(matches!(board.notice, Some(Notice::Error(_))));
    let page = render_page(&board, "Band");
    assert!(page.contains("<p class=\"error\">Error loading sheet: Could not fetch sheet CSV: 404 Not Found</p>"));
}

#[test]
fn connection_refused_is_a_transport_error() {
    direct_connections();
    // Bind then drop to get a port nobody is listening on.
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let result = load_url(&format!("http://127.0.0.1:{port}/x"), None);
    assert!(matches!(result, Err(LoadError::Transport(_))));
}
