// src/overlay.rs
//
// Zoom overlay: the only piece of interaction with real state.
//
//   Closed ──ImageActivated──▶ Open { src, label }
//   Open   ──Background / DismissKey / Outside──▶ Closed
//
// The front-end reports at most one event per frame; this module decides
// what it means.

/// What the user did, as seen by the overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlayEvent {
    /// An achievement image on a card was activated.
    ImageActivated { src: String, label: String },
    /// The dimmed backdrop (not the zoomed image) was activated.
    BackgroundActivated,
    /// The zoomed image itself was activated. Ignored.
    ZoomedImageActivated,
    /// The dismiss key (Escape) was pressed.
    DismissKey,
    /// Something outside the overlay region was activated.
    OutsideActivated,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Closed,
    Open { src: String, label: String },
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Open { .. })
    }

    /// Source of the image being shown, if any.
    pub fn src(&self) -> Option<&str> {
        match self {
            Overlay::Open { src, .. } => Some(src),
            Overlay::Closed => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Overlay::Open { label, .. } => Some(label),
            Overlay::Closed => None,
        }
    }

    /// Next state for `event`.
    pub fn next(&self, event: OverlayEvent) -> Overlay {
        use OverlayEvent::*;
        match (self, event) {
            (_, ImageActivated { src, label }) => Overlay::Open { src, label },
            (Overlay::Open { .. }, BackgroundActivated | DismissKey | OutsideActivated) => Overlay::Closed,
            (state, _) => state.clone(),
        }
    }

    /// Apply `event` in place. Returns true when the state changed.
    pub fn apply(&mut self, event: OverlayEvent) -> bool {
        let next = self.next(event);
        let changed = next != *self;
        if changed {
            match &next {
                Overlay::Open { src, .. } => logd!("Overlay: open {src}"),
                Overlay::Closed => logd!("Overlay: closed"),
            }
            *self = next;
        }
        changed
    }
}
