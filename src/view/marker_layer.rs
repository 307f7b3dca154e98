use serde::Serialize;
use tracing::debug;

use super::marker::Marker;

/// Markers currently on the map and the one info window that may be open.
#[derive(Debug, Default)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
    open_info_window: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoWindowChange {
    pub closed: Option<usize>,
    pub opened: usize,
}

impl MarkerLayer {
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn open_info_window(&self) -> Option<usize> {
        self.open_info_window
    }

    /// Drops every marker, and with them any open info window.
    pub fn replace(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
        self.open_info_window = None;
    }

    /// Opens the info window of the marker at `index`, closing the one that
    /// was open. Clicking the open marker again closes and reopens it.
    pub fn click(&mut self, index: usize) -> Option<InfoWindowChange> {
        if index >= self.markers.len() {
            return None;
        }

        let closed = self.open_info_window.replace(index);
        debug!("Info window {} opened, closed {:?}", index, closed);

        Some(InfoWindowChange {
            closed,
            opened: index,
        })
    }
}
