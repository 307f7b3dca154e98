use std::collections::BTreeSet;

use chrono::Weekday;
use tracing::{debug, info};

use super::{
    included_type::IncludedType,
    map_widget::MapWidget,
    marker::{to_marker, HoursStyle},
    marker_layer::{InfoWindowChange, MarkerLayer},
};
use crate::{
    services::places_client::types::{filter_request_data::FilterRequestData, place::Place},
    types::lat_long_location::LatLngLiteral,
};

/// Identifies one search. Only the most recent ticket may apply its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Rendered(usize),
    Empty,
    Superseded,
}

/// Everything the user has chosen plus what the map currently shows.
#[derive(Debug)]
pub struct ExplorerView {
    selected_types: BTreeSet<IncludedType>,
    radius: f64,
    center: LatLngLiteral,
    map: Option<MapWidget>,
    markers: MarkerLayer,
    hours_style: HoursStyle,
    latest_search: u64,
}

impl ExplorerView {
    pub fn new(center: LatLngLiteral, radius: f64, hours_style: HoursStyle) -> Self {
        Self {
            selected_types: BTreeSet::new(),
            radius,
            center,
            map: None,
            markers: MarkerLayer::default(),
            hours_style,
            latest_search: 0,
        }
    }

    /// Flips membership of `included_type`, returning whether it is now selected.
    pub fn toggle_type(&mut self, included_type: IncludedType) -> bool {
        if self.selected_types.remove(&included_type) {
            false
        } else {
            self.selected_types.insert(included_type);
            true
        }
    }

    pub fn is_selected(&self, included_type: IncludedType) -> bool {
        self.selected_types.contains(&included_type)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    pub fn center(&self) -> LatLngLiteral {
        self.center
    }

    pub fn map(&self) -> Option<&MapWidget> {
        self.map.as_ref()
    }

    /// Installs the map widget. Only the first call has any effect.
    pub fn initialize_map(&mut self, map: MapWidget) -> bool {
        if self.map.is_some() {
            debug!("Map already initialised");
            return false;
        }

        self.center = map.center;
        self.map = Some(map);
        true
    }

    pub fn markers(&self) -> &MarkerLayer {
        &self.markers
    }

    pub fn filter_request(&self) -> FilterRequestData {
        FilterRequestData {
            included_types: self
                .selected_types
                .iter()
                .map(|t| t.to_string())
                .collect(),
            latitude: self.center.lat,
            longitude: self.center.lng,
            radius: self.radius,
        }
    }

    /// Snapshots the selection for a new search, superseding any in flight.
    pub fn begin_search(&mut self) -> (SearchTicket, FilterRequestData) {
        self.latest_search += 1;

        (SearchTicket(self.latest_search), self.filter_request())
    }

    pub fn apply_results(
        &mut self,
        ticket: SearchTicket,
        places: &[Place],
        today: Weekday,
    ) -> SearchOutcome {
        if ticket.0 != self.latest_search {
            info!(
                "Dropping results of search {}, search {} is newer",
                ticket.0, self.latest_search
            );
            return SearchOutcome::Superseded;
        }

        if places.is_empty() {
            return SearchOutcome::Empty;
        }

        self.markers.replace(
            places
                .iter()
                .map(|place| to_marker(place, today, self.hours_style))
                .collect(),
        );

        SearchOutcome::Rendered(places.len())
    }

    pub fn click_marker(&mut self, index: usize) -> Option<InfoWindowChange> {
        self.markers.click(index)
    }
}
