use serde::{Deserialize, Serialize};

/// Body of the nearby-places search sent to the backend proxy.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequestData {
    pub included_types: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
}
