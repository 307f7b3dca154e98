#[derive(Debug)]
pub enum MapLoaderError {
    LoaderClosed,
    Geolocation(String),
}

impl std::fmt::Display for MapLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MapLoaderError::LoaderClosed => write!(f, "Map loader closed before the SDK was ready"),
            MapLoaderError::Geolocation(e) => write!(f, "Geolocation unavailable: {}", e),
        }
    }
}

impl std::error::Error for MapLoaderError {}
