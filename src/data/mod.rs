mod geojson;
mod location;
mod source;

pub use {
    geojson::parse_feature_collection,
    location::{FixedLocation, LocationSource, NoFix},
    source::{CandidateSource, FetchError, GeoJsonFileSource},
};
