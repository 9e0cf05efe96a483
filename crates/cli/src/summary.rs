//! Meta-feature summary over the emitted clusters.

use serde::Serialize;

use hullcluster::prelude::Cluster;

/// Summary record written next to the cluster dump.
///
/// The last two fields are placeholders (the first cluster's size and
/// volume) until the real indicators are designed; an empty clustering
/// reports zeroes.
#[derive(Debug, Serialize)]
pub struct MetaFeatures {
    #[serde(rename = "Number of Clusters")]
    pub number_of_clusters: usize,
    #[serde(rename = "Size versus Number of Clusters")]
    pub size_versus_number_of_clusters: usize,
    #[serde(rename = "Volume versus Size")]
    pub volume_versus_size: f64,
}

pub fn meta_features(clusters: &[Cluster]) -> MetaFeatures {
    MetaFeatures {
        number_of_clusters: clusters.len(),
        size_versus_number_of_clusters: clusters.first().map(|c| c.size).unwrap_or(0),
        volume_versus_size: clusters.first().map(|c| c.volume).unwrap_or(0.0),
    }
}
