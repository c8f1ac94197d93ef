//! Data models for the vector-store management facade

use serde::{Deserialize, Serialize};

/// Distance metrics supported for collection creation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Distance {
    Cosine,
    Euclidean,
    DotProduct,
}

impl Distance {
    /// Parse a caller-supplied metric name, case-insensitively. Accepts the
    /// short spellings Qdrant itself uses ("Euclid", "Dot") as aliases.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cosine" => Some(Distance::Cosine),
            "euclid" | "euclidean" => Some(Distance::Euclidean),
            "dot" | "dotproduct" | "dot_product" => Some(Distance::DotProduct),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Distance::Cosine => "Cosine",
            Distance::Euclidean => "Euclidean",
            Distance::DotProduct => "DotProduct",
        }
    }
}

/// Connection state reported by status operations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    Connected,
    Disconnected,
}

/// Caller-supplied parameters for creating a collection.
///
/// The distance metric stays a plain string here; it is resolved against
/// [`Distance`] only when the create call is dispatched.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionDescriptor {
    pub name: String,
    pub vector_size: u64,
    #[serde(default = "default_distance")]
    pub distance: String,
}

fn default_distance() -> String {
    "Cosine".to_string()
}

/// Per-collection counts included in a connection report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub name: String,
    pub vectors_count: u64,
    pub points_count: u64,
}

/// Aggregate counts across all collections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSummary {
    pub collections_count: usize,
    pub total_vectors: u64,
    pub total_points: u64,
}

/// Detailed connection status, produced fresh on every check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionStatusReport {
    pub status: ConnectionState,
    pub connection_string: String,
    pub error: Option<String>,
    pub server_info: Option<ServerSummary>,
    pub collections: Vec<CollectionSummary>,
    pub response_time_ms: Option<f64>,
}

impl ConnectionStatusReport {
    /// Baseline report before any remote call has been attempted
    pub fn disconnected(connection_string: String) -> Self {
        Self {
            status: ConnectionState::Disconnected,
            connection_string,
            error: None,
            server_info: None,
            collections: Vec::new(),
            response_time_ms: None,
        }
    }
}

/// Vector configuration read back from an existing collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfigSummary {
    pub vector_size: Option<u64>,
    pub distance: Option<String>,
}

/// One entry in a detailed collection listing.
///
/// A failed per-collection detail fetch degrades that entry to its name and
/// the error message instead of aborting the whole listing.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CollectionEntry {
    Detail {
        name: String,
        vectors_count: Option<u64>,
        points_count: Option<u64>,
        config: Option<CollectionConfigSummary>,
        status: String,
    },
    Degraded {
        name: String,
        error: String,
    },
}

impl CollectionEntry {
    pub fn name(&self) -> &str {
        match self {
            CollectionEntry::Detail { name, .. } => name,
            CollectionEntry::Degraded { name, .. } => name,
        }
    }
}

/// Outcome of a create-collection request, reported as data
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CreateOutcome {
    Created {
        success: bool,
        collection_name: String,
        vector_size: u64,
        distance: Distance,
        message: String,
    },
    Failed {
        success: bool,
        error: String,
    },
}

impl CreateOutcome {
    pub fn created(name: &str, vector_size: u64, distance: Distance) -> Self {
        CreateOutcome::Created {
            success: true,
            collection_name: name.to_string(),
            vector_size,
            distance,
            message: format!("Collection '{}' created successfully", name),
        }
    }

    pub fn failed(error: String) -> Self {
        CreateOutcome::Failed {
            success: false,
            error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CreateOutcome::Created { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CreateOutcome::Failed { error, .. } => Some(error),
            CreateOutcome::Created { .. } => None,
        }
    }
}

/// Cheapest possible status: one listing call, no per-collection work
#[derive(Debug, Clone, Serialize)]
pub struct StatusSummary {
    pub status: ConnectionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub connection_string: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_parse_case_insensitive() {
        assert_eq!(Distance::parse("cosine"), Some(Distance::Cosine));
        assert_eq!(Distance::parse("COSINE"), Some(Distance::Cosine));
        assert_eq!(Distance::parse("Euclid"), Some(Distance::Euclidean));
        assert_eq!(Distance::parse("euclidean"), Some(Distance::Euclidean));
        assert_eq!(Distance::parse("Dot"), Some(Distance::DotProduct));
        assert_eq!(Distance::parse("DotProduct"), Some(Distance::DotProduct));
    }

    #[test]
    fn test_distance_parse_unrecognized() {
        assert_eq!(Distance::parse("Manhattan"), None);
        assert_eq!(Distance::parse(""), None);
    }

    #[test]
    fn test_descriptor_default_distance() {
        let descriptor: CollectionDescriptor =
            serde_json::from_value(serde_json::json!({"name": "docs", "vector_size": 384}))
                .unwrap();
        assert_eq!(descriptor.distance, "Cosine");
    }

    #[test]
    fn test_create_outcome_shapes() {
        let ok = CreateOutcome::created("docs", 384, Distance::Cosine);
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["collection_name"], "docs");
        assert_eq!(json["vector_size"], 384);
        assert_eq!(json["distance"], "Cosine");

        let failed = CreateOutcome::failed("boom".to_string());
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert!(json.get("collection_name").is_none());
    }

    #[test]
    fn test_degraded_entry_serializes_name_and_error_only() {
        let entry = CollectionEntry::Degraded {
            name: "broken".to_string(),
            error: "timeout".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({"name": "broken", "error": "timeout"}));
    }

    #[test]
    fn test_connection_state_renders_lowercase() {
        assert_eq!(
            serde_json::to_value(ConnectionState::Connected).unwrap(),
            serde_json::json!("connected")
        );
        assert_eq!(
            serde_json::to_value(ConnectionState::Disconnected).unwrap(),
            serde_json::json!("disconnected")
        );
    }
}
