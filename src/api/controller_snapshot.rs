use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{BackingSize, Dimensions};
use crate::error::{PartitionError, PartitionResult};
use crate::render::{CanvasElement, PixelRatioPolicy, Renderer};

use super::{LifecycleState, PartitionController, SurfaceDescriptor};

/// Tag stored in the `format` field of a snapshot document.
pub const SNAPSHOT_DOCUMENT_FORMAT: &str = "partition-controller-snapshot";
pub const SNAPSHOT_DOCUMENT_VERSION: u32 = 1;

/// Serializable controller state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    pub lifecycle: LifecycleState,
    pub initialized: bool,
    pub dimensions: Dimensions,
    pub pixel_ratio: f64,
    pub pixel_ratio_policy: PixelRatioPolicy,
    pub backing: BackingSize,
    pub surface: Option<SurfaceDescriptor>,
    pub has_context: bool,
    pub quads_len: usize,
    pub render_count: u64,
    pub picked_data_indices: Vec<usize>,
}

/// Self-describing wrapper written by [`ControllerSnapshot::to_document_json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub format: String,
    pub version: u32,
    pub snapshot: ControllerSnapshot,
}

impl<E, R> PartitionController<E, R>
where
    E: CanvasElement,
    R: Renderer<E::Context>,
{
    #[must_use]
    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            lifecycle: self.lifecycle,
            initialized: self.props.initialized,
            dimensions: self.props.dimensions,
            pixel_ratio: self.surface.pixel_ratio(),
            pixel_ratio_policy: self.surface.policy(),
            backing: self.surface.backing_size(),
            surface: self.surface_descriptor(),
            has_context: self.surface.has_context(),
            quads_len: self.props.geometry.quads.len(),
            render_count: self.render_count,
            picked_data_indices: self
                .picked_data_indices()
                .map(|indices| indices.iter().copied().collect())
                .unwrap_or_default(),
        }
    }
}

impl ControllerSnapshot {
    pub fn to_document_json(&self) -> PartitionResult<String> {
        let document = SnapshotDocument {
            format: SNAPSHOT_DOCUMENT_FORMAT.to_owned(),
            version: SNAPSHOT_DOCUMENT_VERSION,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&document).map_err(|e| {
            PartitionError::InvalidData(format!("could not encode partition snapshot: {e}"))
        })
    }

    /// Reads a [`SnapshotDocument`], or a bare snapshot object with no `format` tag.
    pub fn from_document_json(input: &str) -> PartitionResult<Self> {
        let mut value: Value = serde_json::from_str(input).map_err(|e| {
            PartitionError::InvalidData(format!("partition snapshot is not valid json: {e}"))
        })?;
        if value.get("format").is_some() {
            check_document_header(&value)?;
            value = value["snapshot"].take();
        }
        serde_json::from_value(value).map_err(|e| {
            PartitionError::InvalidData(format!("partition snapshot fields do not match: {e}"))
        })
    }
}

fn check_document_header(document: &Value) -> PartitionResult<()> {
    let format = &document["format"];
    if format.as_str() != Some(SNAPSHOT_DOCUMENT_FORMAT) {
        return Err(PartitionError::InvalidData(format!(
            "expected a `{SNAPSHOT_DOCUMENT_FORMAT}` document, found format {format}"
        )));
    }
    match document["version"].as_u64() {
        Some(version) if version == u64::from(SNAPSHOT_DOCUMENT_VERSION) => Ok(()),
        Some(version) => Err(PartitionError::InvalidData(format!(
            "partition snapshot version {version} is not supported \
             (expected {SNAPSHOT_DOCUMENT_VERSION})"
        ))),
        None => Err(PartitionError::InvalidData(
            "partition snapshot document has no numeric `version`".to_owned(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::{ControllerSnapshot, SNAPSHOT_DOCUMENT_FORMAT, SNAPSHOT_DOCUMENT_VERSION};
    use crate::api::LifecycleState;
    use crate::core::{BackingSize, Dimensions};
    use crate::render::PixelRatioPolicy;

    fn snapshot() -> ControllerSnapshot {
        ControllerSnapshot {
            lifecycle: LifecycleState::MountedReady,
            initialized: true,
            dimensions: Dimensions::sized(300.0, 200.0),
            pixel_ratio: 2.0,
            pixel_ratio_policy: PixelRatioPolicy::FixedAtConstruction,
            backing: BackingSize::new(600, 400),
            surface: None,
            has_context: true,
            quads_len: 12,
            render_count: 3,
            picked_data_indices: vec![4, 1],
        }
    }

    fn document_value() -> serde_json::Value {
        let json = snapshot().to_document_json().expect("serialize");
        serde_json::from_str(&json).expect("json")
    }

    #[test]
    fn document_is_tagged_with_format_and_version() {
        let value = document_value();
        assert_eq!(value["format"], SNAPSHOT_DOCUMENT_FORMAT);
        assert_eq!(
            value["version"].as_u64(),
            Some(u64::from(SNAPSHOT_DOCUMENT_VERSION))
        );

        let parsed =
            ControllerSnapshot::from_document_json(&value.to_string()).expect("parse");
        assert_eq!(parsed, snapshot());
    }

    #[test]
    fn untagged_snapshot_is_accepted() {
        let json = serde_json::to_string(&snapshot()).expect("serialize");
        let parsed = ControllerSnapshot::from_document_json(&json).expect("parse");
        assert_eq!(parsed.picked_data_indices, vec![4, 1]);
    }

    #[test]
    fn newer_document_version_is_rejected() {
        let mut value = document_value();
        value["version"] = serde_json::json!(9);

        let err = ControllerSnapshot::from_document_json(&value.to_string())
            .expect_err("version 9");
        assert!(err.to_string().contains("version 9"));
    }

    #[test]
    fn foreign_document_format_is_rejected() {
        let mut value = document_value();
        value["format"] = serde_json::json!("engine-snapshot");

        let err = ControllerSnapshot::from_document_json(&value.to_string())
            .expect_err("foreign format");
        assert!(err.to_string().contains("engine-snapshot"));
    }

    #[test]
    fn document_with_missing_fields_reports_mismatch() {
        let mut value = document_value();
        value["snapshot"]
            .as_object_mut()
            .expect("snapshot object")
            .remove("lifecycle");

        let err = ControllerSnapshot::from_document_json(&value.to_string())
            .expect_err("missing lifecycle");
        assert!(err.to_string().contains("lifecycle"));
    }
}
