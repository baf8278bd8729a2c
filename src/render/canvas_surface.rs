use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BackingSize, ViewportRect};
use crate::error::{PartitionError, PartitionResult};
use crate::render::CanvasElement;

/// How the surface reacts to device pixel ratio changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PixelRatioPolicy {
    /// The ratio given at construction is used for the surface's whole life.
    /// A window dragged to a monitor with a different ratio keeps the old one.
    #[default]
    FixedAtConstruction,
    /// The element's reported ratio is re-read on every resize.
    TrackOnResize,
}

pub(crate) fn validate_pixel_ratio(ratio: f64) -> PartitionResult<()> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(PartitionError::InvalidPixelRatio { ratio });
    }
    Ok(())
}

/// Owns one mounted drawable element and its lazily acquired 2D context.
///
/// The backing store is sized `logical x pixel_ratio` while the displayed
/// size stays at the logical size.
pub struct CanvasSurface<E: CanvasElement> {
    element: Option<E>,
    context: Option<E::Context>,
    pixel_ratio: f64,
    policy: PixelRatioPolicy,
    logical_width: f64,
    logical_height: f64,
    backing: BackingSize,
}

impl<E: CanvasElement> fmt::Debug for CanvasSurface<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasSurface")
            .field("mounted", &self.element.is_some())
            .field("has_context", &self.context.is_some())
            .field("pixel_ratio", &self.pixel_ratio)
            .field("policy", &self.policy)
            .field("logical_width", &self.logical_width)
            .field("logical_height", &self.logical_height)
            .field("backing", &self.backing)
            .finish()
    }
}

impl<E: CanvasElement> CanvasSurface<E> {
    pub fn new(pixel_ratio: f64, policy: PixelRatioPolicy) -> PartitionResult<Self> {
        validate_pixel_ratio(pixel_ratio)?;
        Ok(Self {
            element: None,
            context: None,
            pixel_ratio,
            policy,
            logical_width: 0.0,
            logical_height: 0.0,
            backing: BackingSize::default(),
        })
    }

    /// Takes ownership of `element` and applies the current sizes to it.
    ///
    /// Any previously attached element and its context are dropped.
    pub fn attach(&mut self, mut element: E) {
        self.context = None;
        element.set_backing_size(self.backing);
        element.set_display_size(self.logical_width, self.logical_height);
        self.element = Some(element);
    }

    pub fn detach(&mut self) -> Option<E> {
        self.context = None;
        self.element.take()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.element.is_some()
    }

    #[must_use]
    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    #[must_use]
    pub fn element(&self) -> Option<&E> {
        self.element.as_ref()
    }

    /// Returns the cached context, acquiring it first if needed.
    ///
    /// `None` when no element is attached or the element has no 2D context.
    pub fn acquire(&mut self) -> Option<&mut E::Context> {
        if self.context.is_none() {
            let element = self.element.as_mut()?;
            self.context = element.acquire_context();
        }
        self.context.as_mut()
    }

    /// Returns the cached context without attempting acquisition.
    pub fn context_mut(&mut self) -> Option<&mut E::Context> {
        self.context.as_mut()
    }

    #[must_use]
    pub fn bounding_rect(&self) -> Option<ViewportRect> {
        self.element.as_ref().map(|element| element.bounding_client_rect())
    }

    #[must_use]
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    #[must_use]
    pub fn policy(&self) -> PixelRatioPolicy {
        self.policy
    }

    #[must_use]
    pub fn backing_size(&self) -> BackingSize {
        self.backing
    }

    #[must_use]
    pub fn logical_size(&self) -> (f64, f64) {
        (self.logical_width, self.logical_height)
    }

    /// Applies a new logical size. Returns `true` if the backing size changed.
    ///
    /// A backing size change drops the cached context; it is re-acquired on
    /// the next `acquire`.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        let size_changed = width != self.logical_width || height != self.logical_height;
        if size_changed && self.policy == PixelRatioPolicy::TrackOnResize {
            self.refresh_pixel_ratio();
        }

        let backing = BackingSize::from_logical(width, height, self.pixel_ratio);
        let backing_changed = backing != self.backing;
        if !size_changed && !backing_changed {
            return false;
        }

        self.logical_width = width;
        self.logical_height = height;
        self.backing = backing;

        // `set_backing_size` and dropping the cached context always go together.
        if let Some(element) = self.element.as_mut() {
            if backing_changed {
                element.set_backing_size(backing);
            }
            element.set_display_size(width, height);
        }
        if backing_changed && self.context.take().is_some() {
            debug!(
                backing_width = backing.width,
                backing_height = backing.height,
                "canvas backing size changed; context will be re-acquired"
            );
        }
        backing_changed
    }

    fn refresh_pixel_ratio(&mut self) {
        let Some(reported) = self
            .element
            .as_ref()
            .and_then(|element| element.device_pixel_ratio())
        else {
            return;
        };
        if validate_pixel_ratio(reported).is_ok() && reported != self.pixel_ratio {
            debug!(
                previous = self.pixel_ratio,
                reported, "device pixel ratio changed"
            );
            self.pixel_ratio = reported;
        }
    }
}
