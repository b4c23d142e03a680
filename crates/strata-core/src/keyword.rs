//! Supported-keyword descriptors and the post-processing hook.

use std::fmt;
use std::sync::Arc;

/// A transformation applied to a property's values once, immediately after
/// the array has been filled with the keyword's default value.
///
/// Post-processors run at materialization only. Promoting an implicitly
/// defaulted property to an explicit one does not run the post-processor
/// again; the values observed before promotion are preserved.
pub trait PostProcessor<T> {
    /// Transform the freshly defaulted values in place.
    fn apply(&self, values: &mut [T]);
}

impl<T, F> PostProcessor<T> for F
where
    F: Fn(&mut [T]),
{
    fn apply(&self, values: &mut [T]) {
        self(values)
    }
}

/// Descriptor for one keyword a property container knows how to default.
///
/// Carries the keyword name (unique within a catalog), the element value
/// used to fill a fresh array, an optional [`PostProcessor`] run after
/// that fill, and an opaque physical-dimension tag. The tag is never
/// interpreted here; unit conversion happens in the deck reader.
///
/// Descriptors are immutable once placed in a catalog. Cloning shares
/// the post-processor.
#[derive(Clone)]
pub struct SupportedKeyword<T> {
    name: String,
    default_value: T,
    post_processor: Option<Arc<dyn PostProcessor<T>>>,
    dimension: String,
}

impl<T> SupportedKeyword<T> {
    /// Create a descriptor with no post-processor.
    pub fn new(name: impl Into<String>, default_value: T, dimension: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value,
            post_processor: None,
            dimension: dimension.into(),
        }
    }

    /// Attach a post-processor, consuming and returning the descriptor.
    pub fn with_post_processor(mut self, post: Arc<dyn PostProcessor<T>>) -> Self {
        self.post_processor = Some(post);
        self
    }

    /// The keyword name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element value used to fill a fresh property array.
    pub fn default_value(&self) -> &T {
        &self.default_value
    }

    /// The post-processor, if one is attached.
    pub fn post_processor(&self) -> Option<&dyn PostProcessor<T>> {
        self.post_processor.as_deref()
    }

    /// The opaque physical-dimension tag (e.g. `"Permeability"`).
    pub fn dimension(&self) -> &str {
        &self.dimension
    }
}

impl<T: fmt::Debug> fmt::Debug for SupportedKeyword<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupportedKeyword")
            .field("name", &self.name)
            .field("default_value", &self.default_value)
            .field("post_processor", &self.post_processor.is_some())
            .field("dimension", &self.dimension)
            .finish()
    }
}
