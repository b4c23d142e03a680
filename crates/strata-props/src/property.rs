//! The dense per-cell property array.

use strata_core::SupportedKeyword;
use strata_grid::Region;

/// One value per grid cell for a single keyword, flat-indexed in the
/// grid's canonical (I fastest) cell order.
///
/// A property is created default-filled from its [`SupportedKeyword`]
/// descriptor; the descriptor's post-processor, if any, runs once at
/// that point and never again. The deck reader then overwrites values
/// through [`values_mut`](CellProperty::values_mut) as explicit data
/// arrives.
#[derive(Clone, Debug)]
pub struct CellProperty<T> {
    keyword: SupportedKeyword<T>,
    values: Vec<T>,
}

impl<T: Clone> CellProperty<T> {
    /// Create a default-filled property of `cell_count` elements.
    pub fn new(cell_count: usize, keyword: SupportedKeyword<T>) -> Self {
        let mut values = vec![keyword.default_value().clone(); cell_count];
        if let Some(post) = keyword.post_processor() {
            post.apply(&mut values);
        }
        Self { keyword, values }
    }

    /// The keyword name this property belongs to.
    pub fn name(&self) -> &str {
        self.keyword.name()
    }

    /// The physical-dimension tag from the descriptor.
    pub fn dimension(&self) -> &str {
        self.keyword.dimension()
    }

    /// The full descriptor.
    pub fn keyword(&self) -> &SupportedKeyword<T> {
        &self.keyword
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the property has zero cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The per-cell values.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Mutable access to the per-cell values.
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.values.fill(value);
    }

    /// Copy `src` values into this property, restricted to `region`.
    ///
    /// Cells outside the region keep their current values. Both
    /// properties and the region must stem from the same grid.
    pub fn copy_from(&mut self, src: &CellProperty<T>, region: &Region) {
        debug_assert_eq!(self.values.len(), src.values.len());
        debug_assert_eq!(self.values.len(), region.dims().cell_count());
        for index in region.indices() {
            self.values[index] = src.values[index].clone();
        }
    }
}
