//! The keyword property registry: name-keyed, lazily populated,
//! creation-order indexed.

use indexmap::IndexMap;
use strata_core::{MessageLog, SupportedKeyword};
use strata_grid::{GridDims, Region};

use crate::catalog::KeywordCatalog;
use crate::error::PropertyError;
use crate::property::CellProperty;

/// Provenance of a materialized property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Created implicitly by a read, using catalog defaults, before any
    /// explicit request for the keyword.
    AutoGenerated,
    /// Created (or promoted) in direct response to a caller's request.
    Explicit,
}

/// A materialized property plus its provenance tag.
#[derive(Clone, Debug)]
struct Slot<T> {
    property: CellProperty<T>,
    origin: Origin,
}

/// Registry of per-cell grid properties for one element type.
///
/// For every keyword name, relative to its catalog, the registry is in
/// one of three states: unsupported (every request fails), supported but
/// absent (no property exists yet), or supported and present, tagged
/// either [`Origin::AutoGenerated`] or [`Origin::Explicit`]. State is
/// monotonic except for exactly one legal transition, the promotion
/// `AutoGenerated -> Explicit` performed by [`add`](Self::add).
///
/// Properties live in a single `IndexMap`, so the name-keyed view and
/// the creation-order view can never disagree: insertion order is
/// creation order, and [`get_at`](Self::get_at) indexes into it.
/// Properties are never evicted.
///
/// The registry borrows its [`GridDims`] and must not outlive the
/// geometry that produced them; the lifetime parameter enforces this.
/// Access is exclusive and single-threaded during case assembly; there
/// is no internal locking.
#[derive(Debug)]
pub struct PropertyRegistry<'g, T> {
    grid: &'g GridDims,
    catalog: KeywordCatalog<T>,
    slots: IndexMap<String, Slot<T>>,
    messages: MessageLog,
}

impl<'g, T: Clone> PropertyRegistry<'g, T> {
    /// Create a registry over `grid` supporting the given keywords.
    ///
    /// Duplicate names in `supported` resolve last-wins.
    pub fn new(
        grid: &'g GridDims,
        supported: impl IntoIterator<Item = SupportedKeyword<T>>,
    ) -> Self {
        Self {
            grid,
            catalog: KeywordCatalog::new(supported),
            slots: IndexMap::new(),
            messages: MessageLog::new(),
        }
    }

    /// The grid extents properties are sized to.
    pub fn grid(&self) -> &GridDims {
        self.grid
    }

    /// The supported-keyword catalog.
    pub fn catalog(&self) -> &KeywordCatalog<T> {
        &self.catalog
    }

    // ── Read path ──────────────────────────────────────────────────

    /// Whether `name` is in the catalog. No side effect.
    pub fn supports(&self, name: &str) -> bool {
        self.catalog.is_supported(name)
    }

    /// Whether an **explicit** property exists for `name`.
    ///
    /// Auto-generated properties are deliberately invisible here, so a
    /// caller cannot mistake "defaulted for internal reasons" for an
    /// explicit deck mention. Use [`peek`](Self::peek) or
    /// [`origin`](Self::origin) to observe auto-generated instances.
    pub fn has(&self, name: &str) -> bool {
        matches!(
            self.slots.get(name),
            Some(slot) if slot.origin == Origin::Explicit
        )
    }

    /// Look at a materialized property without materializing anything.
    ///
    /// Pure read: returns `None` for supported-but-absent and unsupported
    /// names alike, and sees auto-generated instances.
    pub fn peek(&self, name: &str) -> Option<&CellProperty<T>> {
        self.slots.get(name).map(|slot| &slot.property)
    }

    /// Provenance of the materialized property for `name`, if any.
    pub fn origin(&self, name: &str) -> Option<Origin> {
        self.slots.get(name).map(|slot| slot.origin)
    }

    /// Get the property for `name`, materializing it with catalog
    /// defaults if absent.
    ///
    /// A property created here is tagged [`Origin::AutoGenerated`] and
    /// appended to the creation order. This read allocates and mutates
    /// the registry, hence `&mut self`. Fails with
    /// [`PropertyError::UnsupportedKeyword`] for names outside the
    /// catalog.
    pub fn get_or_default(&mut self, name: &str) -> Result<&mut CellProperty<T>, PropertyError> {
        let keyword = self.require_supported(name)?.clone();
        let cell_count = self.grid.cell_count();
        let slot = self.slots.entry(name.to_string()).or_insert_with(|| Slot {
            property: CellProperty::new(cell_count, keyword),
            origin: Origin::AutoGenerated,
        });
        Ok(&mut slot.property)
    }

    /// Positional access into the creation-order sequence.
    pub fn get_at(&self, index: usize) -> Result<&CellProperty<T>, PropertyError> {
        match self.slots.get_index(index) {
            Some((_, slot)) => Ok(&slot.property),
            None => Err(PropertyError::IndexOutOfRange {
                index,
                len: self.slots.len(),
            }),
        }
    }

    /// Mutable positional access into the creation-order sequence.
    pub fn get_at_mut(&mut self, index: usize) -> Result<&mut CellProperty<T>, PropertyError> {
        let len = self.slots.len();
        match self.slots.get_index_mut(index) {
            Some((_, slot)) => Ok(&mut slot.property),
            None => Err(PropertyError::IndexOutOfRange { index, len }),
        }
    }

    /// Get the property for `name` only if it was explicitly specified.
    ///
    /// Never materializes defaults. An auto-generated instance counts as
    /// uninitialized. The two failure kinds are distinct:
    /// [`PropertyError::NotInitialized`] for supported-but-unspecified
    /// names, [`PropertyError::UnsupportedKeyword`] for unknown ones.
    pub fn get_initialized(&self, name: &str) -> Result<&CellProperty<T>, PropertyError> {
        match self.slots.get(name) {
            Some(slot) if slot.origin == Origin::Explicit => Ok(&slot.property),
            _ if self.supports(name) => Err(PropertyError::NotInitialized {
                keyword: name.to_string(),
            }),
            _ => Err(PropertyError::UnsupportedKeyword {
                keyword: name.to_string(),
            }),
        }
    }

    /// Number of materialized properties, auto-generated and explicit
    /// combined.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no property has been materialized yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over `(name, property)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellProperty<T>)> {
        self.slots
            .iter()
            .map(|(name, slot)| (name.as_str(), &slot.property))
    }

    // ── Write path ─────────────────────────────────────────────────

    /// Record an explicit deck mention of `name`.
    ///
    /// Returns `Ok(false)` if an explicit property already exists
    /// (idempotent no-op). If an auto-generated property exists it is
    /// promoted in place: values are preserved unchanged, only the
    /// provenance tag flips, and one warning is appended to the message
    /// log. Otherwise a fresh property is materialized with catalog
    /// defaults and tagged explicit. Both of the latter return
    /// `Ok(true)`.
    pub fn add(&mut self, name: &str) -> Result<bool, PropertyError> {
        let keyword = self.require_supported(name)?.clone();
        match self.slots.get_mut(name) {
            Some(slot) => match slot.origin {
                Origin::Explicit => Ok(false),
                Origin::AutoGenerated => {
                    slot.origin = Origin::Explicit;
                    self.messages.warning(format!(
                        "keyword {name} was used to compute the defaults of another \
                         keyword before it was explicitly mentioned in the deck; the \
                         keyword ordering is likely wrong (move {name} earlier)"
                    ));
                    Ok(true)
                }
            },
            None => {
                let property = CellProperty::new(self.grid.cell_count(), keyword);
                self.slots.insert(
                    name.to_string(),
                    Slot {
                        property,
                        origin: Origin::Explicit,
                    },
                );
                Ok(true)
            }
        }
    }

    /// Copy `source` values into `target`, restricted to `region`.
    ///
    /// The source is materialized lazily if needed; the target is
    /// obtained or created with explicit provenance. Cells outside the
    /// region keep the target's current values.
    pub fn copy_region(
        &mut self,
        source: &str,
        target: &str,
        region: &Region,
    ) -> Result<(), PropertyError> {
        let src = self.get_or_default(source)?;
        let picked: Vec<(usize, T)> = region
            .indices()
            .map(|index| (index, src.values()[index].clone()))
            .collect();

        let dst = self.get_or_create(target)?;
        for (index, value) in picked {
            dst.values_mut()[index] = value;
        }
        Ok(())
    }

    /// Writable handle with explicit provenance: [`add`](Self::add)
    /// followed by lookup.
    pub fn get_or_create(&mut self, name: &str) -> Result<&mut CellProperty<T>, PropertyError> {
        self.add(name)?;
        self.property_mut(name)
    }

    // ── Diagnostics ────────────────────────────────────────────────

    /// The accumulated diagnostics.
    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Mutable diagnostics access, for the reporting layer to drain.
    pub fn messages_mut(&mut self) -> &mut MessageLog {
        &mut self.messages
    }

    // ── Privileged catalog extension ───────────────────────────────

    /// Insert a catalog entry after construction.
    ///
    /// Capability of [`CaseProperties`](crate::CaseProperties) alone: it
    /// registers the one keyword whose default is derived from geometry
    /// after the normal catalog-build step. Crate-private so no other
    /// caller can reopen the catalog.
    pub(crate) fn extend_catalog(&mut self, keyword: SupportedKeyword<T>) {
        self.catalog.insert(keyword);
    }

    fn require_supported(&self, name: &str) -> Result<&SupportedKeyword<T>, PropertyError> {
        self.catalog
            .get(name)
            .ok_or_else(|| PropertyError::UnsupportedKeyword {
                keyword: name.to_string(),
            })
    }

    fn property_mut(&mut self, name: &str) -> Result<&mut CellProperty<T>, PropertyError> {
        self.slots
            .get_mut(name)
            .map(|slot| &mut slot.property)
            .ok_or_else(|| PropertyError::UnsupportedKeyword {
                keyword: name.to_string(),
            })
    }
}
