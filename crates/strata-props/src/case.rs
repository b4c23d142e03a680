//! Case-level assembly of the per-element-type property registries.

use strata_core::SupportedKeyword;
use strata_grid::GridDims;

use crate::error::PropertyError;
use crate::registry::PropertyRegistry;

const PORE_VOLUME: &str = "PORV";
const POROSITY: &str = "PORO";
const NET_TO_GROSS: &str = "NTG";

/// The property registries for one simulation case: one container for
/// floating-point keywords, one for integer keywords.
///
/// `CaseProperties` is the single component allowed to extend a
/// registry's catalog after construction. It uses that capability for
/// exactly one keyword, pore volume: its default is not a constant but a
/// value derived from grid geometry and other properties, so the entry
/// cannot be part of the caller-supplied catalog-build step.
#[derive(Debug)]
pub struct CaseProperties<'g> {
    doubles: PropertyRegistry<'g, f64>,
    ints: PropertyRegistry<'g, i32>,
}

impl<'g> CaseProperties<'g> {
    /// Assemble the registries for a case over `grid`.
    ///
    /// `double_keywords` and `int_keywords` are the supported-keyword
    /// tables for the simulation model; duplicates resolve last-wins.
    /// The pore-volume keyword is registered here, on top of the
    /// supplied table, with a NaN default: every real value it ever
    /// holds is computed by [`derive_pore_volume`](Self::derive_pore_volume).
    pub fn new(
        grid: &'g GridDims,
        double_keywords: impl IntoIterator<Item = SupportedKeyword<f64>>,
        int_keywords: impl IntoIterator<Item = SupportedKeyword<i32>>,
    ) -> Self {
        let mut doubles = PropertyRegistry::new(grid, double_keywords);
        doubles.extend_catalog(SupportedKeyword::new(
            PORE_VOLUME,
            f64::NAN,
            "ReservoirVolume",
        ));
        let ints = PropertyRegistry::new(grid, int_keywords);
        Self { doubles, ints }
    }

    /// The floating-point property registry.
    pub fn doubles(&self) -> &PropertyRegistry<'g, f64> {
        &self.doubles
    }

    /// Mutable access to the floating-point registry.
    pub fn doubles_mut(&mut self) -> &mut PropertyRegistry<'g, f64> {
        &mut self.doubles
    }

    /// The integer property registry.
    pub fn ints(&self) -> &PropertyRegistry<'g, i32> {
        &self.ints
    }

    /// Mutable access to the integer registry.
    pub fn ints_mut(&mut self) -> &mut PropertyRegistry<'g, i32> {
        &mut self.ints
    }

    /// Fill the pore-volume property from porosity and net-to-gross.
    ///
    /// Both inputs are read through the lazy path: if the deck has not
    /// mentioned them yet they are materialized with catalog defaults,
    /// and a later explicit mention will promote them with a warning.
    /// The per-cell result is `PORO * NTG`; scaling by bulk cell volume
    /// happens in the geometry processor downstream.
    ///
    /// Fails with [`PropertyError::UnsupportedKeyword`] if the supplied
    /// table does not cover porosity or net-to-gross.
    pub fn derive_pore_volume(&mut self) -> Result<(), PropertyError> {
        let porosity: Vec<f64> = self.doubles.get_or_default(POROSITY)?.values().to_vec();
        let net_to_gross: Vec<f64> = self.doubles.get_or_default(NET_TO_GROSS)?.values().to_vec();

        let pore_volume = self.doubles.get_or_create(PORE_VOLUME)?;
        for (cell, value) in pore_volume.values_mut().iter_mut().enumerate() {
            *value = porosity[cell] * net_to_gross[cell];
        }
        Ok(())
    }
}
