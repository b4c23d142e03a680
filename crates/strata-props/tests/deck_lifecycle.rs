//! Integration test: the keyword lifecycle as a deck processor drives it.
//!
//! Walks a small case end to end: lazy materialization during default
//! computation, the explicit deck mention arriving later, promotion with
//! its warning, and a region-scoped copy between two keywords.

use strata_core::{Severity, SupportedKeyword};
use strata_grid::{GridDims, Region};
use strata_props::{CaseProperties, Origin, PropertyError, PropertyRegistry};

fn keyword_table() -> Vec<SupportedKeyword<f64>> {
    vec![
        SupportedKeyword::new("PORO", 0.2, "1"),
        SupportedKeyword::new("PERMX", 100.0, "Permeability"),
        SupportedKeyword::new("PERMY", 100.0, "Permeability"),
        SupportedKeyword::new("NTG", 1.0, "1"),
    ]
}

#[test]
fn defaulted_then_mentioned_keyword_is_promoted_with_a_warning() {
    let dims = GridDims::new(2, 1, 1).unwrap();
    let mut registry = PropertyRegistry::new(&dims, keyword_table());

    // Another keyword's default computation touches PORO first.
    let poro = registry.get_or_default("PORO").unwrap();
    assert_eq!(poro.values(), &[0.2, 0.2]);
    assert!(!registry.has("PORO"));
    assert_eq!(registry.origin("PORO"), Some(Origin::AutoGenerated));

    // The deck reader then encounters the PORO record.
    assert_eq!(registry.add("PORO"), Ok(true));
    assert!(registry.has("PORO"));
    assert_eq!(registry.get_initialized("PORO").unwrap().values(), &[0.2, 0.2]);

    let warnings: Vec<_> = registry
        .messages_mut()
        .drain()
        .filter(|m| m.severity == Severity::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].text.contains("PORO"));
    assert!(registry.messages().is_empty());
}

#[test]
fn region_copy_between_keywords() {
    let dims = GridDims::new(2, 2, 1).unwrap();
    let mut registry = PropertyRegistry::new(&dims, keyword_table());

    registry
        .get_or_create("PERMX")
        .unwrap()
        .values_mut()
        .copy_from_slice(&[1.0, 2.0, 3.0, 4.0]);
    registry.get_or_create("PERMY").unwrap().fill(50.0);

    let bottom_row = Region::new(dims, [0, 0, 0], [1, 0, 0]).unwrap();
    registry.copy_region("PERMX", "PERMY", &bottom_row).unwrap();

    assert_eq!(
        registry.get_initialized("PERMY").unwrap().values(),
        &[1.0, 2.0, 50.0, 50.0]
    );
    // Source untouched.
    assert_eq!(
        registry.get_initialized("PERMX").unwrap().values(),
        &[1.0, 2.0, 3.0, 4.0]
    );
}

#[test]
fn strict_reads_distinguish_absent_from_unknown() {
    let dims = GridDims::new(2, 1, 1).unwrap();
    let registry: PropertyRegistry<'_, f64> = PropertyRegistry::new(&dims, keyword_table());

    assert!(matches!(
        registry.get_initialized("NTG"),
        Err(PropertyError::NotInitialized { .. })
    ));
    assert!(matches!(
        registry.get_initialized("SWAT"),
        Err(PropertyError::UnsupportedKeyword { .. })
    ));
}

#[test]
fn case_assembly_entangles_pore_volume_with_its_inputs() {
    let dims = GridDims::new(3, 1, 1).unwrap();
    let mut case = CaseProperties::new(
        &dims,
        keyword_table(),
        vec![SupportedKeyword::new("ACTNUM", 1, "1")],
    );

    // Pore volume is derived before the deck mentions its inputs.
    case.derive_pore_volume().unwrap();
    assert_eq!(
        case.doubles().get_initialized("PORV").unwrap().values(),
        &[0.2, 0.2, 0.2]
    );

    // The deck later mentions NTG; the ordering warning fires and the
    // auto-generated values survive promotion.
    assert_eq!(case.doubles_mut().add("NTG"), Ok(true));
    assert_eq!(case.doubles().messages().len(), 1);
    assert_eq!(
        case.doubles().get_initialized("NTG").unwrap().values(),
        &[1.0, 1.0, 1.0]
    );

    // Creation order reflects the derivation sequence.
    let names: Vec<&str> = case.doubles().iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["PORO", "NTG", "PORV"]);
}
