use std::path::Path;

use super::*;

fn brand(name: &str, relationship: Relationship) -> BrandConfig {
    BrandConfig {
        name: name.to_string(),
        relationship,
        notes: None,
    }
}

#[test]
fn identifier_is_trimmed_and_case_folded() {
    assert_eq!(
        brand("  Atomberg ", Relationship::Primary).identifier(),
        "atomberg"
    );
}

#[test]
fn identifier_keeps_inner_spaces() {
    assert_eq!(
        brand("Usha International", Relationship::Competitor).identifier(),
        "usha international"
    );
}

#[test]
fn validate_rejects_empty_file() {
    let brands_file = BrandsFile { brands: vec![] };
    let err = validate_brands(&brands_file).unwrap_err();
    assert!(err.to_string().contains("at least one brand"));
}

#[test]
fn validate_rejects_empty_name() {
    let brands_file = BrandsFile {
        brands: vec![brand("  ", Relationship::Competitor)],
    };
    let err = validate_brands(&brands_file).unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn validate_rejects_duplicate_name() {
    let brands_file = BrandsFile {
        brands: vec![
            brand("Havells", Relationship::Competitor),
            brand("havells", Relationship::Competitor),
        ],
    };
    let err = validate_brands(&brands_file).unwrap_err();
    assert!(err.to_string().contains("duplicate brand name"));
}

#[test]
fn validate_rejects_two_primaries() {
    let brands_file = BrandsFile {
        brands: vec![
            brand("Atomberg", Relationship::Primary),
            brand("Havells", Relationship::Primary),
        ],
    };
    let err = validate_brands(&brands_file).unwrap_err();
    assert!(err.to_string().contains("only one primary"));
}

#[test]
fn validate_accepts_file_without_primary() {
    let brands_file = BrandsFile {
        brands: vec![
            brand("Orient", Relationship::Competitor),
            brand("Crompton", Relationship::Competitor),
        ],
    };
    assert!(validate_brands(&brands_file).is_ok());
    assert!(brands_file.primary().is_none());
}

#[test]
fn tracked_and_primary_use_identifiers() {
    let brands_file = BrandsFile {
        brands: vec![
            brand("Orient", Relationship::Competitor),
            brand("Atomberg", Relationship::Primary),
        ],
    };
    assert_eq!(brands_file.tracked(), vec!["orient", "atomberg"]);
    assert_eq!(brands_file.primary().as_deref(), Some("atomberg"));
}

#[test]
fn relationship_defaults_to_competitor() {
    let yaml = r"
brands:
  - name: Polycab
  - name: Atomberg
    relationship: primary
";
    let file: BrandsFile = serde_yaml::from_str(yaml).expect("parse");
    assert_eq!(file.brands[0].relationship, Relationship::Competitor);
    assert_eq!(file.brands[1].relationship, Relationship::Primary);
}

#[test]
fn relationship_display() {
    assert_eq!(Relationship::Primary.to_string(), "primary");
    assert_eq!(Relationship::Competitor.to_string(), "competitor");
}

#[test]
fn load_brands_reports_missing_file() {
    let err = load_brands(Path::new("/nonexistent/brands.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::BrandsFileIo { .. }));
}

#[test]
fn load_brands_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("brands.yaml");
    assert!(
        path.exists(),
        "brands.yaml missing at {path:?}; required for this test"
    );
    let brands_file = load_brands(&path).expect("failed to load brands.yaml");
    assert!(brands_file.tracked().contains(&"havells".to_string()));
    assert_eq!(brands_file.primary().as_deref(), Some("atomberg"));
}
