//! Integration tests for tessera-types.

use tessera_types::{MaterialId, TesseraError};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn material_id_index() {
    let id = MaterialId(7);
    assert_eq!(id.index(), 7);
}

#[test]
fn material_id_defaults_to_zero() {
    assert_eq!(MaterialId::default(), MaterialId(0));
    assert_eq!(MaterialId::from(3u16), MaterialId(3));
}

#[test]
fn ids_are_serializable() {
    let id = MaterialId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: MaterialId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = TesseraError::InvalidMesh("index 42 out of range".into());
    assert!(err.to_string().contains("index 42"));
}

#[test]
fn index_overflow_display() {
    let err = TesseraError::IndexOverflow {
        vertex_count: 5_000_000_000,
    };
    let msg = err.to_string();
    assert!(msg.contains("5000000000"));
    assert!(msg.contains("u32"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
    let err: TesseraError = io.into();
    assert!(matches!(err, TesseraError::Io(_)));
}
