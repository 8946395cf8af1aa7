//! Resolving tablets by match key, USB id, name and device node.

use std::path::Path;

use wdb::database::{Database, DeviceIdentity};
use wdb::device::fixed::FixedMetadata;
use wdb::device::{DeviceNode, PROP_BUS, PROP_INPUT_TABLET};
use wdb::error::WdbError;
use wdb::model::{BusType, GENERIC_MATCH};

use crate::common::fixtures::TestData;
use crate::common::init_test_logging;

fn standard_db() -> (TestData, Database) {
    let data = TestData::standard();
    let db = Database::load_from(data.path());
    (data, db)
}

fn metadata() -> FixedMetadata {
    FixedMetadata::new()
        .usb_tablet("/dev/input/event5", "056a", "00b9")
        .usb_tablet("/dev/input/event6", "056a", "0300")
        .bluetooth_tablet("/dev/input/event7", "5/56a/81/100")
        .serial_tablet("/dev/input/event3")
        .non_tablet("/dev/input/mouse0")
}

#[test]
fn match_key_lookup_needs_canonical_form() {
    let (_data, db) = standard_db();
    assert!(db.lookup_by_match_key("usb:0x56a:0xb9").is_some());
    assert!(db.lookup_by_match_key("usb:056a:00b9").is_none());
    assert!(db.lookup_by_match_key(GENERIC_MATCH).is_some());
}

#[test]
fn usb_id_lookup_returns_owned_copy() {
    let (_data, db) = standard_db();

    let first = db.resolve_by_usb_id(0x56a, 0xb9).unwrap();
    assert_eq!(first.product(), Some("Intuos4 6x9"));
    assert_eq!(first.match_key(), Some("usb:0x56a:0xb9"));
    drop(first);

    let second = db.resolve_by_usb_id(0x56a, 0xb9).unwrap();
    assert_eq!(second.product(), Some("Intuos4 6x9"));
    assert_eq!(&second, db.lookup_by_match_key("usb:0x56a:0xb9").unwrap());
}

#[test]
fn usb_id_lookup_does_not_find_bluetooth_tablets() {
    let (_data, db) = standard_db();
    let result = db.resolve_by_usb_id(0x56a, 0x81);
    assert!(matches!(result, Err(WdbError::UnknownModel { message: None })));
}

#[test]
fn name_lookup_is_exact() {
    let (_data, db) = standard_db();
    let found = db.resolve_by_name("Graphire Wireless 8x6").unwrap();
    assert_eq!(found.bus(), BusType::Bluetooth);

    assert!(db.resolve_by_name("Graphire Wireless").is_err());
    assert!(db.resolve_by_name("graphire wireless 8x6").is_err());
}

#[test]
fn path_lookup_usb() {
    init_test_logging();
    let (_data, db) = standard_db();
    let metadata = metadata();

    let found = db
        .resolve_by_path(&metadata, Path::new("/dev/input/event5"), false)
        .unwrap();
    assert_eq!(found.product(), Some("Intuos4 6x9"));
    assert_eq!(metadata.query_count(), 1);
}

#[test]
fn path_lookup_bluetooth_uses_parent_product() {
    let (_data, db) = standard_db();
    let found = db
        .resolve_by_path(&metadata(), Path::new("/dev/input/event7"), false)
        .unwrap();
    assert_eq!(found.product(), Some("Graphire Wireless 8x6"));
}

#[test]
fn path_lookup_falls_back_to_generic() {
    let (_data, db) = standard_db();
    let metadata = metadata();
    let unknown = Path::new("/dev/input/event6");

    assert!(matches!(
        db.resolve_by_path(&metadata, unknown, false),
        Err(WdbError::UnknownModel { message: None })
    ));

    let generic = db.resolve_by_path(&metadata, unknown, true).unwrap();
    assert_eq!(generic.match_key(), Some(GENERIC_MATCH));
    assert_eq!(generic.product(), Some("Generic Tablet"));
}

#[test]
fn fallback_needs_a_generic_descriptor() {
    let data = TestData::without_generic();
    let db = Database::load_from(data.path());
    let result = db.resolve_by_path(&metadata(), Path::new("/dev/input/event6"), true);
    assert!(matches!(result, Err(WdbError::UnknownModel { .. })));
}

#[test]
fn path_lookup_errors() {
    let (_data, db) = standard_db();
    let metadata = metadata();

    let not_found = db.resolve_by_path(&metadata, Path::new("/dev/input/event42"), true);
    assert!(matches!(not_found, Err(WdbError::InvalidPath { .. })));

    let mouse = db.resolve_by_path(&metadata, Path::new("/dev/input/mouse0"), true);
    assert!(matches!(mouse, Err(WdbError::InvalidPath { .. })));

    // Fallback does not apply to buses that cannot be identified.
    let serial = db.resolve_by_path(&metadata, Path::new("/dev/input/event3"), true);
    assert!(matches!(serial, Err(WdbError::UnknownModel { message: Some(_) })));
}

#[test]
fn identity_from_metadata() {
    let metadata = FixedMetadata::new()
        .bluetooth_tablet("/dev/input/event7", "5/56a/81/100")
        .with_node(
            "/dev/input/event8",
            DeviceNode::new()
                .with_property(PROP_INPUT_TABLET, "true")
                .with_property(PROP_BUS, "usb"),
        );

    let identity =
        DeviceIdentity::from_metadata(&metadata, Path::new("/dev/input/event7")).unwrap();
    assert_eq!(
        identity,
        DeviceIdentity {
            bus: BusType::Bluetooth,
            vendor_id: 0x56a,
            product_id: 0x81,
        }
    );

    // USB device without id properties.
    let missing = DeviceIdentity::from_metadata(&metadata, Path::new("/dev/input/event8"));
    assert!(matches!(missing, Err(WdbError::UnknownModel { .. })));
}

#[test]
fn metadata_from_json_snapshot() {
    let (data, db) = standard_db();
    let snapshot = data.write(
        "props.json",
        r#"{
            "/dev/input/event7": {
                "properties": {"ID_INPUT_TABLET": "1"},
                "parent": {"properties": {"PRODUCT": "5/56a/81/100"}}
            }
        }"#,
    );

    let metadata = FixedMetadata::load(&snapshot).unwrap();
    let found = db
        .resolve_by_path(&metadata, Path::new("/dev/input/event7"), false)
        .unwrap();
    assert_eq!(found.match_key(), Some("bluetooth:0x56a:0x81"));
}
