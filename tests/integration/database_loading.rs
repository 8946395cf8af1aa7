//! Loading data directories into a database.

use wdb::config::{Compat, LoadOptions};
use wdb::database::Database;
use wdb::model::{BusType, DeviceClass, Features, GENERIC_MATCH, StylusType};

use crate::common::fixtures::{INTUOS4_6X9, STYLUS_CATALOG, TestData};
use crate::common::init_test_logging;

#[test]
fn standard_directory_loads_every_table() {
    init_test_logging();
    let data = TestData::standard();
    let db = Database::load_from(data.path());

    assert_eq!(db.device_count(), 5);
    assert_eq!(db.stylus_count(), 6);
    assert!(!db.is_empty());
    assert_eq!(db.data_dir(), data.path());
}

#[test]
fn devices_iterate_in_match_key_order() {
    let data = TestData::standard();
    let db = Database::load_from(data.path());

    let keys: Vec<&str> = db.devices().filter_map(|d| d.match_key()).collect();
    assert_eq!(
        keys,
        vec![
            "bluetooth:0x56a:0x81",
            "bluetooth:0x56a:0x90",
            GENERIC_MATCH,
            "usb:0x56a:0xb9",
            "usb:0x56a:0xcc",
        ]
    );
}

#[test]
fn descriptor_fields_are_parsed() {
    let data = TestData::standard();
    let db = Database::load_from(data.path());

    let cintiq = db.lookup_by_match_key("usb:0x56a:0xcc").unwrap();
    assert_eq!(cintiq.product(), Some("Cintiq 21UX"));
    assert_eq!(cintiq.vendor(), Some("Wacom"));
    assert_eq!(cintiq.class(), DeviceClass::Cintiq);
    assert_eq!((cintiq.width(), cintiq.height()), (17, 13));
    assert_eq!(cintiq.num_buttons(), 18);
    assert_eq!(
        cintiq.features(),
        Features::STYLUS | Features::BUILTIN | Features::VSTRIP
    );
    assert!(cintiq.is_builtin());
    assert!(!cintiq.is_reversible());
    assert_eq!(cintiq.supported_styli(), &[0x802, 0x80a]);
}

#[test]
fn serial_descriptors_are_keyed_as_bluetooth() {
    let data = TestData::standard();
    let db = Database::load_from(data.path());

    let isdv4 = db.lookup_by_match_key("bluetooth:0x56a:0x90").unwrap();
    assert_eq!(isdv4.bus(), BusType::Serial);
    assert!(db.lookup_by_match_key("serial:0x56a:0x90").is_none());
}

#[test]
fn serial_keys_can_keep_their_bus() {
    let data = TestData::standard();
    let compat = Compat {
        serial_keys_as_bluetooth: false,
        ..Compat::default()
    };
    let db = Database::load(&LoadOptions::new(data.path()).with_compat(compat));

    assert!(db.lookup_by_match_key("serial:0x56a:0x90").is_some());
    assert!(db.lookup_by_match_key("bluetooth:0x56a:0x90").is_none());
}

#[test]
fn styli_are_parsed_with_eraser_rules() {
    let data = TestData::standard();
    let db = Database::load_from(data.path());

    let pen = db.stylus(0x802).unwrap();
    assert_eq!(pen.name(), Some("Grip Pen"));
    assert!(pen.has_eraser());
    assert_eq!(pen.num_buttons(), 2);

    let eraser = db.stylus(0x80a).unwrap();
    assert!(eraser.is_eraser());
    assert!(!eraser.has_eraser());
    assert_eq!(eraser.num_buttons(), 0);

    let art = db.stylus(0x804).unwrap();
    assert_eq!(art.stylus_type(), StylusType::Inking);

    // No Buttons key: the accessor falls back to two buttons.
    let graphire = db.stylus(0x806).unwrap();
    assert_eq!(graphire.declared_buttons(), None);
    assert_eq!(graphire.num_buttons(), 2);
}

#[test]
fn styli_iterate_in_id_order() {
    let data = TestData::standard();
    let db = Database::load_from(data.path());
    let ids: Vec<u32> = db.styli().map(|s| s.id()).collect();
    assert_eq!(ids, vec![0x802, 0x804, 0x806, 0x80a, 0xffffe, 0xfffff]);
}

#[test]
fn unreadable_files_do_not_abort_loading() {
    let data = TestData::empty()
        .with_tablet("intuos4-6x9.tablet", INTUOS4_6X9)
        .with_tablet("broken.tablet", "Product=No group header\n")
        .with_tablet("binary.tablet", "[Device\n")
        .with_tablet(".hidden.tablet", INTUOS4_6X9.replace("00b9", "0001").as_str())
        .with_tablet("notes.txt", "[Device]\nDeviceMatch=usb:056a:0002\n");

    let db = Database::load_from(data.path());
    assert_eq!(db.device_count(), 1);
    assert!(db.lookup_by_match_key("usb:0x56a:0x1").is_none());
    assert!(db.lookup_by_match_key("usb:0x56a:0x2").is_none());
}

#[test]
fn later_file_wins_on_duplicate_key() {
    let data = TestData::empty()
        .with_tablet("a.tablet", INTUOS4_6X9)
        .with_tablet(
            "b.tablet",
            &INTUOS4_6X9.replace("Intuos4 6x9", "Intuos4 6x9 (rev 2)"),
        );

    for warn in [false, true] {
        let compat = Compat {
            warn_duplicate_devices: warn,
            ..Compat::default()
        };
        let db = Database::load(&LoadOptions::new(data.path()).with_compat(compat));
        assert_eq!(db.device_count(), 1);
        assert_eq!(
            db.lookup_by_match_key("usb:0x56a:0xb9").unwrap().product(),
            Some("Intuos4 6x9 (rev 2)")
        );
    }
}

#[test]
fn missing_stylus_catalog_leaves_styli_empty() {
    let data = TestData::empty().with_tablet("intuos4-6x9.tablet", INTUOS4_6X9);
    let db = Database::load_from(data.path());

    assert_eq!(db.device_count(), 1);
    assert_eq!(db.stylus_count(), 0);
    assert!(db.stylus(0x802).is_none());
}

#[test]
fn stylus_catalog_without_tablets() {
    let data = TestData::empty().with_styli(STYLUS_CATALOG);
    let db = Database::load_from(data.path());

    assert_eq!(db.device_count(), 0);
    assert_eq!(db.stylus_count(), 6);
}

#[test]
fn missing_directory_is_an_empty_database() {
    let data = TestData::empty();
    let db = Database::load_from(data.path().join("does-not-exist"));
    assert!(db.is_empty());
}
