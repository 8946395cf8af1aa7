//! Settings resolution feeding database loading.

use std::path::Path;

use env_lock::lock_env;
use wdb::config::{DATA_DIR_ENV, Settings, validate_data_dir};
use wdb::database::Database;
use wdb::device::fixed::FixedMetadata;
use wdb::error::WdbError;

use crate::common::fixtures::{ISDV4_SERIAL, STYLUS_CATALOG, TestData};

#[test]
fn config_file_drives_loading() {
    let data = TestData::standard();
    std::fs::create_dir(data.path().join("tablets")).unwrap();
    std::fs::write(data.path().join("tablets/isdv4-90.tablet"), ISDV4_SERIAL).unwrap();
    std::fs::write(data.path().join("tablets/pens.stylus"), STYLUS_CATALOG).unwrap();
    let config = data.write(
        "config.toml",
        "data_dir = \"tablets\"\n\
         stylus_file = \"pens.stylus\"\n\
         fallback = true\n\
         \n\
         [compat]\n\
         serial_keys_as_bluetooth = false\n",
    );

    let _guard = lock_env([(DATA_DIR_ENV, None::<&str>)]);
    let settings = Settings::resolve(None, Some(&config)).unwrap();
    assert!(settings.fallback);
    assert_eq!(settings.config_path.as_deref(), Some(config.as_path()));

    let db = Database::load(&settings.load);
    assert_eq!(db.device_count(), 1);
    assert_eq!(db.stylus_count(), 6);
    assert!(db.lookup_by_match_key("serial:0x56a:0x90").is_some());
}

#[test]
fn env_var_names_the_data_dir() {
    let data = TestData::standard();
    let dir = data.path_str();
    let _guard = lock_env([(DATA_DIR_ENV, Some(dir.as_str()))]);

    let settings = Settings::resolve(None, Some(&data.write("empty.toml", ""))).unwrap();
    assert_eq!(settings.load.data_dir, data.path());
    assert!(!settings.fallback);

    let db = Database::load(&settings.load);
    let metadata = FixedMetadata::new().usb_tablet("/dev/input/event9", "56a", "ffff");
    let result = db.resolve_by_path(&metadata, Path::new("/dev/input/event9"), settings.fallback);
    assert!(matches!(result, Err(WdbError::UnknownModel { .. })));
}

#[test]
fn bad_config_is_reported() {
    let data = TestData::empty();
    let config = data.write("config.toml", "data_dir = [1, 2]\n");
    let result = Settings::resolve(None, Some(&config));
    assert!(matches!(result, Err(WdbError::ConfigParse(_))));
}

#[test]
fn data_dir_validation() {
    let data = TestData::standard();
    assert!(validate_data_dir(data.path()).is_ok());

    let missing = validate_data_dir(&data.path().join("nope"));
    assert!(matches!(missing, Err(WdbError::InvalidDb { .. })));

    let file = data.write("plain-file", "");
    assert!(matches!(
        validate_data_dir(&file),
        Err(WdbError::InvalidDb { .. })
    ));
}
