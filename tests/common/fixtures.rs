//! Temporary data directories for database tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const INTUOS4_6X9: &str = "\
[Device]
Vendor=Wacom
Product=Intuos4 6x9
Width=9
Height=6
Class=Intuos4
DeviceMatch=usb:056a:00b9
Styli=0x802;0x80a;0x804

[Features]
Stylus=true
Touch=false
Ring=true
Buttons=9
";

pub const GRAPHIRE_WIRELESS: &str = "\
[Device]
Vendor=Wacom
Product=Graphire Wireless 8x6
Width=8
Height=6
Class=Graphire
DeviceMatch=bluetooth:056a:0081
Styli=0x806;

[Features]
Stylus=true
Buttons=2
";

pub const CINTIQ_21UX: &str = "\
[Device]
Vendor=Wacom
Product=Cintiq 21UX
Width=17
Height=13
Class=Cintiq
DeviceMatch=usb:056a:00cc
Styli=0x802;0x80a

[Features]
Stylus=true
BuiltIn=true
VStrip=true
Buttons=18
";

pub const ISDV4_SERIAL: &str = "\
[Device]
Vendor=Wacom
Product=ISDV4 90
Class=Cintiq
DeviceMatch=serial:056a:0090

[Features]
Stylus=true
BuiltIn=true
";

pub const GENERIC: &str = "\
[Device]
Product=Generic Tablet
DeviceMatch=generic
Styli=0xfffff;0xffffe

[Features]
Stylus=true
";

pub const STYLUS_CATALOG: &str = "\
[0x802]
Name=Grip Pen
HasEraser=true
Buttons=2
Type=General

[0x80a]
Name=Grip Pen Eraser
IsEraser=true
Type=General

[0x804]
Name=Art Pen
HasEraser=true
Buttons=1
Type=Inking

[0x806]
Name=Graphire Pen
Type=Classic

[0xfffff]
Name=General Pen
HasEraser=true
Buttons=2
Type=General

[0xffffe]
Name=General Pen Eraser
IsEraser=true
Type=General
";

/// A temporary data directory removed on drop.
pub struct TestData {
    dir: TempDir,
}

impl TestData {
    /// An empty data directory.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// A directory with a handful of tablets, the generic descriptor and the
    /// stylus catalog.
    #[must_use]
    pub fn standard() -> Self {
        Self::empty()
            .with_tablet("intuos4-6x9.tablet", INTUOS4_6X9)
            .with_tablet("graphire-wireless-8x6.tablet", GRAPHIRE_WIRELESS)
            .with_tablet("cintiq-21ux.tablet", CINTIQ_21UX)
            .with_tablet("isdv4-90.tablet", ISDV4_SERIAL)
            .with_tablet("generic.tablet", GENERIC)
            .with_styli(STYLUS_CATALOG)
    }

    /// Like `standard` but without the generic descriptor.
    #[must_use]
    pub fn without_generic() -> Self {
        Self::empty()
            .with_tablet("intuos4-6x9.tablet", INTUOS4_6X9)
            .with_tablet("graphire-wireless-8x6.tablet", GRAPHIRE_WIRELESS)
            .with_styli(STYLUS_CATALOG)
    }

    #[must_use]
    pub fn with_tablet(self, name: &str, text: &str) -> Self {
        self.write(name, text);
        self
    }

    #[must_use]
    pub fn with_styli(self, text: &str) -> Self {
        self.write(wdb::config::STYLUS_DATA_FILE, text);
        self
    }

    pub fn write(&self, name: &str, text: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, text).expect("Failed to write fixture");
        path
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    #[must_use]
    pub fn path_str(&self) -> String {
        self.dir.path().display().to_string()
    }
}
