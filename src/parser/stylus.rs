//! Stylus catalog parsing.
//!
//! The catalog has one group per stylus, named by the stylus id in hex:
//!
//! ```text
//! [0x802]
//! Name=Grip Pen
//! HasEraser=true
//! Buttons=2
//! Type=General
//!
//! [0x80a]
//! Name=Grip Pen Eraser
//! IsEraser=true
//! Type=General
//! ```

use std::path::Path;

use tracing::{debug, trace, warn};

use crate::keyfile::{KeyFile, KeyfileError};
use crate::model::scan::strtol;
use crate::model::{Stylus, StylusType};

/// Parses every stylus in the catalog at `path`, in group order.
///
/// Groups whose name is not a nonzero hex id are skipped with a warning.
pub fn parse_stylus_catalog(path: &Path) -> Result<Vec<Stylus>, KeyfileError> {
    let keyfile = KeyFile::load(path)?;
    Ok(styli_from_keyfile(&keyfile))
}

/// Builds the styli of an already parsed catalog.
pub fn styli_from_keyfile(keyfile: &KeyFile) -> Vec<Stylus> {
    keyfile
        .groups()
        .filter_map(|group| stylus_from_group(keyfile, group))
        .collect()
}

/// Builds the stylus described by `group`, or `None` if its id is invalid.
pub fn stylus_from_group(keyfile: &KeyFile, group: &str) -> Option<Stylus> {
    let id = match u32::try_from(strtol(group, 16)) {
        Ok(id) if id != 0 => id,
        _ => {
            warn!("Failed to parse stylus ID '{group}'");
            return None;
        }
    };

    let is_eraser = keyfile.get_boolean(group, "IsEraser").unwrap_or(false);
    let (has_eraser, num_buttons) = if is_eraser {
        (false, Some(0))
    } else {
        let has_eraser = keyfile.get_boolean(group, "HasEraser").unwrap_or(false);
        let num_buttons = match keyfile.get_integer(group, "Buttons") {
            Ok(n) if n >= 0 => u32::try_from(n).ok(),
            Ok(-1) | Err(_) => None,
            Ok(n) => {
                debug!(id, buttons = n, "Negative button count, treating as undefined");
                None
            }
        };
        (has_eraser, num_buttons)
    };

    let stylus_type = keyfile.get_string(group, "Type").ok();

    let stylus = Stylus {
        id,
        name: keyfile.get_string(group, "Name").ok(),
        is_eraser,
        has_eraser,
        num_buttons,
        stylus_type: StylusType::from_type_str(stylus_type.as_deref()),
    };
    trace!(id, name = ?stylus.name, "Parsed stylus");
    Some(stylus)
}
