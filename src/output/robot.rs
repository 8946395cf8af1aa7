//! Robot mode JSON output implementation.

use serde::Serialize;
use tracing::{debug, error, instrument, trace};

use crate::error::WdbError;

use super::{DatabaseSummary, DeviceSummary, Output, RobotFormat, StylusSummary, VersionInfo};

/// JSON output implementation for scripting.
///
/// Results go to stdout, errors to stderr as pretty JSON.
pub struct RobotOutput {
    format: RobotFormat,
}

impl RobotOutput {
    #[instrument]
    pub fn new(format: RobotFormat) -> Self {
        debug!(?format, "Creating RobotOutput");
        Self { format }
    }

    /// Renders any serializable value in the configured format.
    pub fn render<T: Serialize + ?Sized>(&self, data: &T) -> serde_json::Result<String> {
        match self.format {
            RobotFormat::Json => serde_json::to_string_pretty(data),
            RobotFormat::JsonCompact => serde_json::to_string(data),
        }
    }

    #[instrument(skip(self, data), fields(format = ?self.format))]
    fn output_json<T: Serialize + ?Sized>(&self, data: &T) {
        match self.render(data) {
            Ok(json) => {
                trace!(json_len = json.len(), "JSON serialized");
                println!("{json}");
            }
            Err(e) => error!(error = %e, "Failed to serialize output"),
        }
    }
}

/// The JSON object printed for an error.
pub fn error_json(error: &WdbError) -> serde_json::Value {
    serde_json::json!({
        "error": true,
        "message": error.to_string(),
        "suggestion": error.suggestion(),
        "recoverable": error.is_user_recoverable(),
    })
}

impl Output for RobotOutput {
    #[instrument(skip(self))]
    fn error(&self, error: &WdbError) {
        debug!(error = %error, "Robot: error");
        match serde_json::to_string_pretty(&error_json(error)) {
            Ok(json) => eprintln!("{json}"),
            Err(e) => error!(error = %e, "Failed to serialize error"),
        }
    }

    #[instrument(skip(self))]
    fn warning(&self, message: &str) {
        debug!(message, "Robot: warning");
        self.output_json(&serde_json::json!({
            "warning": true,
            "message": message
        }));
    }

    #[instrument(skip(self, devices), fields(count = devices.len()))]
    fn device_list(&self, db: &DatabaseSummary, devices: &[DeviceSummary], _long: bool) {
        debug!("Robot: device_list");
        self.output_json(&serde_json::json!({
            "database": db,
            "devices": devices,
        }));
    }

    #[instrument(skip(self, device))]
    fn device_info(&self, device: &DeviceSummary) {
        debug!(match_key = ?device.match_key, "Robot: device_info");
        self.output_json(device);
    }

    #[instrument(skip(self, styli), fields(count = styli.len()))]
    fn stylus_list(&self, styli: &[StylusSummary]) {
        debug!("Robot: stylus_list");
        self.output_json(styli);
    }

    #[instrument(skip(self, stylus), fields(id = %stylus.id))]
    fn stylus_info(&self, stylus: &StylusSummary) {
        debug!("Robot: stylus_info");
        self.output_json(stylus);
    }

    #[instrument(skip(self, info))]
    fn version_info(&self, info: &VersionInfo) {
        debug!("Robot: version_info");
        self.output_json(info);
    }
}
