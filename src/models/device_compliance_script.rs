use chrono::{DateTime, FixedOffset};

use crate::models::Entity;
use crate::{ByteArray, EnumValue, Parsable};

/// A custom PowerShell script that decides the compliance of a Windows
/// device.
#[derive(Parsable, Clone, Debug, PartialEq)]
#[odata(discriminator = "#microsoft.graph.deviceComplianceScript")]
pub struct DeviceComplianceScript {
    #[odata(base)]
    base: Entity,
    assignments: Option<Vec<DeviceHealthScriptAssignment>>,
    created_date_time: Option<DateTime<FixedOffset>>,
    description: Option<String>,
    /// The script body. Travels base64-encoded.
    detection_script_content: Option<ByteArray>,
    display_name: Option<String>,
    enforce_signature_check: Option<bool>,
    last_modified_date_time: Option<DateTime<FixedOffset>>,
    publisher: Option<String>,
    role_scope_tag_ids: Option<Vec<String>>,
    run_as_32_bit: Option<bool>,
    run_as_account: Option<RunAsAccountType>,
    run_summary: Option<DeviceComplianceScriptRunSummary>,
    version: Option<String>,
}

#[derive(Parsable, Clone, Debug, PartialEq)]
#[odata(discriminator = "#microsoft.graph.deviceHealthScriptAssignment")]
pub struct DeviceHealthScriptAssignment {
    #[odata(base)]
    base: Entity,
    run_remediation_script: Option<bool>,
}

/// Per-script counters over the devices that ran it.
#[derive(Parsable, Clone, Debug, PartialEq)]
#[odata(discriminator = "#microsoft.graph.deviceComplianceScriptRunSummary")]
pub struct DeviceComplianceScriptRunSummary {
    #[odata(base)]
    base: Entity,
    detection_script_error_device_count: Option<i32>,
    detection_script_pending_device_count: Option<i32>,
    issue_detected_device_count: Option<i32>,
    last_script_run_date_time: Option<DateTime<FixedOffset>>,
    no_issue_detected_device_count: Option<i32>,
}

#[derive(EnumValue, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunAsAccountType {
    System,
    User,
}
