use crate::{AdditionalData, Parsable};

/// Local action taken on an Android device that falls out of compliance.
#[derive(Parsable, Clone, Debug, PartialEq)]
pub enum AndroidDeviceComplianceLocalAction {
    #[odata(fallback)]
    Base(AndroidDeviceComplianceLocalActionBase),
    LockDevice(AndroidDeviceComplianceLocalActionLockDevice),
    LockDeviceWithPasscode(AndroidDeviceComplianceLocalActionLockDeviceWithPasscode),
}

#[derive(Parsable, Clone, Debug, PartialEq)]
pub struct AndroidDeviceComplianceLocalActionBase {
    /// Minutes between the device turning non-compliant and the action.
    grace_period_in_minutes: Option<i32>,
    #[odata(odata_type)]
    odata_type: Option<String>,
    #[odata(additional_data)]
    additional_data: AdditionalData,
}

#[derive(Parsable, Clone, Debug, PartialEq)]
#[odata(discriminator = "#microsoft.graph.androidDeviceComplianceLocalActionLockDevice")]
pub struct AndroidDeviceComplianceLocalActionLockDevice {
    #[odata(base)]
    base: AndroidDeviceComplianceLocalActionBase,
}

#[derive(Parsable, Clone, Debug, PartialEq)]
#[odata(
    discriminator = "#microsoft.graph.androidDeviceComplianceLocalActionLockDeviceWithPasscode"
)]
pub struct AndroidDeviceComplianceLocalActionLockDeviceWithPasscode {
    #[odata(base)]
    base: AndroidDeviceComplianceLocalActionBase,
    /// Generated by the service; never sent back.
    #[odata(read_only)]
    passcode: Option<String>,
    passcode_sign_in_failure_count_before_wipe: Option<i32>,
}
