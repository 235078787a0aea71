//! A hand-picked slice of the Microsoft Graph beta schema.
//!
//! The catalog covers every field kind the mechanism supports: scalars,
//! dates and times, byte arrays, UUIDs, closed and flag enums, nested
//! objects, collections of each, and polymorphic families with single and
//! multi-level inheritance.
//!
//! Polymorphic families are enums whose variants wrap the concrete types;
//! decoding one dispatches on `@odata.type`. Subtypes embed their base type
//! and dereference to it, so inherited accessors are available directly:
//!
//! ```rust
//! use odata_dto::models::{AddFooter, Alignment, LabelAction};
//! use odata_dto::{json, Parsable};
//!
//! let mut footer = AddFooter::new();
//! footer.set_text(Some("Confidential".to_owned()));
//! footer.set_alignment(Some(Alignment::Center));
//! assert_eq!(footer.odata_type(), Some(AddFooter::ODATA_TYPE));
//!
//! let action = LabelAction::from(footer);
//! let decoded: LabelAction = json::from_str(&json::to_string(&action).unwrap()).unwrap();
//! assert_eq!(decoded, action);
//! ```

mod access_review;
mod android_compliance;
mod assigned_license;
mod conditional_access;
mod device_compliance_script;
mod entity;
mod label_action;
mod recurrence;
mod sensitivity_label;
mod title_area;

pub use self::access_review::{
    AccessReviewRecurrenceSettings, AccessReviewSettings, AccessReviewSettingsKind,
    AutoReviewSettings, BusinessFlowSettings,
};
pub use self::android_compliance::{
    AndroidDeviceComplianceLocalAction, AndroidDeviceComplianceLocalActionBase,
    AndroidDeviceComplianceLocalActionLockDevice,
    AndroidDeviceComplianceLocalActionLockDeviceWithPasscode,
};
pub use self::assigned_license::AssignedLicense;
pub use self::conditional_access::{
    AppliedConditionalAccessPolicy, AppliedConditionalAccessPolicyResult, AuthenticationStrength,
    AuthenticationStrengthResult, ConditionalAccessConditions, ConditionalAccessRule,
    ConditionalAccessRuleSatisfied,
};
pub use self::device_compliance_script::{
    DeviceComplianceScript, DeviceComplianceScriptRunSummary, DeviceHealthScriptAssignment,
    RunAsAccountType,
};
pub use self::entity::Entity;
pub use self::label_action::{
    AddFooter, AddHeader, AddWatermark, Alignment, EncryptContent, EncryptWith, LabelAction,
    LabelActionBase, MarkContent, PageOrientation,
};
pub use self::recurrence::{RecurrenceRange, RecurrenceRangeType, TimeRange};
pub use self::sensitivity_label::{ApplicationMode, SensitivityLabel, SensitivityLabelTarget};
pub use self::title_area::{
    MetaDataKeyStringPair, MetaDataKeyValuePair, ServerProcessedContent, TitleArea,
    TitleAreaLayoutType, TitleAreaTextAlignmentType,
};
