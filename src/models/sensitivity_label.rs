use crate::models::{Entity, LabelAction};
use crate::{EnumValue, Flags, Parsable};

/// An information-protection label, possibly with nested sublabels.
#[derive(Parsable, Clone, Debug, PartialEq)]
#[odata(discriminator = "#microsoft.graph.sensitivityLabel")]
pub struct SensitivityLabel {
    #[odata(base)]
    base: Entity,
    applicable_to: Option<Flags<SensitivityLabelTarget>>,
    application_mode: Option<ApplicationMode>,
    description: Option<String>,
    display_name: Option<String>,
    is_default: Option<bool>,
    is_endpoint_protection_enabled: Option<bool>,
    /// Decoded member by member through the `LabelAction` family.
    label_actions: Option<Vec<LabelAction>>,
    name: Option<String>,
    priority: Option<i32>,
    sublabels: Option<Vec<SensitivityLabel>>,
    tool_tip: Option<String>,
}

/// Flag enum of the workloads a label can be applied in.
#[derive(EnumValue, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SensitivityLabelTarget {
    Email,
    Site,
    UnifiedGroup,
    Teamwork,
    UnknownFutureValue,
}

#[derive(EnumValue, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApplicationMode {
    Manual,
    Automatic,
    Recommended,
}
