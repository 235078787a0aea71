use crate::{AdditionalData, EnumValue, Flags, Parsable};

/// A conditional access policy evaluated during a sign-in.
#[derive(Parsable, Clone, Debug, PartialEq)]
pub struct AppliedConditionalAccessPolicy {
    authentication_strength: Option<AuthenticationStrength>,
    conditions_not_satisfied: Option<Flags<ConditionalAccessConditions>>,
    conditions_satisfied: Option<Flags<ConditionalAccessConditions>>,
    display_name: Option<String>,
    enforced_grant_controls: Option<Vec<String>>,
    enforced_session_controls: Option<Vec<String>>,
    exclude_rules_satisfied: Option<Vec<ConditionalAccessRuleSatisfied>>,
    id: Option<String>,
    include_rules_satisfied: Option<Vec<ConditionalAccessRuleSatisfied>>,
    #[odata(odata_type)]
    odata_type: Option<String>,
    result: Option<AppliedConditionalAccessPolicyResult>,
    session_controls_not_satisfied: Option<Vec<String>>,
    #[odata(additional_data)]
    additional_data: AdditionalData,
}

#[derive(Parsable, Clone, Debug, PartialEq)]
pub struct AuthenticationStrength {
    authentication_strength_id: Option<String>,
    authentication_strength_result: Option<AuthenticationStrengthResult>,
    display_name: Option<String>,
    #[odata(odata_type)]
    odata_type: Option<String>,
    #[odata(additional_data)]
    additional_data: AdditionalData,
}

#[derive(Parsable, Clone, Debug, PartialEq)]
pub struct ConditionalAccessRuleSatisfied {
    conditional_access_condition: Option<ConditionalAccessConditions>,
    #[odata(odata_type)]
    odata_type: Option<String>,
    rule_satisfied: Option<ConditionalAccessRule>,
    #[odata(additional_data)]
    additional_data: AdditionalData,
}

/// Flag enum: a policy lists every condition it did or did not meet.
#[derive(EnumValue, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConditionalAccessConditions {
    None,
    Application,
    Users,
    DevicePlatform,
    Location,
    ClientType,
    SignInRisk,
    UserRisk,
    Time,
    DeviceState,
    Client,
    #[odata(rename = "ipAddressSeenByAzureAD")]
    IpAddressSeenByAzureAd,
    IpAddressSeenByResourceProvider,
    UnknownFutureValue,
    ServicePrincipals,
    ServicePrincipalRisk,
}

#[derive(EnumValue, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConditionalAccessRule {
    AllApps,
    FirstPartyApps,
    Office365,
    AppId,
    Acr,
    AppFilter,
    AllUsers,
    Guest,
    GroupId,
    RoleId,
    UserId,
    AllDevicePlatforms,
    DevicePlatform,
    AllLocations,
    InsideCorpnet,
    AllTrustedLocations,
    LocationId,
    AllDevices,
    DeviceFilter,
    DeviceState,
    UnknownFutureValue,
}

#[derive(EnumValue, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppliedConditionalAccessPolicyResult {
    Success,
    Failure,
    NotApplied,
    NotEnabled,
    Unknown,
    UnknownFutureValue,
    ReportOnlySuccess,
    ReportOnlyFailure,
    ReportOnlyNotApplied,
    ReportOnlyInterrupted,
}

#[derive(EnumValue, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthenticationStrengthResult {
    NotSet,
    SkippedForProofUp,
    Satisfied,
    SingleChallengeRequired,
    MultipleChallengesRequired,
    SingleChallengeRequiredPerPolicy,
    CannotSatisfyDueToCombinationConfiguration,
    CannotSatisfy,
    UnknownFutureValue,
}
