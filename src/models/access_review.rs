use crate::{AdditionalData, Parsable};

/// Access review settings, or one of their specializations.
#[derive(Parsable, Clone, Debug, PartialEq)]
pub enum AccessReviewSettingsKind {
    #[odata(fallback)]
    Settings(AccessReviewSettings),
    BusinessFlow(BusinessFlowSettings),
}

/// How an access review behaves once it is running.
#[derive(Parsable, Clone, Debug, PartialEq)]
pub struct AccessReviewSettings {
    /// Show recommendations to reviewers.
    access_recommendations_enabled: Option<bool>,
    /// Days of sign-in activity the recommendations look back over.
    activity_duration_in_days: Option<i32>,
    auto_apply_review_results_enabled: Option<bool>,
    auto_review_enabled: Option<bool>,
    auto_review_settings: Option<AutoReviewSettings>,
    justification_required_on_approval: Option<bool>,
    mail_notifications_enabled: Option<bool>,
    #[odata(odata_type)]
    odata_type: Option<String>,
    recurrence_settings: Option<AccessReviewRecurrenceSettings>,
    reminders_enabled: Option<bool>,
    #[odata(additional_data)]
    additional_data: AdditionalData,
}

/// Settings of a review created by a business flow.
#[derive(Parsable, Clone, Debug, PartialEq)]
#[odata(discriminator = "#microsoft.graph.businessFlowSettings")]
pub struct BusinessFlowSettings {
    #[odata(base)]
    base: AccessReviewSettings,
    duration_in_days: Option<i32>,
}

#[derive(Parsable, Clone, Debug, PartialEq)]
pub struct AutoReviewSettings {
    /// Outcome applied to reviewees nobody reviewed.
    not_reviewed_result: Option<String>,
    #[odata(odata_type)]
    odata_type: Option<String>,
    #[odata(additional_data)]
    additional_data: AdditionalData,
}

#[derive(Parsable, Clone, Debug, PartialEq)]
pub struct AccessReviewRecurrenceSettings {
    duration_in_days: Option<i32>,
    #[odata(odata_type)]
    odata_type: Option<String>,
    recurrence_count: Option<i32>,
    recurrence_end_type: Option<String>,
    recurrence_type: Option<String>,
    #[odata(additional_data)]
    additional_data: AdditionalData,
}
