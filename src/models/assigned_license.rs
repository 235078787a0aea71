use uuid::Uuid;

use crate::{AdditionalData, Parsable};

/// A license assigned to a user, minus the service plans switched off.
#[derive(Parsable, Clone, Debug, PartialEq)]
pub struct AssignedLicense {
    disabled_plans: Option<Vec<Uuid>>,
    #[odata(odata_type)]
    odata_type: Option<String>,
    sku_id: Option<Uuid>,
    #[odata(additional_data)]
    additional_data: AdditionalData,
}
