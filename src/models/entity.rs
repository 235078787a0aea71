use crate::{AdditionalData, Parsable};

/// Root of the directory and device-management object hierarchy.
#[derive(Parsable, Clone, Debug, PartialEq)]
pub struct Entity {
    /// Unique identifier, assigned by the service.
    id: Option<String>,
    #[odata(odata_type)]
    odata_type: Option<String>,
    #[odata(additional_data)]
    additional_data: AdditionalData,
}
