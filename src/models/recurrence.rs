use chrono::{NaiveDate, NaiveTime};

use crate::{AdditionalData, EnumValue, Parsable};

/// The span of dates a recurring event repeats over.
#[derive(Parsable, Clone, Debug, PartialEq)]
pub struct RecurrenceRange {
    end_date: Option<NaiveDate>,
    number_of_occurrences: Option<i32>,
    #[odata(odata_type)]
    odata_type: Option<String>,
    recurrence_time_zone: Option<String>,
    start_date: Option<NaiveDate>,
    #[odata(rename = "type")]
    range_type: Option<RecurrenceRangeType>,
    #[odata(additional_data)]
    additional_data: AdditionalData,
}

#[derive(EnumValue, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecurrenceRangeType {
    EndDate,
    NoEnd,
    Numbered,
}

#[derive(Parsable, Clone, Debug, PartialEq)]
pub struct TimeRange {
    end_time: Option<NaiveTime>,
    #[odata(odata_type)]
    odata_type: Option<String>,
    start_time: Option<NaiveTime>,
    #[odata(additional_data)]
    additional_data: AdditionalData,
}
