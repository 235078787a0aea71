use crate::{AdditionalData, EnumValue, Parsable, Value};

/// Title region at the top of a SharePoint page.
#[derive(Parsable, Clone, Debug, PartialEq)]
pub struct TitleArea {
    alternative_text: Option<String>,
    enable_gradient_effect: Option<bool>,
    image_web_url: Option<String>,
    layout: Option<TitleAreaLayoutType>,
    #[odata(odata_type)]
    odata_type: Option<String>,
    server_processed_content: Option<ServerProcessedContent>,
    show_author: Option<bool>,
    show_published_date: Option<bool>,
    show_text_block_above_title: Option<bool>,
    text_above_title: Option<String>,
    text_alignment: Option<TitleAreaTextAlignmentType>,
    #[odata(additional_data)]
    additional_data: AdditionalData,
}

#[derive(EnumValue, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TitleAreaLayoutType {
    ImageAndTitle,
    Plain,
    ColorBlock,
    Overlap,
    UnknownFutureValue,
}

#[derive(EnumValue, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TitleAreaTextAlignmentType {
    Left,
    Center,
    UnknownFutureValue,
}

/// Content the service derives from a web part when the page is saved.
#[derive(Parsable, Clone, Debug, PartialEq)]
pub struct ServerProcessedContent {
    component_dependencies: Option<Vec<MetaDataKeyStringPair>>,
    custom_metadata: Option<Vec<MetaDataKeyValuePair>>,
    html_strings: Option<Vec<MetaDataKeyStringPair>>,
    image_sources: Option<Vec<MetaDataKeyStringPair>>,
    links: Option<Vec<MetaDataKeyStringPair>>,
    #[odata(odata_type)]
    odata_type: Option<String>,
    searchable_plain_texts: Option<Vec<MetaDataKeyStringPair>>,
    #[odata(additional_data)]
    additional_data: AdditionalData,
}

#[derive(Parsable, Clone, Debug, PartialEq)]
pub struct MetaDataKeyStringPair {
    key: Option<String>,
    #[odata(odata_type)]
    odata_type: Option<String>,
    value: Option<String>,
    #[odata(additional_data)]
    additional_data: AdditionalData,
}

/// A key with an arbitrary JSON value.
#[derive(Parsable, Clone, Debug, PartialEq)]
pub struct MetaDataKeyValuePair {
    key: Option<String>,
    #[odata(odata_type)]
    odata_type: Option<String>,
    value: Option<Value>,
    #[odata(additional_data)]
    additional_data: AdditionalData,
}
