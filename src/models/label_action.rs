use crate::{AdditionalData, EnumValue, Parsable};

/// An action a sensitivity label applies to labeled content.
///
/// `MarkContent` is both a member and the base of the footer, header and
/// watermark actions, so decoding an `addFooter` payload through this family
/// fills three levels of fields.
#[derive(Parsable, Clone, Debug, PartialEq)]
pub enum LabelAction {
    #[odata(fallback)]
    Base(LabelActionBase),
    MarkContent(MarkContent),
    AddFooter(AddFooter),
    AddHeader(AddHeader),
    AddWatermark(AddWatermark),
    EncryptContent(EncryptContent),
}

#[derive(Parsable, Clone, Debug, PartialEq)]
pub struct LabelActionBase {
    name: Option<String>,
    #[odata(odata_type)]
    odata_type: Option<String>,
    #[odata(additional_data)]
    additional_data: AdditionalData,
}

/// Visual marking stamped on content.
#[derive(Parsable, Clone, Debug, PartialEq)]
#[odata(discriminator = "#microsoft.graph.markContent")]
pub struct MarkContent {
    #[odata(base)]
    base: LabelActionBase,
    font_color: Option<String>,
    font_size: Option<i64>,
    text: Option<String>,
}

#[derive(Parsable, Clone, Debug, PartialEq)]
#[odata(discriminator = "#microsoft.graph.addFooter")]
pub struct AddFooter {
    #[odata(base)]
    base: MarkContent,
    alignment: Option<Alignment>,
    /// In points.
    margin: Option<i32>,
}

#[derive(Parsable, Clone, Debug, PartialEq)]
#[odata(discriminator = "#microsoft.graph.addHeader")]
pub struct AddHeader {
    #[odata(base)]
    base: MarkContent,
    alignment: Option<Alignment>,
    margin: Option<i32>,
}

#[derive(Parsable, Clone, Debug, PartialEq)]
#[odata(discriminator = "#microsoft.graph.addWatermark")]
pub struct AddWatermark {
    #[odata(base)]
    base: MarkContent,
    orientation: Option<PageOrientation>,
}

#[derive(Parsable, Clone, Debug, PartialEq)]
#[odata(discriminator = "#microsoft.graph.encryptContent")]
pub struct EncryptContent {
    #[odata(base)]
    base: LabelActionBase,
    encrypt_with: Option<EncryptWith>,
}

#[derive(EnumValue, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

#[derive(EnumValue, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageOrientation {
    Horizontal,
    Diagonal,
}

/// Where the protection of encrypted content comes from.
#[derive(EnumValue, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncryptWith {
    Template,
    UserDefinedRights,
}
