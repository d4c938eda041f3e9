use cqc_ext_api::Element;

/// Operator shown in the brand strip.
pub const OPERATOR_NAME: &str = "Philippe Beliveau";

/// Application name shown in the brand strip.
pub const APP_NAME: &str = "CompteQC";

/// Fleur-de-lis glyph (U+269C) opening the strip.
pub const FLEUR_GLYPH: &str = "\u{269C}";

const SEPARATOR: &str = "|";

/// Describe the brand strip: a banner div holding the fleur-de-lis, the
/// operator name, a separator and the application name, in that order.
pub(crate) fn strip(id: &str) -> Element {
    Element::new("div")
        .id(id)
        .child(Element::new("span").class("cqc-fleur").text(FLEUR_GLYPH))
        .child(Element::new("span").class("cqc-name").text(OPERATOR_NAME))
        .child(Element::new("span").class("cqc-sep").text(SEPARATOR))
        .child(Element::new("span").class("cqc-app").text(APP_NAME))
}
