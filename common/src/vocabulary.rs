//! Candidate vocabularies for the two detected fields
//!
//! Tokens are compared against normalized headers, either by containment
//! or by fuzzy similarity. The lists are fixed and never mutated.

/// Code (SKU / variant identifier) candidates
pub const CODE_CANDIDATES: &[&str] = &[
    "variantcode",
    "variant_code",
    "variant sku",
    "variantsku",
    "sku",
    "productcode",
    "product_code",
    "itemcode",
    "item_code",
    "code",
    "partnumber",
    "partno",
];

/// Price candidates (web-facing / inc GST first)
pub const PRICE_CANDIDATES: &[&str] = &[
    "variantprice",
    "price",
    "webprice",
    "websiteprice",
    "retail",
    "rrp",
    "sellprice",
    "sellingprice",
    "listprice",
];

/// Inclusive-of-GST hints, preferred when both INC and EXC columns exist
pub const INC_GST_HINTS: &[&str] = &["incgst", "inclgst", "incl_gst", "inc_gst"];

/// Exclusive-of-GST hints, still rewarded but less than INC
pub const EXC_GST_HINTS: &[&str] = &["exgst", "exc_gst", "exclgst", "excl_gst"];

/// A field vocabulary with optional bias hints
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    /// Tokens representing the field
    pub candidates: &'static [&'static str],
    /// Hints worth +0.25 when contained in the header
    pub primary_hints: &'static [&'static str],
    /// Hints worth +0.10 when contained in the header
    pub secondary_hints: &'static [&'static str],
}

impl Vocabulary {
    /// Vocabulary for the code column
    pub const fn code() -> Self {
        Self {
            candidates: CODE_CANDIDATES,
            primary_hints: &[],
            secondary_hints: &[],
        }
    }

    /// Vocabulary for the price column, biased toward INC GST
    pub const fn price() -> Self {
        Self {
            candidates: PRICE_CANDIDATES,
            primary_hints: INC_GST_HINTS,
            secondary_hints: EXC_GST_HINTS,
        }
    }
}
