//! Blank upload templates

use crate::detect::{CODE_LABEL, PRICE_LABEL};
use crate::error::{Error, Result};
use rust_xlsxwriter::{Format, Workbook};

/// Sheet holding the two template columns
pub const TEMPLATE_SHEET: &str = "Prices";
/// Sheet holding the fill-in instructions
pub const README_SHEET: &str = "README";

pub const INSTRUCTIONS: [&str; 3] = [
    "Fill only these two columns.",
    "Variant Code should be the unique SKU/variant identifier.",
    "Variant Price should be a number (Inc GST preferred).",
];

/// Template file name for a side ("Marlin" / "Website")
pub fn template_file_name(side: &str) -> String {
    format!("{}_Price_Template.xlsx", side)
}

/// Build a blank two-column template workbook
pub fn template_bytes() -> Result<Vec<u8>> {
    let err = |e: rust_xlsxwriter::XlsxError| Error::Report(e.to_string());
    let header_format = Format::new().set_bold();
    let mut workbook = Workbook::new();

    let prices = workbook.add_worksheet();
    prices.set_name(TEMPLATE_SHEET).map_err(err)?;
    prices.write_string_with_format(0, 0, CODE_LABEL, &header_format).map_err(err)?;
    prices.write_string_with_format(0, 1, PRICE_LABEL, &header_format).map_err(err)?;

    let readme = workbook.add_worksheet();
    readme.set_name(README_SHEET).map_err(err)?;
    readme.write_string_with_format(0, 0, "Instructions", &header_format).map_err(err)?;
    for (i, line) in INSTRUCTIONS.iter().enumerate() {
        readme.write_string(i as u32 + 1, 0, *line).map_err(err)?;
    }

    workbook.save_to_buffer().map_err(err)
}
