//! Fixture workbooks built in memory

use rust_xlsxwriter::Workbook;

pub enum Cell {
    Text(&'static str),
    Number(f64),
    Blank,
}

pub use Cell::{Blank, Number, Text};

/// Build an xlsx buffer from (sheet name, rows) pairs
pub fn workbook_bytes(sheets: &[(&str, Vec<Vec<Cell>>)]) -> Vec<u8> {
    let mut workbook = Workbook::new();

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).expect("sheet name");
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Text(s) => {
                        worksheet.write_string(r as u32, c as u16, *s).expect("write string");
                    }
                    Number(n) => {
                        worksheet.write_number(r as u32, c as u16, *n).expect("write number");
                    }
                    Blank => {}
                }
            }
        }
    }

    workbook.save_to_buffer().expect("save workbook")
}

/// Single-sheet price list with the given headers
pub fn price_list(sheet: &str, headers: [&'static str; 2], rows: &[(&'static str, f64)]) -> Vec<u8> {
    let mut all = vec![vec![Text(headers[0]), Text(headers[1])]];
    for (code, price) in rows {
        all.push(vec![Text(*code), Number(*price)]);
    }
    workbook_bytes(&[(sheet, all)])
}
