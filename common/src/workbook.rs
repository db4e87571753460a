//! Workbook ingestion
//!
//! Reads every sheet of an uploaded workbook into a `RawTable`.
//! All cells come back as text so codes like "000123" survive untouched.

/// Prefix given to columns whose header cell is blank
pub const UNNAMED_PREFIX: &str = "Unnamed";

/// A single cell as read from a sheet
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Text view of the cell (numbers rendered without a trailing ".0")
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Number(n) => Some(format_number(*n)),
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Missing => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// One sheet: a header row and data rows of equal width
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding or truncating it to the header width
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.headers.len(), CellValue::Missing);
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.headers.is_empty()
    }

    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Headers that are not blank-header placeholders
    pub fn named_headers(&self) -> Vec<&str> {
        self.headers
            .iter()
            .map(String::as_str)
            .filter(|h| !is_unnamed_header(h))
            .collect()
    }
}

/// Sheets in workbook order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<(String, RawTable)>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sheet(&mut self, name: impl Into<String>, table: RawTable) {
        self.sheets.push((name.into(), table));
    }

    pub fn sheet(&self, name: &str) -> Option<&RawTable> {
        self.sheets.iter().find(|(n, _)| n == name).map(|(_, t)| t)
    }

    /// Read a workbook (xlsx, xls, xlsb, ods) from memory
    #[cfg(feature = "excel")]
    pub fn from_bytes(bytes: &[u8]) -> crate::Result<Self> {
        use calamine::{open_workbook_auto_from_rs, Reader};
        use std::io::Cursor;

        let mut sheets = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| crate::Error::Workbook(format!("Failed to open workbook: {}", e)))?;

        let sheet_names: Vec<String> = sheets.sheet_names().to_vec();
        if sheet_names.is_empty() {
            return Err(crate::Error::Workbook("Workbook contains no sheets".to_string()));
        }

        let mut workbook = Workbook::new();
        for name in &sheet_names {
            let range = sheets
                .worksheet_range(name)
                .map_err(|e| crate::Error::Workbook(format!("Failed to read sheet '{}': {}", name, e)))?;

            let table = table_from_rows(range.rows().map(|row| row.iter().map(cell_from_data).collect()));
            tracing::debug!(sheet = %name, columns = table.headers.len(), rows = table.rows.len(), "sheet read");
            workbook.add_sheet(name.clone(), table);
        }

        Ok(workbook)
    }
}

/// Build a table from raw rows, treating the first row as the header
pub fn table_from_rows<I>(rows: I) -> RawTable
where
    I: IntoIterator<Item = Vec<CellValue>>,
{
    let mut rows = rows.into_iter();
    let header_cells = match rows.next() {
        Some(cells) => cells,
        None => return RawTable::default(),
    };

    let mut table = RawTable::new(make_headers(&header_cells));
    for row in rows {
        if row.iter().all(CellValue::is_missing) {
            continue;
        }
        table.push_row(row);
    }
    table
}

/// Header names: blanks become "Unnamed: <index>", repeats get ".<n>" suffixes
fn make_headers(cells: &[CellValue]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::with_capacity(cells.len());

    for (index, cell) in cells.iter().enumerate() {
        let base = match cell.as_text() {
            Some(text) if !text.trim().is_empty() => text,
            _ => format!("{}: {}", UNNAMED_PREFIX, index),
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while headers.contains(&name) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        headers.push(name);
    }

    headers
}

pub fn is_unnamed_header(header: &str) -> bool {
    header.starts_with(UNNAMED_PREFIX)
}

/// Render a number the way a text-typed cell read shows it
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(feature = "excel")]
fn cell_from_data(cell: &calamine::Data) -> CellValue {
    use calamine::Data;

    match cell {
        Data::Empty => CellValue::Missing,
        Data::String(s) if s.is_empty() => CellValue::Missing,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(n) => CellValue::Text(format_number(*n)),
        Data::Int(n) => CellValue::Text(n.to_string()),
        Data::Bool(b) => CellValue::Text(if *b { "True" } else { "False" }.to_string()),
        Data::Error(e) => CellValue::Text(format!("#{:?}", e)),
        Data::DateTime(dt) => CellValue::Text(format_number(dt.as_f64())),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
