use std::fmt;

use shared::domain::UserRecord;

pub const TABLE_HEADERS: [&str; 4] = ["ID", "Name", "Surname", "Age"];

/// Display rows for the record table, one per record, cells in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    rows: Vec<[String; 4]>,
}

impl RecordTable {
    pub fn from_records(records: &[UserRecord]) -> Self {
        Self {
            rows: records
                .iter()
                .map(|record| {
                    [
                        record.id.to_string(),
                        record.name.clone(),
                        record.surname.clone(),
                        record.age.to_string(),
                    ]
                })
                .collect(),
        }
    }

    pub fn headers(&self) -> [&'static str; 4] {
        TABLE_HEADERS
    }

    pub fn rows(&self) -> &[[String; 4]] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> [usize; 4] {
        let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

impl fmt::Display for RecordTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let write_row = |f: &mut fmt::Formatter<'_>, cells: [&str; 4]| -> fmt::Result {
            let line = cells
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "{}", line.trim_end())
        };

        write_row(f, TABLE_HEADERS)?;
        let rule = widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-");
        writeln!(f, "{rule}")?;
        for row in &self.rows {
            write_row(f, [&row[0], &row[1], &row[2], &row[3]].map(String::as_str))?;
        }
        Ok(())
    }
}
