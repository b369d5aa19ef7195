use std::fmt;
use std::io;
use std::io::Write;

use itertools::Itertools;

use crate::truth_table::TruthTable;

const DEFAULT_RESULT_LABEL: &str = "*";

impl TruthTable {
    fn header(&self, result_label: &str) -> Vec<String> {
        self.variables()
            .iter()
            .cloned()
            .chain(std::iter::once(result_label.to_string()))
            .collect()
    }

    /// Writes the table as CSV, with the variable names and `result_label` as header.
    pub fn write_csv<W: Write>(&self, writer: W, result_label: &str) -> csv::Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(self.header(result_label))?;

        for row in self.to_rows().iter().skip(1) {
            csv_writer.write_record(row)?;
        }

        csv_writer.flush()?;

        Ok(())
    }

    /// Writes the table as aligned text columns.
    pub fn write_text<W: Write>(&self, writer: &mut W, result_label: &str) -> io::Result<()> {
        write!(writer, "{}", TextTable::new(self, result_label))
    }
}

struct TextTable<'a> {
    table: &'a TruthTable,
    header: Vec<String>,
}

impl<'a> TextTable<'a> {
    fn new(table: &'a TruthTable, result_label: &str) -> Self {
        Self {
            table,
            header: table.header(result_label),
        }
    }

    fn widths(&self) -> Vec<usize> {
        self.header
            .iter()
            .map(|h| h.chars().count().max(1))
            .collect()
    }
}

impl fmt::Display for TextTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();

        writeln!(
            f,
            "{}",
            self.header
                .iter()
                .zip(&widths)
                .map(|(h, &w)| format!("{h:^w$}"))
                .join(" | ")
        )?;
        writeln!(f, "{}", widths.iter().map(|&w| "-".repeat(w)).join("-+-"))?;

        for row in self.table.rows() {
            let cells = row.assignment.iter().chain(std::iter::once(&row.result));

            writeln!(
                f,
                "{}",
                cells
                    .zip(&widths)
                    .map(|(cell, &w)| format!("{cell:^w$}"))
                    .join(" | ")
            )?;
        }

        Ok(())
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&TextTable::new(self, DEFAULT_RESULT_LABEL), f)
    }
}
