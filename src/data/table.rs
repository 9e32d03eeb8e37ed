/// Delimited-text table ingestion.
///
/// The first row is always treated as the header. Blank header cells fall
/// back to `Column<N>` (1-based), and rows shorter than the header are
/// padded with empty strings, so every record carries every column.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
}

impl Table {
    /// All values of one column, in row order. `None` if the column does
    /// not exist.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        if !self.header.iter().any(|h| h == name) {
            return None;
        }
        Some(
            self.rows
                .iter()
                .map(|row| row.get(name).map(String::as_str).unwrap_or(""))
                .collect(),
        )
    }
}

/// Parse delimited text into a table of string records.
pub fn parse_delimited(input: &str, delimiter: char) -> Table {
    let mut lines = input.lines().filter(|l| !l.trim().is_empty());

    let header = match lines.next() {
        Some(line) => line
            .split(delimiter)
            .enumerate()
            .map(|(i, cell)| {
                let cell = cell.trim();
                if cell.is_empty() {
                    format!("Column{}", i + 1)
                } else {
                    cell.to_string()
                }
            })
            .collect::<Vec<_>>(),
        None => return Table::default(),
    };

    let rows = lines
        .map(|line| {
            let cells: Vec<&str> = line.split(delimiter).map(str::trim).collect();
            header
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let value = cells.get(i).copied().unwrap_or("");
                    (name.clone(), value.to_string())
                })
                .collect()
        })
        .collect();

    Table { header, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_is_header() {
        let t = parse_delimited("x,y\n1,2\n3,4\n", ',');
        assert_eq!(t.header, vec!["x", "y"]);
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0]["x"], "1");
        assert_eq!(t.rows[1]["y"], "4");
    }

    #[test]
    fn test_blank_header_cells_default_to_column_n() {
        let t = parse_delimited(",y,\na,b,c\n", ',');
        assert_eq!(t.header, vec!["Column1", "y", "Column3"]);
        assert_eq!(t.rows[0]["Column1"], "a");
        assert_eq!(t.rows[0]["Column3"], "c");
    }

    #[test]
    fn test_short_rows_pad_with_empty_strings() {
        let t = parse_delimited("x,y,z\n1,2\n", ',');
        assert_eq!(t.rows[0]["z"], "");
    }

    #[test]
    fn test_empty_input() {
        let t = parse_delimited("", ',');
        assert!(t.header.is_empty());
        assert!(t.rows.is_empty());
    }

    #[test]
    fn test_column_extraction() {
        let t = parse_delimited("x;y\n1;2\n3;4\n", ';');
        assert_eq!(t.column("x").unwrap(), vec!["1", "3"]);
        assert!(t.column("missing").is_none());
    }
}
