//! Table rendering: schema + record slice → styled grid.
//!
//! Stateless formatter. Builds a comfy-table with bold, center-justified
//! headers and one centered cell per schema column and record; a column's
//! optional color applies to its header and its cells. Records missing a
//! column render that cell as an empty string — never an error.

use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::types::{ColumnSchema, Record};

/// Render a slice of records against a column schema.
///
/// Column order follows the schema; record keys outside the schema are
/// ignored. The returned table displays via its `Display` impl.
pub fn render_table(schema: &ColumnSchema, records: &[Record]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(schema.columns().iter().map(|column| {
        let mut cell = Cell::new(&column.name)
            .set_alignment(CellAlignment::Center)
            .add_attribute(comfy_table::Attribute::Bold);
        if let Some(color) = column.color {
            cell = cell.fg(color);
        }
        cell
    }));

    for record in records {
        table.add_row(schema.columns().iter().map(|column| {
            let mut cell =
                Cell::new(record.get(&column.name)).set_alignment(CellAlignment::Center);
            if let Some(color) = column.color {
                cell = cell.fg(color);
            }
            cell
        }));
    }

    table
}

// ============================================================================
// TESTS
// ============================================================================
