//! Row tables for flagged outliers.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray, PolarsResult};

use eda_core::values::{any_to_display, column_values, is_numeric_dtype};
use eda_model::DisplayOptions;

const ELLIPSIS: &str = "...";

/// Renders every column of the rows selected by `mask`, without an index.
pub fn flagged_rows_table(
    df: &DataFrame,
    mask: &[bool],
    display: &DisplayOptions,
) -> PolarsResult<Table> {
    let selector = BooleanChunked::from_slice("outliers".into(), mask);
    let flagged = df.filter(&selector)?;
    let columns = flagged.get_columns();
    let shown = display
        .max_columns
        .map_or(columns.len(), |limit| limit.min(columns.len()));
    let truncated = shown < columns.len();
    let visible = &columns[..shown];

    let mut table = Table::new();
    apply_row_table_style(&mut table, display);
    let mut header: Vec<Cell> = visible
        .iter()
        .map(|column| Cell::new(column.name().as_str()))
        .collect();
    if truncated {
        header.push(Cell::new(ELLIPSIS));
    }
    table.set_header(header);

    let values: Vec<Vec<AnyValue<'_>>> = visible.iter().map(column_values).collect();
    for idx in 0..flagged.height() {
        let mut row: Vec<Cell> = values
            .iter()
            .map(|cells| Cell::new(cells.get(idx).map(any_to_display).unwrap_or_default()))
            .collect();
        if truncated {
            row.push(Cell::new(ELLIPSIS));
        }
        table.add_row(row);
    }
    for (index, column) in visible.iter().enumerate() {
        if is_numeric_dtype(column.dtype()) {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    Ok(table)
}

fn apply_row_table_style(table: &mut Table, display: &DisplayOptions) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .force_no_tty();
    match display.table_width {
        Some(width) => {
            table
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_width(width);
        }
        None => {
            table.set_content_arrangement(ContentArrangement::Disabled);
        }
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
