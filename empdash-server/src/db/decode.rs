//! Row decoding without a schema.
//!
//! Rows come from the simple query protocol, so every non-null value is the
//! server's text rendering of the column. The column's type name decides how
//! the text is classified.

use empdash_core::{CellValue, Record};
use sqlx::postgres::PgRow;
use sqlx::{Decode, Postgres, Row, TypeInfo, ValueRef};

use super::DbError;

/// Decode every column of `row`, in column order.
pub fn decode_row(row: &PgRow) -> Result<Record, DbError> {
    (0..row.len())
        .map(|index| decode_cell(row, index))
        .collect::<Result<Record, _>>()
}

fn decode_cell(row: &PgRow, index: usize) -> Result<CellValue, DbError> {
    let raw = row.try_get_raw(index).map_err(DbError::Decode)?;
    if raw.is_null() {
        return Ok(CellValue::Null);
    }

    let type_name = raw.type_info().name().to_owned();
    let text = <&str as Decode<Postgres>>::decode(raw).map_err(|source| {
        DbError::Decode(sqlx::Error::ColumnDecode {
            index: index.to_string(),
            source,
        })
    })?;

    Ok(CellValue::from_text(&type_name, text))
}
