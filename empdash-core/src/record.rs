//! Employee records as opaque tuples of column values.
//!
//! A [`Record`] carries no field names and no schema: it is whatever the
//! query returned, in column order. Values arrive from the database in text
//! form and are classified by their Postgres type name so that the line
//! rendering can tell numbers from strings.

use std::fmt::{self, Write as _};

use serde::{Serialize, Serializer};

/// A single column value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    /// Arbitrary-precision decimal, kept exactly as the server printed it
    Numeric(String),
    /// Text and every type without a dedicated variant (dates, uuids, json, ...)
    Text(String),
}

impl CellValue {
    /// Classify a textual wire value by its Postgres type name.
    ///
    /// Values that do not parse as their declared type fall back to `Text`.
    pub fn from_text(type_name: &str, text: &str) -> Self {
        match type_name.to_ascii_uppercase().as_str() {
            "BOOL" => match text {
                "t" | "true" => Self::Bool(true),
                "f" | "false" => Self::Bool(false),
                _ => Self::Text(text.to_owned()),
            },
            "INT2" | "INT4" | "INT8" | "OID" => text
                .parse()
                .map(Self::Integer)
                .unwrap_or_else(|_| Self::Text(text.to_owned())),
            "FLOAT4" | "FLOAT8" => parse_pg_float(text)
                .map(Self::Float)
                .unwrap_or_else(|| Self::Text(text.to_owned())),
            "NUMERIC" => Self::Numeric(text.to_owned()),
            _ => Self::Text(text.to_owned()),
        }
    }
}

/// Postgres prints non-finite floats as `NaN`, `Infinity` and `-Infinity`.
fn parse_pg_float(text: &str) -> Option<f64> {
    match text {
        "NaN" => Some(f64::NAN),
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => text.parse().ok(),
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write_float(f, *x),
            Self::Numeric(s) => f.write_str(s),
            Self::Text(s) => write_quoted(f, s),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        f.write_str("nan")
    } else if x.is_infinite() {
        f.write_str(if x > 0.0 { "inf" } else { "-inf" })
    } else if x != 0.0 && !(1e-4..1e16).contains(&x.abs()) {
        write_exponent(f, x)
    } else {
        // Debug keeps the trailing `.0` on integral values
        write!(f, "{x:?}")
    }
}

/// `1e+16`, `1.5e-05`: signed exponent with at least two digits.
fn write_exponent(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let formatted = format!("{x:e}");
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    write!(f, "{mantissa}e{sign}{digits:0>2}")
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    f.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Float(x) if x.is_finite() => serializer.serialize_f64(*x),
            // JSON has no NaN/Infinity
            Self::Float(_) => serializer.collect_str(self),
            Self::Numeric(s) | Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// One row returned by the employee query.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Record(Vec<CellValue>);

impl Record {
    pub fn new(values: Vec<CellValue>) -> Self {
        Self(values)
    }
}

impl FromIterator<CellValue> for Record {
    fn from_iter<I: IntoIterator<Item = CellValue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Tuple notation: `(1, 'Alice')`, `(1,)`, `()`.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('(')?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        if self.0.len() == 1 {
            f.write_char(',')?;
        }
        f.write_char(')')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn two_column_record_renders_as_tuple() {
        let record = Record::new(vec![CellValue::Integer(1), text("Alice")]);
        assert_eq!(record.to_string(), "(1, 'Alice')");
    }

    #[test]
    fn single_and_empty_records() {
        assert_eq!(Record::new(vec![CellValue::Integer(7)]).to_string(), "(7,)");
        assert_eq!(Record::default().to_string(), "()");
    }

    #[test]
    fn scalar_rendering() {
        let record = Record::new(vec![
            CellValue::Null,
            CellValue::Bool(true),
            CellValue::Bool(false),
            CellValue::Float(2.0),
            CellValue::Float(0.5),
            CellValue::Numeric("1234.50".into()),
        ]);
        assert_eq!(record.to_string(), "(None, True, False, 2.0, 0.5, 1234.50)");
    }

    #[test]
    fn non_finite_floats() {
        assert_eq!(CellValue::Float(f64::NAN).to_string(), "nan");
        assert_eq!(CellValue::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(CellValue::Float(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn float_exponent_form() {
        assert_eq!(CellValue::Float(1e16).to_string(), "1e+16");
        assert_eq!(CellValue::Float(1.5e16).to_string(), "1.5e+16");
        assert_eq!(CellValue::Float(-2e100).to_string(), "-2e+100");
        assert_eq!(CellValue::Float(1e-5).to_string(), "1e-05");
        assert_eq!(CellValue::Float(2.5e-7).to_string(), "2.5e-07");
        assert_eq!(CellValue::Float(1e15).to_string(), "1000000000000000.0");
        assert_eq!(CellValue::Float(0.0001).to_string(), "0.0001");
        assert_eq!(CellValue::Float(0.0).to_string(), "0.0");
        assert_eq!(CellValue::Float(-0.0).to_string(), "-0.0");
    }

    #[test]
    fn text_quoting() {
        assert_eq!(text("O'Brien").to_string(), "\"O'Brien\"");
        assert_eq!(text("say \"hi\"").to_string(), "'say \"hi\"'");
        assert_eq!(text("it's \"x\"").to_string(), "'it\\'s \"x\"'");
        assert_eq!(text("a\\b").to_string(), "'a\\\\b'");
        assert_eq!(text("line1\nline2\t").to_string(), "'line1\\nline2\\t'");
    }

    #[test]
    fn from_text_classifies_by_type_name() {
        assert_eq!(CellValue::from_text("INT4", "42"), CellValue::Integer(42));
        assert_eq!(CellValue::from_text("int8", "-9"), CellValue::Integer(-9));
        assert_eq!(CellValue::from_text("BOOL", "t"), CellValue::Bool(true));
        assert_eq!(CellValue::from_text("BOOL", "f"), CellValue::Bool(false));
        assert_eq!(CellValue::from_text("FLOAT8", "1.5"), CellValue::Float(1.5));
        assert_eq!(
            CellValue::from_text("FLOAT8", "-Infinity"),
            CellValue::Float(f64::NEG_INFINITY)
        );
        assert_eq!(
            CellValue::from_text("NUMERIC", "10.00"),
            CellValue::Numeric("10.00".into())
        );
        assert_eq!(CellValue::from_text("VARCHAR", "Bob"), text("Bob"));
        assert_eq!(CellValue::from_text("DATE", "2020-01-31"), text("2020-01-31"));
    }

    #[test]
    fn from_text_falls_back_to_text() {
        assert_eq!(CellValue::from_text("INT4", "abc"), text("abc"));
        assert_eq!(CellValue::from_text("BOOL", "maybe"), text("maybe"));
    }

    #[test]
    fn record_serializes_as_json_array() {
        let record = Record::new(vec![
            CellValue::Integer(1),
            text("Alice"),
            CellValue::Null,
            CellValue::Numeric("3.10".into()),
            CellValue::Float(f64::NAN),
        ]);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!([1, "Alice", null, "3.10", "nan"]));
    }
}
