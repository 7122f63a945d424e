// src/data.rs
//
// Scalar values and flat records as handed over by the data provider.
//
// - Value: null, number or string. Numbers print without a trailing ".0"
//          when integral so free-text search sees "12", not "12.0".
// - Record: field name -> Value. Absent fields read as null; nothing here
//           ever fails on a malformed row.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

static NULL: Value = Value::Null;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Num(f64),
    Str(String),
}

impl Value {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_f64().filter(|n| n.fract() == 0.0).map(|n| n as i64)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Infer a scalar from a raw text cell.
    /// Empty → null; finite decimal → number; everything else stays text.
    /// "007"-style ids keep their leading zeros as text.
    pub fn infer(cell: &str) -> Self {
        let t = cell.trim();
        if t.is_empty() {
            return Value::Null;
        }
        let digits = t.trim_start_matches(['-', '+']);
        let leading_zero = digits.len() > 1 && digits.starts_with('0') && !digits.starts_with("0.");
        let numeric_chars = t.chars().all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'));
        if numeric_chars && !leading_zero {
            if let Ok(n) = t.parse::<f64>() {
                if n.is_finite() {
                    return Value::Num(n);
                }
            }
        }
        Value::Str(t.to_string())
    }

    /// Equality used by per-field filters: null and "" select the same rows.
    pub fn same_as(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Str(s)) | (Value::Str(s), Value::Null) => s.is_empty(),
            (Value::Num(a), Value::Num(b)) => a == b,
            (a, b) => a == b,
        }
    }

    /// Lower-cased string form, as matched by free-text search.
    pub fn search_text(&self) -> String {
        self.to_string().to_lowercase()
    }

    /// Natural ascending order over two scalars.
    /// null < numbers < strings; numbers by value; strings case-insensitively
    /// with the raw text as the final word so distinct strings never tie.
    pub fn natural_cmp(&self, other: &Value) -> Ordering {
        use Value::*;
        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Less,
            (_, Null) => Ordering::Greater,
            (Num(a), Num(b)) => a.total_cmp(b),
            (Num(_), Str(_)) => Ordering::Less,
            (Str(_), Num(_)) => Ordering::Greater,
            (Str(a), Str(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Num(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Value::Num(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self { if n.is_finite() { Value::Num(n) } else { Value::Null } }
}
impl From<i64> for Value {
    fn from(n: i64) -> Self { Value::Num(n as f64) }
}
impl From<i32> for Value {
    fn from(n: i32) -> Self { Value::Num(n as f64) }
}
impl From<u32> for Value {
    fn from(n: u32) -> Self { Value::Num(n as f64) }
}
impl From<usize> for Value {
    fn from(n: usize) -> Self { Value::Num(n as f64) }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::Str(s.to_string()) }
}
impl From<String> for Value {
    fn from(s: String) -> Self { Value::Str(s) }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self { v.map_or(Value::Null, Into::into) }
}

/// One flat data row (one team-season, one draft pick, ...).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self { Self::default() }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Field value; absent fields read as null.
    pub fn get(&self, name: &str) -> &Value {
        self.fields.get(name).unwrap_or(&NULL)
    }

    pub fn num(&self, name: &str) -> Option<f64> { self.get(name).as_f64() }
    pub fn int(&self, name: &str) -> Option<i64> { self.get(name).as_i64() }
    pub fn text(&self, name: &str) -> Option<&str> { self.get(name).as_str() }

    /// Numeric field with nulls (and text) read as 0.
    pub fn num_or_zero(&self, name: &str) -> f64 { self.num(name).unwrap_or(0.0) }

    pub fn contains(&self, name: &str) -> bool { self.fields.contains_key(name) }
    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut r = Record::new();
        for (k, v) in iter {
            r.set(k, v);
        }
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_cells() {
        assert_eq!(Value::infer(""), Value::Null);
        assert_eq!(Value::infer("  "), Value::Null);
        assert_eq!(Value::infer("12"), Value::Num(12.0));
        assert_eq!(Value::infer("-3.5"), Value::Num(-3.5));
        assert_eq!(Value::infer("0.25"), Value::Num(0.25));
        assert_eq!(Value::infer("0"), Value::Num(0.0));
        assert_eq!(Value::infer("007"), Value::Str(s!("007")));
        assert_eq!(Value::infer("inf"), Value::Str(s!("inf")));
        assert_eq!(Value::infer("RB"), Value::Str(s!("RB")));
    }

    #[test]
    fn integral_numbers_print_without_fraction() {
        assert_eq!(Value::Num(12.0).to_string(), "12");
        assert_eq!(Value::Num(101.35).to_string(), "101.35");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn null_filters_like_empty_string() {
        assert!(Value::Null.same_as(&Value::from("")));
        assert!(!Value::Null.same_as(&Value::from("QB")));
        assert!(Value::from(3).same_as(&Value::Num(3.0)));
        assert!(!Value::from("3").same_as(&Value::Num(3.0)));
    }

    #[test]
    fn absent_field_reads_null() {
        let r = record! { "manager" => "A" };
        assert!(r.get("finish").is_null());
        assert_eq!(r.num_or_zero("finish"), 0.0);
        assert_eq!(r.text("manager"), Some("A"));
    }

    #[test]
    fn natural_order_is_case_insensitive_then_raw() {
        let a = Value::from("alpha");
        let b = Value::from("Beta");
        assert_eq!(a.natural_cmp(&b), Ordering::Less);
        assert_eq!(Value::from("a").natural_cmp(&Value::from("A")), Ordering::Greater);
        assert_eq!(Value::Num(2.0).natural_cmp(&Value::from("1")), Ordering::Less);
    }
}
