// src/browser/field.rs
//! Field declarations: how a column is read, compared and searched.
//!
//! Every sortable field carries its own direction, its own null sentinel and
//! the chain of secondary keys that break ties. Nothing about ordering is
//! global; a page's behaviour is entirely described by its `FieldSpec` table.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::data::{Record, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }
}

/// Where nulls land when sorting on a field.
#[derive(Clone, Debug, PartialEq)]
pub enum Nulls {
    /// Compare a null as if it were this value (e.g. 999 for a finish,
    /// 0 for a win count).
    As(Value),
    /// After every real value, whichever way the field sorts.
    Last,
}

/// How a field's value is obtained from a record.
#[derive(Clone, Copy, Debug)]
pub enum Accessor {
    /// Read the record field of the same name.
    Direct,
    /// Compute from the whole record (per-game averages, differentials).
    Derived(fn(&Record) -> Value),
}

pub type Comparator = fn(&Value, &Value) -> Ordering;

/// One secondary sort key, referring to another field by name.
#[derive(Clone, Debug, PartialEq)]
pub struct TieBreak {
    pub field: String,
    pub order: SortOrder,
}

#[derive(Clone, Debug)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub order: SortOrder,
    pub nulls: Nulls,
    pub tie_breaks: Vec<TieBreak>,
    pub searchable: bool,
    pub sortable: bool,
    accessor: Accessor,
    compare: Option<Comparator>,
}

impl FieldSpec {
    fn base(name: impl Into<String>, label: impl Into<String>, nulls: Nulls) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            order: SortOrder::Asc,
            nulls,
            tie_breaks: Vec::new(),
            searchable: false,
            sortable: true,
            accessor: Accessor::Direct,
            compare: None,
        }
    }

    /// Numeric field: ascending, nulls compare as 0.
    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::base(name, label, Nulls::As(Value::Num(0.0)))
    }

    /// Text field: ascending, nulls compare as "".
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::base(name, label, Nulls::As(Value::Str(s!())))
    }

    pub fn desc(mut self) -> Self { self.order = SortOrder::Desc; self }

    pub fn nulls_as(mut self, v: impl Into<Value>) -> Self {
        self.nulls = Nulls::As(v.into());
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = Nulls::Last;
        self
    }

    pub fn derived(mut self, f: fn(&Record) -> Value) -> Self {
        self.accessor = Accessor::Derived(f);
        self
    }

    pub fn compare_with(mut self, f: Comparator) -> Self {
        self.compare = Some(f);
        self
    }

    /// Append a secondary key. Keys are consulted in the order added.
    pub fn then_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.tie_breaks.push(TieBreak { field: field.into(), order });
        self
    }

    pub fn searchable(mut self) -> Self { self.searchable = true; self }

    /// Readable and searchable, but not offered as a sort key.
    pub fn unsortable(mut self) -> Self { self.sortable = false; self }

    pub fn is_derived(&self) -> bool { matches!(self.accessor, Accessor::Derived(_)) }

    /// The field's raw value for a record (absent → null).
    pub fn value<'r>(&self, r: &'r Record) -> Cow<'r, Value> {
        match self.accessor {
            Accessor::Direct => Cow::Borrowed(r.get(&self.name)),
            Accessor::Derived(f) => Cow::Owned(f(r)),
        }
    }

    /// Compare two records on this field alone, in `order`, honouring the
    /// field's null policy.
    pub fn cmp_in(&self, a: &Record, b: &Record, order: SortOrder) -> Ordering {
        let va = self.value(a);
        let vb = self.value(b);
        match (&self.nulls, va.is_null(), vb.is_null()) {
            (Nulls::Last, true, true) => Ordering::Equal,
            (Nulls::Last, true, false) => Ordering::Greater,
            (Nulls::Last, false, true) => Ordering::Less,
            (Nulls::As(sentinel), _, _) => {
                let va = if va.is_null() { sentinel } else { &*va };
                let vb = if vb.is_null() { sentinel } else { &*vb };
                order.apply(self.cmp_values(va, vb))
            }
            (Nulls::Last, false, false) => order.apply(self.cmp_values(&va, &vb)),
        }
    }

    /// Compare on this field in its own direction.
    pub fn cmp(&self, a: &Record, b: &Record) -> Ordering {
        self.cmp_in(a, b, self.order)
    }

    fn cmp_values(&self, a: &Value, b: &Value) -> Ordering {
        match self.compare {
            Some(f) => f(a, b),
            None => a.natural_cmp(b),
        }
    }
}

/// Compare on a field missing from the table: raw record value,
/// natural order, nulls last.
pub fn cmp_raw(name: &str, a: &Record, b: &Record, order: SortOrder) -> Ordering {
    let (va, vb) = (a.get(name), b.get(name));
    match (va.is_null(), vb.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => order.apply(va.natural_cmp(vb)),
    }
}
