// Ordered-columns view shared by every flattened record type.

pub trait Tabular {
    /// Column names, in output order.
    fn columns() -> &'static [&'static str];

    /// One cell per column. Absent values are empty strings.
    fn cells(&self) -> Vec<String>;
}

pub fn optional_cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}
