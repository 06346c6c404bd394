use indexmap::IndexMap;

use super::{Key, Value};

/// Ordered key/value container. Absent and `nil` are the same thing: a
/// `Nil` is never stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    entries: IndexMap<Key, Value>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements land at 1, 2, 3, ...; a `Nil` element still consumes its
    /// index, leaving a gap.
    pub fn sequence<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut table = Self::new();
        for (i, v) in values.into_iter().enumerate() {
            table.insert(Key::Int(i as i64 + 1), v.into());
        }
        table
    }

    /// Builder-style insert, for literal construction.
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    /// Inserting `Nil` removes the entry.
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        if value.is_nil() {
            self.entries.shift_remove(&key)
        } else {
            self.entries.insert(key, value)
        }
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_or_nil(&self, key: &Key) -> &Value {
        const NIL: &Value = &Value::Nil;
        self.entries.get(key).unwrap_or(NIL)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// `(index, element)` from 1 up to (not including) the first absent index.
    pub fn sequence_iter(&self) -> impl Iterator<Item = (i64, &Value)> {
        (1i64..).map_while(move |i| self.entries.get(&Key::Int(i)).map(|v| (i, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_insert_removes_entry() {
        let mut t = Table::new().with("a", 1).with("b", 2);
        t.insert(Key::from("a"), Value::Nil);
        assert_eq!(t.len(), 1);
        assert!(t.get_or_nil(&Key::from("a")).is_nil());
    }

    #[test]
    fn sequence_iter_stops_at_first_gap() {
        let t = Table::sequence([Value::from(1), Value::from(2), Value::Nil, Value::from(4)]);
        let seen: Vec<i64> = t.sequence_iter().map(|(i, _)| i).collect();
        assert_eq!(seen, vec![1, 2]);
        assert_eq!(t.get(&Key::Int(4)), Some(&Value::from(4)));
    }

    #[test]
    fn mixed_keys_share_one_container() {
        let t = Table::sequence(["x", "y"]).with("n", 2);
        assert_eq!(t.len(), 3);
        assert_eq!(t.sequence_iter().count(), 2);
    }
}
