//! Evaluated view of a [`LazyDict`](super::LazyDict).

use crate::error::{TemplateError, TemplateResult};
use crate::template::Template;
use crate::value::Value;
use std::collections::HashMap;

/// Values of a dictionary at one point of evaluation.
///
/// Computed entries that failed are stored with their error, which is
/// returned to whoever reads them.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    entries: HashMap<String, TemplateResult<Value>>,
}

impl Snapshot {
    /// Builds a snapshot holding only literal values.
    pub fn from_literals(literals: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self {
            entries: literals
                .into_iter()
                .map(|(key, value)| (key, Ok(value)))
                .collect(),
        }
    }

    pub(crate) fn record(&mut self, key: String, result: TemplateResult<Value>) {
        self.entries.insert(key, result);
    }

    /// Reads a value.
    pub fn get(&self, key: &str) -> TemplateResult<&Value> {
        match self.entries.get(key) {
            Some(Ok(value)) => Ok(value),
            Some(Err(error)) => Err(error.clone()),
            None => Err(TemplateError::missing_key(key)),
        }
    }

    /// True when `key` has a value or a recorded failure.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Reads a numeric value as a float.
    pub fn number(&self, key: &str) -> TemplateResult<f64> {
        self.get(key)?
            .as_f64()
            .ok_or_else(|| TemplateError::type_mismatch(key, "a number"))
    }

    /// Reads a list value.
    pub fn list(&self, key: &str) -> TemplateResult<&[Value]> {
        self.get(key)?
            .as_list()
            .ok_or_else(|| TemplateError::type_mismatch(key, "a list"))
    }

    /// Substitutes every token of `template` with its value.
    pub fn render(&self, template: &Template) -> TemplateResult<String> {
        template.render(|name| self.get(name).cloned())
    }

    /// Renders `template` once per index of the list values it references.
    ///
    /// See [`Repeat::Broadcast`](super::Repeat::Broadcast).
    pub fn render_broadcast(&self, template: &Template) -> TemplateResult<String> {
        let mut count: Option<usize> = None;
        for name in template.names() {
            if let Value::List(items) = self.get(name)? {
                count = Some(count.map_or(items.len(), |c| c.min(items.len())));
            }
        }

        let renders = (0..count.unwrap_or(1))
            .map(|index| {
                template.render(|name| match self.get(name)? {
                    Value::List(items) => Ok(items[index].clone()),
                    scalar => Ok(scalar.clone()),
                })
            })
            .collect::<TemplateResult<Vec<_>>>()?;
        Ok(renders.join("\n"))
    }
}
