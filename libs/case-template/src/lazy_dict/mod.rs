//! # Lazy Dictionary
//!
//! Key/value store mixing literal values with computed entries.
//!
//! Computed entries are pure functions of a [`Snapshot`]. They are evaluated
//! in insertion order: evaluating entry `k` first evaluates every computed
//! entry inserted before it, each seeing the literals plus the results of
//! the entries before it. A computed entry can therefore only read entries
//! inserted earlier.
//!
//! Literals and computed entries share one namespace: inserting either kind
//! under an existing name replaces the previous entry.
//!
//! ## Example
//!
//! ```rust
//! use case_template::{LazyDict, Repeat, Value};
//!
//! let mut dict = LazyDict::new();
//! dict.insert("a", 2);
//! dict.insert("b", 3);
//! dict.insert_computed("sum", ["a", "b"], |s| {
//!     Ok(Value::from(s.number("a")? + s.number("b")?))
//! })
//! .unwrap();
//! dict.insert_template("line", "a + b = @sum", Repeat::Once).unwrap();
//!
//! assert_eq!(dict.get("line").unwrap(), Value::from("a + b = 5"));
//! ```

mod snapshot;

pub use snapshot::Snapshot;

use crate::error::{TemplateError, TemplateResult};
use crate::template::Template;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// How a computed template is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Rendered once; list values substitute as whole lists.
    Once,
    /// Rendered once per index of the referenced list values, substituting
    /// their i-th element and keeping scalars unchanged. Stops at the
    /// shortest referenced list; renders once when no list is referenced.
    /// Renders are joined by newlines.
    Broadcast,
}

type ComputeFn = Arc<dyn Fn(&Snapshot) -> TemplateResult<Value> + Send + Sync>;

#[derive(Clone)]
struct Computed {
    name: String,
    depends_on: Vec<String>,
    compute: ComputeFn,
}

impl fmt::Debug for Computed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Computed")
            .field("name", &self.name)
            .field("depends_on", &self.depends_on)
            .finish_non_exhaustive()
    }
}

/// Dictionary of literal and computed entries.
#[derive(Debug, Clone, Default)]
pub struct LazyDict {
    literals: Vec<(String, Value)>,
    computed: Vec<Computed>,
}

impl LazyDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a literal value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        self.computed.retain(|entry| entry.name != key);
        match self.literals.iter_mut().find(|(name, _)| *name == key) {
            Some((_, slot)) => *slot = value,
            None => self.literals.push((key, value)),
        }
    }

    /// Inserts every pair of `entries` as a literal.
    pub fn extend<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }

    /// Inserts or replaces a computed entry.
    ///
    /// `depends_on` lists the names `compute` reads. A new entry goes last
    /// in evaluation order; a replaced computed entry keeps its place. When
    /// an entry evaluated earlier declares a dependency on `key`, or the
    /// new entry depends on a computed entry evaluated after its place, the
    /// insertion fails with [`TemplateError::ForwardReference`] and the
    /// dictionary is left unchanged.
    pub fn insert_computed<I, S, F>(
        &mut self,
        key: impl Into<String>,
        depends_on: I,
        compute: F,
    ) -> TemplateResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&Snapshot) -> TemplateResult<Value> + Send + Sync + 'static,
    {
        let entry = Computed {
            name: key.into(),
            depends_on: depends_on.into_iter().map(Into::into).collect(),
            compute: Arc::new(compute),
        };

        let position = self
            .computed
            .iter()
            .position(|existing| existing.name == entry.name)
            .unwrap_or(self.computed.len());

        if let Some(dependent) = self.computed[..position]
            .iter()
            .find(|earlier| earlier.depends_on.contains(&entry.name))
        {
            return Err(TemplateError::ForwardReference {
                entry: dependent.name.clone(),
                key: entry.name,
            });
        }
        if let Some(later) = self
            .computed
            .iter()
            .skip(position + 1)
            .find(|later| entry.depends_on.contains(&later.name))
        {
            return Err(TemplateError::ForwardReference {
                entry: entry.name,
                key: later.name.clone(),
            });
        }

        self.literals.retain(|(name, _)| *name != entry.name);
        if position == self.computed.len() {
            self.computed.push(entry);
        } else {
            self.computed[position] = entry;
        }
        Ok(())
    }

    /// Inserts a computed entry rendering `source`.
    ///
    /// The template is parsed here, so invalid placeholders fail at
    /// insertion, and its tokens become the declared dependencies.
    pub fn insert_template(
        &mut self,
        key: impl Into<String>,
        source: &str,
        repeat: Repeat,
    ) -> TemplateResult<()> {
        let template = Template::parse(source)?;
        let names: Vec<String> = template.names().into_iter().map(String::from).collect();
        self.insert_computed(key, names, move |snapshot| {
            let text = match repeat {
                Repeat::Once => snapshot.render(&template)?,
                Repeat::Broadcast => snapshot.render_broadcast(&template)?,
            };
            Ok(Value::Text(text))
        })
    }

    /// Removes an entry, returning whether it existed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.literals.len() + self.computed.len();
        self.literals.retain(|(name, _)| name != key);
        self.computed.retain(|entry| entry.name != key);
        before != self.literals.len() + self.computed.len()
    }

    /// True when `key` names a literal or computed entry.
    pub fn contains(&self, key: &str) -> bool {
        self.literals.iter().any(|(name, _)| name == key)
            || self.computed.iter().any(|entry| entry.name == key)
    }

    /// Literal names in insertion order, followed by computed names in
    /// evaluation order.
    pub fn keys(&self) -> Vec<&str> {
        self.literals
            .iter()
            .map(|(name, _)| name.as_str())
            .chain(self.computed.iter().map(|entry| entry.name.as_str()))
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.literals.len() + self.computed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads an entry, evaluating computed entries up to it.
    pub fn get(&self, key: &str) -> TemplateResult<Value> {
        if let Some(index) = self.computed.iter().position(|entry| entry.name == key) {
            return self.evaluate(index + 1).get(key).cloned();
        }
        self.literals
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| TemplateError::missing_key(key))
    }

    /// Every entry with its value, in [`keys`](Self::keys) order.
    ///
    /// Fails with the first error of a computed entry.
    pub fn entries(&self) -> TemplateResult<Vec<(String, Value)>> {
        let snapshot = self.snapshot();
        self.keys()
            .into_iter()
            .map(|key| Ok((key.to_string(), snapshot.get(key)?.clone())))
            .collect()
    }

    /// Every value, in [`keys`](Self::keys) order.
    pub fn values(&self) -> TemplateResult<Vec<Value>> {
        Ok(self.entries()?.into_iter().map(|(_, value)| value).collect())
    }

    /// Evaluates every computed entry.
    ///
    /// Failed entries are kept in the snapshot; their error is returned
    /// only when they are read.
    pub fn snapshot(&self) -> Snapshot {
        self.evaluate(self.computed.len())
    }

    /// Renders template text against a full snapshot.
    pub fn render(&self, source: &str) -> TemplateResult<String> {
        self.snapshot().render(&Template::parse(source)?)
    }

    fn evaluate(&self, count: usize) -> Snapshot {
        let mut snapshot = Snapshot::from_literals(self.literals.iter().cloned());
        for entry in &self.computed[..count] {
            let result = (entry.compute)(&snapshot);
            if let Err(error) = &result {
                trace!(entry = %entry.name, %error, "computed entry failed");
            }
            snapshot.record(entry.name.clone(), result);
        }
        snapshot
    }
}
