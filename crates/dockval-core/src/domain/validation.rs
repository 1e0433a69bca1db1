//! The rule engine: [`ValidationRule`], [`Validator`] and [`ValidationErrors`].
//!
//! A rule checks one value and returns `Some(message)` when it fails. A
//! validator runs its rules in insertion order and stops at the first
//! message, so later rules may assume the earlier ones passed.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single check over one value.
///
/// Any `Fn(&T) -> Option<String>` is a rule, so most rules are closures
/// returned by the factories in [`crate::domain::rules`].
pub trait ValidationRule<T: ?Sized> {
    /// `None` when the value passes, otherwise the failure message.
    fn validate(&self, value: &T) -> Option<String>;
}

impl<T, F> ValidationRule<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> Option<String>,
{
    fn validate(&self, value: &T) -> Option<String> {
        self(value)
    }
}

/// Ordered, short-circuiting chain of rules for one field.
pub struct Validator<T: ?Sized> {
    rules: Vec<Box<dyn ValidationRule<T>>>,
}

impl<T: ?Sized> Validator<T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. Rules run in the order they were added.
    pub fn add_rule<R>(mut self, rule: R) -> Self
    where
        R: ValidationRule<T> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// First failure message, or `None` if every rule passes.
    pub fn validate(&self, value: &T) -> Option<String> {
        self.rules.iter().find_map(|rule| rule.validate(value))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: ?Sized> Default for Validator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules.len())
            .finish()
    }
}

// A validator nests inside another validator as a single rule.
impl<T: ?Sized> ValidationRule<T> for Validator<T> {
    fn validate(&self, value: &T) -> Option<String> {
        Validator::validate(self, value)
    }
}

/// Field key to the first failure message for that field.
///
/// Only failed fields have an entry. An empty map means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure, replacing any earlier message for the field.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// `true` when no field failed.
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
