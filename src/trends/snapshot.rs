use std::collections::HashMap;

use crate::models::{LabParameter, LabReport};

/// Name-keyed lookup over one snapshot's parameters.
///
/// Built once per snapshot. Iteration order is the snapshot's own
/// insertion order (extraction order). Collision policy: the FIRST
/// occurrence of a duplicated name wins — deterministic, and it keeps
/// the entry a reader saw first in the rendered table.
pub struct ParameterIndex<'a> {
    by_name: HashMap<&'a str, &'a LabParameter>,
    order: Vec<&'a str>,
}

impl<'a> ParameterIndex<'a> {
    pub fn new(report: &'a LabReport) -> Self {
        let mut by_name = HashMap::with_capacity(report.parameters.len());
        let mut order = Vec::with_capacity(report.parameters.len());
        for param in &report.parameters {
            if !by_name.contains_key(param.name.as_str()) {
                by_name.insert(param.name.as_str(), param);
                order.push(param.name.as_str());
            }
        }
        Self { by_name, order }
    }

    pub fn get(&self, name: &str) -> Option<&'a LabParameter> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Unique parameter names in snapshot order.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.order.iter().copied()
    }

    /// (name, parameter) pairs in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a LabParameter)> + '_ {
        self.order.iter().map(move |name| (*name, self.by_name[name]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
