//! Name → parameter lookup used at the controller boundary.
//!
//! Populated once from the transitions of every state; parameters that no transition
//! references never become settable by name.

use hashbrown::HashMap;

use crate::graph::StateGraph;
use crate::ids::ParamId;

#[derive(Clone, Debug, Default)]
pub struct ParameterRegistry {
    by_name: HashMap<String, ParamId>,
}

impl ParameterRegistry {
    /// Scan states and their transitions in declared order. When two distinct parameters
    /// share a name the first one encountered is kept.
    pub fn build(graph: &StateGraph) -> Self {
        let mut by_name: HashMap<String, ParamId> = HashMap::new();
        for (_, state) in graph.states() {
            for t in &state.transitions {
                let Some(id) = t.parameter else { continue };
                let Some(param) = graph.parameter(id) else {
                    continue;
                };
                if let Some(existing) = by_name.get(&param.name) {
                    if *existing != id {
                        log::debug!(
                            "parameter name '{}' is shared by {:?} and {:?}; keeping {:?}",
                            param.name,
                            existing,
                            id,
                            existing
                        );
                    }
                    continue;
                }
                by_name.insert(param.name.clone(), id);
            }
        }
        Self { by_name }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<ParamId> {
        self.by_name.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
