use hashbrown::HashMap;
use serde::Deserialize;

use crate::clip::Clip;
use crate::error::{FlipbookError, Result};
use crate::graph::StateGraph;
use crate::ids::{ClipId, ParamId, StateId};
use crate::parameter::Parameter;
use crate::transition::Transition;

/// Public API: parse a name-referenced controller document into a validated [`StateGraph`].
///
/// Notes:
/// - Clips, states and parameters are declared once each and referenced by name.
/// - Every transition naming the same parameter shares one `ParamId`.
/// - `defaultState` is optional; the first declared state is used when absent.
/// - Transitions without `parameter` are kept and never fire.
pub fn parse_stored_controller_json(s: &str) -> Result<StateGraph> {
    let stored: StoredController = serde_json::from_str(s)?;
    stored.into_graph()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredController {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    default_state: Option<String>,
    #[serde(default)]
    parameters: Vec<StoredParameter>,
    clips: Vec<Clip>,
    states: Vec<StoredState>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum StoredParameterKind {
    Bool,
    Trigger,
}

#[derive(Debug, Deserialize)]
struct StoredParameter {
    name: String,
    kind: StoredParameterKind,
    #[serde(default)]
    value: bool,
}

#[derive(Debug, Deserialize)]
struct StoredState {
    name: String,
    clip: String,
    #[serde(default)]
    transitions: Vec<StoredTransition>,
}

#[derive(Debug, Deserialize)]
struct StoredTransition {
    #[serde(default)]
    parameter: Option<String>,
    target: String,
    #[serde(default)]
    condition: bool,
}

fn index_names<'a, T: Copy>(
    kind: &'static str,
    names: impl Iterator<Item = &'a str>,
    make_id: impl Fn(usize) -> T,
) -> Result<HashMap<&'a str, T>> {
    let mut map = HashMap::new();
    for (i, name) in names.enumerate() {
        if map.insert(name, make_id(i)).is_some() {
            return Err(FlipbookError::DuplicateName {
                kind,
                name: name.to_string(),
            });
        }
    }
    Ok(map)
}

fn resolve<T: Copy>(map: &HashMap<&str, T>, kind: &'static str, name: &str) -> Result<T> {
    map.get(name)
        .copied()
        .ok_or_else(|| FlipbookError::UnresolvedName {
            kind,
            name: name.to_string(),
        })
}

impl StoredController {
    fn into_graph(self) -> Result<StateGraph> {
        let clip_ids = index_names("clip", self.clips.iter().map(|c| c.name.as_str()), |i| {
            ClipId(i as u32)
        })?;
        let param_ids = index_names(
            "parameter",
            self.parameters.iter().map(|p| p.name.as_str()),
            |i| ParamId(i as u32),
        )?;
        let state_ids = index_names("state", self.states.iter().map(|s| s.name.as_str()), |i| {
            StateId(i as u32)
        })?;

        // Resolve every reference before the graph takes ownership of anything.
        let mut wiring: Vec<(ClipId, Vec<Transition>)> = Vec::with_capacity(self.states.len());
        for st in &self.states {
            let clip = resolve(&clip_ids, "clip", &st.clip)?;
            let mut transitions = Vec::with_capacity(st.transitions.len());
            for t in &st.transitions {
                let parameter = match &t.parameter {
                    Some(name) => Some(resolve(&param_ids, "parameter", name)?),
                    None => None,
                };
                transitions.push(Transition {
                    parameter,
                    target: resolve(&state_ids, "state", &t.target)?,
                    bool_condition: t.condition,
                });
            }
            wiring.push((clip, transitions));
        }
        let default_state = match &self.default_state {
            Some(name) => Some(resolve(&state_ids, "state", name)?),
            None => None,
        };
        let state_names: Vec<String> = self.states.iter().map(|s| s.name.clone()).collect();
        drop(clip_ids);
        drop(param_ids);
        drop(state_ids);

        let mut graph = StateGraph::new();
        for clip in self.clips {
            graph.add_clip(clip);
        }
        for p in self.parameters {
            graph.add_parameter(match p.kind {
                StoredParameterKind::Bool => Parameter::bool(&p.name, p.value),
                StoredParameterKind::Trigger => Parameter::trigger(&p.name),
            });
        }
        for (name, (clip, transitions)) in state_names.iter().zip(wiring) {
            let id = graph.add_state(name, clip);
            for t in transitions {
                graph.add_transition(id, t)?;
            }
        }
        if let Some(d) = default_state {
            graph.set_default_state(d);
        }
        graph.validate()?;
        log::debug!(
            "loaded controller '{}' with {} states",
            self.name.as_deref().unwrap_or("<unnamed>"),
            state_names.len()
        );
        Ok(graph)
    }
}
