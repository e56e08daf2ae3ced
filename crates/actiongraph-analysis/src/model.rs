//! The relational model produced by analysis.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One declared side-effecting workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectRecord {
    #[serde(rename = "effect$")]
    pub effect: String,
    /// Triggering actions, in declaration order.
    pub causes: Vec<String>,
    pub dispatch: bool,
    /// Actions fed back into the stream; always empty when `dispatch` is false.
    pub effects: Vec<String>,
    /// Actions produced on the error-recovery path.
    pub errors: Vec<String>,
}

impl EffectRecord {
    pub fn new(effect: impl Into<String>) -> Self {
        Self {
            effect: effect.into(),
            causes: Vec::new(),
            dispatch: true,
            effects: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn causes<I, S>(mut self, causes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.causes = causes.into_iter().map(Into::into).collect();
        self
    }

    pub fn dispatch(mut self, dispatch: bool) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn effects<I, S>(mut self, effects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.effects = effects.into_iter().map(Into::into).collect();
        self
    }

    pub fn errors<I, S>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors = errors.into_iter().map(Into::into).collect();
        self
    }
}

/// One action consumed by one reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducerRecord {
    pub action: String,
    pub reducer: String,
}

impl ReducerRecord {
    pub fn new(action: impl Into<String>, reducer: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            reducer: reducer.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationalModel {
    pub actions: Vec<String>,
    #[serde(rename = "effects$")]
    pub effects: Vec<EffectRecord>,
    pub reducers: Vec<ReducerRecord>,
}

impl RelationalModel {
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.effects.is_empty() && self.reducers.is_empty()
    }
}

impl fmt::Display for RelationalModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Actions: {}", self.actions.len())?;
        writeln!(f, "Effects: {}", self.effects.len())?;
        writeln!(f, "Reducers: {}", self.reducers.len())?;

        for effect in &self.effects {
            let arrow = if effect.dispatch { "->" } else { "-|" };
            writeln!(
                f,
                "  {}: [{}] {} [{}]",
                effect.effect,
                effect.causes.join(", "),
                arrow,
                effect.effects.join(", ")
            )?;
            if !effect.errors.is_empty() {
                writeln!(f, "    catches: [{}]", effect.errors.join(", "))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_external_field_names() {
        let model = RelationalModel {
            actions: vec!["a".to_string()],
            effects: vec![EffectRecord::new("load$").causes(["a"]).effects(["b"])],
            reducers: vec![ReducerRecord::new("a", "reducer")],
        };
        let json = serde_json::to_value(&model).expect("serializable");

        assert_eq!(json["effects$"][0]["effect$"], "load$");
        assert_eq!(json["effects$"][0]["dispatch"], true);
        assert_eq!(json["reducers"][0]["reducer"], "reducer");
    }

    #[test]
    fn display_marks_non_dispatching_effects() {
        let model = RelationalModel {
            effects: vec![EffectRecord::new("log$").causes(["a"]).dispatch(false)],
            ..RelationalModel::default()
        };
        assert!(model.to_string().contains("log$: [a] -| []"));
    }
}
