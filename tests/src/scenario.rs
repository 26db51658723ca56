//! Scenario definition and runner.

use tabula_graph::Graph;
use tabula_session::{Session, SessionConfig, SessionResult};
use tracing::info_span;

use crate::assertion::Expect;
use crate::error::ScenarioResult;

type Action = Box<dyn Fn(&mut Session) -> SessionResult<()>>;

/// One named step: an action against the session plus what it should leave behind.
pub struct Step {
    pub name: String,
    action: Action,
    pub expect: Expect,
}

/// A sequence of steps run against one session.
pub struct Scenario {
    name: String,
    graph: Graph,
    config: SessionConfig,
    steps: Vec<Step>,
}

impl Scenario {
    /// Create a scenario starting from an empty graph.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graph: Graph::new(),
            config: SessionConfig::default(),
            steps: Vec::new(),
        }
    }

    /// Start from `graph` instead of an empty one.
    pub fn graph(mut self, graph: Graph) -> Self {
        self.graph = graph;
        self
    }

    /// Operation defaults for the session.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a step.
    pub fn step<A, E>(mut self, name: &str, action: A, expect: E) -> Self
    where
        A: Fn(&mut Session) -> SessionResult<()> + 'static,
        E: FnOnce(Expect) -> Expect,
    {
        self.steps.push(Step {
            name: name.to_string(),
            action: Box::new(action),
            expect: expect(Expect::new()),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run every step in order, stopping at the first failed assertion.
    ///
    /// Returns the session so callers can inspect the final state.
    pub fn run(self) -> ScenarioResult<Session> {
        crate::fixtures::init_tracing();
        let _span = info_span!("scenario", name = %self.name).entered();

        let mut session = Session::with_graph(1, self.graph);
        *session.config_mut() = self.config;

        for step in &self.steps {
            let result = (step.action)(&mut session).map_err(|e| e.to_string());
            step.expect.verify(&step.name, &result, &session)?;
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::EdgeId;

    #[test]
    fn test_steps_run_in_order() {
        let scenario = Scenario::new("select")
            .graph(crate::fixtures::roads())
            .step(
                "select",
                |s| Ok(s.select_edges([EdgeId::new(2)])?),
                |e| e.selection(Some(vec![2])),
            )
            .step(
                "drop",
                |s| {
                    s.drop_selection();
                    Ok(())
                },
                |e| e.selection(None).valid(),
            );

        assert_eq!(scenario.steps().len(), 2);
        assert!(scenario.run().is_ok());
    }
}
