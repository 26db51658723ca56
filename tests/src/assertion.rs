//! Assertion types and builders for verifying step results.

use tabula_core::{EntityKind, Value};
use tabula_session::Session;

use crate::error::{ScenarioError, ScenarioResult};

/// What a step should leave behind.
#[derive(Debug, Default)]
pub struct Expect {
    columns: Vec<(EntityKind, String, Vec<Value>)>,
    absent: Vec<(EntityKind, String)>,
    log_len: Option<usize>,
    selection: Option<Option<Vec<u64>>>,
    valid: bool,
    error: Option<String>,
    error_pattern: Option<String>,
}

impl Expect {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Column `name` of the `kind` table holds exactly `values`, in row order.
    pub fn column(mut self, kind: EntityKind, name: &str, values: Vec<Value>) -> Self {
        self.columns.push((kind, name.to_string(), values));
        self
    }

    /// Edge column shorthand.
    pub fn edge_column(self, name: &str, values: Vec<Value>) -> Self {
        self.column(EntityKind::Edge, name, values)
    }

    /// Node column shorthand.
    pub fn node_column(self, name: &str, values: Vec<Value>) -> Self {
        self.column(EntityKind::Node, name, values)
    }

    /// The `kind` table has no column `name`.
    pub fn no_column(mut self, kind: EntityKind, name: &str) -> Self {
        self.absent.push((kind, name.to_string()));
        self
    }

    /// The audit log has `n` entries.
    pub fn log_len(mut self, n: usize) -> Self {
        self.log_len = Some(n);
        self
    }

    /// The selection members, or `None` for no selection.
    pub fn selection(mut self, members: Option<Vec<u64>>) -> Self {
        self.selection = Some(members);
        self
    }

    /// The graph passes structural validation.
    pub fn valid(mut self) -> Self {
        self.valid = true;
        self
    }

    /// The step fails with a message containing `text`.
    pub fn error(mut self, text: &str) -> Self {
        self.error = Some(text.to_string());
        self
    }

    /// The step fails with a message matching `pattern`.
    pub fn error_matching(mut self, pattern: &str) -> Self {
        self.error_pattern = Some(pattern.to_string());
        self
    }

    /// Verify the assertion against a step's result and the session after it.
    pub fn verify(
        &self,
        step: &str,
        result: &Result<(), String>,
        session: &Session,
    ) -> ScenarioResult<()> {
        self.verify_outcome(step, result)?;
        self.verify_graph(step, session)
    }

    fn verify_outcome(&self, step: &str, result: &Result<(), String>) -> ScenarioResult<()> {
        if let Some(ref expected) = self.error {
            return match result {
                Err(msg) if msg.contains(expected.as_str()) => Ok(()),
                Err(msg) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error containing '{}', got: {}", expected, msg),
                )),
                Ok(()) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error containing '{}', but step succeeded", expected),
                )),
            };
        }

        if let Some(ref pattern) = self.error_pattern {
            let re = regex_lite::Regex::new(pattern).map_err(|e| {
                ScenarioError::assertion_failed(step, format!("invalid regex pattern: {}", e))
            })?;
            return match result {
                Err(msg) if re.is_match(msg) => Ok(()),
                Err(msg) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error matching '{}', got: {}", pattern, msg),
                )),
                Ok(()) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error matching '{}', but step succeeded", pattern),
                )),
            };
        }

        result
            .as_ref()
            .map(|_| ())
            .map_err(|msg| ScenarioError::step_failed(step, msg.clone()))
    }

    fn verify_graph(&self, step: &str, session: &Session) -> ScenarioResult<()> {
        let graph = session.graph();

        for (kind, name, expected) in &self.columns {
            let actual = match kind {
                EntityKind::Node => graph.nodes().column(name),
                EntityKind::Edge => graph.edges().column(name),
            };
            match actual {
                Some(ref values) if values == expected => {}
                Some(values) => {
                    return Err(ScenarioError::assertion_failed(
                        step,
                        format!(
                            "{} column '{}': expected {:?}, got {:?}",
                            kind, name, expected, values
                        ),
                    ))
                }
                None => {
                    return Err(ScenarioError::assertion_failed(
                        step,
                        format!("{} column '{}' does not exist", kind, name),
                    ))
                }
            }
        }

        for (kind, name) in &self.absent {
            let present = match kind {
                EntityKind::Node => graph.nodes().has_column(name),
                EntityKind::Edge => graph.edges().has_column(name),
            };
            if present {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("{} column '{}' should not exist", kind, name),
                ));
            }
        }

        if let Some(expected) = self.log_len {
            if graph.log().len() != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} log entries, got {}", expected, graph.log().len()),
                ));
            }
        }

        if let Some(ref expected) = self.selection {
            let actual = graph.selection_members();
            if &actual != expected {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected selection {:?}, got {:?}", expected, actual),
                ));
            }
        }

        if self.valid {
            graph.validate().map_err(|e| {
                ScenarioError::assertion_failed(step, format!("graph is invalid: {}", e))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::roads;

    #[test]
    fn test_column_mismatch_is_reported() {
        let session = Session::with_graph(1, roads());
        let expect = Expect::new().edge_column("width", vec![Value::Null; 3]);

        let err = expect.verify("check", &Ok(()), &session).unwrap_err();

        assert!(err.to_string().contains("edge column 'width'"));
    }

    #[test]
    fn test_expected_error_must_occur() {
        let session = Session::with_graph(1, roads());

        assert!(Expect::new().error("boom").verify("s", &Ok(()), &session).is_err());
        assert!(Expect::new()
            .error_matching(r"no \w+ selection is active")
            .verify("s", &Err("no edge selection is active".into()), &session)
            .is_ok());
    }

    #[test]
    fn test_unexpected_error_fails_the_step() {
        let session = Session::with_graph(1, roads());

        let err = Expect::new()
            .verify("s", &Err("nope".into()), &session)
            .unwrap_err();

        assert!(matches!(err, ScenarioError::StepFailed { .. }));
    }
}
