// taskchime-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for unit tests and when the "test-mocks" feature is enabled.

use super::{CommandRunner, PlayerCommand};
use crate::error::{CoreError, CoreResult};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Scripted result for one expected call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Success,
    /// Player ran and exited with the given code and stderr text.
    Exit { code: i32, stderr: String },
    /// Player binary could not be found.
    NotFound,
}

/// Mock implementation of CommandRunner.
///
/// Outcomes are consumed in the order they were added. A call with no
/// outcome left panics, which makes an unexpected spawn fail the test.
#[derive(Clone, Default)]
pub struct MockCommandRunner {
    outcomes: Rc<RefCell<VecDeque<MockOutcome>>>,
    received_calls: Rc<RefCell<Vec<PlayerCommand>>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Default::default()
    }

    /// Runner whose calls all return the given outcomes in order.
    pub fn with_outcomes(outcomes: impl IntoIterator<Item = MockOutcome>) -> Self {
        let runner = Self::new();
        runner.outcomes.borrow_mut().extend(outcomes);
        runner
    }

    pub fn add_success(&self) {
        self.outcomes.borrow_mut().push_back(MockOutcome::Success);
    }

    pub fn add_exit_error(&self, code: i32, stderr: &str) {
        self.outcomes.borrow_mut().push_back(MockOutcome::Exit {
            code,
            stderr: stderr.to_string(),
        });
    }

    pub fn add_not_found(&self) {
        self.outcomes.borrow_mut().push_back(MockOutcome::NotFound);
    }

    pub fn get_received_calls(&self) -> Vec<PlayerCommand> {
        self.received_calls.borrow().clone()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, command: &PlayerCommand) -> CoreResult<()> {
        self.received_calls.borrow_mut().push(command.clone());

        let outcome = self.outcomes.borrow_mut().pop_front();
        match outcome {
            Some(MockOutcome::Success) => {
                log::info!("MockCommandRunner: simulating success for '{}'", command);
                Ok(())
            }
            Some(MockOutcome::Exit { code, stderr }) => {
                log::info!("MockCommandRunner: simulating exit {} for '{}'", code, command);
                Err(CoreError::CommandFailed {
                    command: command.to_string(),
                    code,
                    stderr,
                })
            }
            Some(MockOutcome::NotFound) => Err(CoreError::PlayerNotFound(command.program.clone())),
            None => {
                log::error!("MockCommandRunner: no outcome left for command '{}'", command);
                panic!("MockCommandRunner: no outcome left for command '{}'", command);
            }
        }
    }
}
