use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner, Invocation};

#[derive(Debug, Clone)]
enum Scripted {
    Output(CommandOutput),
    SpawnError,
}

/// Command runner answering from a script keyed by command line.
///
/// Unscripted commands succeed with empty output.
#[derive(Debug, Default)]
pub struct FakeCommandRunner {
    script: Mutex<Vec<(String, Scripted)>>,
    calls: Mutex<Vec<Invocation>>,
    detached: Mutex<Vec<Invocation>>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, command_line: &str, output: CommandOutput) -> Self {
        self.script.lock().unwrap().push((command_line.to_string(), Scripted::Output(output)));
        self
    }

    pub fn fail(self, command_line: &str, stderr: &str) -> Self {
        self.respond(command_line, CommandOutput::failed(1, stderr))
    }

    pub fn fail_to_spawn(self, command_line: &str) -> Self {
        self.script.lock().unwrap().push((command_line.to_string(), Scripted::SpawnError));
        self
    }

    /// Command lines run to completion, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(Invocation::command_line).collect()
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    /// Command lines started with `spawn_detached`.
    pub fn detached(&self) -> Vec<String> {
        self.detached.lock().unwrap().iter().map(Invocation::command_line).collect()
    }

    pub fn was_called(&self, command_line: &str) -> bool {
        self.calls().iter().any(|call| call == command_line)
    }
}

#[async_trait]
impl CommandRunner for FakeCommandRunner {
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput, AppError> {
        self.calls.lock().unwrap().push(invocation.clone());

        let command_line = invocation.command_line();
        let scripted = self
            .script
            .lock()
            .unwrap()
            .iter()
            .find(|(line, _)| *line == command_line)
            .map(|(_, scripted)| scripted.clone());

        match scripted {
            Some(Scripted::Output(output)) => Ok(output),
            Some(Scripted::SpawnError) => Err(AppError::CommandSpawn {
                command: command_line,
                details: "No such file or directory".to_string(),
            }),
            None => Ok(CommandOutput::ok("")),
        }
    }

    fn spawn_detached(&self, invocation: &Invocation) -> Result<(), AppError> {
        self.detached.lock().unwrap().push(invocation.clone());
        Ok(())
    }
}
