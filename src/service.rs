use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::error::CommandError;
use crate::tree::{Key, Tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Search(Key),
    Insert(Key),
    Delete(Key),
}

impl Command {
    /// Parses `search <int>`, `insert <int>` or `delete <int>`.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;
        let verb = verb.to_ascii_lowercase();
        let command: fn(Key) -> Command = match verb.as_str() {
            "search" => Command::Search,
            "insert" => Command::Insert,
            "delete" => Command::Delete,
            _ => return Err(CommandError::UnknownCommand(verb)),
        };
        let value = words.next().ok_or(CommandError::MissingValue(verb))?;
        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(CommandError::TrailingInput(rest.join(" ")));
        }
        Ok(command(value.parse()?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<bool>,
}

impl Response {
    fn ok(data: Option<bool>) -> Self {
        Response {
            success: true,
            message: "OK".into(),
            data,
        }
    }

    fn failure(error: impl std::error::Error) -> Self {
        Response {
            success: false,
            message: error.to_string(),
            data: None,
        }
    }
}

/// Owns the tree and answers one command at a time.
pub struct Service {
    tree: Tree,
}

impl Service {
    pub fn new(tree: Tree) -> Self {
        Service { tree }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn handle(&mut self, command: Command) -> Response {
        log::debug!("handling {:?}", command);
        let result = match command {
            Command::Search(key) => return Response::ok(Some(self.tree.search(key))),
            Command::Insert(key) => self.tree.insert(key),
            Command::Delete(key) => self.tree.delete(key),
        };
        match result {
            Ok(()) => Response::ok(None),
            Err(e) => Response::failure(e),
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Response {
        match Command::parse(line) {
            Ok(command) => self.handle(command),
            Err(e) => Response::failure(e),
        }
    }
}

/// Answers each non-blank input line with one JSON response line, flushing
/// after every response.
pub fn run<R: BufRead, W: Write>(
    service: &mut Service,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = service.handle_line(&line);
        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
        output.flush()?;
    }
    Ok(())
}
