// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Override of the generated entry/command directives.
//!
//! A manifest has at most one active `ENTRYPOINT` and one active `CMD`, so
//! overrides are a replacement list rather than a patch. The composer is
//! itself usable as an instruction: its keyword is blank and its text is
//! the members' text, one per line.

use jd_core::{ExecArgs, Instruction, ResolveError, LINE_SEPARATOR};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecInstructionComposer {
    instructions: Vec<Instruction>,
}

impl ExecInstructionComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an `ENTRYPOINT` with the given arguments.
    ///
    /// Accepts eager argument lists or a `Provider<Vec<String>>` that is
    /// only resolved when the text is produced. An empty list is allowed.
    pub fn entry_point(&mut self, args: impl Into<ExecArgs>) -> &mut Self {
        self.instructions.push(Instruction::EntryPoint(args.into()));
        self
    }

    /// Append a `CMD` with the given arguments. Same contract as [`Self::entry_point`].
    pub fn default_command(&mut self, args: impl Into<ExecArgs>) -> &mut Self {
        self.instructions.push(Instruction::Cmd(args.into()));
        self
    }

    /// Drop every registered instruction.
    pub fn clear(&mut self) {
        self.instructions.clear();
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Always blank: the composite is a container, not a directive.
    pub fn keyword(&self) -> &'static str {
        ""
    }

    /// Members' text in registration order, joined by the line separator.
    ///
    /// Deferred arguments are resolved here; the first failure is returned.
    pub fn text(&self) -> Result<String, ResolveError> {
        let lines =
            self.instructions.iter().map(Instruction::text).collect::<Result<Vec<_>, _>>()?;
        Ok(lines.join(LINE_SEPARATOR))
    }
}

impl From<&ExecInstructionComposer> for Instruction {
    fn from(composer: &ExecInstructionComposer) -> Self {
        Instruction::Composite(composer.instructions.clone())
    }
}

#[cfg(test)]
#[path = "composer_tests.rs"]
mod tests;
