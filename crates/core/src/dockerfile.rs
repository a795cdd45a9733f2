// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered instruction list serialized as a Dockerfile.

use crate::error::ResolveError;
use crate::instruction::{ExecArgs, Instruction, LINE_SEPARATOR};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dockerfile {
    instructions: Vec<Instruction>,
}

impl Dockerfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn instruction(&mut self, instruction: impl Into<Instruction>) -> &mut Self {
        self.instructions.push(instruction.into());
        self
    }

    pub fn from(&mut self, image: impl Into<String>) -> &mut Self {
        self.instruction(Instruction::from_image(image))
    }

    pub fn label(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.instruction(Instruction::label(key, value))
    }

    pub fn work_dir(&mut self, path: impl Into<String>) -> &mut Self {
        self.instruction(Instruction::WorkDir(path.into()))
    }

    pub fn copy(&mut self, src: impl Into<String>, dest: impl Into<String>) -> &mut Self {
        self.instruction(Instruction::copy(src, dest))
    }

    pub fn expose(&mut self, ports: impl IntoIterator<Item = u16>) -> &mut Self {
        self.instruction(Instruction::Expose(ports.into_iter().collect()))
    }

    pub fn entry_point(&mut self, args: impl Into<ExecArgs>) -> &mut Self {
        self.instruction(Instruction::EntryPoint(args.into()))
    }

    pub fn cmd(&mut self, args: impl Into<ExecArgs>) -> &mut Self {
        self.instruction(Instruction::Cmd(args.into()))
    }

    /// Render every instruction on its own line.
    ///
    /// Empty instructions (see [`Instruction::is_empty`]) produce no line. The first unresolved
    /// deferred value aborts rendering.
    pub fn render(&self) -> Result<String, ResolveError> {
        let mut out = String::new();
        for instruction in &self.instructions {
            if instruction.is_empty() {
                continue;
            }
            out.push_str(&instruction.text()?);
            out.push_str(LINE_SEPARATOR);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "dockerfile_tests.rs"]
mod tests;
