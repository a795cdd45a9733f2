// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

pub use crate::environment::FakeEnvironment;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for manifest types.
pub mod strategies {
    use crate::instruction::Instruction;
    use proptest::prelude::*;

    /// Short printable argument, the shape real exec arguments take.
    pub fn arb_arg() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_./:=-]{1,12}"
    }

    pub fn arb_args() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec(arb_arg(), 0..5)
    }

    /// An eager `ENTRYPOINT` or `CMD`.
    pub fn arb_exec_instruction() -> impl Strategy<Value = Instruction> {
        prop_oneof![
            arb_args().prop_map(|args| Instruction::EntryPoint(args.into())),
            arb_args().prop_map(|args| Instruction::Cmd(args.into())),
        ]
    }

    pub fn arb_ports() -> impl Strategy<Value = Vec<u16>> {
        proptest::collection::vec(1u16..=65535, 0..4)
    }
}

// ── Fixtures ────────────────────────────────────────────────────────────

/// Environment for a user named `tester`.
pub fn tester_env() -> FakeEnvironment {
    FakeEnvironment::with_user("tester")
}
