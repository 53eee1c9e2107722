//! # soot JSX Lowering (Native Core)
//!
//! Rewrites inline JSX element literals into `V()` factory calls that
//! build vnode descriptors at runtime.
//!
//! ## Lowering Invariants
//!
//! 1. **One flag per element**: every element resolves to exactly one
//!    numeric capability flag, derived from its tag name alone
//!    (`div` → 1, components → 8, `svg`/`input`/`textarea`/`select` →
//!    16/32/64/128).
//!
//! 2. **Positional call shape**: arguments are
//!    `V(flags, type, className, children, props, key, ref)` with trailing
//!    elision — `null` fills a gap only when a later argument follows, and
//!    trailing absent slots are omitted entirely.
//!
//! 3. **Components own their children**: a component's lowered children are
//!    relocated into a `children` entry of the props object; the positional
//!    children slot is never emitted for components.
//!
//! 4. **Prop order is source order**: generic properties (including spread
//!    entries) keep the attribute list's order, since object-literal
//!    override semantics depend on it.
//!
//! 5. **One hoist per module**: the first lowered element triggers exactly
//!    one factory binding insertion at the top of the module body; a
//!    configured `pragma` call target suppresses the insertion.
//!
//! The pass is a deterministic, total function of the input tree; the only
//! side effect is the one-time hoist.

mod attrs;
mod compile;
mod flags;
mod lowerer;
mod text;

#[cfg(test)]
mod lowering_tests;

pub use compile::{compile_jsx_internal, CompileResult, CompilerError, ImportSource, LowerOptions};
pub use flags::{classify_tag, is_component_tag, TagKind};
pub use lowerer::{VNodeLowerer, DEFAULT_IMPORT_SOURCE, FACTORY_NAME, RUNTIME_NAMESPACE};
pub use text::normalize_jsx_text;
