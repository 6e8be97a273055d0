//! The compiler trait.

use takin_config::BundleConfig;

use crate::result::CompileResult;
use crate::Result;

/// Callback receiving each compile result.
///
/// One-shot compilers invoke it exactly once; watch-mode compilers invoke it
/// once per rebuild. Each invocation is independent, so the callback must be
/// reentrant in the sense of holding no state it cannot rebuild per call.
pub type ResultCallback<'a> = dyn FnMut(CompileResult) + 'a;

/// The external compiler seam.
///
/// Implementations take the configuration by value: ownership transfers at
/// the call and the configuration is never mutated afterwards. The call
/// blocks until the compiler is done delivering results; there is no
/// cancellation primitive, so ending a watch-mode compile is a process
/// lifecycle concern outside this seam.
pub trait Compiler {
    /// Compile with `config`, delivering every result through `on_result`.
    ///
    /// An `Err` means the compiler could not be driven at all (launch,
    /// handoff, or protocol failure); a compile that fails is still an `Ok`
    /// whose result carries the failure.
    fn compile(&self, config: BundleConfig, on_result: &mut ResultCallback<'_>) -> Result<()>;
}
