//! Construction of the argument vector handed to the embedded runtime.

/// Flag telling the runtime to evaluate an inline expression instead of
/// loading a script file by path.
pub const EVAL_FLAG: &str = "-e";

/// Logical name of the application's entry module. Resolved through the
/// runtime's own module lookup, never as a literal file path.
pub const BOOTSTRAP_MODULE: &str = "lib/application_bootstrap";

/// Expression the runtime evaluates to pull in the bootstrap module.
///
/// Loading through `require` keeps the launcher independent of where the
/// process was started from: the runtime's module resolution locates the
/// application, not a hardcoded path on the command line.
pub const BOOTSTRAP_REQUIRE: &str = "require('lib/application_bootstrap')";

/// Build the interpreter argument vector: the two fixed bootstrap tokens
/// followed by every host argument, unchanged and in order.
pub fn interpreter_args(host_args: &[String]) -> Vec<String> {
    let mut args = Vec::with_capacity(2 + host_args.len());
    args.push(EVAL_FLAG.to_string());
    args.push(BOOTSTRAP_REQUIRE.to_string());
    args.extend(host_args.iter().cloned());
    args
}
