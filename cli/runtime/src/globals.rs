use rquickjs::function::{Func, Rest};
use rquickjs::{Ctx, Module};
use std::collections::HashSet;
use std::error::Error;
use std::sync::{Mutex, OnceLock};

use crate::loader;

/// Modules already pulled in through `require`, by resolved path.
static LOADED_MODULES: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();

/// Attach the host surface the bootstrapped application relies on:
/// `scriptArgs`, `print`, `exit` and a `require` hook that loads modules
/// through the runtime's resolver.
pub fn attach(ctx: &Ctx<'_>, script_args: &[String]) -> Result<(), Box<dyn Error>> {
    // scriptArgs - the evaluated code's own argument list, verbatim
    let args_json = serde_json::to_string(script_args)?;
    ctx.eval::<(), _>(format!("globalThis.scriptArgs = {args_json};"))?;

    let globals = ctx.globals();

    globals.set(
        "print",
        Func::from(|parts: Rest<String>| {
            #[allow(clippy::print_stdout)] // Intentional: print() implementation
            {
                println!("{}", parts.0.join(" "));
            }
        }),
    )?;

    globals.set(
        "exit",
        Func::from(|code: Option<i32>| -> i32 {
            let exit_code = code.unwrap_or(0);
            std::process::exit(exit_code);
        }),
    )?;

    globals.set("require", Func::from(require))?;

    Ok(())
}

/// Load a module by logical name, once per process.
///
/// Returns `true` when the module was loaded by this call and `false`
/// when it had been loaded before, so repeated requires are cheap no-ops.
fn require(ctx: Ctx<'_>, specifier: String) -> rquickjs::Result<bool> {
    let path = loader::resolve_bare(&specifier)
        .ok_or_else(|| rquickjs::Error::new_resolving(specifier.clone(), "Module not found"))?;

    let loaded = LOADED_MODULES.get_or_init(|| Mutex::new(HashSet::new()));
    {
        let mut loaded = loaded.lock().map_err(|_| rquickjs::Error::Unknown)?;
        if !loaded.insert(path.clone()) {
            return Ok(false);
        }
    }

    let source = std::fs::read_to_string(&path)
        .map_err(|e| rquickjs::Error::new_loading_message(path.clone(), e.to_string()))?;

    Module::evaluate(ctx, path, source)?.finish::<()>()?;

    Ok(true)
}
