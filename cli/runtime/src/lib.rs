use rquickjs::{CatchResultExt, CaughtError, Context, Module, Runtime};
use std::error::Error;
use std::path::Path;

mod flag;
mod globals;
mod loader;

pub use flag::{Invocation, Mode};

/// Entry point of the embedded runtime.
///
/// `args` is a plain interpreter argument vector with no program name in
/// front: `-e <expr> [args...]` evaluates an inline expression, while
/// `<path> [args...]` runs a script file. Everything after the expression
/// or path is exposed to the evaluated code as `scriptArgs`, verbatim.
///
/// Once evaluation starts, the runtime owns the process: a
/// script-requested exit or an uncaught error terminates it directly.
///
/// # Errors
/// Returns an error only when the runtime cannot be brought up at all:
/// a bad invocation, an interpreter initialization failure, or an
/// unreadable script file.
pub fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let invocation = flag::parse_args(args)?;

    match invocation.mode {
        Mode::Eval { source } => evaluate(&source, "./$qlaunch$eval.js", invocation.script_args),
        Mode::Script { path } => {
            let file_path = absolute_path(&path)?;
            let source = std::fs::read_to_string(&file_path)?;
            evaluate(&source, &file_path, invocation.script_args)
        }
    }
}

fn evaluate(source: &str, file_path: &str, script_args: Vec<String>) -> Result<(), Box<dyn Error>> {
    let runtime = Runtime::new()?;

    // Set module loader before creating context
    runtime.set_loader(loader::AppResolver::default(), loader::AppLoader::default());

    let context = Context::full(&runtime)?;

    context.with(|ctx| -> Result<(), Box<dyn Error>> {
        globals::attach(&ctx, &script_args)?;

        let result =
            Module::evaluate(ctx.clone(), file_path, source).and_then(|m| m.finish::<()>());

        if let Err(caught) = result.catch(&ctx) {
            handle_error(&caught);
            std::process::exit(1);
        }

        // Execute all pending jobs (promises, microtasks)
        loop {
            let has_pending_job = ctx.execute_pending_job();

            // Check for exceptions after each job execution
            let exception_value = ctx.catch();
            if let Some(exception) = exception_value.into_exception() {
                handle_error(&CaughtError::Exception(exception));
                std::process::exit(1);
            }

            if !has_pending_job {
                break;
            }
        }

        Ok(())
    })?;

    Ok(())
}

fn absolute_path(path: &str) -> Result<String, Box<dyn Error>> {
    let path = Path::new(path);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(absolute.display().to_string())
}

fn handle_error(caught: &CaughtError) {
    match caught {
        CaughtError::Exception(exception) => {
            if let Some(message) = exception.message() {
                eprintln!("Error: {message}");
            } else {
                eprintln!("Error: Exception (no message)");
            }
            if let Some(stack) = exception.stack() {
                eprintln!("{stack}");
            }
        }
        CaughtError::Value(value) => {
            eprintln!("Error: {value:?}");
        }
        CaughtError::Error(error) => {
            eprintln!("Error: {error:?}");
        }
    }
}
