use deno_terminal::colors;
use std::error::Error;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", colors::red_bold("error"), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let host_args: Vec<String> = std::env::args().skip(1).collect();

    // Everything the launcher does: prepend the two bootstrap tokens and
    // hand the process over to the embedded runtime. Output, error
    // reporting and the eventual exit status belong to the runtime from
    // here on.
    let runtime_args = qlaunch::argv::interpreter_args(&host_args);
    qlaunch_runtime::run(&runtime_args)
}
