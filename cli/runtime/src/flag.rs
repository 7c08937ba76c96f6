use clap_lex::RawArgs;
use std::error::Error;

#[derive(Debug, PartialEq)]
pub struct Invocation {
    pub mode: Mode,
    pub script_args: Vec<String>,
}

#[derive(Debug, PartialEq)]
pub enum Mode {
    Eval { source: String },
    Script { path: String },
}

/// Scan an interpreter argument vector.
///
/// The vector carries no program name: element 0 is already the first
/// real token. Everything after the expression or script path is an
/// opaque script argument and is collected verbatim, so a trailing `-e`
/// belongs to the script, not to the runtime.
pub fn parse_args(args: &[String]) -> Result<Invocation, Box<dyn Error>> {
    let raw = RawArgs::new(args.iter().cloned());
    let mut cursor = raw.cursor();

    let mut mode: Option<Mode> = None;

    while let Some(arg) = raw.next(&mut cursor) {
        if let Ok(value) = arg.to_value() {
            match value {
                "-e" => {
                    let source = raw
                        .next(&mut cursor)
                        .and_then(|expr| expr.to_value().ok().map(ToString::to_string))
                        .ok_or("an expression is required after -e")?;
                    mode = Some(Mode::Eval { source });
                    break;
                }
                _ if !value.starts_with('-') => {
                    mode = Some(Mode::Script {
                        path: value.to_string(),
                    });
                    break;
                }
                _ => {
                    return Err(format!("unknown option: {value}").into());
                }
            }
        }
    }

    let mode = mode.ok_or("a script path or a -e expression is required")?;

    // Everything left over belongs to the script
    let mut script_args = Vec::new();
    while let Some(arg) = raw.next(&mut cursor) {
        if let Ok(value) = arg.to_value() {
            script_args.push(value.to_string());
        }
    }

    Ok(Invocation { mode, script_args })
}
