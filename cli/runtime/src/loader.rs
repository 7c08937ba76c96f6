use rquickjs::loader::{Loader, Resolver};
use rquickjs::{Ctx, Error, Module, Result};
use std::path::{Path, PathBuf};

/// Resolves module specifiers for the bootstrapped application.
///
/// Bare specifiers such as `lib/application_bootstrap` are looked up
/// against the search roots (the directory holding the executable, then
/// the current working directory), so the application loads no matter
/// where the process was started from. Relative specifiers resolve
/// against the importing module.
#[derive(Default)]
pub struct AppResolver;

impl Resolver for AppResolver {
    fn resolve(&mut self, _ctx: &Ctx, base: &str, name: &str) -> Result<String> {
        // Handle relative paths (./xxx or ../xxx)
        if name.starts_with("./") || name.starts_with("../") {
            let base_path = Path::new(base);
            let base_dir = if base_path.is_file() {
                base_path.parent().unwrap_or(Path::new("."))
            } else {
                base_path
            };

            if let Some(path) = try_resolve_file(&base_dir.join(name)) {
                return Ok(path);
            }

            return Err(Error::new_resolving(name, "Module not found"));
        }

        resolve_bare(name).ok_or_else(|| Error::new_resolving(name, "Module not found"))
    }
}

/// Loads resolved modules from the file system.
#[derive(Default)]
pub struct AppLoader;

impl Loader for AppLoader {
    fn load<'js>(&mut self, ctx: &Ctx<'js>, name: &str) -> Result<Module<'js>> {
        let path = Path::new(name);
        if path.exists() && path.is_file() {
            let source = std::fs::read_to_string(path)
                .map_err(|e| Error::new_loading_message(name, e.to_string()))?;

            return Module::declare(ctx.clone(), name, source);
        }

        Err(Error::new_loading(name))
    }
}

/// Resolve a bare specifier against the search roots.
pub(crate) fn resolve_bare(specifier: &str) -> Option<String> {
    for root in search_roots() {
        if let Some(path) = try_resolve_file(&root.join(specifier)) {
            return Some(path);
        }
    }
    None
}

fn search_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            roots.push(dir.to_path_buf());
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    roots
}

fn try_resolve_file(path: &Path) -> Option<String> {
    // Try the exact path first, then with a .js extension
    if path.exists() && path.is_file() {
        return path.to_str().map(ToString::to_string);
    }

    let with_ext = path.with_extension("js");
    if with_ext.exists() && with_ext.is_file() {
        return with_ext.to_str().map(ToString::to_string);
    }

    None
}
