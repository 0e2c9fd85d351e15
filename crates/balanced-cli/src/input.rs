//! Collecting and reading the things to check.

use std::{
    fs,
    io::{self, Read},
    path::{Component, Path, PathBuf},
};

use glob::Pattern;

use crate::error::Error;

/// One string to run the checker on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A literal expression from `--expr`.
    Expr(String),
    /// A file on disk.
    File(PathBuf),
    /// Everything on standard input.
    Stdin,
}

impl Input {
    /// Name shown next to the verdict.
    pub fn label(&self) -> String {
        match self {
            Self::Expr(expr) => format!("{expr:?}"),
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "stdin".to_string(),
        }
    }

    /// Materialize the full text of this input.
    pub fn read(&self) -> Result<String, Error> {
        match self {
            Self::Expr(expr) => Ok(expr.clone()),
            Self::File(path) => Ok(fs::read_to_string(path)?),
            Self::Stdin => {
                let mut source = String::new();
                io::stdin().read_to_string(&mut source)?;
                Ok(source)
            }
        }
    }

    /// Read the input and check it.
    pub fn check(&self) -> Result<bool, Error> {
        let source = self.read()?;
        Ok(balanced_core::is_balanced(&source))
    }
}

fn has_glob_meta(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

/// Drop `.` components so `./vendor/a.txt` and `vendor/a.txt` compare equal.
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

fn is_excluded(path: &Path, excludes: &[Pattern]) -> bool {
    let path = normalize(path);
    excludes.iter().any(|pattern| pattern.matches_path(&path))
}

/// Expand path arguments into files, dropping excluded ones.
///
/// An argument naming an existing path is taken literally even if it
/// contains glob characters. Other arguments with glob characters are
/// expanded and must match at least one file.
pub fn expand_paths(args: &[String], excludes: &[Pattern]) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();

    for arg in args {
        if Path::new(arg).exists() || !has_glob_meta(arg) {
            let path = PathBuf::from(arg);
            if !is_excluded(&path, excludes) {
                files.push(path);
            }
            continue;
        }

        let entries = glob::glob(arg).map_err(|source| Error::Pattern {
            pattern: arg.clone(),
            source,
        })?;

        let mut matched = false;
        for entry in entries {
            let path = entry?;
            if !path.is_file() {
                continue;
            }
            matched = true;
            if !is_excluded(&path, excludes) {
                files.push(path);
            }
        }
        if !matched {
            return Err(Error::NoMatches(arg.clone()));
        }
    }

    Ok(files)
}

/// Build the ordered list of inputs: expressions, then files, then stdin.
pub fn collect(
    exprs: &[String],
    paths: &[String],
    stdin: bool,
    excludes: &[Pattern],
) -> Result<Vec<Input>, Error> {
    let mut inputs: Vec<Input> = exprs.iter().cloned().map(Input::Expr).collect();
    inputs.extend(expand_paths(paths, excludes)?.into_iter().map(Input::File));

    if stdin || (exprs.is_empty() && paths.is_empty()) {
        inputs.push(Input::Stdin);
    }

    Ok(inputs)
}
