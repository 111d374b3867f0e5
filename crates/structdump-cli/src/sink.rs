//! Report sink: where rendered lines end up.

use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    /// Standard output.
    Console,
    /// A file, created or truncated.
    File(PathBuf),
}

#[derive(Debug)]
pub enum SinkError {
    /// The output file could not be created.
    Open { path: PathBuf, source: io::Error },
    /// Writing or flushing failed.
    Write { target: String, source: io::Error },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Open { path, .. } => write!(f, "cannot open {} for writing", path.display()),
            SinkError::Write { target, .. } => write!(f, "cannot write to {target}"),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SinkError::Open { source, .. } | SinkError::Write { source, .. } => Some(source),
        }
    }
}

/// Writes every non-empty line followed by `\n`. Returns the number of lines written.
pub fn write_lines<W, I>(writer: &mut W, lines: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let mut written = 0;
    for line in lines.into_iter().filter(|line| !line.is_empty()) {
        writeln!(writer, "{line}")?;
        written += 1;
    }
    writer.flush()?;

    Ok(written)
}

impl Sink {
    /// Emits `lines` and returns how many were written.
    pub fn emit<I>(&self, lines: I) -> Result<usize, SinkError>
    where
        I: IntoIterator<Item = String>,
    {
        match self {
            Sink::Console => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                write_lines(&mut lock, lines).map_err(|source| SinkError::Write {
                    target: "stdout".to_string(),
                    source,
                })
            }
            Sink::File(path) => {
                let file = File::create(path).map_err(|source| SinkError::Open {
                    path: path.clone(),
                    source,
                })?;
                let mut writer = BufWriter::new(file);
                write_lines(&mut writer, lines).map_err(|source| SinkError::Write {
                    target: path.display().to_string(),
                    source,
                })
            }
        }
    }
}
