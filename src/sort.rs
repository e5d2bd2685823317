//! Reads lines into a tree and writes them back sorted with their counts.
use crate::config::{CaseMode, Config};
use crate::tree::BinarySearchTree;
use crate::{Error, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};

/// Statistics about a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of lines read from the input.
    pub lines: u64,

    /// Number of distinct keys written to the output.
    pub distinct: usize,

    /// Height of the tree once every line was inserted.
    pub height: usize,
}

/// Reads every line of `reader`, folds it according to `case`, and inserts it into `tree`.
///
/// A single trailing `\n` is stripped from each line; lines may be of any length.
/// Returns the number of lines read.
///
/// # Examples
///
/// ```
/// use bstsort::{read_lines, BinarySearchTree, CaseMode};
///
/// let mut tree = BinarySearchTree::new();
/// let lines = read_lines(&b"banana\napple\nbanana\nApple\n"[..], CaseMode::Insensitive, &mut tree).unwrap();
/// assert_eq!(lines, 4);
/// assert_eq!(tree.get("apple"), Some(2));
/// assert_eq!(tree.get("banana"), Some(2));
/// ```
pub fn read_lines<R: BufRead>(
    reader: R,
    case: CaseMode,
    tree: &mut BinarySearchTree,
) -> Result<u64> {
    track!(fill_tree(reader, case, tree).map_err(Error::from))
}

fn fill_tree<R: BufRead>(
    mut reader: R,
    case: CaseMode,
    tree: &mut BinarySearchTree,
) -> io::Result<u64> {
    let mut lines = 0;
    let mut buf = Vec::new();
    while reader.read_until(b'\n', &mut buf)? != 0 {
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        case.fold(&mut buf);
        tree.insert(&buf);
        lines += 1;
        buf.clear();
    }
    Ok(lines)
}

/// Writes one `<count> <key>` line per entry of `tree`, in order by key.
///
/// # Examples
///
/// ```
/// use bstsort::{write_counts, BinarySearchTree};
///
/// let tree: BinarySearchTree = vec!["b", "a", "b"].into_iter().collect();
/// let mut out = Vec::new();
/// write_counts(&tree, &mut out).unwrap();
/// assert_eq!(out, b"1 a\n2 b\n");
/// ```
pub fn write_counts<W: Write>(tree: &BinarySearchTree, writer: W) -> Result<()> {
    track!(write_entries(tree, writer).map_err(Error::from))
}

fn write_entries<W: Write>(tree: &BinarySearchTree, mut writer: W) -> io::Result<()> {
    for (key, count) in tree {
        write!(writer, "{} ", count)?;
        writer.write_all(key)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Executes a whole run described by `config`.
///
/// The input is opened and checked not to be a directory, and the output file (if any) is
/// opened, before a single line is read. The output file is only truncated once the whole
/// input is in the tree, so it may name the input file itself.
pub fn run(config: &Config) -> Result<Summary> {
    let input_error = |e| Error::input_file(&config.input, e);
    let input = track!(File::open(&config.input).map_err(input_error))?;
    let metadata = track!(input.metadata().map_err(input_error))?;
    if metadata.is_dir() {
        let e = io::Error::new(io::ErrorKind::Other, "is a directory");
        return Err(track!(input_error(e)));
    }

    let output = match config.output {
        Some(ref path) => {
            let file = OpenOptions::new().write(true).create(true).open(path);
            Some((path, track!(file.map_err(|e| Error::output_file(path, e)))?))
        }
        None => None,
    };

    let mut tree = BinarySearchTree::new();
    let lines = fill_tree(BufReader::new(input), config.case, &mut tree);
    let lines = track!(lines.map_err(input_error))?;
    let summary = Summary {
        lines,
        distinct: tree.len(),
        height: tree.height(),
    };
    debug!("{:?}", summary);
    if summary.height > 1 && summary.height == summary.distinct {
        debug!("The tree degenerated into a chain; the input was probably sorted");
    }

    match output {
        Some((path, file)) => {
            info!("Writing counts to {:?}", path);
            let output_error = |e| Error::output_file(path, e);
            track!(file.set_len(0).map_err(output_error))?;
            track!(write_entries(&tree, BufWriter::new(file)).map_err(output_error))?;
        }
        None => {
            let stdout = io::stdout();
            track!(write_counts(&tree, BufWriter::new(stdout.lock())))?;
        }
    }
    tree.clear();
    Ok(summary)
}
