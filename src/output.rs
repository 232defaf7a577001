//! Output formatting for search results, tree dumps and statistics

use crate::driver::Occurrence;
use crate::tree::{SuffixTree, TextPosition, TreeStats};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Write occurrences in the plain run format
///
/// One line per occurrence: `<pattern> <text> <position> 0`. The trailing
/// column is the edit distance, always 0 for exact matches.
pub fn write_occurrences<W: Write>(writer: &mut W, occurrences: &[Occurrence]) -> io::Result<()> {
    for o in occurrences {
        writeln!(writer, "{} {} {} 0", o.pattern, o.text, o.position)?;
    }
    Ok(())
}

/// Print occurrences in the run format, colored when on a terminal
pub fn print_occurrences(occurrences: &[Occurrence], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    for o in occurrences {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(stdout, "{}", o.pattern)?;
        stdout.reset()?;
        write!(stdout, " ")?;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(stdout, "{}", o.text)?;
        stdout.reset()?;
        write!(stdout, " ")?;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(stdout, "{}", o.position)?;
        stdout.reset()?;
        writeln!(stdout, " 0")?;
    }

    Ok(())
}

/// Print the 0-based offsets of one pattern
pub fn print_positions(pattern: &[u8], positions: &[TextPosition], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stdout, "{}", String::from_utf8_lossy(pattern))?;
    stdout.reset()?;
    write!(stdout, ":")?;

    for pos in positions {
        write!(stdout, " ")?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{}", pos)?;
        stdout.reset()?;
    }

    writeln!(stdout)?;
    Ok(())
}

/// Print every edge of the tree, indented by depth
pub fn print_tree(tree: &SuffixTree, color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    for view in tree.edges() {
        write!(stdout, "{:indent$}", "", indent = view.level * 2)?;
        write!(stdout, "{} -> {} ", view.origin, view.dest)?;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(stdout, "[{}]", String::from_utf8_lossy(view.label))?;
        stdout.reset()?;

        if let Some(index) = view.suffix_index {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(stdout, " @{}", index)?;
            stdout.reset()?;
        }

        writeln!(stdout)?;
    }

    Ok(())
}

/// Print tree statistics
pub fn print_stats(stats: &TreeStats) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Suffix tree statistics:")?;
    writeln!(stdout, "  Text length:    {}", stats.text_len)?;
    writeln!(stdout, "  Nodes:          {}", stats.node_count)?;
    writeln!(stdout, "  Internal nodes: {}", stats.internal_count)?;
    writeln!(stdout, "  Leaves:         {}", stats.leaf_count)?;
    writeln!(stdout, "  Edges:          {}", stats.edge_count)?;
    writeln!(stdout, "  Max depth:      {}", stats.max_depth)?;
    Ok(())
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_occurrences() {
        let occurrences = vec![
            Occurrence {
                pattern: 1,
                text: 2,
                position: 3,
            },
            Occurrence {
                pattern: 2,
                text: 1,
                position: 10,
            },
        ];

        let mut buf = Vec::new();
        write_occurrences(&mut buf, &occurrences).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 2 3 0\n2 1 10 0\n");
    }

    #[test]
    fn test_write_no_occurrences() {
        let mut buf = Vec::new();
        write_occurrences(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }
}
