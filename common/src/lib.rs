pub use eyre::Result;
pub use table::FrequencyTable;

use eyre::WrapErr;
use log::{debug, trace};
use std::{
    fmt::Debug,
    io::{BufRead, Write},
};

mod table;

pub trait App: Debug {
    fn map(&self, line: &str) -> Vec<(String, u64)>;
    /// Applied incrementally as values arrive, so it must be associative.
    fn reduce(&self, key: &str, values: &[u64]) -> u64;
}

pub fn init_logger() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init()
}

/// Reads `input` to the end, maps every line and folds the pairs into a table.
pub fn aggregate<R: BufRead>(app: &dyn App, input: R) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    let mut lines = 0usize;
    let mut pairs = 0usize;

    for line in input.lines() {
        let line = line.wrap_err_with(|| format!("failed to read input line {}", lines + 1))?;
        lines += 1;
        trace!("line {}: {:?}", lines, line);

        for (k, v) in app.map(&line) {
            pairs += 1;
            table.insert_with(k, v, |key, acc, v| app.reduce(key, &[acc, v]));
        }
    }

    debug!(
        "{:?}: {} lines, {} tokens, {} distinct",
        app,
        lines,
        pairs,
        table.len()
    );
    Ok(table)
}

/// Writes one `"<key> <value>"` line per pair and returns how many were written.
pub fn emit<W, I>(pairs: I, mut output: W) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = (String, u64)>,
{
    let mut written = 0;
    for (k, v) in pairs {
        writeln!(output, "{} {}", k, v).wrap_err("failed to write output")?;
        written += 1;
    }
    output.flush().wrap_err("failed to flush output")?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::{aggregate, emit, App};
    use std::io::{self, Cursor, Write};

    #[derive(Debug)]
    struct CsvApp;

    impl App for CsvApp {
        fn map(&self, line: &str) -> Vec<(String, u64)> {
            line.split(',')
                .filter(|f| !f.is_empty())
                .map(|f| (f.to_owned(), 1))
                .collect()
        }

        fn reduce(&self, _key: &str, values: &[u64]) -> u64 {
            values.iter().sum()
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn aggregate_folds_with_reduce() {
        let table = aggregate(&CsvApp, Cursor::new("a,b\nb,,c\n\nb")).unwrap();
        assert_eq!(table.get("a"), Some(1));
        assert_eq!(table.get("b"), Some(3));
        assert_eq!(table.get("c"), Some(1));
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn aggregate_empty_input() {
        let table = aggregate(&CsvApp, Cursor::new("")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn aggregate_rejects_invalid_utf8() {
        let input: &[u8] = b"ok\n\xff\xfe\n";
        let err = aggregate(&CsvApp, input).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn emit_format() {
        let mut out: Vec<u8> = Vec::new();
        let pairs = vec![("a".to_owned(), 3), ("b".to_owned(), 2)];
        let written = emit(pairs, &mut out).unwrap();
        assert_eq!(written, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "a 3\nb 2\n");
    }

    #[test]
    fn emit_nothing() {
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(emit(Vec::<(String, u64)>::new(), &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn emit_write_error() {
        assert!(emit(vec![("a".to_owned(), 1)], BrokenPipe).is_err());
    }
}
