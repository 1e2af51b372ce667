//! CSV ranking: read rows, sort them into fronts, write them back.
//!
//! Every input row is written once, with its front index appended as a
//! new last column. Rows are ordered by front; rows of one front keep
//! their input order.

use std::fs::File;
use std::io::{stdout, BufReader, BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use super::schema::{ColumnSpec, Schema};
use crate::error::{Error, Result};
use crate::front::{FrontAssigner, Individual, SortConfig};

/// Configuration for [`rank_csv`].
///
/// ```
/// use u_pareto::table::{ColumnSpec, TableConfig};
///
/// let columns = vec![ColumnSpec::new("accuracy"), ColumnSpec::parse("latency:min").unwrap()];
/// let config = TableConfig::new(columns)
///     .with_front_column("rank")
///     .with_delimiter(b';');
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableConfig {
    /// Columns to optimize over, in fitness-vector order.
    pub columns: Vec<ColumnSpec>,

    /// Name of the appended front column.
    pub front_column: String,

    /// Field delimiter for both input and output.
    pub delimiter: u8,

    /// Sort execution parameters.
    pub sort: SortConfig,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            front_column: "front".to_string(),
            delimiter: b',',
            sort: SortConfig::default(),
        }
    }
}

impl TableConfig {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    pub fn with_front_column(mut self, name: impl Into<String>) -> Self {
        self.front_column = name.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_sort(mut self, sort: SortConfig) -> Self {
        self.sort = sort;
        self
    }

    /// Validates the configuration.
    ///
    /// Header-dependent checks (missing or duplicated columns) happen
    /// when the input is read.
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::NoColumns);
        }
        if self.front_column.is_empty() {
            return Err(Error::InvalidConfig("front column name must not be empty".into()));
        }
        if !self.delimiter.is_ascii() || matches!(self.delimiter, b'"' | b'\n' | b'\r') {
            return Err(Error::InvalidConfig(format!(
                "unusable delimiter {:?}",
                self.delimiter as char
            )));
        }
        self.sort.validate()
    }
}

/// Outcome of one ranking run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankSummary {
    /// Number of data rows ranked.
    pub rows: usize,

    /// Row count of each front, best first.
    pub front_sizes: Vec<usize>,
}

impl RankSummary {
    pub fn fronts(&self) -> usize {
        self.front_sizes.len()
    }
}

/// Ranks the rows of `input` and writes them, with a front column, to
/// `output`.
///
/// Nothing is written until every row has parsed; a bad cell aborts the
/// run with an error naming its line and column.
pub fn rank_csv<R: Read, W: Write>(
    input: R,
    output: W,
    config: &TableConfig,
) -> Result<RankSummary> {
    let table = read_ranked(input, config)?;
    write_ranked(table, output, config)
}

/// File variant of [`rank_csv`]. Writes to stdout when `output` is `None`.
///
/// The input is read and closed before `output` is created, so `output`
/// may name the input file, and a failed run leaves an existing output
/// file untouched.
pub fn rank_csv_file(
    input: &Path,
    output: Option<&Path>,
    config: &TableConfig,
) -> Result<RankSummary> {
    let table = read_ranked(BufReader::new(open_file(input)?), config)?;
    let out_file = output.map(create_file).transpose()?;
    write_ranked(table, create_write_buffer(out_file), config)
}

/// Input rows with their front indices, ready to be written.
struct RankedTable {
    header: StringRecord,
    rows: Vec<StringRecord>,
    ranks: Vec<usize>,
    front_sizes: Vec<usize>,
}

fn read_ranked<R: Read>(input: R, config: &TableConfig) -> Result<RankedTable> {
    config.validate()?;

    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .from_reader(input);

    let header = reader.headers()?.clone();
    if header.is_empty() {
        return Err(Error::MissingHeader);
    }
    if header.iter().any(|h| h == config.front_column) {
        return Err(Error::FrontColumnExists(config.front_column.clone()));
    }
    let schema = Schema::resolve(&header, &config.columns)?;

    let mut rows: Vec<StringRecord> = Vec::new();
    let mut population = Vec::new();
    for (position, record) in reader.records().enumerate() {
        let record = record?;
        // Header is line 1.
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(position as u64 + 2);
        population.push(Individual::new(position, schema.extract(&record, line)?));
        rows.push(record);
    }
    tracing::debug!(rows = rows.len(), columns = config.columns.len(), "input read");

    let fronts = FrontAssigner::assign_with(population, &config.sort)?;

    let mut ranks = vec![0usize; rows.len()];
    for front in &fronts {
        for &id in front.ids() {
            ranks[id] = front.rank;
        }
    }

    Ok(RankedTable {
        header,
        rows,
        ranks,
        front_sizes: fronts.iter().map(|f| f.len()).collect(),
    })
}

fn write_ranked<W: Write>(
    table: RankedTable,
    output: W,
    config: &TableConfig,
) -> Result<RankSummary> {
    let RankedTable {
        header,
        mut rows,
        ranks,
        front_sizes,
    } = table;

    // Stable: rows of one front stay in input order.
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by_key(|&row| ranks[row]);

    let mut writer = WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(output);

    let mut out_header = header;
    out_header.push_field(&config.front_column);
    writer.write_record(&out_header)?;

    for row in order {
        let mut record = std::mem::take(&mut rows[row]);
        record.push_field(&ranks[row].to_string());
        writer.write_record(&record)?;
    }
    writer.flush()?;

    let summary = RankSummary {
        rows: ranks.len(),
        front_sizes,
    };
    tracing::info!(rows = summary.rows, fronts = summary.fronts(), "ranking written");

    Ok(summary)
}

fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::File {
        action: "open",
        path: path.display().to_string(),
        source,
    })
}

fn create_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| Error::File {
        action: "create",
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ValueKind;

    fn run(input: &str, config: &TableConfig) -> Result<(String, RankSummary)> {
        let mut out = Vec::new();
        let summary = rank_csv(input.as_bytes(), &mut out, config)?;
        Ok((String::from_utf8(out).unwrap(), summary))
    }

    fn columns(names: &[&str]) -> TableConfig {
        TableConfig::new(names.iter().map(|n| ColumnSpec::parse(n).unwrap()).collect())
    }

    // ---- Ranking ----

    #[test]
    fn test_rank_two_objectives() {
        let input = "id,a,b\n0,1,1\n1,2,2\n2,1,2\n3,2,1\n";
        let (out, summary) = run(input, &columns(&["a", "b"])).unwrap();
        assert_eq!(out, "id,a,b,front\n1,2,2,0\n0,1,1,1\n2,1,2,1\n3,2,1,1\n");
        assert_eq!(summary, RankSummary { rows: 4, front_sizes: vec![1, 3] });
    }

    #[test]
    fn test_rows_keep_input_order_within_front() {
        // (0,2) is first seen after (1,1) but precedes its duplicate in
        // the file; output follows file order, not key order.
        let input = "n,x,y\nA,1,1\nB,0,2\nC,1,1\nD,0,0\n";
        let (out, _) = run(input, &columns(&["x", "y"])).unwrap();
        assert_eq!(out, "n,x,y,front\nA,1,1,0\nB,0,2,0\nC,1,1,0\nD,0,0,1\n");
    }

    #[test]
    fn test_numeric_versus_text_ordering() {
        let input = "v\n9\n10\n";
        let (numeric, _) = run(input, &columns(&["v"])).unwrap();
        assert_eq!(numeric, "v,front\n10,0\n9,1\n");

        let (text, _) = run(input, &columns(&["v:text"])).unwrap();
        assert_eq!(text, "v,front\n9,0\n10,1\n");
    }

    #[test]
    fn test_minimize_column() {
        let input = "model,acc,latency\nm1,0.9,30\nm2,0.9,10\nm3,0.8,50\n";
        let (out, summary) = run(input, &columns(&["acc", "latency:min"])).unwrap();
        assert_eq!(out, "model,acc,latency,front\nm2,0.9,10,0\nm1,0.9,30,1\nm3,0.8,50,2\n");
        assert_eq!(summary.fronts(), 3);
    }

    #[test]
    fn test_header_only() {
        let (out, summary) = run("a,b\n", &columns(&["a"])).unwrap();
        assert_eq!(out, "a,b,front\n");
        assert_eq!(summary.rows, 0);
        assert_eq!(summary.fronts(), 0);
    }

    #[test]
    fn test_custom_delimiter_and_front_column() {
        let config = columns(&["a"]).with_delimiter(b';').with_front_column("rank");
        let (out, _) = run("k;a\nx;1\ny;2\n", &config).unwrap();
        assert_eq!(out, "k;a;rank\ny;2;0\nx;1;1\n");
    }

    #[test]
    fn test_serial_matches_default() {
        let input = "a,b,c\n1,5,2\n3,3,3\n5,1,2\n2,2,2\n4,4,1\n3,3,3\n";
        let (default, _) = run(input, &columns(&["a", "b", "c"])).unwrap();
        let serial_config = columns(&["a", "b", "c"]).with_sort(SortConfig::serial());
        let (serial, _) = run(input, &serial_config).unwrap();
        assert_eq!(default, serial);
    }

    // ---- Errors ----

    #[test]
    fn test_missing_column() {
        let err = run("a,b\n1,2\n", &columns(&["c"])).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { ref column, .. } if column == "c"));
    }

    #[test]
    fn test_bad_cell_names_line_and_column() {
        let err = run("a,b\n1,2\n3,x\n", &columns(&["a", "b"])).unwrap_err();
        assert_eq!(err.to_string(), "line 3, column 'b': cannot read 'x' as a number");
    }

    #[test]
    fn test_ragged_row() {
        let err = run("a,b\n1,2\n3\n", &columns(&["a"])).unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }

    #[test]
    fn test_front_column_clash() {
        let err = run("a,front\n1,2\n", &columns(&["a"])).unwrap_err();
        assert!(matches!(err, Error::FrontColumnExists(_)));
    }

    #[test]
    fn test_empty_input() {
        let err = run("", &columns(&["a"])).unwrap_err();
        assert!(matches!(err, Error::MissingHeader));
    }

    #[test]
    fn test_validate() {
        assert!(matches!(TableConfig::default().validate(), Err(Error::NoColumns)));
        assert!(columns(&["a"]).with_front_column("").validate().is_err());
        assert!(columns(&["a"]).with_delimiter(b'"').validate().is_err());
        assert!(columns(&["a"]).with_delimiter(0xE9).validate().is_err());
        let text = TableConfig::new(vec![ColumnSpec::new("a").with_kind(ValueKind::Text)]);
        assert!(text.validate().is_ok());
    }

    #[test]
    fn test_missing_input_file() {
        let config = columns(&["a"]);
        let err = rank_csv_file(Path::new("/nonexistent/input.csv"), None, &config).unwrap_err();
        assert!(err.to_string().starts_with("cannot open file '/nonexistent/input.csv'"));
    }

    // ---- Files ----

    #[test]
    fn test_failed_run_keeps_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, "a\n1\noops\n").unwrap();
        std::fs::write(&output, "previous,run\n").unwrap();

        let err = rank_csv_file(&input, Some(&output), &columns(&["a"])).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { line: 3, .. }));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous,run\n");
    }

    #[test]
    fn test_rank_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "id,a\nx,1\ny,2\n").unwrap();

        let summary = rank_csv_file(&path, Some(&path), &columns(&["a"])).unwrap();
        assert_eq!(summary.front_sizes, vec![1, 1]);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "id,a,front\ny,2,0\nx,1,1\n");
    }
}
