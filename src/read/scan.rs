//! Line cursor and the shared readers for text blocks and record loops.

use tracing::debug;

use super::line::{classify, scalar, LineKind, Scalar};

/// A scan over the raw lines of one MPIF input.
///
/// Lines are kept untrimmed so text-block content survives verbatim. Each
/// line is pre-marked as inside or outside a `;` fence; tag lookups skip
/// fenced lines so embedded CIF/AIF text cannot shadow document tags.
pub(crate) struct Scan<'a> {
    lines: Vec<&'a str>,
    fenced: Vec<bool>,
}

impl<'a> Scan<'a> {
    pub fn new(input: &'a str) -> Self {
        let lines: Vec<&str> = input
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        let mut fenced = Vec::with_capacity(lines.len());
        let mut in_fence = false;
        for line in &lines {
            if line.trim() == ";" {
                fenced.push(true);
                in_fence = !in_fence;
            } else {
                fenced.push(in_fence);
            }
        }
        Scan { lines, fenced }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, i: usize) -> &'a str {
        self.lines[i]
    }

    /// Name of the first `data_` header outside any `;` fence.
    pub fn data_header(&self) -> Option<&'a str> {
        (0..self.lines.len()).find_map(|i| {
            if self.fenced[i] {
                return None;
            }
            match classify(self.lines[i]) {
                LineKind::DataHeader(name) => Some(name),
                _ => None,
            }
        })
    }

    /// Index of the first unfenced line whose key token is exactly `key`.
    pub fn find_tag(&self, key: &str) -> Option<usize> {
        (0..self.lines.len()).find(|&i| {
            !self.fenced[i]
                && matches!(classify(self.lines[i]), LineKind::Tag { key: k, .. } if k == key)
        })
    }

    /// Scalar value on the line carrying `key`. A key line with no value at
    /// all reads as absent.
    pub fn scalar(&self, key: &str) -> Option<Scalar<'a>> {
        let i = self.find_tag(key)?;
        match classify(self.lines[i]) {
            LineKind::Tag { rest, .. } if !rest.is_empty() => Some(scalar(rest)),
            _ => None,
        }
    }

    pub fn scalar_str(&self, key: &str) -> Option<String> {
        self.scalar(key)?.text().map(str::to_owned)
    }

    pub fn scalar_f64(&self, key: &str) -> Option<f64> {
        self.scalar(key)?.as_f64()
    }

    /// Extract the multi-line text block following `key`.
    ///
    /// Strict form: the key line, a lone `;`, content lines, a closing lone
    /// `;`. A degraded form with the opening `;` missing is tolerated as a
    /// best-effort heuristic: content starts at the next non-blank line that
    /// is not a tag/comment/header, and runs until a lone `;` or the next
    /// tag/comment/header line. Interior lines are preserved verbatim;
    /// leading and trailing blank lines are trimmed, and an empty block
    /// reads as absent.
    pub fn text_block(&self, key: &str) -> Option<String> {
        let at = self.find_tag(key)?;
        let mut i = at + 1;
        while i < self.lines.len() && matches!(classify(self.lines[i]), LineKind::Blank) {
            i += 1;
        }
        if i >= self.lines.len() {
            return None;
        }

        let mut content: Vec<&str> = Vec::new();
        match classify(self.lines[i]) {
            LineKind::Fence => {
                let mut closed = false;
                for j in i + 1..self.lines.len() {
                    if matches!(classify(self.lines[j]), LineKind::Fence) {
                        closed = true;
                        break;
                    }
                    content.push(self.lines[j]);
                }
                if !closed {
                    debug!(key, "unterminated text block, consumed to end of input");
                }
            }
            LineKind::Tag { .. }
            | LineKind::Comment
            | LineKind::DataHeader(_)
            | LineKind::LoopMarker => return None,
            _ => {
                debug!(key, "text block without opening `;`, using lenient scan");
                for j in i..self.lines.len() {
                    match classify(self.lines[j]) {
                        LineKind::Fence
                        | LineKind::Tag { .. }
                        | LineKind::Comment
                        | LineKind::DataHeader(_) => break,
                        _ => content.push(self.lines[j]),
                    }
                }
            }
        }

        while content.first().is_some_and(|l| l.trim().is_empty()) {
            content.remove(0);
        }
        while content.last().is_some_and(|l| l.trim().is_empty()) {
            content.pop();
        }
        if content.is_empty() {
            return None;
        }
        Some(content.join("\n"))
    }

    /// Read the record loop for one collection, identified by its tag stem
    /// (`substrate`, `solvent`, `vessel`, `hardware`, `procedure`).
    ///
    /// `_mpif_<stem>_number` declares the expected row count. Column order
    /// comes from the `_`-prefixed preamble, so reordered columns still land
    /// in the right fields. Rows are tab-delimited; a row with fewer cells
    /// than the preamble is skipped without being consumed as data.
    /// Consumption stops at the declared count, a new tag line, a comment,
    /// or a blank line, whichever comes first.
    pub fn records(&self, stem: &str) -> RecordTable {
        let empty = RecordTable::default();
        let number_key = format!("_mpif_{stem}_number");
        let declared = match self
            .scalar(&number_key)
            .and_then(|s| s.text()?.trim().parse::<usize>().ok())
        {
            Some(n) if n > 0 => n,
            _ => return empty,
        };

        let id_key = format!("_mpif_{stem}_id");
        let Some(start) = self.find_tag(&id_key) else {
            return empty;
        };

        let prefix = format!("_mpif_{stem}_");
        let mut tags = Vec::new();
        let mut i = start;
        while i < self.lines.len() {
            match classify(self.lines[i]) {
                LineKind::Tag { key, .. } if key.starts_with(&prefix) => {
                    tags.push(key.to_string());
                    i += 1;
                }
                LineKind::LoopMarker => i += 1,
                _ => break,
            }
        }

        let mut rows: Vec<Vec<String>> = Vec::new();
        while i < self.lines.len() && rows.len() < declared {
            let line = self.lines[i];
            match classify(line) {
                LineKind::Blank
                | LineKind::Comment
                | LineKind::Tag { .. }
                | LineKind::DataHeader(_)
                | LineKind::Fence => break,
                _ => {}
            }
            let cells: Vec<&str> = line.split('\t').collect();
            if cells.len() < tags.len() {
                debug!(stem, line, "skipping short loop row");
                i += 1;
                continue;
            }
            rows.push(cells.into_iter().map(|c| c.trim().to_string()).collect());
            i += 1;
        }
        if rows.len() < declared {
            debug!(
                stem,
                declared,
                found = rows.len(),
                "loop ended before declared count"
            );
        }

        RecordTable { tags, rows }
    }
}

/// A decoded record loop: preamble tags plus tab-delimited rows.
#[derive(Default)]
pub(crate) struct RecordTable {
    tags: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RecordTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Cell at `row` for the column named `tag` (case-insensitive).
    pub fn field(&self, row: usize, tag: &str) -> Option<&str> {
        let col = self.tags.iter().position(|t| t.eq_ignore_ascii_case(tag))?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_key_lookup_is_not_prefix_lookup() {
        // `_react_time_unit` must not shadow `_react_time` or vice versa.
        let input = "data_t\n_mpif_synthesis_react_time_unit\t'min'\n_mpif_synthesis_react_time\t30\n";
        let scan = Scan::new(input);
        assert_eq!(scan.scalar_f64("_mpif_synthesis_react_time"), Some(30.0));
        assert_eq!(
            scan.scalar_str("_mpif_synthesis_react_time_unit").as_deref(),
            Some("min")
        );
    }

    #[test]
    fn fenced_lines_are_invisible_to_lookup() {
        let input = "data_outer\n_mpif_note\n;\ndata_inner\n_mpif_product_color\t'red'\n;\n";
        let scan = Scan::new(input);
        assert_eq!(scan.data_header(), Some("outer"));
        assert_eq!(scan.find_tag("_mpif_product_color"), None);
    }

    #[test]
    fn text_block_strict() {
        let input = "data_t\n_mpif_procedure_full\n;\nLine one\nLine two\n;\n";
        let scan = Scan::new(input);
        assert_eq!(
            scan.text_block("_mpif_procedure_full").as_deref(),
            Some("Line one\nLine two")
        );
    }

    #[test]
    fn text_block_preserves_interior_whitespace() {
        let input = "data_t\n_mpif_procedure_full\n;\n  indented\n\nafter gap\n;\n";
        let scan = Scan::new(input);
        assert_eq!(
            scan.text_block("_mpif_procedure_full").as_deref(),
            Some("  indented\n\nafter gap")
        );
    }

    #[test]
    fn text_block_trims_padding_lines() {
        let input = "data_t\n_mpif_procedure_full\n;\n\n\ncontent\n\n;\n";
        let scan = Scan::new(input);
        assert_eq!(
            scan.text_block("_mpif_procedure_full").as_deref(),
            Some("content")
        );
    }

    #[test]
    fn text_block_degraded_missing_open_fence() {
        let input = "data_t\n_mpif_procedure_full\nMix and stir\novernight\n;\n_mpif_product_color\t'red'\n";
        let scan = Scan::new(input);
        assert_eq!(
            scan.text_block("_mpif_procedure_full").as_deref(),
            Some("Mix and stir\novernight")
        );
    }

    #[test]
    fn text_block_degraded_ends_at_next_tag() {
        let input = "data_t\n_mpif_procedure_full\nonly line\n_mpif_product_color\t'red'\n";
        let scan = Scan::new(input);
        assert_eq!(
            scan.text_block("_mpif_procedure_full").as_deref(),
            Some("only line")
        );
    }

    #[test]
    fn text_block_empty_is_absent() {
        let input = "data_t\n_mpif_procedure_full\n;\n\n;\n";
        let scan = Scan::new(input);
        assert_eq!(scan.text_block("_mpif_procedure_full"), None);
    }

    #[test]
    fn text_block_unterminated_runs_to_eof() {
        let input = "data_t\n_mpif_procedure_full\n;\nstill open\nno close";
        let scan = Scan::new(input);
        assert_eq!(
            scan.text_block("_mpif_procedure_full").as_deref(),
            Some("still open\nno close")
        );
    }

    const LOOP_INPUT: &str = "data_t\n\
_mpif_substrate_number\t2\n\
loop_\n\
_mpif_substrate_id\n\
_mpif_substrate_name\n\
_mpif_substrate_amount\n\
R1\tzinc nitrate\t250\n\
R2\tterephthalic acid\t80\n\n";

    #[test]
    fn records_by_column_name() {
        let scan = Scan::new(LOOP_INPUT);
        let table = scan.records("substrate");
        assert_eq!(table.len(), 2);
        assert_eq!(table.field(0, "_mpif_substrate_name"), Some("zinc nitrate"));
        assert_eq!(table.field(1, "_mpif_substrate_amount"), Some("80"));
        assert_eq!(table.field(0, "_mpif_substrate_id"), Some("R1"));
    }

    #[test]
    fn records_tolerate_reordered_columns() {
        let input = "data_t\n\
_mpif_substrate_number\t1\n\
loop_\n\
_mpif_substrate_id\n\
_mpif_substrate_amount\n\
_mpif_substrate_name\n\
R1\t250\tzinc nitrate\n";
        let scan = Scan::new(input);
        let table = scan.records("substrate");
        assert_eq!(table.field(0, "_mpif_substrate_name"), Some("zinc nitrate"));
        assert_eq!(table.field(0, "_mpif_substrate_amount"), Some("250"));
    }

    #[test]
    fn records_stop_at_blank_line_before_declared_count() {
        let input = "data_t\n\
_mpif_substrate_number\t3\n\
loop_\n\
_mpif_substrate_id\n\
_mpif_substrate_name\n\
R1\ta\n\
R2\tb\n\
\n\
R3\tc\n";
        let scan = Scan::new(input);
        assert_eq!(scan.records("substrate").len(), 2);
    }

    #[test]
    fn records_stop_at_new_tag() {
        let input = "data_t\n\
_mpif_substrate_number\t3\n\
loop_\n\
_mpif_substrate_id\n\
_mpif_substrate_name\n\
R1\ta\n\
_mpif_solvent_number\t1\n";
        let scan = Scan::new(input);
        assert_eq!(scan.records("substrate").len(), 1);
    }

    #[test]
    fn records_skip_short_rows() {
        let input = "data_t\n\
_mpif_substrate_number\t2\n\
loop_\n\
_mpif_substrate_id\n\
_mpif_substrate_name\n\
_mpif_substrate_amount\n\
R1 missing tabs entirely\n\
R2\tgood\t10\n";
        let scan = Scan::new(input);
        let table = scan.records("substrate");
        assert_eq!(table.len(), 1);
        assert_eq!(table.field(0, "_mpif_substrate_name"), Some("good"));
    }

    #[test]
    fn records_empty_when_count_missing_or_zero() {
        let scan = Scan::new("data_t\nloop_\n_mpif_substrate_id\nR1\n");
        assert_eq!(scan.records("substrate").len(), 0);
        let scan = Scan::new("data_t\n_mpif_substrate_number\t0\n");
        assert_eq!(scan.records("substrate").len(), 0);
    }

    #[test]
    fn crlf_input_is_tolerated() {
        let input = "data_t\r\n_mpif_product_color\t'red'\r\n";
        let scan = Scan::new(input);
        assert_eq!(scan.data_header(), Some("t"));
        assert_eq!(scan.scalar_str("_mpif_product_color").as_deref(), Some("red"));
    }
}
