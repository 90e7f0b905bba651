//! Line classification and scalar value handling for STAR-style MPIF text.

/// A classified view of one input line.
///
/// Classification works on the trimmed line; callers keep the raw line
/// around for text-block content, which must be preserved untrimmed.
#[derive(Debug, PartialEq)]
pub(crate) enum LineKind<'a> {
    Blank,
    Comment,
    /// `data_<name>` block header.
    DataHeader(&'a str),
    LoopMarker,
    /// A lone `;` opening or closing a text block.
    Fence,
    /// `_tag` line; `rest` is the trimmed value text after the key, possibly
    /// empty.
    Tag { key: &'a str, rest: &'a str },
    /// Anything else: loop data rows, stray text.
    Text,
}

pub(crate) fn classify(line: &str) -> LineKind<'_> {
    let t = line.trim();
    if t.is_empty() {
        return LineKind::Blank;
    }
    if t == ";" {
        return LineKind::Fence;
    }
    if t.starts_with('#') {
        return LineKind::Comment;
    }
    if t == "loop_" {
        return LineKind::LoopMarker;
    }
    if let Some(name) = t.strip_prefix("data_") {
        return LineKind::DataHeader(name.trim());
    }
    if t.starts_with('_') {
        return match t.split_once(char::is_whitespace) {
            Some((key, rest)) => LineKind::Tag {
                key,
                rest: rest.trim(),
            },
            None => LineKind::Tag { key: t, rest: "" },
        };
    }
    LineKind::Text
}

/// A scalar value after quote stripping and placeholder recognition.
///
/// The three wire forms are kept apart so "absent" and "present but empty"
/// stay distinguishable: `?` is unknown, `-`/`.` are not-applicable, and a
/// quoted empty string `''` is a present empty value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Scalar<'a> {
    Text(&'a str),
    /// The unknown marker `?`.
    Unknown,
    /// The not-applicable markers `-` and `.`.
    Inapplicable,
}

impl<'a> Scalar<'a> {
    /// Text content; both placeholder forms map to `None`.
    pub fn text(self) -> Option<&'a str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(self) -> Option<f64> {
        self.text()?.trim().parse().ok()
    }
}

/// Interpret a scalar value: strip single quotes, map bare placeholders.
/// Quoting protects a literal: `'?'` is the text `?`, not the unknown marker.
pub(crate) fn scalar(raw: &str) -> Scalar<'_> {
    let t = raw.trim();
    if t.len() >= 2 && t.starts_with('\'') && t.ends_with('\'') {
        return Scalar::Text(&t[1..t.len() - 1]);
    }
    match t {
        "?" => Scalar::Unknown,
        "-" | "." => Scalar::Inapplicable,
        other => Scalar::Text(other),
    }
}

/// Map a record-loop cell to an optional string. Cells are never quoted, so
/// placeholders and empty cells all read as absent.
pub(crate) fn cell_str(raw: &str) -> Option<String> {
    match raw.trim() {
        "" | "?" | "-" | "." => None,
        v => Some(v.to_string()),
    }
}

pub(crate) fn cell_f64(raw: &str) -> Option<f64> {
    cell_str(raw)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn classify_basic_lines() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   "), LineKind::Blank);
        assert_eq!(classify(";"), LineKind::Fence);
        assert_eq!(classify("  ;  "), LineKind::Fence);
        assert_eq!(classify("#Section 1: Author details"), LineKind::Comment);
        assert_eq!(classify("loop_"), LineKind::LoopMarker);
        assert_eq!(classify("data_MOF5_test"), LineKind::DataHeader("MOF5_test"));
        assert_eq!(classify("R1\tZnO\t?"), LineKind::Text);
    }

    #[test]
    fn classify_tag_lines() {
        assert_eq!(
            classify("_mpif_product_state\t'powder'"),
            LineKind::Tag {
                key: "_mpif_product_state",
                rest: "'powder'"
            }
        );
        assert_eq!(
            classify("_mpif_pxrd_lambda 1.54056"),
            LineKind::Tag {
                key: "_mpif_pxrd_lambda",
                rest: "1.54056"
            }
        );
        assert_eq!(
            classify("_mpif_product_handling_note"),
            LineKind::Tag {
                key: "_mpif_product_handling_note",
                rest: ""
            }
        );
    }

    #[rstest]
    #[case("?", None)]
    #[case("-", None)]
    #[case(".", None)]
    #[case("''", Some(""))]
    #[case("'?'", Some("?"))]
    #[case("'hello world'", Some("hello world"))]
    #[case("'it's'", Some("it's"))]
    #[case("bare", Some("bare"))]
    fn placeholder_forms(#[case] raw: &str, #[case] expect: Option<&str>) {
        assert_eq!(scalar(raw).text(), expect);
    }

    #[test]
    fn scalar_numbers() {
        assert_eq!(scalar("120.5").as_f64(), Some(120.5));
        assert_eq!(scalar("?").as_f64(), None);
        assert_eq!(scalar("'42'").as_f64(), Some(42.0));
        assert_eq!(scalar("n/a").as_f64(), None);
    }

    #[test]
    fn cells_treat_empty_as_absent() {
        assert_eq!(cell_str("ZnO"), Some("ZnO".to_string()));
        assert_eq!(cell_str(""), None);
        assert_eq!(cell_str("?"), None);
        assert_eq!(cell_str("-"), None);
        assert_eq!(cell_f64("99.9"), Some(99.9));
        assert_eq!(cell_f64("pure"), None);
    }
}
