//! Line-oriented loader for `x,y` decimal records.
//!
//! Grammar per line: `;<anything>` is a comment, `<decimal>,<decimal>` is a
//! point, anything else is reported and skipped.
//!
//! Bounds are widened one *field* at a time: a line whose x parses but whose
//! y does not still moves the x extent, even though no point is admitted.
//! Output images depend on this, so it is kept.

use std::{
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

use fastnum::D128;
use log::warn;

use crate::core::{
    bounds::{Axis, Bounds},
    constants::{COMMENT_PREFIX, FIELD_SEPARATOR, MAX_SIGNIFICANT_DIGITS},
    error::LoadError,
};

/// One record at source precision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawPoint {
    pub x: D128,
    pub y: D128,
}

impl RawPoint {
    #[inline]
    #[must_use]
    pub const fn new(x: D128, y: D128) -> Self {
        Self { x, y }
    }
}

/// Why a line was skipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RejectReason {
    Empty,
    BadFieldCount(usize),
    BadNumber { axis: Axis },
}

/// A non-comment line that did not become a point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectedLine {
    pub line: usize,
    pub text: String,
    pub reason: RejectReason,
}

impl Display for RejectedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            RejectReason::Empty => write!(f, "line {}: empty line", self.line),
            RejectReason::BadFieldCount(n) => write!(
                f,
                "line {}: expected 2 columns, got {}: '{}'",
                self.line, n, self.text
            ),
            RejectReason::BadNumber { axis } => write!(
                f,
                "line {}: invalid {} value: '{}'",
                self.line,
                axis.name(),
                self.text
            ),
        }
    }
}

/// Everything the loader produces.
#[derive(Debug, Default)]
pub struct PlotData {
    /// Valid points in file order.
    pub points: Vec<RawPoint>,
    /// Extrema over every field that parsed, including fields of rejected lines.
    pub bounds: Bounds,
    pub rejected: Vec<RejectedLine>,
}

impl PlotData {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Build from already-parsed points; bounds cover exactly these points.
    #[must_use]
    pub fn from_points(points: Vec<RawPoint>) -> Self {
        let bounds = Bounds::from_points(&points);
        Self {
            points,
            bounds,
            rejected: Vec::new(),
        }
    }
}

// --- Helpers ---
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

/// Split `[+|-]digits[.digits]` into sign, integer digits and fraction
/// digits.  Exponents, digit separators and special values do not match.
fn split_decimal(text: &str) -> Option<(&str, &str, &str)> {
    let (sign, body) = match text.as_bytes().first()? {
        b'-' => ("-", &text[1..]),
        b'+' => ("", &text[1..]),
        _ => ("", text),
    };
    let (int, frac) = body.split_once('.').unwrap_or((body, ""));
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int.is_empty() && frac.is_empty()) || !digits(int) || !digits(frac) {
        return None;
    }
    Some((sign, int, frac))
}

/// Parse one field; surrounding whitespace is allowed.
///
/// Fractions longer than [`MAX_SIGNIFICANT_DIGITS`] significant digits are
/// rounded half away from zero instead of rejected.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<D128> {
    let (sign, int, frac) = split_decimal(text.trim())?;
    let int = int.trim_start_matches('0');
    let leading_zeros = if int.is_empty() {
        frac.len() - frac.trim_start_matches('0').len()
    } else {
        0
    };
    let keep = (MAX_SIGNIFICANT_DIGITS + leading_zeros)
        .saturating_sub(int.len())
        .min(frac.len());
    let (kept, dropped) = frac.split_at(keep);
    let int = if int.is_empty() { "0" } else { int };

    let exact = if kept.is_empty() {
        format!("{sign}{int}")
    } else {
        format!("{sign}{int}.{kept}")
    };
    let value = exact.parse::<D128>().ok()?;
    if dropped.as_bytes().first().is_some_and(|&d| d >= b'5') {
        let ulp = if keep == 0 {
            format!("{sign}1")
        } else {
            format!("{sign}0.{:0>keep$}", 1)
        };
        return Some(value + ulp.parse::<D128>().ok()?);
    }
    Some(value)
}

/// Classify one line (already stripped of its terminator) and fold it into
/// `out`.
fn ingest_line(buf: &[u8], line_no: usize, out: &mut PlotData) {
    if buf.first() == Some(&COMMENT_PREFIX) {
        return;
    }
    let text = String::from_utf8_lossy(buf);
    let reject = |reason| RejectedLine {
        line: line_no,
        text: text.clone().into_owned(),
        reason,
    };

    if buf.is_empty() {
        out.rejected.push(reject(RejectReason::Empty));
        return;
    }

    let sep = char::from(FIELD_SEPARATOR);
    let mut fields = text.split(sep);
    let (Some(xs), Some(ys), None) = (fields.next(), fields.next(), fields.next()) else {
        out.rejected
            .push(reject(RejectReason::BadFieldCount(text.split(sep).count())));
        return;
    };

    // Each axis is recorded as soon as its own field parses.
    let x = parse_decimal(xs);
    if let Some(v) = x {
        out.bounds.observe(Axis::X, v);
    }
    let y = parse_decimal(ys);
    if let Some(v) = y {
        out.bounds.observe(Axis::Y, v);
    }

    match (x, y) {
        (Some(x), Some(y)) => out.points.push(RawPoint { x, y }),
        (None, _) => out.rejected.push(reject(RejectReason::BadNumber { axis: Axis::X })),
        (Some(_), None) => out.rejected.push(reject(RejectReason::BadNumber { axis: Axis::Y })),
    }
}

// --- Ingest ---
const BUF_CAP: usize = 64 * 1024;
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read every record from `src`.  Invalid lines are logged and collected,
/// never fatal; only I/O errors abort.
pub fn read_points<R: Read>(src: R) -> Result<PlotData, LoadError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut out = PlotData::default();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr
            .read_until(b'\n', &mut buf)
            .map_err(|source| LoadError::Read {
                line: line_no,
                source,
            })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }
        if line_no == 1 && buf.starts_with(UTF8_BOM) {
            buf.drain(..UTF8_BOM.len());
        }

        normalize_unicode_minus(&mut buf);
        let before = out.rejected.len();
        ingest_line(&buf, line_no, &mut out);
        if let Some(r) = out.rejected.get(before) {
            warn!("invalid {r}");
        }
    }
    Ok(out)
}

/// Load from a file path; `-` reads stdin.
pub fn read_points_from_path(path: &str) -> Result<PlotData, LoadError> {
    if path == "-" {
        read_points(std::io::stdin())
    } else {
        use std::fs::File;
        read_points(File::open(path).map_err(|source| LoadError::Open {
            path: path.to_owned(),
            source,
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> D128 {
        s.parse().unwrap()
    }

    fn load(s: &str) -> PlotData {
        read_points(s.as_bytes()).unwrap()
    }

    #[test]
    fn valid_lines_keep_exact_decimal_values() {
        let data = load("1.25,-3\n0.1000000000000000000000000001,42\n");
        assert_eq!(
            data.points,
            vec![
                RawPoint::new(d("1.25"), d("-3")),
                RawPoint::new(d("0.1000000000000000000000000001"), d("42")),
            ]
        );
        assert!(data.rejected.is_empty());
    }

    #[test]
    fn comments_never_touch_points_or_bounds() {
        let data = load(";1000,1000\n;garbage,,,\n;\n1,2\n3,4\n");
        assert_eq!(data.points.len(), 2);
        assert!(data.rejected.is_empty());
        let x = data.bounds.x.unwrap();
        let y = data.bounds.y.unwrap();
        assert_eq!((x.min, x.max), (d("1"), d("3")));
        assert_eq!((y.min, y.max), (d("2"), d("4")));
    }

    // Partial parses still widen bounds.
    #[test]
    fn rejected_line_with_numeric_y_updates_y_bounds() {
        let data = load("0,0\n1,1\nabc,50\n");
        assert_eq!(data.points.len(), 2);
        assert_eq!(data.rejected.len(), 1);
        assert_eq!(
            data.rejected[0].reason,
            RejectReason::BadNumber { axis: Axis::X }
        );
        let x = data.bounds.x.unwrap();
        let y = data.bounds.y.unwrap();
        assert_eq!(x.max, d("1"));
        assert_eq!(y.max, d("50"));
    }

    #[test]
    fn rejected_line_with_numeric_x_updates_x_bounds() {
        let data = load("0,0\n1,1\n-9,oops\n");
        assert_eq!(data.points.len(), 2);
        assert_eq!(
            data.rejected[0].reason,
            RejectReason::BadNumber { axis: Axis::Y }
        );
        assert_eq!(data.bounds.x.unwrap().min, d("-9"));
        assert_eq!(data.bounds.y.unwrap().min, d("0"));
    }

    #[test]
    fn wrong_field_count_is_rejected_without_bounds() {
        let data = load("1\n1,2,3\n");
        assert!(data.points.is_empty());
        assert_eq!(
            data.rejected
                .iter()
                .map(|r| r.reason.clone())
                .collect::<Vec<_>>(),
            vec![RejectReason::BadFieldCount(1), RejectReason::BadFieldCount(3)]
        );
        assert_eq!(data.bounds, Bounds::new());
    }

    #[test]
    fn empty_lines_are_rejected_not_fatal() {
        let data = load("\n1,2\n\r\n");
        assert_eq!(data.points.len(), 1);
        assert_eq!(data.rejected.len(), 2);
        assert!(data.rejected.iter().all(|r| r.reason == RejectReason::Empty));
        assert_eq!(data.rejected[1].line, 3);
    }

    #[test]
    fn crlf_whitespace_bom_and_unicode_minus() {
        let data = load("\u{feff}1 , 2\r\n\u{2212}3,4\r\n");
        assert_eq!(
            data.points,
            vec![
                RawPoint::new(d("1"), d("2")),
                RawPoint::new(d("-3"), d("4")),
            ]
        );
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let data = load("NaN,1\n1,inf\n");
        assert!(data.points.is_empty());
        assert_eq!(data.rejected.len(), 2);
    }

    #[test]
    fn long_fractions_are_rounded_not_rejected() {
        let fifty = "0.12345678901234567890123456789012345678901234567890";
        assert_eq!(
            parse_decimal(fifty),
            Some(d("0.12345678901234567890123456789012345679"))
        );
        let rounded = parse_decimal("-2.999999999999999999999999999999999999999999").unwrap();
        assert!((rounded - d("-3")).is_zero());
        // leading zeros of a pure fraction are not significant
        assert_eq!(
            parse_decimal("0.0000012345678901234567890123456789012345678"),
            Some(d("0.0000012345678901234567890123456789012345678"))
        );

        let data = load(&format!("{fifty},1.{}1\n2,3\n", "0".repeat(48)));
        assert_eq!(data.points.len(), 2);
        assert!(data.rejected.is_empty());
        assert_eq!(data.points[1], RawPoint::new(d("2"), d("3")));
    }

    #[test]
    fn exponents_and_digit_separators_are_rejected() {
        let data = load("1_000,2\n1e5,2\n+4,.5\n7.,0\n.,1\n1.2.3,4\n");
        assert_eq!(
            data.points,
            vec![
                RawPoint::new(d("4"), d("0.5")),
                RawPoint::new(d("7"), d("0")),
            ]
        );
        assert_eq!(data.rejected.len(), 4);
        assert!(
            data.rejected
                .iter()
                .all(|r| r.reason == RejectReason::BadNumber { axis: Axis::X })
        );
    }

    #[test]
    fn empty_input_yields_no_points() {
        let data = load("");
        assert!(data.is_empty());
        assert_eq!(data.bounds.x, None);
    }

    #[test]
    fn rejected_line_message_names_line_and_text() {
        let data = load("1,2\nfoo,bar\n");
        assert_eq!(data.rejected[0].to_string(), "line 2: invalid x value: 'foo,bar'");
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = read_points_from_path("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
