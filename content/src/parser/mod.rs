//! CSV reader with delimiter and (native) encoding auto-detection.
//!
//! Turns a spreadsheet export into header-keyed [`RawRow`]s. No project
//! logic here; see [`crate::mapper`] for that.
//!
//! Rows shorter than the header leave their trailing columns absent
//! rather than empty, and rows whose cells are all blank are dropped.

use crate::error::{CsvError, CsvResult};
use crate::models::RawRow;

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Data rows keyed by header
    pub rows: Vec<RawRow>,
    /// Detected or assumed encoding
    pub encoding: String,
    /// Detected delimiter
    pub delimiter: char,
    /// Column headers in sheet order
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes using chardet
#[cfg(feature = "native")]
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the given encoding
#[cfg(feature = "native")]
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let text = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(e) => return Err(CsvError::Encoding(e.to_string())),
        },
        "iso-8859-1" | "latin-1" | "latin1" => encoding_rs::ISO_8859_15.decode(bytes).0.into_owned(),
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };
    Ok(text)
}

/// Detect the delimiter by counting occurrences in the header line.
///
/// Spreadsheet exports are comma-separated, so ties resolve to `,`.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse CSV text with an explicit delimiter.
///
/// # Example
/// ```
/// use portfolio::parser::parse_with_delimiter;
///
/// let result = parse_with_delimiter("id,title\n1,\"Gear, spur\"", ',', "utf-8").unwrap();
/// assert_eq!(result.rows[0]["title"], "Gear, spur");
/// ```
pub fn parse_with_delimiter(
    content: &str,
    delimiter: char,
    encoding: impl Into<String>,
) -> CsvResult<ParseResult> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::NoHeaders);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;

        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, cell)| (header.clone(), cell.to_string()))
            .collect();

        rows.push(row);
    }

    Ok(ParseResult {
        rows,
        encoding: encoding.into(),
        delimiter,
        headers,
    })
}

/// Parse UTF-8 CSV text, detecting the delimiter.
pub fn parse_str(content: &str) -> CsvResult<ParseResult> {
    parse_with_delimiter(content, detect_delimiter(content), "utf-8")
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
#[cfg(feature = "native")]
pub fn parse_bytes_auto(bytes: &[u8]) -> CsvResult<ParseResult> {
    if bytes.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = detect_delimiter(&content);

    parse_with_delimiter(&content, delimiter, encoding)
}

/// Parse a CSV file with auto-detection of encoding and delimiter.
#[cfg(feature = "native")]
pub fn parse_csv_file_auto<P: AsRef<std::path::Path>>(path: P) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes_auto(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_csv() {
        let result = parse_str("id,title\n1,Gearbox\n2,Sensor").unwrap();

        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.headers, vec!["id", "title"]);
        assert_eq!(result.rows[0]["id"], "1");
        assert_eq!(result.rows[1]["title"], "Sensor");
    }

    #[test]
    fn test_quoted_commas_and_newlines() {
        let csv = "id,description\n1,\"Cast, machined\nand anodized\"";
        let result = parse_str(csv).unwrap();

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0]["description"], "Cast, machined\nand anodized");
    }

    #[test]
    fn test_blank_rows_skipped() {
        let csv = "id,title\n1,A\n,\n\n   ,  \n2,B\n";
        let result = parse_str(csv).unwrap();

        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[1]["title"], "B");
    }

    #[test]
    fn test_short_row_leaves_columns_absent() {
        let result = parse_str("id,title,image\n1,Only title").unwrap();

        assert_eq!(result.rows[0]["title"], "Only title");
        assert!(!result.rows[0].contains_key("image"));
    }

    #[test]
    fn test_empty_cell_kept_as_empty_string() {
        let result = parse_str("id,title,image\n1,,x.png").unwrap();
        assert_eq!(result.rows[0]["title"], "");
    }

    #[test]
    fn test_headers_trimmed() {
        let result = parse_str(" id , title \n1,A").unwrap();
        assert_eq!(result.rows[0]["title"], "A");
    }

    #[test]
    fn test_empty_csv_error() {
        assert!(matches!(parse_str(""), Err(CsvError::EmptyFile)));
        assert!(matches!(parse_str("  \n "), Err(CsvError::EmptyFile)));
    }

    #[test]
    fn test_detect_delimiter_comma() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), ',');
    }

    #[test]
    fn test_detect_delimiter_semicolon() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), ';');
    }

    #[test]
    fn test_detect_delimiter_tab() {
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), '\t');
    }

    #[test]
    fn test_detect_delimiter_ignores_data_rows() {
        // Details cells use semicolons; only the header decides.
        assert_eq!(detect_delimiter("id,details\n1,a;b;c;d"), ',');
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert_eq!(decoded, "Société");
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_auto_parse() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "id;title\n1;Bracket\n").unwrap();

        let result = parse_csv_file_auto(file.path()).unwrap();
        assert_eq!(result.delimiter, ';');
        assert_eq!(result.encoding, "utf-8");
        assert_eq!(result.rows[0]["title"], "Bracket");
    }
}
