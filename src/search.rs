use serde::Deserialize;

/// One entry of a `--flat-playlist --dump-json` listing. Everything except
/// the id is optional; YouTube omits fields freely in flat mode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub id: String,
    pub title: Option<String>,
    pub duration: Option<f64>,
    pub uploader: Option<String>,
    pub channel: Option<String>,
    pub url: Option<String>,
    pub webpage_url: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum ListingError {
    #[error("Could not parse result line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
}

impl SearchResult {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(no title)")
    }

    pub fn display_uploader(&self) -> &str {
        self.uploader
            .as_deref()
            .or(self.channel.as_deref())
            .unwrap_or("?")
    }

    /// The URL handed to the player. Falls back to deriving one from the
    /// video id, which parsing guarantees to be non-empty.
    pub fn watch_url(&self) -> String {
        self.webpage_url
            .as_deref()
            .or(self.url.as_deref())
            .map(String::from)
            .unwrap_or_else(|| format!("https://www.youtube.com/watch?v={}", self.id))
    }
}

/// Parse a newline-delimited JSON listing, one record per line. A line that
/// is not valid JSON is an error; a record without a video id is skipped.
pub fn parse_listing(raw: &str) -> Result<Vec<SearchResult>, ListingError> {
    let mut results = Vec::new();

    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let entry: SearchResult = serde_json::from_str(line).map_err(|source| {
            ListingError::Parse {
                line: idx + 1,
                source,
            }
        })?;

        if entry.id.is_empty() {
            warn!("Skipping result on line {} with no video id", idx + 1);
            continue;
        }

        results.push(entry);
    }

    Ok(results)
}

pub fn format_duration(seconds: Option<f64>) -> String {
    let Some(seconds) = seconds else {
        return "?".to_string();
    };
    if !seconds.is_finite() || seconds < 0.0 {
        return "?".to_string();
    }

    let total = seconds as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;

    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

/// Render an enumerated listing, two lines per entry.
pub fn format_listing(results: &[SearchResult]) -> String {
    let mut out = String::new();

    for (idx, entry) in results.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {} [{}] - {}\n",
            idx + 1,
            entry.display_title(),
            format_duration(entry.duration),
            entry.display_uploader(),
        ));
        out.push_str(&format!("    {}\n", entry.watch_url()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_listing(fname: &str) -> String {
        let mut d = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        d.push("resources/test/");
        d.push(fname);
        std::fs::read_to_string(d).expect(format!("Could not read {}", fname).as_str())
    }

    #[test]
    fn parse_flat_listing() {
        let raw = get_test_listing("flat_search.jsonl");
        let results = parse_listing(&raw).expect("Could not parse listing");

        // The fixture has four lines, one of them without a video id
        assert_eq!(results.len(), 3, "Entry without an id should be skipped");

        assert_eq!(results[0].id, "dQw4w9WgXcQ");
        assert_eq!(
            results[0].display_title(),
            "Rick Astley - Never Gonna Give You Up (Official Video)"
        );
        assert_eq!(results[0].display_uploader(), "Rick Astley");

        assert!(results[1].duration.is_none(), "Duration should be absent");
        assert_eq!(
            results[1].display_uploader(),
            "jawed",
            "Uploader should fall back to the channel field"
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        let raw = "{\"id\": \"abc\"}\nnot json at all\n";
        match parse_listing(raw) {
            Err(ListingError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn missing_fields_display_as_placeholders() {
        let raw = r#"{"id": "abc123XYZ_-"}"#;
        let results = parse_listing(raw).unwrap();

        assert_eq!(results[0].display_title(), "(no title)");
        assert_eq!(results[0].display_uploader(), "?");
        assert_eq!(
            results[0].watch_url(),
            "https://www.youtube.com/watch?v=abc123XYZ_-"
        );
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(None), "?");
        assert_eq!(format_duration(Some(59.0)), "0:59");
        assert_eq!(format_duration(Some(213.0)), "3:33");
        assert_eq!(format_duration(Some(3661.0)), "1:01:01");
        assert_eq!(format_duration(Some(-1.0)), "?");
        assert_eq!(format_duration(Some(f64::NAN)), "?");
    }

    #[test]
    fn listing_is_enumerated_in_order() {
        let raw = get_test_listing("flat_search.jsonl");
        let results = parse_listing(&raw).unwrap();
        let listing = format_listing(&results[..2]);
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), 4, "Two entries, two lines each");
        assert!(lines[0].starts_with(" 1. "));
        assert!(lines[0].contains("[3:33]"));
        assert!(lines[1].trim_start().starts_with("https://"));
        assert!(lines[2].starts_with(" 2. "));
        assert!(lines[2].contains("[?]"), "Missing duration renders as ?");
    }
}
