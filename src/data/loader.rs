use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use super::error::ParseError;
use super::model::{AgeLikes, DatedLikes, PlatformLikes};

// ---------------------------------------------------------------------------
// Raw CSV records – every field arrives as text
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawAgeRow {
    #[serde(rename = "AgeGroup")]
    age_group: String,
    #[serde(rename = "Likes")]
    likes: String,
}

#[derive(Debug, Deserialize)]
struct RawPlatformRow {
    #[serde(rename = "Platform")]
    platform: String,
    #[serde(rename = "PostType")]
    post_type: String,
    #[serde(rename = "Likes")]
    likes: String,
}

#[derive(Debug, Deserialize)]
struct RawDatedRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Likes")]
    likes: String,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load `AgeGroup,Likes` rows.
pub fn load_age_likes(path: &Path) -> Result<Vec<AgeLikes>> {
    let file = open(path)?;
    read_age_likes(file).with_context(|| format!("loading {}", path.display()))
}

/// Load `Platform,PostType,Likes` rows.
pub fn load_platform_likes(path: &Path) -> Result<Vec<PlatformLikes>> {
    let file = open(path)?;
    read_platform_likes(file).with_context(|| format!("loading {}", path.display()))
}

/// Load `Date,Likes` rows. Any unparsable date rejects the whole file.
pub fn load_dated_likes(path: &Path) -> Result<Vec<DatedLikes>> {
    let file = open(path)?;
    read_dated_likes(file).with_context(|| format!("loading {}", path.display()))
}

fn open(path: &Path) -> Result<std::fs::File> {
    std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))
}

// ---------------------------------------------------------------------------
// Readers
// ---------------------------------------------------------------------------

pub fn read_age_likes<R: Read>(input: R) -> Result<Vec<AgeLikes>> {
    read_rows(input, |row_no, raw: RawAgeRow| {
        Ok(AgeLikes {
            likes: parse_measure(row_no, "Likes", &raw.likes)?,
            age_group: raw.age_group,
        })
    })
}

pub fn read_platform_likes<R: Read>(input: R) -> Result<Vec<PlatformLikes>> {
    read_rows(input, |row_no, raw: RawPlatformRow| {
        Ok(PlatformLikes {
            likes: parse_measure(row_no, "Likes", &raw.likes)?,
            platform: raw.platform,
            post_type: raw.post_type,
        })
    })
}

pub fn read_dated_likes<R: Read>(input: R) -> Result<Vec<DatedLikes>> {
    read_rows(input, |row_no, raw: RawDatedRow| {
        Ok(DatedLikes {
            date: parse_date(row_no, "Date", &raw.date)?,
            likes: parse_measure(row_no, "Likes", &raw.likes)?,
        })
    })
}

/// Deserialize every record and convert it, stopping at the first bad row.
fn read_rows<R, T, U, F>(input: R, mut convert: F) -> Result<Vec<U>>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
    F: FnMut(usize, T) -> Result<U, ParseError>,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(input);

    let mut rows = Vec::new();
    for (i, record) in reader.deserialize::<T>().enumerate() {
        let row_no = i + 1;
        let raw = record.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(convert(row_no, raw)?);
    }
    log::debug!("read {} rows", rows.len());
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Field coercion
// ---------------------------------------------------------------------------

/// Parse a like count. Empty, malformed and non-finite values are rejected.
pub fn parse_measure(row: usize, column: &'static str, text: &str) -> Result<f64, ParseError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::Measure {
            row,
            column,
            value: text.to_string(),
        })
}

/// Parse `M/D/YYYY`, discarding anything after the first space.
pub fn parse_date(row: usize, column: &'static str, text: &str) -> Result<NaiveDate, ParseError> {
    let day = text.trim().split(' ').next().unwrap_or_default();
    NaiveDate::parse_from_str(day, "%m/%d/%Y").map_err(|_| ParseError::Date {
        row,
        column,
        value: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_read_age_likes() {
        let csv = "AgeGroup,Likes\n18-24,120\n25-34,87\n";
        let rows = read_age_likes(csv.as_bytes()).unwrap();
        assert_eq!(
            rows,
            vec![
                AgeLikes {
                    age_group: "18-24".to_string(),
                    likes: 120.0,
                },
                AgeLikes {
                    age_group: "25-34".to_string(),
                    likes: 87.0,
                },
            ]
        );
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(read_age_likes("AgeGroup,Likes\n".as_bytes()).unwrap().is_empty());
        assert!(read_dated_likes("Date,Likes\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_extra_columns_ignored() {
        let csv = "Platform,PostType,Likes,AgeGroup\nTwitter,Video,10.5,18-24\n";
        let rows = read_platform_likes(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].platform, "Twitter");
        assert_eq!(rows[0].post_type, "Video");
        assert_eq!(rows[0].likes, 10.5);
    }

    #[test]
    fn test_missing_column_is_error() {
        assert!(read_platform_likes("Platform,Likes\nTwitter,3\n".as_bytes()).is_err());
    }

    #[test]
    fn test_bad_measure_is_parse_error() {
        let csv = "AgeGroup,Likes\n18-24,12\n18-24,lots\n";
        let err = read_age_likes(csv.as_bytes()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ParseError>(),
            Some(&ParseError::Measure {
                row: 2,
                column: "Likes",
                value: "lots".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_and_non_finite_measures_rejected() {
        assert!(parse_measure(1, "Likes", "").is_err());
        assert!(parse_measure(1, "Likes", "NaN").is_err());
        assert!(parse_measure(1, "Likes", "inf").is_err());
        assert_eq!(parse_measure(1, "Likes", " 42 "), Ok(42.0));
    }

    #[test]
    fn test_date_time_suffix_discarded() {
        assert_eq!(parse_date(1, "Date", "3/1/2024 10:15"), Ok(date(2024, 3, 1)));
        assert_eq!(parse_date(1, "Date", "03/07/2024"), Ok(date(2024, 3, 7)));
        assert_eq!(parse_date(1, "Date", "12/31/2023 23:59:59"), Ok(date(2023, 12, 31)));
    }

    #[test]
    fn test_bad_date_rejects_file() {
        let csv = "Date,Likes\n3/1/2024,10\nyesterday,20\n3/2/2024,5\n";
        let err = read_dated_likes(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::Date { row: 2, .. })
        ));
    }

    #[test]
    fn test_same_day_different_times_share_date() {
        let csv = "Date,Likes\n3/1/2024 08:00,10\n3/1/2024 21:30,20\n";
        let rows = read_dated_likes(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].date, rows[1].date);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "AgeGroup,Likes").unwrap();
        writeln!(file, "65+,3").unwrap();
        file.flush().unwrap();

        let rows = load_age_likes(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].age_group, "65+");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_age_likes(&dir.path().join("absent.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("absent.csv"));
    }
}
