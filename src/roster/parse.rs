use crate::error::{Result, RosterError};
use crate::roster::Person;
use log::{debug, trace};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load every record from a roster file.
///
/// The file handle lives only for the duration of the scan.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Person>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    parse_roster(BufReader::new(file), &path.display().to_string())
}

/// Parse roster lines from any buffered reader.
///
/// Expected columns (`|`-separated, no header):
/// first_name|last_name|house|advisor|cohort
///
/// Surrounding whitespace is trimmed from each line and blank lines are
/// skipped. `origin` only labels error messages.
///
/// ```
/// use roster_query::roster::parse_roster;
///
/// let text = "Harry|Potter|Gryffindor|McGonagall|Fall 2015\n\nMoaning|Myrtle|||G\n";
/// let people = parse_roster(text.as_bytes(), "inline").unwrap();
/// assert_eq!(people.len(), 2);
/// assert_eq!(people[0].full_name, "Harry Potter");
/// assert_eq!(people[1].cohort, "G");
///
/// assert!(parse_roster("Harry|Potter".as_bytes(), "inline").is_err());
/// ```
pub fn parse_roster<R: BufRead>(reader: R, origin: &str) -> Result<Vec<Person>> {
    let mut out = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let lno = lineno + 1;
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            trace!("{}:{}: skipping blank line", origin, lno);
            continue;
        }

        out.push(parse_line(line, origin, lno)?);
    }

    debug!("loaded {} records from {}", out.len(), origin);
    Ok(out)
}

fn parse_line(line: &str, origin: &str, lno: usize) -> Result<Person> {
    let fields: Vec<&str> = line.split('|').collect();
    let &[first, last, house, advisor, cohort] = fields.as_slice() else {
        return Err(RosterError::MalformedRecord {
            origin: origin.to_string(),
            line: lno,
            found: fields.len(),
        });
    };
    Ok(Person::new(first, last, house, advisor, cohort))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_fields_in_order() {
        let people = parse_roster(
            "Harry|Potter|Gryffindor|McGonagall|Fall 2015\n".as_bytes(),
            "t",
        )
        .unwrap();
        assert_eq!(
            people,
            vec![Person {
                first_name: "Harry".into(),
                last_name: "Potter".into(),
                full_name: "Harry Potter".into(),
                house: "Gryffindor".into(),
                advisor: "McGonagall".into(),
                cohort: "Fall 2015".into(),
            }]
        );
    }

    #[test]
    fn trims_lines_and_skips_blanks() {
        let text = "\r\n  Severus|Snape|||I  \r\n\n   \nFilius|Flitwick|||I";
        let people = parse_roster(text.as_bytes(), "t").unwrap();
        let names: Vec<&str> = people.iter().map(|p| p.full_name.as_str()).collect();
        assert_eq!(names, vec!["Severus Snape", "Filius Flitwick"]);
        assert_eq!(people[0].cohort, "I");
        assert_eq!(people[0].house, "");
    }

    #[test]
    fn rejects_wrong_field_count_with_line_number() {
        let text = "Harry|Potter|Gryffindor|McGonagall|Fall 2015\n\nRon|Weasley|Gryffindor\n";
        let err = parse_roster(text.as_bytes(), "roster.txt").unwrap_err();
        match err {
            RosterError::MalformedRecord {
                origin,
                line,
                found,
            } => {
                assert_eq!(origin, "roster.txt");
                assert_eq!(line, 3);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_extra_fields() {
        let err = parse_roster("a|b|c|d|e|f".as_bytes(), "t").unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed record at t:1: expected 5 '|'-separated fields, found 6"
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("nope.txt")).unwrap_err();
        match err {
            RosterError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn loading_twice_yields_equal_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.txt");
        std::fs::write(
            &path,
            "Harry|Potter|Gryffindor|McGonagall|Fall 2015\nMoaning|Myrtle|||G\n",
        )
        .unwrap();
        assert_eq!(load(&path).unwrap(), load(&path).unwrap());
    }
}
