//! Input boundary: CSV subject files and the interactive prompt sequence.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::PassgasError;
use crate::record::Record;

/// Read every subject row from a headered CSV file.
///
/// Expected header columns: firstname, lastname, nickname, birthdate,
/// partnername, partnernickname, partnerbirthdate, petname, companyname,
/// keywords. Short rows leave the trailing fields absent.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, PassgasError> {
    // Open explicitly so a missing file surfaces as an I/O error with the
    // path, not a bare CSV error.
    let file = std::fs::File::open(path)?;
    read_csv_from(file)
}

/// CSV reading from any source, used by tests and stdin piping.
pub fn read_csv_from<R: std::io::Read>(source: R) -> Result<Vec<Record>, PassgasError> {
    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);
    collect_records(reader)
}

fn collect_records<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<Record>, PassgasError> {
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: Record = row?;
        records.push(record);
    }
    Ok(records)
}

const PROMPTS: [(&str, &str); 10] = [
    ("firstname", "First name"),
    ("lastname", "Last name"),
    ("nickname", "Nickname"),
    ("birthdate", "Birthdate"),
    ("partnername", "Partner's name"),
    ("partnernickname", "Partner's nickname"),
    ("partnerbirthdate", "Partner's birthdate"),
    ("petname", "Pet's name"),
    ("companyname", "Company name"),
    ("keywords", "Keywords (comma separated)"),
];

/// Prompt for each field in turn and build a single record. An empty answer
/// leaves the field absent.
pub fn prompt_record<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Record, PassgasError> {
    let mut record = Record::default();
    for (field, label) in PROMPTS {
        write!(output, "{label}: ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let value = line.trim();
        if value.is_empty() {
            continue;
        }
        let value = Some(value.to_string());
        match field {
            "firstname" => record.firstname = value,
            "lastname" => record.lastname = value,
            "nickname" => record.nickname = value,
            "birthdate" => record.birthdate = value,
            "partnername" => record.partnername = value,
            "partnernickname" => record.partnernickname = value,
            "partnerbirthdate" => record.partnerbirthdate = value,
            "petname" => record.petname = value,
            "companyname" => record.companyname = value,
            "keywords" => record.keywords = value,
            _ => unreachable!(),
        }
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_rows_become_records() {
        let data = "firstname,lastname,nickname,birthdate,partnername,partnernickname,partnerbirthdate,petname,companyname,keywords\n\
                    Max,Muster,,1990,,,,Rex,Acme,\"hiking, chess\"\n";
        let records = read_csv_from(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.firstname.as_deref(), Some("Max"));
        // Empty CSV fields deserialize as absent.
        assert!(r.nickname.is_none());
        assert_eq!(r.petname.as_deref(), Some("Rex"));
        assert_eq!(r.keywords.as_deref(), Some("hiking, chess"));
    }

    #[test]
    fn short_rows_leave_fields_absent() {
        let data = "firstname,lastname,nickname,birthdate,partnername,partnernickname,partnerbirthdate,petname,companyname,keywords\n\
                    Max,Muster\n";
        let records = read_csv_from(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].firstname.as_deref(), Some("Max"));
        assert!(records[0].petname.is_none());
    }

    #[test]
    fn prompts_fill_only_answered_fields() {
        let answers = b"Max\n\n\n\n\n\n\nRex\n\n\n";
        let mut out = Vec::new();
        let record = prompt_record(&mut &answers[..], &mut out).unwrap();
        assert_eq!(record.firstname.as_deref(), Some("Max"));
        assert!(record.lastname.is_none());
        assert_eq!(record.petname.as_deref(), Some("Rex"));
        assert!(record.keywords.is_none());
    }
}
