use anyhow::Result;
use csv_core::{ReadFieldResult, Reader};

/// Parse a CSV document into records.
///
/// Field-at-a-time loop over `csv_core::Reader`; quoted fields may contain
/// commas, quotes, and line breaks, and cell text comes back with the quoting
/// removed but otherwise byte-identical. An empty reader input signals end of
/// data, which flushes the final unterminated field.
pub fn parse_records(content: &str) -> Result<Vec<Vec<String>>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field: Vec<u8> = Vec::new();

    let mut rdr = Reader::new();
    let mut bytes = content.as_bytes();
    let mut output = [0; 4096];

    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        field.extend_from_slice(&output[..nout]);
        bytes = &bytes[nin..];
        match result {
            ReadFieldResult::InputEmpty | ReadFieldResult::OutputFull => {}
            ReadFieldResult::Field { record_end } => {
                record.push(String::from_utf8(std::mem::take(&mut field))?);
                if record_end {
                    records.push(std::mem::take(&mut record));
                }
            }
            ReadFieldResult::End => break,
        }
    }

    Ok(records)
}

/// Render records as CSV text, quoting every field.
///
/// The sheets this tool round-trips routinely hold commas and multi-line
/// cells, so every field is quoted and embedded quotes are doubled.
pub fn write_records<R, F>(records: R) -> String
where
    R: IntoIterator<Item = F>,
    F: IntoIterator<Item = String>,
{
    let mut out = String::new();
    for record in records {
        let mut first = true;
        for fieldtext in record {
            if !first {
                out.push(',');
            }
            first = false;
            out.push('"');
            out.push_str(&fieldtext.replace('"', "\"\""));
            out.push('"');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_parse() {
        let records = parse_records("総丈：66.2cm,綿100%\n股下：70cm,ウール\n").unwrap();
        assert_eq!(
            records,
            vec![
                vec!["総丈：66.2cm".to_string(), "綿100%".to_string()],
                vec!["股下：70cm".to_string(), "ウール".to_string()],
            ]
        );
    }

    #[test]
    fn quoted_field_keeps_embedded_newlines_and_commas() {
        let records = parse_records("\"a\nb\",\"c,d\"\n").unwrap();
        assert_eq!(records, vec![vec!["a\nb".to_string(), "c,d".to_string()]]);
    }

    #[test]
    fn missing_trailing_newline_still_yields_the_last_record() {
        let records = parse_records("a,b").unwrap();
        assert_eq!(records, vec![vec!["a".to_string(), "b".to_string()]]);
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(parse_records("").unwrap().is_empty());
    }

    #[test]
    fn written_records_round_trip() {
        let records = vec![
            vec!["a\nb".to_string(), "c,d".to_string()],
            vec!["say \"hi\"".to_string(), String::new()],
        ];
        let text = write_records(records.clone());
        assert_eq!(parse_records(&text).unwrap(), records);
    }
}
