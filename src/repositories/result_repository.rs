use std::{io::Write, path::PathBuf};

use csv::WriterBuilder;

use crate::{
    errors::AppResult,
    models::domain::{FairDimension, OutputRecord},
};

const ENRICHMENT_COLUMNS: [&str; 3] = ["Scraped Title", "Scraped License", "Scraped File Formats"];

pub trait ResultRepository: Send + Sync {
    /// Persists the whole batch in one go.
    fn save_all(&self, records: &[OutputRecord]) -> AppResult<()>;

    /// Where the results end up, for the final operator message.
    fn destination(&self) -> String;
}

pub struct CsvResultRepository {
    path: PathBuf,
    include_enrichment: bool,
}

impl CsvResultRepository {
    pub fn new(path: impl Into<PathBuf>, include_enrichment: bool) -> Self {
        Self {
            path: path.into(),
            include_enrichment,
        }
    }
}

impl ResultRepository for CsvResultRepository {
    fn save_all(&self, records: &[OutputRecord]) -> AppResult<()> {
        let file = std::fs::File::create(&self.path)?;
        write_records(file, records, self.include_enrichment)
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}

pub fn header(include_enrichment: bool) -> Vec<String> {
    let mut columns = vec![
        "Dataset Name".to_string(),
        "Website Link".to_string(),
        "FAIR Raw Output".to_string(),
    ];
    if include_enrichment {
        columns.extend(ENRICHMENT_COLUMNS.iter().map(|c| c.to_string()));
    }
    columns.push("Parse Success".to_string());
    columns.push("Parsed Dataset Name".to_string());
    for dimension in FairDimension::ALL {
        columns.push(format!("{}-Score", dimension.label()));
    }
    for dimension in FairDimension::ALL {
        columns.push(format!("{}-Score Valid", dimension.label()));
    }
    columns.push("All Valid".to_string());
    columns.push("FAIR Score (%)".to_string());
    columns
}

fn row(record: &OutputRecord, include_enrichment: bool) -> Vec<String> {
    let mut cells = vec![
        record.record.name.clone(),
        record.record.url.clone(),
        record.raw_output.clone(),
    ];
    if include_enrichment {
        match &record.enrichment {
            Some(projection) => cells.extend([
                projection.title.clone(),
                projection.license.clone(),
                projection.file_formats.clone(),
            ]),
            None => cells.extend(std::iter::repeat(String::new()).take(ENRICHMENT_COLUMNS.len())),
        }
    }
    cells.push(record.scores.parse_succeeded.to_string());
    cells.push(record.scores.dataset_name_echo.clone().unwrap_or_default());
    for dimension in FairDimension::ALL {
        cells.push(
            record
                .scores
                .score(dimension)
                .map(|s| s.to_string())
                .unwrap_or_default(),
        );
    }
    for dimension in FairDimension::ALL {
        cells.push(record.validation.is_valid(dimension).to_string());
    }
    cells.push(record.validation.all_valid.to_string());
    cells.push(
        record
            .fair_percentage
            .map(|p| format!("{:.2}", p))
            .unwrap_or_default(),
    );
    cells
}

/// Writes the header and one line per record; absent values are empty cells.
pub fn write_records<W: Write>(
    writer: W,
    records: &[OutputRecord],
    include_enrichment: bool,
) -> AppResult<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(header(include_enrichment))?;
    for record in records {
        writer.write_record(row(record, include_enrichment))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{failed_output, parsed_output};

    fn render(records: &[OutputRecord], include_enrichment: bool) -> String {
        let mut buf = Vec::new();
        write_records(&mut buf, records, include_enrichment).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_without_enrichment() {
        assert_eq!(
            header(false).join(","),
            "Dataset Name,Website Link,FAIR Raw Output,Parse Success,Parsed Dataset Name,\
             F-Score,A-Score,I-Score,R-Score,F-Score Valid,A-Score Valid,I-Score Valid,\
             R-Score Valid,All Valid,FAIR Score (%)"
        );
    }

    #[test]
    fn header_with_enrichment_places_scraped_columns_after_raw_output() {
        let columns = header(true);
        assert_eq!(columns[2], "FAIR Raw Output");
        assert_eq!(&columns[3..6], &ENRICHMENT_COLUMNS.map(String::from));
        assert_eq!(columns.len(), header(false).len() + 3);
    }

    #[test]
    fn writes_parsed_and_failed_rows() {
        let out = render(&[parsed_output("Foo"), failed_output("Bar")], false);
        let mut lines = out.lines().skip(1);

        let parsed = lines.next().unwrap();
        assert!(parsed.starts_with("Foo,https://foo.example,"));
        assert!(parsed.ends_with(",true,Foo,9,8,7,4,true,true,true,true,true,69.40"));

        let failed = lines.next().unwrap();
        assert!(failed.starts_with("Bar,https://bar.example,Error: transport error: timed out,"));
        assert!(failed.ends_with(",false,,,,,,false,false,false,false,false,"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn multiline_raw_output_is_quoted() {
        let mut record = parsed_output("Foo");
        record.raw_output = "Reasoning...\n| Foo | F-Score (9/17) |".to_string();

        let out = render(&[record], false);
        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[2], "Reasoning...\n| Foo | F-Score (9/17) |");
    }

    #[test]
    fn enrichment_cells_are_blank_when_row_has_none() {
        let out = render(&[failed_output("Bar")], true);
        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[3], "");
        assert_eq!(&row[5], "");
        assert_eq!(row.len(), header(true).len());
    }
}
