use super::{normalize, KnowledgeBase};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum KnowledgeBaseError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRisk { country: String, value: f64 },
}

impl std::fmt::Display for KnowledgeBaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KnowledgeBaseError::Io(err) => write!(f, "failed to read country risk table: {}", err),
            KnowledgeBaseError::Csv(err) => write!(f, "invalid country risk CSV data: {}", err),
            KnowledgeBaseError::InvalidRisk { country, value } => write!(
                f,
                "base risk for '{}' must lie within [0, 1], found {}",
                country, value
            ),
        }
    }
}

impl std::error::Error for KnowledgeBaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KnowledgeBaseError::Io(err) => Some(err),
            KnowledgeBaseError::Csv(err) => Some(err),
            KnowledgeBaseError::InvalidRisk { .. } => None,
        }
    }
}

impl From<std::io::Error> for KnowledgeBaseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for KnowledgeBaseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct CountryRiskRow {
    country: String,
    base_risk: f64,
}

impl KnowledgeBase {
    /// Merge a `country,base_risk` CSV export into this knowledge base.
    /// Rows override existing entries; blank country names are skipped.
    pub fn with_country_risks_from_reader<R: Read>(
        mut self,
        reader: R,
    ) -> Result<Self, KnowledgeBaseError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        for record in csv_reader.deserialize::<CountryRiskRow>() {
            let row = record?;
            let country = normalize(&row.country);
            if country.is_empty() {
                continue;
            }
            if !(0.0..=1.0).contains(&row.base_risk) {
                return Err(KnowledgeBaseError::InvalidRisk {
                    country: row.country,
                    value: row.base_risk,
                });
            }
            self.country_risks.insert(country, row.base_risk);
        }

        Ok(self)
    }

    pub fn with_country_risks_from_path<P: AsRef<Path>>(
        self,
        path: P,
    ) -> Result<Self, KnowledgeBaseError> {
        let file = std::fs::File::open(path)?;
        self.with_country_risks_from_reader(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::briefing::knowledge::CountryMatch;
    use std::io::Cursor;

    #[test]
    fn csv_rows_override_and_extend_the_table() {
        let csv = "country,base_risk\nJapan, 0.4\nAtlantis,0.2\n , 0.9\n";
        let base = KnowledgeBase::empty()
            .with_country_risk("Japan", 0.15)
            .with_country_risks_from_reader(Cursor::new(csv))
            .expect("csv imports");

        assert_eq!(base.base_risk("japan"), 0.4);
        assert_eq!(base.country_risk("ATLANTIS").matched, CountryMatch::Exact);
        assert_eq!(base.country_count(), 2);
    }

    #[test]
    fn out_of_range_risk_is_rejected() {
        let csv = "country,base_risk\nMars,1.5\n";
        let err = KnowledgeBase::empty()
            .with_country_risks_from_reader(Cursor::new(csv))
            .expect_err("risk above one rejected");

        assert!(matches!(err, KnowledgeBaseError::InvalidRisk { value, .. } if value == 1.5));
        assert!(err.to_string().contains("Mars"));
    }

    #[test]
    fn malformed_rows_surface_csv_errors() {
        let csv = "country,base_risk\nPeru,high\n";
        let err = KnowledgeBase::empty()
            .with_country_risks_from_reader(Cursor::new(csv))
            .expect_err("non-numeric risk rejected");
        assert!(matches!(err, KnowledgeBaseError::Csv(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = KnowledgeBase::empty()
            .with_country_risks_from_path("/nonexistent/country-risk.csv")
            .expect_err("missing file");
        assert!(matches!(err, KnowledgeBaseError::Io(_)));
    }
}
