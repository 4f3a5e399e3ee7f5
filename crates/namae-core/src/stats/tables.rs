use serde::{Deserialize, Serialize};

use super::{IrregularityReport, Tally};

/// A table of pre-formatted cells, ready for a front end to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub caption: String,
}

impl ReportTable {
    fn new(headers: &[&str], caption: &str) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            caption: caption.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTables {
    pub by_year: ReportTable,
    pub by_gender: ReportTable,
    pub by_year_gender: ReportTable,
}

fn tally_cells(tally: &Tally, precision: usize) -> [String; 3] {
    [
        tally.total.to_string(),
        tally.irregular.to_string(),
        format!("{:.*}", precision, tally.proportion()),
    ]
}

impl IrregularityReport {
    /// Export the breakdowns as string tables, proportions rounded to
    /// `precision` decimal places.
    pub fn to_tables(&self, precision: usize) -> ReportTables {
        let mut by_year = ReportTable::new(
            &["Year", "Total", "Irregular", "Proportion"],
            "Name Reading Irregularity by Year",
        );
        for (year, tally) in &self.by_year {
            let mut row = vec![year.to_string()];
            row.extend(tally_cells(tally, precision));
            by_year.rows.push(row);
        }

        let mut by_gender = ReportTable::new(
            &["Gender", "Total", "Irregular", "Proportion"],
            "Name Reading Irregularity by Gender",
        );
        for (gender, tally) in &self.by_gender {
            let mut row = vec![gender.clone()];
            row.extend(tally_cells(tally, precision));
            by_gender.rows.push(row);
        }

        let mut by_year_gender = ReportTable::new(
            &["Year", "Gender", "Total", "Irregular", "Proportion"],
            "Name Reading Irregularity by Year and Gender",
        );
        for (year, genders) in &self.by_year_gender {
            for (gender, tally) in genders {
                let mut row = vec![year.to_string(), gender.clone()];
                row.extend(tally_cells(tally, precision));
                by_year_gender.rows.push(row);
            }
        }

        ReportTables {
            by_year,
            by_gender,
            by_year_gender,
        }
    }
}
