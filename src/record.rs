/// Columns written by the bulk runner.
pub const BULK_COLUMNS: &[&str] = &[
    "first_name",
    "last_name",
    "full_name",
    "linkedin_link",
    "headline",
    "title",
    "company",
    "location",
    "summary",
    "school",
    "degree",
    "skills",
    "certifications",
    "vertical",
    "source_file",
];

/// Columns written by the watcher: the bulk set plus `parsed_at`.
pub const WATCH_COLUMNS: &[&str] = &[
    "first_name",
    "last_name",
    "full_name",
    "linkedin_link",
    "headline",
    "title",
    "company",
    "location",
    "summary",
    "school",
    "degree",
    "skills",
    "certifications",
    "vertical",
    "source_file",
    "parsed_at",
];

/// One candidate, as pulled from one profile export. Missing values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateRecord {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub linkedin_link: String,
    pub headline: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub summary: String,
    pub school: String,
    pub degree: String,
    pub skills: String,
    pub certifications: String,
    /// Never populated.
    pub experience_years: String,
    /// Never populated.
    pub vertical: String,
    pub source_file: String,
    pub parsed_at: Option<String>,
}

impl CandidateRecord {
    /// All fields in schema order, `parsed_at` last and empty when unset.
    pub fn fields(&self) -> [(&'static str, &str); 17] {
        [
            ("first_name", self.first_name.as_str()),
            ("last_name", self.last_name.as_str()),
            ("full_name", self.full_name.as_str()),
            ("linkedin_link", self.linkedin_link.as_str()),
            ("headline", self.headline.as_str()),
            ("title", self.title.as_str()),
            ("company", self.company.as_str()),
            ("location", self.location.as_str()),
            ("summary", self.summary.as_str()),
            ("school", self.school.as_str()),
            ("degree", self.degree.as_str()),
            ("skills", self.skills.as_str()),
            ("certifications", self.certifications.as_str()),
            ("experience_years", self.experience_years.as_str()),
            ("vertical", self.vertical.as_str()),
            ("source_file", self.source_file.as_str()),
            ("parsed_at", self.parsed_at.as_deref().unwrap_or("")),
        ]
    }

    pub fn get(&self, column: &str) -> &str {
        self.fields()
            .into_iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
            .unwrap_or("")
    }

    /// Values for `columns`, in that order. Unknown columns come out empty.
    pub fn row<'a>(&'a self, columns: &[&str]) -> Vec<&'a str> {
        columns.iter().map(|c| self.get(c)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields()
            .iter()
            .all(|(name, value)| *name == "source_file" || value.is_empty())
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_follows_column_order() {
        let r = CandidateRecord {
            first_name: "Ada".into(),
            source_file: "Profile.pdf".into(),
            parsed_at: Some("2024-01-02 03:04:05".into()),
            ..Default::default()
        };
        let row = r.row(WATCH_COLUMNS);
        assert_eq!(row.len(), 16);
        assert_eq!(row[0], "Ada");
        assert_eq!(row[14], "Profile.pdf");
        assert_eq!(row[15], "2024-01-02 03:04:05");
    }

    #[test]
    fn bulk_columns_skip_experience_years_and_parsed_at() {
        assert!(!BULK_COLUMNS.contains(&"experience_years"));
        assert!(!BULK_COLUMNS.contains(&"parsed_at"));
        assert_eq!(&WATCH_COLUMNS[..BULK_COLUMNS.len()], BULK_COLUMNS);
    }

    #[test]
    fn empty_ignores_source_file() {
        let r = CandidateRecord {
            source_file: "x.pdf".into(),
            ..Default::default()
        };
        assert!(r.is_empty());
        assert_eq!(r.get("parsed_at"), "");
    }
}
