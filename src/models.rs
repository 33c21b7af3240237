use serde::{Deserialize, Serialize};

/// A parsed `<host>/<owner>/<name>` input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
    pub host: String,
    pub owner: String,
    pub name: String,
}

impl std::fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.name)
    }
}

/// License data for a single repository, written to both report formats.
///
/// Field names serialize to the camelCase keys of the JSON report
/// (`licenseFile`, `licenseText`). `version` is always empty: a repository
/// reference carries no version information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRecord {
    pub repository: String,
    pub licenses: String,
    pub name: String,
    pub publisher: String,
    pub version: String,
    pub copyright: String,
    pub license_file: String,
    pub license_text: String,
}

impl LicenseRecord {
    /// An empty record for a reference whose license is not yet resolved.
    pub fn new(repository: &str, reference: &RepositoryReference) -> Self {
        LicenseRecord {
            repository: repository.to_string(),
            licenses: String::new(),
            name: reference.name.clone(),
            publisher: reference.owner.clone(),
            version: String::new(),
            copyright: String::new(),
            license_file: String::new(),
            license_text: String::new(),
        }
    }
}

/// Which report variant to emit.
///
/// `Full` is the eight-column CSV plus the JSON mapping; `Processed` is the
/// historical four-column CSV without the existence-check fallback or
/// copyright extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSchema {
    #[default]
    Full,
    Processed,
}

impl std::fmt::Display for ReportSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportSchema::Full => write!(f, "full"),
            ReportSchema::Processed => write!(f, "processed"),
        }
    }
}
