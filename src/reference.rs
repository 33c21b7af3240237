use crate::models::RepositoryReference;

/// Parse one input line of the form `<host>/<owner>/<name>`.
///
/// Returns `None` when the first segment does not equal the configured host,
/// when fewer than three segments are present, or when the owner or name
/// segment is empty. Segments past the third are ignored, so
/// `github.com/acme/widget/tree/main` resolves to `acme/widget`.
pub fn parse_reference(line: &str, host: &str) -> Option<RepositoryReference> {
    let mut segments = line.trim().split('/');

    if segments.next()? != host {
        return None;
    }

    let owner = segments.next()?;
    let name = segments.next()?;
    if owner.is_empty() || name.is_empty() {
        return None;
    }

    Some(RepositoryReference {
        host: host.to_string(),
        owner: owner.to_string(),
        name: name.to_string(),
    })
}
