use super::client::UserSearch;
use std::collections::HashMap;

pub fn batches(emails: &[String], size: usize) -> std::slice::Chunks<'_, String> {
    emails.chunks(size.max(1))
}

/// `a@x in:email OR b@y in:email`
pub fn build_query(emails: &[String]) -> String {
    emails
        .iter()
        .map(|email| format!("{email} in:email"))
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// Map e-mails to GitHub logins, one search request per batch.
///
/// A failed batch contributes nothing. A login is recorded only for a
/// text match whose fragment is exactly one of the queried e-mails, and the
/// first login seen for an e-mail is kept.
pub fn resolve_logins<S: UserSearch + ?Sized>(
    search: &S,
    emails: &[String],
    batch_size: usize,
) -> HashMap<String, String> {
    let mut result: HashMap<String, String> = HashMap::new();

    for batch in batches(emails, batch_size) {
        let users = match search.search(&build_query(batch)) {
            Ok(users) => users,
            Err(e) => {
                tracing::debug!(error = %e, batch = batch.len(), "user search failed, skipping batch");
                continue;
            }
        };

        for user in users {
            for m in &user.text_matches {
                if batch.iter().any(|email| *email == m.fragment) {
                    result
                        .entry(m.fragment.clone())
                        .or_insert_with(|| user.login.clone());
                }
            }
        }
    }

    tracing::debug!(resolved = result.len(), total = emails.len(), "resolved GitHub logins");
    result
}
