use crate::model::Contribution;
use std::collections::HashMap;

/// Merge mailmap seeds with shortlog entries, keyed by e-mail.
///
/// Seeds are first-write-wins. Shortlog entries add to an existing entry
/// without touching its name, or are inserted as new entries. Anything with
/// no commits is dropped from both passes.
pub fn aggregate<S, L>(seeds: S, log: L) -> Vec<Contribution>
where
    S: IntoIterator<Item = Contribution>,
    L: IntoIterator<Item = Contribution>,
{
    let mut map: HashMap<String, Contribution> = HashMap::new();

    for c in seeds {
        if c.commits == 0 {
            continue;
        }
        map.entry(c.email.clone()).or_insert(c);
    }

    for c in log {
        if c.commits == 0 {
            continue;
        }
        match map.get_mut(&c.email) {
            Some(existing) => existing.commits = existing.commits.saturating_add(c.commits),
            None => {
                map.insert(c.email.clone(), c);
            }
        }
    }

    map.into_values().collect()
}

pub fn sort_contributions(items: &mut [Contribution]) {
    items.sort_by(|a, b| b.commits.cmp(&a.commits).then_with(|| a.email.cmp(&b.email)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(name: &str, email: &str, commits: u64) -> Contribution {
        Contribution::new(name, email, commits)
    }

    fn find<'a>(items: &'a [Contribution], email: &str) -> &'a Contribution {
        items.iter().find(|c| c.email == email).unwrap()
    }

    #[test]
    fn seed_and_log_counts_are_summed() {
        let items = aggregate(
            vec![c("Alice", "alice@example.com", 100)],
            vec![c("alice", "alice@example.com", 7)],
        );
        assert_eq!(items.len(), 1);
        assert_eq!(items[0], c("Alice", "alice@example.com", 107));
    }

    #[test]
    fn log_only_entry_keeps_its_values() {
        let items = aggregate(vec![], vec![c("Bob", "bob@example.com", 4)]);
        assert_eq!(items, vec![c("Bob", "bob@example.com", 4)]);
    }

    #[test]
    fn seed_without_log_is_kept() {
        let items = aggregate(
            vec![c("Old Timer", "old@example.com", 17)],
            vec![c("Bob", "bob@example.com", 4)],
        );
        assert_eq!(find(&items, "old@example.com").commits, 17);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn first_seed_wins() {
        let items = aggregate(
            vec![c("First", "a@example.com", 10), c("Second", "a@example.com", 20)],
            vec![],
        );
        assert_eq!(items, vec![c("First", "a@example.com", 10)]);
    }

    #[test]
    fn zero_commit_records_are_dropped() {
        let items = aggregate(
            vec![c("Nobody", "nobody@example.com", 0)],
            vec![c("Zero", "zero@example.com", 0), c("Nobody", "nobody@example.com", 2)],
        );
        assert_eq!(items, vec![c("Nobody", "nobody@example.com", 2)]);
    }

    #[test]
    fn repeated_log_emails_accumulate() {
        let items = aggregate(
            vec![],
            vec![c("Bob", "bob@example.com", 4), c("Robert", "bob@example.com", 1)],
        );
        assert_eq!(items, vec![c("Bob", "bob@example.com", 5)]);
    }

    #[test]
    fn huge_counts_saturate() {
        let items = aggregate(
            vec![c("Big", "big@example.com", u64::MAX)],
            vec![c("Big", "big@example.com", 1)],
        );
        assert_eq!(items, vec![c("Big", "big@example.com", u64::MAX)]);

        let items = aggregate(
            vec![],
            vec![c("Big", "big@example.com", u64::MAX), c("Big", "big@example.com", 1)],
        );
        assert_eq!(items[0].commits, u64::MAX);
    }

    #[test]
    fn sort_by_commits_then_email() {
        let mut items = vec![
            c("B", "b@x", 5),
            c("A", "a@x", 5),
            c("C", "c@x", 10),
        ];
        sort_contributions(&mut items);
        let emails: Vec<_> = items.iter().map(|c| c.email.as_str()).collect();
        assert_eq!(emails, vec!["c@x", "a@x", "b@x"]);
    }

    #[test]
    fn email_order_is_bytewise() {
        let mut items = vec![c("a", "a@x", 1), c("Z", "Z@x", 1)];
        sort_contributions(&mut items);
        assert_eq!(items[0].email, "Z@x");
    }
}
