/// A label condition in disjunctive normal form: space-separated OR-groups,
/// each a comma-separated list of labels that must all be present.
///
/// `"bug,urgent priority"` matches issues labeled both `bug` and `urgent`,
/// or labeled `priority`.
#[derive(Debug, Clone, Default)]
pub struct LabelPredicate {
    groups: Vec<Vec<String>>,
}

impl LabelPredicate {
    /// An empty or blank input yields an empty predicate, which matches
    /// every issue.
    pub fn parse(input: &str) -> Self {
        let groups = input
            .split(' ')
            .map(|group| {
                group
                    .split(',')
                    .filter(|term| !term.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|group| !group.is_empty())
            .collect();
        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// True iff some OR-group's labels are all present on the issue.
    /// Matching is exact and case-sensitive.
    pub fn matches(&self, labels: &[String]) -> bool {
        if self.groups.is_empty() {
            return true;
        }
        self.groups
            .iter()
            .any(|group| group.iter().all(|term| labels.iter().any(|l| l == term)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_predicate_matches_everything() {
        let p = LabelPredicate::parse("");
        assert!(p.is_empty());
        assert!(p.matches(&labels(&["bug"])));
        assert!(p.matches(&[]));
    }

    #[test]
    fn single_label_matches_when_present() {
        let p = LabelPredicate::parse("bug");
        assert!(p.matches(&labels(&["bug", "urgent"])));
        assert!(!p.matches(&labels(&["feature"])));
    }

    #[test]
    fn and_group_requires_all_terms() {
        let p = LabelPredicate::parse("bug,urgent");
        assert!(p.matches(&labels(&["bug", "urgent", "extra"])));
        assert!(!p.matches(&labels(&["bug"])));
        assert!(!p.matches(&labels(&["urgent"])));
    }

    #[test]
    fn or_groups_match_independently() {
        let p = LabelPredicate::parse("bug,urgent priority");
        assert!(p.matches(&labels(&["bug", "urgent"])));
        assert!(p.matches(&labels(&["priority"])));
        assert!(!p.matches(&labels(&["bug"])));
    }

    #[test]
    fn no_labels_only_matches_empty_predicate() {
        assert!(LabelPredicate::parse("").matches(&[]));
        assert!(!LabelPredicate::parse("bug").matches(&[]));
        assert!(!LabelPredicate::parse("bug wontfix").matches(&[]));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let p = LabelPredicate::parse("Bug");
        assert!(!p.matches(&labels(&["bug"])));
        assert!(p.matches(&labels(&["Bug"])));
    }

    #[test]
    fn stray_commas_are_ignored() {
        let p = LabelPredicate::parse("bug,,urgent");
        assert!(p.matches(&labels(&["bug", "urgent"])));
    }
}
