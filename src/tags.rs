/// Compute the Docker tags to publish for the given git ref.
///
/// Every ref gets `latest`. A tag ref in `refs/tags/X.Y.Z` form
/// additionally gets the accumulated version prefixes `X`, `X.Y` and
/// `X.Y.Z`, so consumers can pin to a major or minor line. Anything
/// else, branch refs included, gets `latest` only.
///
/// Version components are taken verbatim, so `refs/tags/v1.2-rc1`
/// yields `v1` and `v1.2-rc1`. A bare `refs/tags/` yields one
/// empty-string tag; callers get to decide what to do with it.
pub fn calculate(git_ref: &str) -> Vec<String> {
    let mut tags = vec!["latest".to_string()];

    if let Some(version) = git_ref.strip_prefix("refs/tags/") {
        let mut components = Vec::new();
        for component in version.split('.') {
            components.push(component);
            tags.push(components.join("."));
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::calculate;

    #[test]
    fn non_tag_refs_only_get_latest() {
        assert_eq!(calculate("refs/heads/main"), vec!["latest"]);
        assert_eq!(calculate("refs/heads/release/1.2"), vec!["latest"]);
        assert_eq!(calculate(""), vec!["latest"]);
        assert_eq!(calculate("not-a-ref"), vec!["latest"]);
        // No trailing slash means no tag path at all.
        assert_eq!(calculate("refs/tags"), vec!["latest"]);
    }

    #[test]
    fn tag_refs_accumulate_version_prefixes() {
        assert_eq!(
            calculate("refs/tags/1.2.3"),
            vec!["latest", "1", "1.2", "1.2.3"]
        );
        assert_eq!(calculate("refs/tags/v1"), vec!["latest", "v1"]);
    }

    #[test]
    fn prerelease_components_are_taken_verbatim() {
        assert_eq!(
            calculate("refs/tags/2.0.0-beta.1"),
            vec!["latest", "2", "2.0", "2.0.0-beta", "2.0.0-beta.1"]
        );
    }

    #[test]
    fn empty_version_path_keeps_the_empty_tag() {
        assert_eq!(calculate("refs/tags/"), vec!["latest", ""]);
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = calculate("refs/tags/1.2.3");
        let b = calculate("refs/tags/1.2.3");
        assert_eq!(a, b);
    }
}
