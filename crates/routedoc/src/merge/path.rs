use routedoc_core::RequestMapping;

/// Concatenate the first controller path with the first method path.
///
/// No separator is inserted and slashes are not normalized. Either part may
/// be missing; the result is empty when neither level declares a path.
pub fn resolve_path(controller: Option<&RequestMapping>, method: Option<&RequestMapping>) -> String {
    [controller, method]
        .into_iter()
        .flatten()
        .filter_map(|mapping| mapping.path.first())
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::mapping;
    use rstest::rstest;

    fn with_path(paths: &[&str]) -> RequestMapping {
        mapping(|m| m.path = paths.iter().map(ToString::to_string).collect())
    }

    #[rstest]
    #[case(Some(vec!["/users"]), Some(vec!["/{id}"]), "/users/{id}")]
    #[case(Some(vec!["/users"]), None, "/users")]
    #[case(None, Some(vec!["/health"]), "/health")]
    #[case(None, None, "")]
    #[case(Some(vec![]), Some(vec![]), "")]
    #[case(Some(vec!["/users/"]), Some(vec!["/{id}"]), "/users//{id}")]
    #[case(Some(vec!["users"]), Some(vec!["list"]), "userslist")]
    #[case(Some(vec!["/a", "/b"]), Some(vec!["/c", "/d"]), "/a/c")]
    fn test_resolve_path(
        #[case] controller: Option<Vec<&str>>,
        #[case] method: Option<Vec<&str>>,
        #[case] expected: &str,
    ) {
        let controller = controller.as_deref().map(with_path);
        let method = method.as_deref().map(with_path);
        assert_eq!(resolve_path(controller.as_ref(), method.as_ref()), expected);
    }
}
