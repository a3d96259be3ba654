/// A closed set of API request variants. Each variant maps deterministically
/// to a path and a set of query parameters; nothing else in the crate needs
/// to know which variant it is carrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestSpec {
    /// Repository search with a free-form query term.
    Search(String),
}

impl RequestSpec {
    // Fixed API path for the variant.
    pub fn path_component(&self) -> &'static str {
        match self {
            RequestSpec::Search(_) => "/search/repositories",
        }
    }

    // Query parameters for the variant. Order is irrelevant to the API.
    pub fn query_parameters(&self) -> Vec<(&'static str, String)> {
        match self {
            RequestSpec::Search(term) => vec![("q", term.clone())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RequestSpec;

    #[test]
    fn search_maps_to_repository_path() {
        let spec = RequestSpec::Search("rust async".to_owned());
        assert_eq!(spec.path_component(), "/search/repositories");
    }

    #[test]
    fn search_query_is_just_q() {
        let spec = RequestSpec::Search("tokio".to_owned());
        assert_eq!(spec.query_parameters(), vec![("q", "tokio".to_owned())]);
    }

    #[test]
    fn empty_term_is_preserved() {
        let spec = RequestSpec::Search(String::new());
        assert_eq!(spec.query_parameters(), vec![("q", String::new())]);
    }

    #[test]
    fn terms_needing_escaping_pass_through_unescaped() {
        // Escaping happens at URL build time, not here.
        let spec = RequestSpec::Search("c++ stars:>100 &q=x".to_owned());
        assert_eq!(
            spec.query_parameters(),
            vec![("q", "c++ stars:>100 &q=x".to_owned())]
        );
    }
}
