use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryItem {
    pub id: u64,
    pub name: String,
    pub full_name: String, // e.g., "rust-lang/rust"
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub items: Vec<RepositoryItem>, // A list of matching repositories
}

#[cfg(test)]
mod tests {
    use super::SearchResponse;

    #[test]
    fn decodes_snake_case_wire_fields() {
        let body = r#"{"items":[{"id":1,"name":"a","full_name":"org/a"}]}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].id, 1);
        assert_eq!(response.items[0].name, "a");
        assert_eq!(response.items[0].full_name, "org/a");
    }

    #[test]
    fn extra_wire_fields_are_ignored() {
        let body = r#"{"total_count":1,"incomplete_results":false,
            "items":[{"id":7,"name":"x","full_name":"o/x","stargazers_count":9}]}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.items[0].full_name, "o/x");
    }

    #[test]
    fn items_must_be_a_list() {
        let body = r#"{"items": "not-a-list"}"#;
        assert!(serde_json::from_str::<SearchResponse>(body).is_err());
    }
}
