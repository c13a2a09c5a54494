use serde::{Deserialize, Serialize};

/// Category record from the storefront catalog.
///
/// `id` is unique within a catalog (used as the rendering key); names carry
/// no uniqueness guarantee. The catalog owns these records; the UI never
/// mutates them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    /// Route path for this category's page.
    pub fn href(&self) -> String {
        format!("/category/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_contract_deserialize() {
        // Contract based on the storefront CMS category payload; unknown
        // fields must be tolerated so backend additions don't break us.
        let json = r#"{
            "id": "c1",
            "name": "Shirts",
            "billboardId": "b1",
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;
        let parsed: Category = serde_json::from_str(json).expect("category should parse");
        assert_eq!(parsed.id, "c1");
        assert_eq!(parsed.name, "Shirts");
    }

    #[test]
    fn test_catalog_list_deserialize() {
        let json = r#"[{"id":"1","name":"Fiction"},{"id":"2","name":"Nonfiction"}]"#;
        let parsed: Vec<Category> = serde_json::from_str(json).expect("catalog should parse");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].name, "Nonfiction");
    }

    #[test]
    fn test_category_href() {
        let c = Category {
            id: "7".to_string(),
            name: "Books".to_string(),
        };
        assert_eq!(c.href(), "/category/7");
    }

    #[test]
    fn test_category_href_empty_id() {
        // An empty id is odd but not an error; it just yields the bare prefix.
        let c = Category {
            id: String::new(),
            name: "Misc".to_string(),
        };
        assert_eq!(c.href(), "/category/");
    }
}
