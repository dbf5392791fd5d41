#[cfg(test)]
mod tests {
    use crate::models::book::Book;
    use crate::models::catalog::{mock_books, mock_categories};
    use crate::models::storage::{escape_like, CatalogBackend, MockBackend};
    use std::collections::HashSet;

    fn book(id: u32, title: &str, author: &str, genre: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            category: "Edebiyat".to_string(),
            description: None,
            color_gradient: "from-blue-600 to-blue-800".to_string(),
            available_copies: 1,
        }
    }

    #[test]
    fn test_mock_catalog_ids_are_unique() {
        let books = mock_books();
        let ids: HashSet<u32> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), books.len());

        let categories = mock_categories();
        let names: HashSet<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), categories.len());
    }

    #[test]
    fn test_matches_query_checks_title_author_and_genre() {
        let b = book(1, "Matematik Analiz", "Prof. Dr. Mehmet Özkan", "Matematik");

        assert!(b.matches_query("analiz"));
        assert!(b.matches_query("özkan"));
        assert!(b.matches_query("matematik"));
        assert!(!b.matches_query("fizik"));
    }

    #[test]
    fn test_matches_query_ignores_description() {
        let mut b = book(1, "Dune", "Frank Herbert", "Bilim Kurgu");
        b.description = Some("Çöl gezegeni".to_string());

        assert!(!b.matches_query("gezegen"));
    }

    #[test]
    fn test_scoring_text_is_lowercase_and_includes_description() {
        let mut b = book(1, "Dune", "Frank Herbert", "Bilim Kurgu");
        b.description = Some("Klasik".to_string());

        assert_eq!(b.scoring_text(), "dune frank herbert bilim kurgu klasik");
    }

    #[test]
    fn test_book_serializes_with_snake_case_fields() {
        let b = book(7, "Sefiller", "Victor Hugo", "Klasik Roman");
        let value = serde_json::to_value(&b).unwrap();

        assert_eq!(value["available_copies"], 1);
        assert_eq!(value["color_gradient"], "from-blue-600 to-blue-800");
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\"), "c:\\\\");
        assert_eq!(escape_like("fizik"), "fizik");
    }

    #[tokio::test]
    async fn test_mock_backend_search_keeps_catalog_order_and_limit() {
        let backend = MockBackend::new();

        let all = backend.search_books("Tarih", 100).await.unwrap();
        let ids: Vec<u32> = all.iter().map(|b| b.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert!(all.len() > 2);

        let limited = backend.search_books("Tarih", 2).await.unwrap();
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].id, ids[0]);
        assert_eq!(limited[1].id, ids[1]);
    }
}
