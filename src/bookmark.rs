/// Bookmark data structures
use serde::{Deserialize, Serialize};

/// One saved post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookmarkRecord {
    pub id: String,
    pub text: String,
    pub author: String,
    /// Displayed verbatim, never parsed
    pub date: String,
    pub likes: u64,
}

impl BookmarkRecord {
    pub fn new(id: &str, text: &str, author: &str, date: &str, likes: u64) -> BookmarkRecord {
        BookmarkRecord {
            id: id.to_string(),
            text: text.to_string(),
            author: author.to_string(),
            date: date.to_string(),
            likes,
        }
    }

    /// "@author • date • N likes"
    pub fn meta_line(&self) -> String {
        format!("@{} • {} • {} likes", self.author, self.date, self.likes)
    }
}

/// The records a simulated connection hands back, in display order
pub fn sample_bookmarks() -> Vec<BookmarkRecord> {
    vec![
        BookmarkRecord::new(
            "1",
            "Just deployed my first full-stack application! #coding #webdev",
            "TechEnthusiast",
            "2024-03-15",
            142,
        ),
        BookmarkRecord::new(
            "2",
            "The future of AI is not about replacing humans, but augmenting human capabilities.",
            "AIResearcher",
            "2024-03-14",
            2891,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookmark_creation() {
        let bookmark = BookmarkRecord::new("7", "Hello #world", "Bob", "2024-01-01", 5);

        assert_eq!(bookmark.id, "7");
        assert_eq!(bookmark.text, "Hello #world");
        assert_eq!(bookmark.author, "Bob");
        assert_eq!(bookmark.date, "2024-01-01");
        assert_eq!(bookmark.likes, 5);
    }

    #[test]
    fn test_meta_line() {
        let bookmark = BookmarkRecord::new("1", "text", "Bob", "2024-01-01", 5);
        assert_eq!(bookmark.meta_line(), "@Bob • 2024-01-01 • 5 likes");
    }

    #[test]
    fn test_sample_bookmarks() {
        let samples = sample_bookmarks();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].id, "1");
        assert_eq!(samples[0].author, "TechEnthusiast");
        assert_eq!(samples[0].likes, 142);
        assert_eq!(samples[1].id, "2");
        assert_eq!(samples[1].author, "AIResearcher");
        assert_eq!(samples[1].likes, 2891);
        assert_ne!(samples[0].id, samples[1].id);
    }

    #[test]
    fn test_serialization() {
        let bookmark = BookmarkRecord::new("1", "Hello", "Bob", "2024-01-01", 5);

        let json = serde_json::to_string(&bookmark).unwrap();
        assert!(json.contains("\"likes\":5"));

        let deserialized: BookmarkRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, bookmark);
    }
}
