//! In-memory seed data and the posts.json loader.

use std::path::Path;

use anyhow::{Context, Result};

use crate::types::{Album, Post, User};

/// The fixed album catalogue.
pub fn albums() -> Vec<Album> {
    vec![
        Album {
            id: "1".to_string(),
            title: "Blue Train".to_string(),
            artist: "John Coltrane".to_string(),
            price: 56.99,
        },
        Album {
            id: "2".to_string(),
            title: "Jeru".to_string(),
            artist: "Gerry Mulligan".to_string(),
            price: 17.99,
        },
        Album {
            id: "3".to_string(),
            title: "Sarah Vaughan and Clifford Brown".to_string(),
            artist: "Sarah Vaughan".to_string(),
            price: 39.99,
        },
    ]
}

/// Users served when no database is configured.
pub fn fallback_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            email: "alice@example.com".to_string(),
            firstname: "Alice".to_string(),
            lastname: "Smith".to_string(),
            age: 34,
            payedvacation: 12,
        },
        User {
            id: "2".to_string(),
            email: "bob@example.com".to_string(),
            firstname: "Bob".to_string(),
            lastname: "Jones".to_string(),
            age: 28,
            payedvacation: 8,
        },
        User {
            id: "3".to_string(),
            email: "carol@example.com".to_string(),
            firstname: "Carol".to_string(),
            lastname: "White".to_string(),
            age: 41,
            payedvacation: 15,
        },
        User {
            id: "4".to_string(),
            email: "dave@example.com".to_string(),
            firstname: "Dave".to_string(),
            lastname: "Brown".to_string(),
            age: 23,
            payedvacation: 5,
        },
    ]
}

/// The hard-coded user inserted by `/addUser`.
pub fn test_user() -> User {
    User {
        id: String::new(),
        email: "test@test.com".to_string(),
        firstname: "John".to_string(),
        lastname: "Doe".to_string(),
        age: 25,
        payedvacation: 10,
    }
}

/// Reads and parses the posts asset. Called once at startup; a missing or
/// malformed file is a startup error.
pub async fn load_posts(path: &Path) -> Result<Vec<Post>> {
    let raw = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let posts: Vec<Post> =
        serde_json::from_slice(&raw).with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_albums_in_insertion_order() {
        let albums = albums();
        assert_eq!(albums.len(), 3);
        assert_eq!(albums[0].title, "Blue Train");
        assert_eq!(albums[1].title, "Jeru");
        assert_eq!(albums[2].title, "Sarah Vaughan and Clifford Brown");
    }

    #[tokio::test]
    async fn test_load_posts() {
        let dir = std::env::temp_dir().join(format!(
            "scrapbook_posts_{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("posts.json");
        std::fs::write(
            &path,
            r#"[{"id": 132, "title": "Ditto"}, {"id": 133, "title": "Eevee"}]"#,
        )
        .unwrap();

        let posts = load_posts(&path).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 132);
        assert_eq!(posts[0].title, "Ditto");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_load_posts_missing_file_is_error() {
        let missing = std::env::temp_dir().join("scrapbook_no_such_posts.json");
        assert!(load_posts(&missing).await.is_err());
    }
}
