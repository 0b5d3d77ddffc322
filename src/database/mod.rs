use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::models::{Alert, Contact, LastLocation, User};
use crate::utils::error::AppError;

/// The whole persisted state: one JSON document with three flat
/// collections, rewritten in full on every mutation.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

/// Storage capability set. Handlers receive a concrete store via
/// `web::Data`; services stay generic over this trait so tests can hand
/// them a throwaway store.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn find_user(&self, user_id: &str) -> Result<Option<User>, AppError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Inserts a new user. Fails with `Conflict` when the email is taken;
    /// the uniqueness check and the insert run in one critical section.
    async fn insert_user(&self, user: User) -> Result<(), AppError>;

    /// Contacts owned by `user_id`, in storage order.
    async fn list_contacts(&self, user_id: &str) -> Result<Vec<Contact>, AppError>;

    /// Drops every contact owned by `user_id` and inserts `contacts` in
    /// their place.
    async fn replace_contacts(
        &self,
        user_id: &str,
        contacts: Vec<Contact>,
    ) -> Result<(), AppError>;

    async fn append_alert(&self, alert: Alert) -> Result<(), AppError>;

    /// Alert history for `user_id`, in append order.
    async fn list_alerts(&self, user_id: &str) -> Result<Vec<Alert>, AppError>;

    /// Overwrites the user's last known location. Returns `false` (not an
    /// error) when the user is unknown.
    async fn update_last_location(
        &self,
        user_id: &str,
        location: LastLocation,
    ) -> Result<bool, AppError>;
}

/// File-backed store: the document lives in memory under a `RwLock` and
/// is serialized back to disk while the write lock is held, so two
/// concurrent writers cannot lose each other's changes.
pub struct JsonStore {
    path: PathBuf,
    doc: RwLock<Document>,
}

impl JsonStore {
    /// Opens the database file, creating an empty document if it does not
    /// exist yet. A file that exists but does not parse is a startup
    /// error, not something to silently overwrite.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();

        let doc = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| {
                AppError::Storage(format!("failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&raw).map_err(|e| {
                AppError::Storage(format!("invalid database file {}: {}", path.display(), e))
            })?
        } else {
            let doc = Document::default();
            Self::write_document(&path, &doc)?;
            log::info!("🗄️  Created new database file at {}", path.display());
            doc
        };

        Ok(Self {
            path,
            doc: RwLock::new(doc),
        })
    }

    fn write_document(path: &Path, doc: &Document) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(doc)
            .map_err(|e| AppError::Storage(format!("failed to serialize database: {}", e)))?;
        fs::write(path, raw)
            .map_err(|e| AppError::Storage(format!("failed to write {}: {}", path.display(), e)))
    }

    fn persist(&self, doc: &Document) -> Result<(), AppError> {
        Self::write_document(&self.path, doc)
    }
}

#[async_trait]
impl Storage for JsonStore {
    async fn find_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        let doc = self.doc.read().await;
        Ok(doc.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let doc = self.doc.read().await;
        Ok(doc.users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, user: User) -> Result<(), AppError> {
        let mut doc = self.doc.write().await;

        if doc.users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        doc.users.push(user);
        self.persist(&doc)
    }

    async fn list_contacts(&self, user_id: &str) -> Result<Vec<Contact>, AppError> {
        let doc = self.doc.read().await;
        Ok(doc
            .contacts
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn replace_contacts(
        &self,
        user_id: &str,
        contacts: Vec<Contact>,
    ) -> Result<(), AppError> {
        let mut doc = self.doc.write().await;

        doc.contacts.retain(|c| c.user_id != user_id);
        doc.contacts.extend(contacts);

        self.persist(&doc)
    }

    async fn append_alert(&self, alert: Alert) -> Result<(), AppError> {
        let mut doc = self.doc.write().await;
        doc.alerts.push(alert);
        self.persist(&doc)
    }

    async fn list_alerts(&self, user_id: &str) -> Result<Vec<Alert>, AppError> {
        let doc = self.doc.read().await;
        Ok(doc
            .alerts
            .iter()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_last_location(
        &self,
        user_id: &str,
        location: LastLocation,
    ) -> Result<bool, AppError> {
        let mut doc = self.doc.write().await;

        let user = match doc.users.iter_mut().find(|u| u.id == user_id) {
            Some(user) => user,
            None => return Ok(false),
        };

        user.last_location = Some(location);
        self.persist(&doc)?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("safety-db-{}.json", Uuid::new_v4()))
    }

    fn sample_user(email: &str) -> User {
        User {
            id: Uuid::new_v4().to_string(),
            name: "Asha".to_string(),
            email: email.to_string(),
            password: "$2b$10$hash".to_string(),
            phone: None,
            created_at: 0,
            last_location: None,
        }
    }

    fn sample_contact(user_id: &str, name: &str, phone: &str) -> Contact {
        Contact {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let store = JsonStore::open(temp_path()).unwrap();

        store.insert_user(sample_user("a@x.com")).await.unwrap();
        let err = store.insert_user(sample_user("a@x.com")).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        // first user untouched
        assert!(store.find_user_by_email("a@x.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn replace_contacts_is_wholesale() {
        let store = JsonStore::open(temp_path()).unwrap();

        store
            .replace_contacts("u1", vec![sample_contact("u1", "Mom", "9876543210")])
            .await
            .unwrap();
        store
            .replace_contacts(
                "u1",
                vec![
                    sample_contact("u1", "Dad", "9123456780"),
                    sample_contact("u1", "Sis", "9988776655"),
                ],
            )
            .await
            .unwrap();

        let contacts = store.list_contacts("u1").await.unwrap();
        let names: Vec<_> = contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Dad", "Sis"]);
    }

    #[tokio::test]
    async fn replace_with_empty_list_clears_contacts() {
        let store = JsonStore::open(temp_path()).unwrap();

        store
            .replace_contacts("u1", vec![sample_contact("u1", "Mom", "9876543210")])
            .await
            .unwrap();
        store.replace_contacts("u1", vec![]).await.unwrap();

        assert!(store.list_contacts("u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn replace_contacts_leaves_other_users_alone() {
        let store = JsonStore::open(temp_path()).unwrap();

        store
            .replace_contacts("u1", vec![sample_contact("u1", "Mom", "9876543210")])
            .await
            .unwrap();
        store
            .replace_contacts("u2", vec![sample_contact("u2", "Dad", "9123456780")])
            .await
            .unwrap();
        store.replace_contacts("u1", vec![]).await.unwrap();

        assert_eq!(store.list_contacts("u2").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn location_update_for_unknown_user_is_a_noop() {
        let store = JsonStore::open(temp_path()).unwrap();

        let updated = store
            .update_last_location(
                "nobody",
                LastLocation {
                    latitude: 12.9,
                    longitude: 77.6,
                    time: 1,
                },
            )
            .await
            .unwrap();

        assert!(!updated);
    }

    #[tokio::test]
    async fn location_update_overwrites_previous_position() {
        let store = JsonStore::open(temp_path()).unwrap();
        let user = sample_user("a@x.com");
        let user_id = user.id.clone();
        store.insert_user(user).await.unwrap();

        for (lat, lon) in [(12.9, 77.6), (13.0, 77.7)] {
            let updated = store
                .update_last_location(
                    &user_id,
                    LastLocation {
                        latitude: lat,
                        longitude: lon,
                        time: 1,
                    },
                )
                .await
                .unwrap();
            assert!(updated);
        }

        let user = store.find_user(&user_id).await.unwrap().unwrap();
        let loc = user.last_location.unwrap();
        assert_eq!((loc.latitude, loc.longitude), (13.0, 77.7));
    }

    #[tokio::test]
    async fn document_survives_reopen() {
        let path = temp_path();

        {
            let store = JsonStore::open(&path).unwrap();
            let user = sample_user("a@x.com");
            let user_id = user.id.clone();
            store.insert_user(user).await.unwrap();
            store
                .replace_contacts(&user_id, vec![sample_contact(&user_id, "Mom", "9876543210")])
                .await
                .unwrap();
            store
                .append_alert(Alert {
                    id: Uuid::new_v4().to_string(),
                    user_id: user_id.clone(),
                    latitude: 12.9,
                    longitude: 77.6,
                    time: 1,
                })
                .await
                .unwrap();
        }

        let reopened = JsonStore::open(&path).unwrap();
        let user = reopened.find_user_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(reopened.list_contacts(&user.id).await.unwrap().len(), 1);
        assert_eq!(reopened.list_alerts(&user.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn corrupt_database_file_fails_to_open() {
        let path = temp_path();
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            JsonStore::open(&path),
            Err(AppError::Storage(_))
        ));
    }
}
