use crate::database::Storage;
use crate::models::Contact;
use crate::utils::error::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==================== REQUEST/RESPONSE MODELS ====================

/// A contact as the client sends it: no id, no owner.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ContactEntry {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveContactsRequest {
    pub user_id: Option<String>,
    pub contacts: Option<Vec<ContactEntry>>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SaveContactsResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ContactsResponse {
    pub ok: bool,
    pub contacts: Vec<Contact>,
}

// ==================== SERVICE FUNCTIONS ====================

/// Replaces the user's whole contact set. Callers resend the complete
/// desired list; each saved contact gets a fresh id.
pub async fn save_contacts(
    store: &impl Storage,
    request: SaveContactsRequest,
) -> Result<SaveContactsResponse, AppError> {
    let (user_id, entries) = match (request.user_id, request.contacts) {
        (Some(user_id), Some(entries)) if !user_id.is_empty() => (user_id, entries),
        _ => return Err(AppError::Validation("Invalid payload".to_string())),
    };

    let contacts: Vec<Contact> = entries
        .into_iter()
        .map(|entry| Contact {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.clone(),
            name: entry.name,
            phone: entry.phone,
        })
        .collect();

    let count = contacts.len();
    store.replace_contacts(&user_id, contacts).await?;

    log::info!("✅ Saved {} contacts for user {}", count, user_id);

    Ok(SaveContactsResponse { ok: true })
}

/// Lists the user's contacts. Never fails; unknown users get an empty list.
pub async fn list_contacts(
    store: &impl Storage,
    user_id: &str,
) -> Result<ContactsResponse, AppError> {
    let contacts = store.list_contacts(user_id).await?;

    Ok(ContactsResponse { ok: true, contacts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::JsonStore;

    fn temp_store() -> JsonStore {
        let path = std::env::temp_dir().join(format!("safety-db-{}.json", Uuid::new_v4()));
        JsonStore::open(path).unwrap()
    }

    fn request(user_id: &str, entries: &[(&str, &str)]) -> SaveContactsRequest {
        SaveContactsRequest {
            user_id: Some(user_id.to_string()),
            contacts: Some(
                entries
                    .iter()
                    .map(|(name, phone)| ContactEntry {
                        name: name.to_string(),
                        phone: phone.to_string(),
                    })
                    .collect(),
            ),
        }
    }

    #[tokio::test]
    async fn save_then_list_returns_exactly_the_saved_set() {
        let store = temp_store();

        save_contacts(&store, request("u1", &[("Mom", "9876543210"), ("Dad", "9123456780")]))
            .await
            .unwrap();

        let listed = list_contacts(&store, "u1").await.unwrap();
        let pairs: Vec<_> = listed
            .contacts
            .iter()
            .map(|c| (c.name.as_str(), c.phone.as_str()))
            .collect();
        assert_eq!(pairs, vec![("Mom", "9876543210"), ("Dad", "9123456780")]);
    }

    #[tokio::test]
    async fn resaving_assigns_fresh_ids() {
        let store = temp_store();

        save_contacts(&store, request("u1", &[("Mom", "9876543210")]))
            .await
            .unwrap();
        let first = list_contacts(&store, "u1").await.unwrap().contacts;

        save_contacts(&store, request("u1", &[("Mom", "9876543210")]))
            .await
            .unwrap();
        let second = list_contacts(&store, "u1").await.unwrap().contacts;

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_ne!(first[0].id, second[0].id);
    }

    #[tokio::test]
    async fn saving_an_empty_list_clears_everything() {
        let store = temp_store();

        save_contacts(&store, request("u1", &[("Mom", "9876543210")]))
            .await
            .unwrap();
        save_contacts(&store, request("u1", &[])).await.unwrap();

        assert!(list_contacts(&store, "u1").await.unwrap().contacts.is_empty());
    }

    #[tokio::test]
    async fn missing_user_id_or_list_is_invalid() {
        let store = temp_store();

        let err = save_contacts(
            &store,
            SaveContactsRequest {
                user_id: None,
                contacts: Some(vec![]),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = save_contacts(
            &store,
            SaveContactsRequest {
                user_id: Some("u1".to_string()),
                contacts: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn listing_an_unknown_user_is_empty_not_an_error() {
        let store = temp_store();

        let listed = list_contacts(&store, "nobody").await.unwrap();
        assert!(listed.ok);
        assert!(listed.contacts.is_empty());
    }
}
