use crate::services::contact_service::ContactEntry;
use crate::utils::error::AppError;
use serde::{Deserialize, Serialize};

const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

// ==================== REQUEST/RESPONSE MODELS ====================

/// Peer-to-peer dispatch works off the contact list the caller already
/// holds; the store is deliberately not consulted.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct WhatsappRequest {
    pub contacts: Option<Vec<ContactEntry>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct WhatsappLink {
    pub name: String,
    pub phone: String,
    pub url: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct WhatsappResponse {
    pub ok: bool,
    pub links: Vec<WhatsappLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

// ==================== SERVICE FUNCTIONS ====================

/// Distress message carried in the WhatsApp deep links.
pub fn compose_whatsapp_message(latitude: f64, longitude: f64) -> String {
    format!(
        "🚨 *SOS Alert!*\n\nI am in danger. I need help urgently!\n\n📍 *Live Location:*\nhttps://maps.google.com/?q={},{}\n\n⚡ Please respond immediately.",
        latitude, longitude
    )
}

/// Digits-only number with the country prefix, the form the deep link
/// expects.
pub fn normalize_phone(phone: &str, country_code: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("{}{}", country_code, digits)
}

/// Builds one `api.whatsapp.com/send` deep link per contact, all carrying
/// the same message. An empty contact list is a notice, not an error.
pub fn whatsapp_links(
    request: &WhatsappRequest,
    country_code: &str,
) -> Result<WhatsappResponse, AppError> {
    let (latitude, longitude) = match (request.latitude, request.longitude) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return Err(AppError::Validation("Missing fields".to_string())),
    };

    let contacts = request.contacts.as_deref().unwrap_or(&[]);

    if contacts.is_empty() {
        return Ok(WhatsappResponse {
            ok: false,
            links: vec![],
            notice: Some("No emergency contacts saved".to_string()),
        });
    }

    let message = compose_whatsapp_message(latitude, longitude);
    let encoded = urlencoding::encode(&message);

    let links = contacts
        .iter()
        .map(|contact| {
            let clean = normalize_phone(&contact.phone, country_code);
            WhatsappLink {
                name: contact.name.clone(),
                url: format!("{}?phone={}&text={}", WHATSAPP_SEND_URL, clean, encoded),
                phone: clean,
            }
        })
        .collect();

    Ok(WhatsappResponse {
        ok: true,
        links,
        notice: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(entries: &[(&str, &str)]) -> WhatsappRequest {
        WhatsappRequest {
            contacts: Some(
                entries
                    .iter()
                    .map(|(name, phone)| ContactEntry {
                        name: name.to_string(),
                        phone: phone.to_string(),
                    })
                    .collect(),
            ),
            latitude: Some(12.9),
            longitude: Some(77.6),
        }
    }

    #[test]
    fn phone_is_stripped_to_digits_and_prefixed() {
        assert_eq!(normalize_phone("98765-43210", "91"), "919876543210");
        assert_eq!(normalize_phone("(987) 654 3210", "91"), "919876543210");
    }

    #[test]
    fn one_link_per_contact_with_the_encoded_message() {
        let response =
            whatsapp_links(&request(&[("Mom", "9876543210"), ("Dad", "9123456780")]), "91")
                .unwrap();

        assert!(response.ok);
        assert_eq!(response.links.len(), 2);

        let link = &response.links[0];
        assert_eq!(link.phone, "919876543210");
        assert!(link.url.starts_with("https://api.whatsapp.com/send?phone=919876543210&text="));
        // message goes out percent-encoded, never raw
        assert!(link.url.contains("SOS%20Alert"));
        assert!(!link.url.contains(' '));
    }

    #[test]
    fn message_carries_the_map_link() {
        let message = compose_whatsapp_message(12.9, 77.6);
        assert!(message.contains("https://maps.google.com/?q=12.9,77.6"));
    }

    #[test]
    fn empty_cache_is_a_notice_not_an_error() {
        let response = whatsapp_links(&request(&[]), "91").unwrap();

        assert!(!response.ok);
        assert!(response.links.is_empty());
        assert_eq!(response.notice.as_deref(), Some("No emergency contacts saved"));
    }

    #[test]
    fn missing_coordinates_fail_validation() {
        let mut bad = request(&[("Mom", "9876543210")]);
        bad.longitude = None;

        assert!(matches!(
            whatsapp_links(&bad, "91"),
            Err(AppError::Validation(_))
        ));
    }
}
