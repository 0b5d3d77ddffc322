use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Safety Service API",
        version = "1.0.0",
        description = "Backend for the personal safety app: account management, emergency contacts, and SOS dispatch.\n\n**Dispatch channels:**\n- Bulk SMS through Fast2SMS (server-mediated)\n- WhatsApp deep links, one per contact (client-mediated)\n\nAn SOS always records an alert history entry, whether or not delivery succeeded."
    ),
    paths(
        // Auth
        crate::api::auth::signup,
        crate::api::auth::login,

        // Contacts
        crate::api::contacts::save_contacts,
        crate::api::contacts::list_contacts,

        // SOS
        crate::api::sos::raise_sos,
        crate::api::sos::whatsapp_links,
        crate::api::alerts::list_alerts,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            // Auth
            crate::services::auth_service::SignupRequest,
            crate::services::auth_service::SignupResponse,
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::LoginResponse,
            crate::models::UserInfo,
            crate::models::SessionUser,

            // Contacts
            crate::services::contact_service::ContactEntry,
            crate::services::contact_service::SaveContactsRequest,
            crate::services::contact_service::SaveContactsResponse,
            crate::services::contact_service::ContactsResponse,
            crate::models::Contact,

            // SOS
            crate::services::sos_service::SosRequest,
            crate::services::sos_service::SosResponse,
            crate::services::whatsapp_service::WhatsappRequest,
            crate::services::whatsapp_service::WhatsappLink,
            crate::services::whatsapp_service::WhatsappResponse,
            crate::services::alert_service::AlertsResponse,
            crate::models::Alert,

            // Health & Metrics
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Signup and login. Sessions are plain user objects echoed to the client; there are no tokens."),
        (name = "Contacts", description = "Emergency contact management. Saves replace the whole contact set."),
        (name = "SOS", description = "Distress alert dispatch and history."),
        (name = "Health", description = "Health check and metrics for monitoring."),
    )
)]
pub struct ApiDoc;
