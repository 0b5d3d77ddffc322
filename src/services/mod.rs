pub mod alert_service;
pub mod auth_service;
pub mod contact_service;
pub mod location_service;
pub mod sms_service;
pub mod sos_service;
pub mod whatsapp_service;

pub use alert_service::*;
pub use contact_service::*;
pub use location_service::*;
pub use sms_service::*;
pub use sos_service::*;
pub use whatsapp_service::*;
