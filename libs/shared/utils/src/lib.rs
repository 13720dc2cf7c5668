pub mod contact;
pub mod locale;
pub mod test_utils;

pub use contact::{initials, tel_link, whatsapp_link};
