//! Contact hrefs. Messages are never sent from here; these are plain links a
//! client renders as buttons.

const WHATSAPP_BASE: &str = "https://wa.me/";

/// `https://wa.me/<digits>`, or `None` when the phone has no digits at all
/// (placeholder records carry `"N/A"`).
pub fn whatsapp_link(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("{}{}", WHATSAPP_BASE, digits))
}

pub fn tel_link(phone: &str) -> Option<String> {
    if !phone.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("tel:{}", phone.trim()))
}

/// Up to two uppercase initials taken from the first words of `name`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_link_strips_formatting() {
        assert_eq!(
            whatsapp_link("+58 412-1234567").as_deref(),
            Some("https://wa.me/584121234567")
        );
        assert_eq!(whatsapp_link("N/A"), None);
    }

    #[test]
    fn test_tel_link_keeps_number_verbatim() {
        assert_eq!(tel_link("+58 412-5559999").as_deref(), Some("tel:+58 412-5559999"));
        assert_eq!(tel_link(""), None);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("María López"), "ML");
        assert_eq!(initials("Sofía Martínez Rojas"), "SM");
        assert_eq!(initials("carlos"), "C");
        assert_eq!(initials("   "), "");
    }
}
