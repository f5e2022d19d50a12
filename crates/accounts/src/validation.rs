//! Request-shape validation applied at the controller boundary, before any
//! business logic runs.

use crate::dto::CustomerDto;

/// Field-level validation outcome.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: vec![],
        }
    }

    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }
}

/// Mobile-number parameters are either empty (allowed at the transport
/// layer, rejected by the business lookup) or exactly 10 digits.
pub fn validate_mobile_number(mobile_number: &str) -> bool {
    mobile_number.is_empty()
        || (mobile_number.len() == 10 && mobile_number.chars().all(|c| c.is_ascii_digit()))
}

/// Validate email format (simple shape check).
pub fn validate_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() {
        return false;
    }

    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let domain = &domain[1..];

        !local.is_empty()
            && !domain.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    } else {
        false
    }
}

/// Validate a full customer payload for create/update requests.
pub fn validate_customer(dto: &CustomerDto) -> ValidationResult {
    let mut errors = vec![];
    let name = dto.name.trim();

    if name.is_empty() {
        errors.push("Name cannot be empty".to_string());
    } else if name.len() > 30 {
        errors.push("Name must be at most 30 characters".to_string());
    }

    if !validate_email(&dto.email) {
        errors.push("Email address is not valid".to_string());
    }

    if dto.mobile_number.is_empty() || !validate_mobile_number(&dto.mobile_number) {
        errors.push("Mobile number must be 10 digits".to_string());
    }

    if errors.is_empty() {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(name: &str, email: &str, mobile: &str) -> CustomerDto {
        CustomerDto {
            name: name.to_string(),
            email: email.to_string(),
            mobile_number: mobile.to_string(),
            account: None,
        }
    }

    #[test]
    fn test_validate_mobile_number() {
        assert!(validate_mobile_number("9876543210"));
        assert!(validate_mobile_number(""));
        assert!(!validate_mobile_number("12345"));
        assert!(!validate_mobile_number("98765432100"));
        assert!(!validate_mobile_number("98765abcde"));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com"));
        assert!(validate_email("user.name@domain.co.uk"));
        assert!(!validate_email("invalid"));
        assert!(!validate_email("@domain.com"));
        assert!(!validate_email("user@"));
    }

    #[test]
    fn test_validate_customer() {
        let result = validate_customer(&customer("Alice Doe", "alice@example.com", "9876543210"));
        assert!(result.is_valid);

        // A single-character name is well-formed.
        let result = validate_customer(&customer("A", "a@x.com", "9876543210"));
        assert!(result.is_valid);

        let result = validate_customer(&customer("", "alice@example.com", "9876543210"));
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Name cannot be empty".to_string()]);

        let result = validate_customer(&customer(
            "A name that rambles on far past thirty characters",
            "alice@example.com",
            "9876543210",
        ));
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec!["Name must be at most 30 characters".to_string()]
        );

        // Create requests must carry a full 10-digit number; empty is only
        // tolerated for query parameters.
        let result = validate_customer(&customer("Alice Doe", "alice@example.com", ""));
        assert!(!result.is_valid);

        let result = validate_customer(&customer("Bob", "not-an-email", "123"));
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
    }
}
