use std::collections::HashMap;

use crate::domain::CredentialsError;

/// Sections of a parsed credentials file: section name to key/value pairs.
pub type SectionMap = HashMap<String, HashMap<String, Option<String>>>;

pub const ACCESS_KEY_FIELD: &str = "aws_access_key_id";

/// A profile is usable when its section exists and carries an access key id.
/// The value itself is not inspected; the SDK resolves the actual credentials.
pub fn check_profile(sections: &SectionMap, profile: &str) -> Result<(), CredentialsError> {
    let section = sections
        .get(profile)
        .ok_or(CredentialsError::ProfileNotFound)?;

    if !section.contains_key(ACCESS_KEY_FIELD) {
        return Err(CredentialsError::AccessKeyNotFound);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections_with(profile: &str, keys: &[&str]) -> SectionMap {
        let mut section = HashMap::new();
        for key in keys {
            section.insert(key.to_string(), Some("value".to_string()));
        }
        let mut sections = HashMap::new();
        sections.insert(profile.to_string(), section);
        sections
    }

    #[test]
    fn test_profile_with_access_key_passes() {
        let sections = sections_with("default", &[ACCESS_KEY_FIELD, "aws_secret_access_key"]);
        assert!(check_profile(&sections, "default").is_ok());
    }

    #[test]
    fn test_missing_profile_fails() {
        let sections = sections_with("default", &[ACCESS_KEY_FIELD]);
        assert_eq!(
            check_profile(&sections, "staging"),
            Err(CredentialsError::ProfileNotFound)
        );
    }

    #[test]
    fn test_profile_without_access_key_fails() {
        let sections = sections_with("default", &["aws_secret_access_key"]);
        assert_eq!(
            check_profile(&sections, "default"),
            Err(CredentialsError::AccessKeyNotFound)
        );
    }

    #[test]
    fn test_access_key_with_empty_value_still_counts() {
        let mut sections = sections_with("default", &[]);
        sections
            .get_mut("default")
            .unwrap()
            .insert(ACCESS_KEY_FIELD.to_string(), None);
        assert!(check_profile(&sections, "default").is_ok());
    }
}
