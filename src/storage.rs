//! Browser key-value storage: the login→verify phone hand-off and the
//! persisted profile record behind the auth-gated UI.

use serde::{Deserialize, Serialize};
use web_sys::{window, Storage};

const USER_DATA_KEY: &str = "userData";
const USER_PHONE_KEY: &str = "userPhone";

/// Profile record persisted on registration. Field names match the stored
/// JSON (`isLoggedIn` etc.).
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub is_logged_in: bool,
}

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

fn session_storage() -> Option<Storage> {
    window().and_then(|w| w.session_storage().ok()).flatten()
}

/// Session-scoped hand-off of the validated phone from login to verify.
pub fn store_phone(phone: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(USER_PHONE_KEY, phone);
    }
}

pub fn load_phone() -> Option<String> {
    session_storage().and_then(|s| s.get_item(USER_PHONE_KEY).ok()).flatten()
}

pub fn save_user(user: &StoredUser) {
    if let (Some(storage), Ok(json)) = (local_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(USER_DATA_KEY, &json);
    }
}

/// An unparsable record reads as no user at all.
pub fn load_user() -> Option<StoredUser> {
    let raw = local_storage().and_then(|s| s.get_item(USER_DATA_KEY).ok()).flatten()?;
    serde_json::from_str(&raw).ok()
}

pub fn is_logged_in() -> bool {
    load_user().map(|user| user.is_logged_in).unwrap_or(false)
}

/// Drops both the profile record and the session phone.
pub fn logout() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(USER_DATA_KEY);
    }
    if let Some(storage) = session_storage() {
        let _ = storage.remove_item(USER_PHONE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_user_uses_camel_case_keys() {
        let user = StoredUser {
            name: "آرش".into(),
            email: "a@b.co".into(),
            phone: Some("09123456789".into()),
            is_logged_in: true,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"isLoggedIn\":true"));
        assert!(json.contains("\"phone\":\"09123456789\""));
    }

    #[test]
    fn missing_phone_round_trips_as_null() {
        let parsed: StoredUser =
            serde_json::from_str(r#"{"name":"x","email":"a@b.co","phone":null,"isLoggedIn":false}"#)
                .unwrap();
        assert_eq!(parsed.phone, None);
        assert!(!parsed.is_logged_in);
    }

    #[test]
    fn garbage_record_fails_to_parse() {
        assert!(serde_json::from_str::<StoredUser>("not json").is_err());
        assert!(serde_json::from_str::<StoredUser>(r#"{"name":"x"}"#).is_err());
    }
}
