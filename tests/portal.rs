#[cfg(test)]
mod tests {
    use pointage::api::{Portal, PortalConfig, PortalError, Session};
    use pointage::libs::data_storage::DataStorage;
    use pointage::libs::messages::Message;
    use pointage::libs::payload::PortalData;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct PortalTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for PortalTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            PortalTestContext { _temp_dir: temp_dir }
        }
    }

    fn config() -> PortalConfig {
        PortalConfig {
            base_url: "https://portal.example.com".to_string(),
            login: "mgillet".to_string(),
        }
    }

    #[test]
    fn test_normalized_url_defaults_scheme_and_trailing_slash() {
        assert_eq!(
            Portal::normalized_url("portal.example.com"),
            Some("http://portal.example.com/".to_string())
        );
        assert_eq!(
            Portal::normalized_url("https://portal.example.com"),
            Some("https://portal.example.com/".to_string())
        );
        assert_eq!(
            Portal::normalized_url("https://portal.example.com/badge/"),
            Some("https://portal.example.com/badge/".to_string())
        );
    }

    #[test]
    fn test_normalized_url_trims_whitespace() {
        assert_eq!(Portal::normalized_url("  https://x.test  "), Some("https://x.test/".to_string()));
    }

    #[test]
    fn test_normalized_url_rejects_empty_input() {
        assert_eq!(Portal::normalized_url(""), None);
        assert_eq!(Portal::normalized_url("   "), None);
    }

    #[test]
    fn test_token_file_is_scoped_by_login() {
        let portal = Portal::new(&config());
        assert_eq!(portal.token_file(), ".portal_token_mgillet");

        let other = Portal::new(&PortalConfig {
            base_url: "https://portal.example.com".to_string(),
            login: "other".to_string(),
        });
        assert_ne!(portal.token_file(), other.token_file());
    }

    #[test]
    fn test_retry_counter() {
        let mut portal = Portal::new(&config());

        assert_eq!(portal.retry(), 0);
        portal.inc_retry();
        portal.inc_retry();
        assert_eq!(portal.retry(), 2);
    }

    #[test]
    fn test_token_rejection_classification() {
        let expired = anyhow::Error::new(PortalError::TokenExpired);
        let invalidated = anyhow::Error::new(PortalError::TokenInvalidated);
        let credentials = anyhow::Error::new(PortalError::InvalidCredentials);
        let other = anyhow::Error::new(PortalError::BadResponse("boom".to_string()));
        let unrelated = anyhow::anyhow!("boom");

        assert!(Portal::is_token_rejection(&expired));
        assert!(Portal::is_token_rejection(&invalidated));
        assert!(!Portal::is_token_rejection(&credentials));
        assert!(!Portal::is_token_rejection(&other));
        assert!(!Portal::is_token_rejection(&unrelated));

        assert!(Portal::is_credential_rejection(&credentials));
        assert!(!Portal::is_credential_rejection(&expired));
        assert!(!Portal::is_credential_rejection(&unrelated));
    }

    #[test]
    fn test_portal_error_messages() {
        assert_eq!(PortalError::InvalidUrl.to_string(), "Portal URL is invalid");
        assert_eq!(PortalError::InvalidCredentials.to_string(), "Login or password rejected by the portal");
        assert_eq!(PortalError::TokenExpired.to_string(), "Session expired");
        assert_eq!(PortalError::TokenInvalidated.to_string(), "Session was invalidated by the portal");
        assert_eq!(
            PortalError::BadResponse("server error (500)".to_string()).to_string(),
            "Unexpected portal response: server error (500)"
        );
    }

    #[test]
    fn test_auth_messages_render_their_parameters() {
        let wrong = Message::WrongPassword(3).to_string();
        assert!(wrong.contains('3'));

        let missing = Message::TokenMissing("mgillet".to_string()).to_string();
        assert!(missing.contains("mgillet"));
    }

    #[test_context(PortalTestContext)]
    #[test]
    fn test_token_write_read_delete(_ctx: &mut PortalTestContext) {
        let portal = Portal::new(&config());
        let token_path = DataStorage::new().get_path(&portal.token_file()).unwrap();
        let token_path_str = token_path.to_str().unwrap();

        <Portal as Session>::write_token(token_path_str, "token-abc").unwrap();
        assert_eq!(<Portal as Session>::read_token(token_path_str).unwrap(), "token-abc");

        // Overwrite truncates the previous token
        <Portal as Session>::write_token(token_path_str, "t2").unwrap();
        assert_eq!(<Portal as Session>::read_token(token_path_str).unwrap(), "t2");

        portal.delete_token().unwrap();
        assert!(!token_path.exists());
        assert!(portal.delete_token().is_err());
    }

    #[test_context(PortalTestContext)]
    #[test]
    fn test_store_fresh_token_only_when_present(_ctx: &mut PortalTestContext) {
        let portal = Portal::new(&config());
        let token_path = DataStorage::new().get_path(&portal.token_file()).unwrap();
        let token_path_str = token_path.to_str().unwrap();

        let without_token = PortalData::default();
        <Portal as Session>::store_fresh_token(token_path_str, &without_token);
        assert!(!token_path.exists());

        let with_token = PortalData {
            token: Some("fresh".to_string()),
            ..PortalData::default()
        };
        <Portal as Session>::store_fresh_token(token_path_str, &with_token);
        assert_eq!(<Portal as Session>::read_token(token_path_str).unwrap(), "fresh");
    }
}
