#[cfg(test)]
mod tests {
    use traq::api::VaultClient;

    #[test]
    fn test_hash_is_deterministic() {
        let first = VaultClient::hash_password("ana", "secret");
        let second = VaultClient::hash_password("ana", "secret");
        assert_eq!(first, second);
    }

    #[test]
    fn test_hash_is_hex_sha256_output() {
        let hash = VaultClient::hash_password("ana", "secret");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_salts_per_user() {
        // Same password, different usernames must not collide; otherwise a
        // leaked table row exposes every user with that password.
        let ana = VaultClient::hash_password("ana", "secret");
        let bob = VaultClient::hash_password("bob", "secret");
        assert_ne!(ana, bob);
    }

    #[test]
    fn test_hash_differs_by_password() {
        let right = VaultClient::hash_password("ana", "secret");
        let wrong = VaultClient::hash_password("ana", "Secret");
        assert_ne!(right, wrong);
    }
}
