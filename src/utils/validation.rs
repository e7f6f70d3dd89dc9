// ============================================================================
// VALIDACIÓN DE FORMULARIOS - Predicados puros
// ============================================================================

/// Al menos 3 caracteres, solo letras y dígitos ASCII
pub fn valid_username(username: &str) -> bool {
    username.chars().count() >= 3 && username.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Al menos 6 caracteres, sin otras reglas de complejidad
pub fn valid_password(password: &str) -> bool {
    password.chars().count() >= 6
}

/// Comprobación deliberadamente débil: basta con una '@'
pub fn valid_email(email: &str) -> bool {
    email.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_requires_three_alphanumerics() {
        assert!(valid_username("abc"));
        assert!(valid_username("admin1"));
        assert!(valid_username("ABC123xyz"));
        assert!(!valid_username("ab"));
        assert!(!valid_username(""));
        assert!(!valid_username("ab c"));
        assert!(!valid_username("john_doe"));
        assert!(!valid_username("user!"));
    }

    #[test]
    fn username_rejects_non_ascii_letters() {
        assert!(!valid_username("josé"));
        assert!(!valid_username("ñandú1"));
    }

    #[test]
    fn username_matches_definition_for_generated_inputs() {
        let alphabet = ['a', 'Z', '5', ' ', '-', '_', '@', 'é'];
        for len in 0..5 {
            let mut indices = vec![0usize; len];
            loop {
                let candidate: String = indices.iter().map(|i| alphabet[*i]).collect();
                let expected = candidate.chars().count() >= 3
                    && candidate.chars().all(|c| c.is_ascii_alphanumeric());
                assert_eq!(valid_username(&candidate), expected, "input {:?}", candidate);

                // siguiente combinación
                let mut pos = 0;
                while pos < len {
                    indices[pos] += 1;
                    if indices[pos] < alphabet.len() {
                        break;
                    }
                    indices[pos] = 0;
                    pos += 1;
                }
                if pos == len {
                    break;
                }
            }
        }
    }

    #[test]
    fn password_only_checks_length() {
        for len in 0..10 {
            let password = "x".repeat(len);
            assert_eq!(valid_password(&password), len >= 6);
        }
        assert!(valid_password("      "));
        assert!(valid_password("secret1"));
    }

    #[test]
    fn email_only_needs_an_at_sign() {
        assert!(valid_email("a@b"));
        assert!(valid_email("@"));
        assert!(!valid_email("user.example.com"));
    }
}
