// ============================================================================
// Structure : SignupForm
// ============================================================================
// État du formulaire d'inscription et validation à la soumission
//
// CONCEPTS RUST :
// 1. Champ privé + getters : strength_score est dérivé, jamais modifiable
//    directement (recalculé à chaque mutation du mot de passe)
// 2. Thiserror : messages d'erreur fixes portés par l'enum
// 3. Result<(), E> : validation qui court-circuite à la première erreur
// ============================================================================

use thiserror::Error;

use crate::signup::strength::strength_score;

/// Longueur minimale du mot de passe (en caractères)
pub const MIN_PASSWORD_LEN: usize = 8;

/// Les trois erreurs de validation du formulaire
///
/// Taxonomie complète : il n'existe aucune autre sorte d'erreur (pas de
/// backend, donc pas d'erreur réseau). Les messages sont exactement ceux
/// affichés par la page d'origine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email vide (seul contrôle : la présence, pas le format)
    #[error("Please enter a valid email")]
    EmptyEmail,

    /// Mot de passe absent ou trop court
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    /// Case "terms and conditions" non cochée
    #[error("Please agree to terms and conditions")]
    TermsNotAccepted,
}

/// État du formulaire d'inscription
///
/// CONCEPT RUST : Encapsulation
/// - email / agree_to_terms / newsletter : publics, aucun invariant interne
/// - password et strength_score : privés, liés par un invariant
///   (le score est toujours le score du mot de passe courant)
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    /// Adresse email saisie (texte libre)
    pub email: String,

    /// Mot de passe saisi
    password: String,

    /// Case "I agree to the terms and conditions"
    pub agree_to_terms: bool,

    /// Case "Subscribe to newsletter" (informatif, aucune contrainte)
    pub newsletter: bool,

    /// Score de robustesse dérivé, recalculé à chaque frappe
    strength_score: u8,
}

impl SignupForm {
    /// Crée un formulaire vide (état au chargement de la page)
    pub fn new() -> Self {
        Self::default()
    }

    /// Mot de passe courant
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Score de robustesse du mot de passe courant (0..=5)
    pub fn strength_score(&self) -> u8 {
        self.strength_score
    }

    /// Remplace le mot de passe et recalcule le score
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.strength_score = strength_score(&self.password);
    }

    /// Ajoute un caractère au mot de passe (frappe clavier)
    pub fn push_password_char(&mut self, c: char) {
        self.password.push(c);
        self.strength_score = strength_score(&self.password);
    }

    /// Supprime le dernier caractère du mot de passe (backspace)
    pub fn pop_password_char(&mut self) {
        self.password.pop();
        self.strength_score = strength_score(&self.password);
    }

    /// Inverse la case "terms and conditions"
    pub fn toggle_terms(&mut self) {
        self.agree_to_terms = !self.agree_to_terms;
    }

    /// Inverse la case "newsletter"
    pub fn toggle_newsletter(&mut self) {
        self.newsletter = !self.newsletter;
    }

    /// Valide le formulaire pour soumission
    ///
    /// Trois contrôles dans un ordre fixe, arrêt à la première erreur :
    /// 1. email non vide
    /// 2. mot de passe d'au moins 8 caractères
    /// 3. conditions acceptées
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }

        if !self.agree_to_terms {
            return Err(ValidationError::TermsNotAccepted);
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        let mut form = SignupForm::new();
        form.email = "a@b.com".to_string();
        form.set_password("Abcdef12");
        form.agree_to_terms = true;
        form
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = SignupForm::new();
        assert!(form.email.is_empty());
        assert!(form.password().is_empty());
        assert!(!form.agree_to_terms);
        assert!(!form.newsletter);
        assert_eq!(form.strength_score(), 0);
    }

    #[test]
    fn test_strength_score_follows_password() {
        let mut form = SignupForm::new();

        form.set_password("abcdefgh");
        assert_eq!(form.strength_score(), 2);

        form.set_password("Abcdefg1!");
        assert_eq!(form.strength_score(), 5);

        // Frappe par frappe : le score suit chaque mutation
        form.set_password("");
        assert_eq!(form.strength_score(), 0);
        form.push_password_char('A');
        assert_eq!(form.strength_score(), 1);
        form.pop_password_char();
        assert_eq!(form.strength_score(), 0);
    }

    #[test]
    fn test_validate_empty_email() {
        let mut form = valid_form();
        form.email.clear();
        assert_eq!(form.validate(), Err(ValidationError::EmptyEmail));
    }

    #[test]
    fn test_validate_short_password() {
        let mut form = valid_form();
        form.set_password("short");
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn test_validate_empty_password() {
        // Le mot de passe vide déclenche le même message que trop court
        let mut form = valid_form();
        form.set_password("");
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn test_validate_terms_not_accepted() {
        let mut form = valid_form();
        form.agree_to_terms = false;
        assert_eq!(form.validate(), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn test_validate_check_order_short_circuits() {
        // Email vide ET mot de passe court : l'email gagne (ordre fixe)
        let mut form = SignupForm::new();
        form.set_password("x");
        assert_eq!(form.validate(), Err(ValidationError::EmptyEmail));
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_newsletter_has_no_constraint() {
        let mut form = valid_form();
        form.toggle_newsletter();
        assert!(form.newsletter);
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_error_messages_are_exact() {
        assert_eq!(
            ValidationError::EmptyEmail.to_string(),
            "Please enter a valid email"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            ValidationError::TermsNotAccepted.to_string(),
            "Please agree to terms and conditions"
        );
    }
}
