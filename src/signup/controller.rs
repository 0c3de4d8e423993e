// ============================================================================
// SignupController - Flux de soumission du formulaire
// ============================================================================
// Le contrôleur orchestre la seule vraie logique du produit :
// valider -> délai simulé -> persister l'email -> succès -> navigation.
//
// Les trois effets de bord (store clé/valeur, délais, navigation) sont
// injectés via des traits : la logique de décision se teste sans terminal,
// sans timers réels et sans système de fichiers.
//
// CONCEPTS RUST :
// 1. Generics avec bounds : un contrôleur paramétré par ses capabilities
// 2. Enum state machine : SubmitPhase, transitions explicites
// 3. async/await : le flux suspend sur les deux délais simulés
// ============================================================================

use tracing::{info, warn};

use crate::signup::form::{SignupForm, ValidationError};
use crate::signup::gateway::SignupGateway;
use crate::storage::KeyValueStore;

/// Clé sous laquelle l'email est persisté (jamais relue par ce flux)
pub const USER_EMAIL_KEY: &str = "userEmail";

/// Chemin demandé au Navigator après le succès
pub const FEATURES_PATH: &str = "/features";

/// Message de succès affiché avant la redirection
pub const SUCCESS_MESSAGE: &str = "Account created successfully!";

// ============================================================================
// Trait Navigator
// ============================================================================

/// Capability de navigation sortante
///
/// Unique interface vers l'extérieur du flux : une demande de navigation
/// complète vers un chemin relatif fixe. Dans la TUI, l'implémentation
/// traduit le chemin en changement d'écran ; les tests enregistrent l'appel.
pub trait Navigator: Send + Sync {
    fn go_to(&self, path: &str);
}

// ============================================================================
// Enum : SubmitPhase
// ============================================================================

/// Phases du flux de soumission
///
/// CONCEPT RUST : Enum pour state machine
/// - Idle -> Validating -> {Idle (rejet) | Submitting -> Success -> Navigating}
/// - Un rejet revient à Idle : le formulaire reste éditable et
///   resoumissible indéfiniment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Formulaire éditable, aucune soumission en cours
    Idle,

    /// Contrôles de validation en cours
    Validating,

    /// Appel API simulé en cours (état "loading" de l'UI)
    Submitting,

    /// Compte créé, message de succès affiché
    Success,

    /// Navigation vers /features demandée, le rôle du formulaire est terminé
    Navigating,
}

// ============================================================================
// Structure : SignupController
// ============================================================================

/// Contrôleur du formulaire d'inscription
pub struct SignupController<S, G, N> {
    store: S,
    gateway: G,
    navigator: N,
    phase: SubmitPhase,
}

impl<S, G, N> SignupController<S, G, N>
where
    S: KeyValueStore,
    G: SignupGateway,
    N: Navigator,
{
    /// Crée un contrôleur avec ses trois capabilities injectées
    pub fn new(store: S, gateway: G, navigator: N) -> Self {
        Self {
            store,
            gateway,
            navigator,
            phase: SubmitPhase::Idle,
        }
    }

    /// Phase courante du flux
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Soumet le formulaire : validation puis création simulée du compte
    ///
    /// Retourne l'erreur de validation (message fixe) en cas de rejet ; le
    /// flux revient alors à Idle et l'utilisateur peut resoumettre. En cas
    /// de succès, l'email est persisté sous `userEmail` et la phase passe à
    /// Success (l'appelant affiche `SUCCESS_MESSAGE` puis appelle
    /// `finish_navigation`).
    ///
    /// Un échec d'écriture du store n'est PAS une quatrième erreur : l'email
    /// persisté n'est qu'un indice inter-pages, jamais relu ici. On logge et
    /// on continue.
    pub async fn submit(&mut self, form: &SignupForm) -> Result<(), ValidationError> {
        self.phase = SubmitPhase::Validating;

        if let Err(err) = form.validate() {
            info!(error = %err, "Signup rejected by validation");
            self.phase = SubmitPhase::Idle;
            return Err(err);
        }

        self.phase = SubmitPhase::Submitting;
        self.gateway.create_account(&form.email).await;

        if let Err(err) = self.store.set(USER_EMAIL_KEY, &form.email) {
            warn!(error = ?err, "Failed to persist user email, continuing anyway");
        }

        info!(email = %form.email, "Account created (simulated)");
        self.phase = SubmitPhase::Success;
        Ok(())
    }

    /// Termine le flux après le succès : pause puis demande de navigation
    ///
    /// Ne fait rien si la phase n'est pas Success (pas de navigation sans
    /// soumission réussie).
    pub async fn finish_navigation(&mut self) {
        if self.phase != SubmitPhase::Success {
            return;
        }

        self.gateway.success_pause().await;
        info!(path = FEATURES_PATH, "Requesting navigation");
        self.navigator.go_to(FEATURES_PATH);
        self.phase = SubmitPhase::Navigating;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::storage::MemoryStore;

    /// Gateway qui résout immédiatement (aucun timer réel dans les tests)
    struct InstantGateway;

    #[async_trait]
    impl SignupGateway for InstantGateway {
        async fn create_account(&self, _email: &str) {}
        async fn success_pause(&self) {}
    }

    /// Navigator qui enregistre les chemins demandés
    #[derive(Default)]
    struct RecordingNavigator {
        paths: Mutex<Vec<String>>,
    }

    impl Navigator for Arc<RecordingNavigator> {
        fn go_to(&self, path: &str) {
            self.paths.lock().unwrap().push(path.to_string());
        }
    }

    fn controller() -> (
        Arc<MemoryStore>,
        Arc<RecordingNavigator>,
        SignupController<Arc<MemoryStore>, InstantGateway, Arc<RecordingNavigator>>,
    ) {
        let store = Arc::new(MemoryStore::new());
        let navigator = Arc::new(RecordingNavigator::default());
        let ctrl = SignupController::new(store.clone(), InstantGateway, navigator.clone());
        (store, navigator, ctrl)
    }

    fn valid_form() -> SignupForm {
        let mut form = SignupForm::new();
        form.email = "a@b.com".to_string();
        form.set_password("Abcdef12");
        form.agree_to_terms = true;
        form
    }

    #[tokio::test]
    async fn test_empty_email_rejected_nothing_persisted() {
        let (store, navigator, mut ctrl) = controller();
        let mut form = valid_form();
        form.email.clear();

        let err = ctrl.submit(&form).await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email");
        assert_eq!(ctrl.phase(), SubmitPhase::Idle);
        assert_eq!(store.get(USER_EMAIL_KEY).unwrap(), None);
        assert!(navigator.paths.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_short_password_rejected() {
        let (store, _navigator, mut ctrl) = controller();
        let mut form = valid_form();
        form.set_password("short");

        let err = ctrl.submit(&form).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(store.get(USER_EMAIL_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_terms_not_accepted_rejected() {
        let (_store, _navigator, mut ctrl) = controller();
        let mut form = valid_form();
        form.agree_to_terms = false;

        let err = ctrl.submit(&form).await.unwrap_err();
        assert_eq!(err.to_string(), "Please agree to terms and conditions");
    }

    #[tokio::test]
    async fn test_successful_submission_persists_email() {
        let (store, _navigator, mut ctrl) = controller();

        ctrl.submit(&valid_form()).await.unwrap();

        assert_eq!(ctrl.phase(), SubmitPhase::Success);
        assert_eq!(
            store.get(USER_EMAIL_KEY).unwrap(),
            Some("a@b.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_finish_navigation_goes_to_features() {
        let (_store, navigator, mut ctrl) = controller();

        ctrl.submit(&valid_form()).await.unwrap();
        ctrl.finish_navigation().await;

        assert_eq!(ctrl.phase(), SubmitPhase::Navigating);
        assert_eq!(
            navigator.paths.lock().unwrap().as_slice(),
            ["/features".to_string()]
        );
    }

    #[tokio::test]
    async fn test_no_navigation_without_success() {
        let (_store, navigator, mut ctrl) = controller();

        // Phase Idle : finish_navigation est un no-op
        ctrl.finish_navigation().await;
        assert_eq!(ctrl.phase(), SubmitPhase::Idle);
        assert!(navigator.paths.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_resubmission_after_rejection() {
        let (store, _navigator, mut ctrl) = controller();
        let mut form = valid_form();
        form.agree_to_terms = false;

        assert!(ctrl.submit(&form).await.is_err());
        assert_eq!(ctrl.phase(), SubmitPhase::Idle);

        // L'utilisateur corrige puis resoumets : le flux repart normalement
        form.toggle_terms();
        ctrl.submit(&form).await.unwrap();
        assert_eq!(ctrl.phase(), SubmitPhase::Success);
        assert_eq!(
            store.get(USER_EMAIL_KEY).unwrap(),
            Some("a@b.com".to_string())
        );
    }
}
