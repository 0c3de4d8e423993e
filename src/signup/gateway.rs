// ============================================================================
// SignupGateway - Capability de soumission simulée
// ============================================================================
// Il n'existe aucun backend : la "création de compte" est un simple délai.
// Les deux temporisations du flux (appel API simulé puis pause avant
// redirection) vivent derrière ce trait pour que les tests substituent un
// stub qui résout immédiatement, sans attendre de vrais timers.
//
// CONCEPTS RUST :
// 1. async-trait : méthodes async dans un trait
// 2. Capability injection : le contrôleur ne connaît que le trait
// ============================================================================

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

/// Durée de l'appel API simulé (page d'origine : setTimeout 1500 ms)
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Pause entre le message de succès et la redirection (1000 ms)
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1000);

/// Capability asynchrone de soumission du formulaire
///
/// Aucune méthode ne retourne d'erreur : il n'y a pas de réseau, donc pas
/// de chemin d'échec côté "backend". Les seuls échecs du flux sont les
/// trois erreurs de validation, traitées avant d'arriver ici.
#[async_trait]
pub trait SignupGateway: Send + Sync {
    /// Simule la création du compte (résout après le délai de soumission)
    async fn create_account(&self, email: &str);

    /// Pause entre le succès affiché et la demande de navigation
    async fn success_pause(&self);
}

/// Implémentation de production : de vrais timers tokio
pub struct SimulatedGateway;

#[async_trait]
impl SignupGateway for SimulatedGateway {
    async fn create_account(&self, email: &str) {
        debug!(email = %email, delay_ms = SUBMIT_DELAY.as_millis() as u64, "Simulating account creation");
        tokio::time::sleep(SUBMIT_DELAY).await;
    }

    async fn success_pause(&self) {
        tokio::time::sleep(REDIRECT_DELAY).await;
    }
}
