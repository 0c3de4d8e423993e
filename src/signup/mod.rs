// ============================================================================
// Module : signup
// ============================================================================
// Le cœur du produit : formulaire d'inscription, score de robustesse du
// mot de passe, et contrôleur de soumission avec capabilities injectées
// ============================================================================

pub mod controller; // Flux de soumission (state machine + capabilities)
pub mod form;       // État du formulaire et validation
pub mod gateway;    // Capability de soumission simulée (délais)
pub mod strength;   // Score de robustesse du mot de passe

// Re-export des types principaux pour simplifier les imports
pub use controller::{
    Navigator, SignupController, SubmitPhase, FEATURES_PATH, SUCCESS_MESSAGE, USER_EMAIL_KEY,
};
pub use form::{SignupForm, ValidationError, MIN_PASSWORD_LEN};
pub use gateway::{SignupGateway, SimulatedGateway, REDIRECT_DELAY, SUBMIT_DELAY};
pub use strength::{strength_label, strength_score, MAX_SCORE, STRENGTH_LABELS};
