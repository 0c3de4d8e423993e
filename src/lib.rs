// ============================================================================
// CryptoView - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod app;     // État de l'application
pub mod models;  // Données de démonstration
pub mod signup;  // Formulaire d'inscription (le cœur)
pub mod storage; // Store clé/valeur local
pub mod ui;      // Interface utilisateur
