// ============================================================================
// Module : ui
// ============================================================================
// Gère toute l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod dashboard; // Rendu de la maquette de dashboard
pub mod events;    // Gestion des événements clavier
pub mod features;  // Rendu de la page vitrine
pub mod signup;    // Rendu de la page d'inscription

use ratatui::Frame;

use crate::app::{App, Screen};

// Re-exports pour simplifier les imports
pub use events::{Event, EventHandler};

/// Dessine l'écran courant
///
/// CONCEPT RUST : Routing avec match sur enum
/// - Un seul écran actif (state machine), exhaustivité garantie
pub fn render(frame: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Signup => signup::render(frame, app),
        Screen::Features => features::render(frame, app),
        Screen::Dashboard => dashboard::render(frame, app),
    }
}
