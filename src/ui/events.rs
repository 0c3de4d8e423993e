// ============================================================================
// Gestion des événements
// ============================================================================
// Gère les événements clavier et les ticks de l'application
//
// CONCEPTS RUST :
// 1. Enums avec variants : représenter différents types d'événements
// 2. Pattern matching avec matches! et guards
// 3. Error handling avec Result
// ============================================================================

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Événements de l'application
#[derive(Debug, Clone)]
pub enum Event {
    /// Touche pressée
    Key(KeyEvent),

    /// Tick régulier (animations, rafraîchissement des données de démo)
    Tick,
}

/// Gestionnaire d'événements
///
/// Stateless : un poll bloquant avec timeout, qui retourne Tick en
/// l'absence d'événement (c'est le métronome de l'application)
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Lit le prochain événement (bloquant, timeout 250 ms)
    ///
    /// CONCEPT : Non-blocking I/O avec timeout
    /// - poll(250 ms) : attend au plus un tick
    /// - Pas d'événement -> Ok(Event::Tick)
    pub fn next(&self) -> Result<Event> {
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                CrosstermEvent::Key(key) => {
                    // Sur certains OS on reçoit Press ET Release :
                    // on ne garde que Press pour éviter les doublons
                    if key.kind == KeyEventKind::Press {
                        Ok(Event::Key(key))
                    } else {
                        Ok(Event::Tick)
                    }
                }

                // Resize, souris, etc. : ignorés
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Helpers : Identifier les touches
// ============================================================================

/// 'q' : quitter (écrans sans saisie de texte uniquement)
pub fn is_quit_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
    } else {
        false
    }
}

/// Échap
pub fn is_escape_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Esc)
    } else {
        false
    }
}

/// Entrée
pub fn is_enter_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Enter)
    } else {
        false
    }
}

/// Tab ou flèche bas : champ suivant du formulaire
pub fn is_next_field_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Tab | KeyCode::Down)
    } else {
        false
    }
}

/// Shift+Tab ou flèche haut : champ précédent du formulaire
pub fn is_previous_field_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::BackTab | KeyCode::Up)
    } else {
        false
    }
}

/// Backspace
pub fn is_backspace_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Backspace)
    } else {
        false
    }
}

/// Espace (coche/décoche la case focalisée)
pub fn is_space_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char(' '))
    } else {
        false
    }
}

/// Ctrl+P : afficher/masquer le mot de passe (l'"œil" de la maquette)
pub fn is_toggle_password_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('p') | KeyCode::Char('P'))
    } else {
        false
    }
}

/// 'd' : aller au dashboard (écrans post-signup uniquement)
pub fn is_dashboard_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('d') | KeyCode::Char('D'))
    } else {
        false
    }
}

/// 'f' : aller à la page features (écrans post-signup uniquement)
pub fn is_features_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        matches!(key.code, KeyCode::Char('f') | KeyCode::Char('F'))
    } else {
        false
    }
}

/// Caractère imprimable sans modificateur de contrôle (saisie de texte)
pub fn is_text_char_event(event: &Event) -> bool {
    if let Event::Key(key) = event {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }
        matches!(key.code, KeyCode::Char(_))
    } else {
        false
    }
}

/// Extrait le caractère d'un événement clavier si c'en est un
pub fn get_char_from_event(event: &Event) -> Option<char> {
    if let Event::Key(key) = event {
        if let KeyCode::Char(c) = key.code {
            return Some(c);
        }
    }
    None
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn ctrl_key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::CONTROL))
    }

    #[test]
    fn test_is_quit_event() {
        assert!(is_quit_event(&key(KeyCode::Char('q'))));
        assert!(!is_quit_event(&key(KeyCode::Char('a'))));
        assert!(!is_quit_event(&Event::Tick));
    }

    #[test]
    fn test_field_navigation_events() {
        assert!(is_next_field_event(&key(KeyCode::Tab)));
        assert!(is_next_field_event(&key(KeyCode::Down)));
        assert!(is_previous_field_event(&key(KeyCode::BackTab)));
        assert!(is_previous_field_event(&key(KeyCode::Up)));
    }

    #[test]
    fn test_toggle_password_requires_control() {
        assert!(is_toggle_password_event(&ctrl_key(KeyCode::Char('p'))));
        assert!(!is_toggle_password_event(&key(KeyCode::Char('p'))));
    }

    #[test]
    fn test_text_char_excludes_control_chords() {
        assert!(is_text_char_event(&key(KeyCode::Char('a'))));
        assert!(is_text_char_event(&key(KeyCode::Char(' '))));
        assert!(!is_text_char_event(&ctrl_key(KeyCode::Char('p'))));
        assert!(!is_text_char_event(&key(KeyCode::Enter)));

        assert_eq!(get_char_from_event(&key(KeyCode::Char('z'))), Some('z'));
        assert_eq!(get_char_from_event(&key(KeyCode::Enter)), None);
    }
}
