// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état global de l'application TUI
//
// PATTERN : "Application State"
// - Tous les composants de l'UI lisent depuis App
// - Toutes les modifications passent par les méthodes de App
// - Garantit la cohérence de l'état
//
// Trois écrans : Signup (le formulaire, seul écran avec de la vraie
// logique), Features (vitrine) et Dashboard (maquette). Les données de
// marché sont purement décoratives et dérivent sur des cadences de tick.
// ============================================================================

use crate::models::{
    MarketAlert, MarketQuote, PortfolioOverview, RandomSeries, TradingStats,
};
use crate::signup::SignupForm;

// Cadences de rafraîchissement des données de démo, en ticks de 250 ms
// (maquette web : chart 1 s, stats 2 s, portefeuille 3 s)
const LIVE_CHART_TICKS: u64 = 4;
const STATS_TICKS: u64 = 8;
const PORTFOLIO_TICKS: u64 = 12;

/// Frames du spinner de chargement (une frame par tick)
const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

// ============================================================================
// Enum : Screen
// ============================================================================

/// Écrans de l'application
///
/// CONCEPT RUST : Enum pour state machine
/// - Un seul écran actif à la fois
/// - Le compilateur force à gérer tous les cas (exhaustivité)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Page d'inscription (le formulaire)
    Signup,

    /// Vitrine des features (stats, live chart, grille de cartes)
    Features,

    /// Maquette de dashboard (portefeuille, cartes de marché)
    Dashboard,
}

// ============================================================================
// Enum : FormField
// ============================================================================

/// Champ du formulaire ayant le focus clavier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Password,
    Terms,
    Newsletter,
}

impl FormField {
    /// Champ suivant (Tab / flèche bas), cyclique
    pub fn next(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Terms,
            Self::Terms => Self::Newsletter,
            Self::Newsletter => Self::Email,
        }
    }

    /// Champ précédent (Shift+Tab / flèche haut), cyclique
    pub fn previous(self) -> Self {
        match self {
            Self::Email => Self::Newsletter,
            Self::Password => Self::Email,
            Self::Terms => Self::Password,
            Self::Newsletter => Self::Terms,
        }
    }

    /// Retourne true pour les champs texte (saisie caractère par caractère)
    pub fn is_text(self) -> bool {
        matches!(self, Self::Email | Self::Password)
    }
}

// ============================================================================
// Structure : App
// ============================================================================

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Écran actuellement affiché
    pub current_screen: Screen,

    /// Le formulaire d'inscription (seule entité avec des invariants)
    pub form: SignupForm,

    /// Champ du formulaire ayant le focus
    pub focus: FormField,

    /// Affiche le mot de passe en clair (toggle "œil" de la maquette)
    pub show_password: bool,

    /// Soumission en cours : les saisies sont ignorées (pas d'annulation
    /// possible d'une soumission en vol)
    pub is_loading: bool,

    /// Message affiché pendant le chargement
    pub loading_message: Option<String>,

    /// Message d'erreur de validation courant
    pub error: Option<String>,

    /// Message de succès courant
    pub success: Option<String>,

    /// Confirmation de quit en deux temps
    pub confirm_quit: bool,

    // --- Données de démo (décoratives, générées localement) ---
    /// Cartes de marché du dashboard
    pub quotes: Vec<MarketQuote>,

    /// Portefeuille fictif
    pub portfolio: PortfolioOverview,

    /// Compteurs de la page features
    pub stats: TradingStats,

    /// Série du graphique "live" (features)
    pub live_series: RandomSeries,

    /// Séries des deux mini-graphes du dashboard
    pub price_series: RandomSeries,
    pub volume_series: RandomSeries,

    /// Alertes d'exemple (badge notifications)
    pub alerts: Vec<MarketAlert>,

    /// Compteur de ticks (cadence 250 ms)
    tick_count: u64,
}

impl App {
    /// Crée l'état initial : formulaire vide, écran Signup
    pub fn new() -> Self {
        let mut rng = rand::rng();
        Self {
            running: true,
            current_screen: Screen::Signup,
            form: SignupForm::new(),
            focus: FormField::Email,
            show_password: false,
            is_loading: false,
            loading_message: None,
            error: None,
            success: None,
            confirm_quit: false,
            quotes: MarketQuote::demo_board(),
            portfolio: PortfolioOverview::new(),
            stats: TradingStats::new(),
            live_series: RandomSeries::new(&mut rng),
            price_series: RandomSeries::new(&mut rng),
            volume_series: RandomSeries::new(&mut rng),
            alerts: MarketAlert::samples(),
            tick_count: 0,
        }
    }

    /// Quitte l'application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Vérifie si l'application doit continuer
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Demande la confirmation de quitter (premier appui)
    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    /// Annule la demande de quit
    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }

    // ========================================================================
    // Navigation entre écrans
    // ========================================================================

    /// Change d'écran
    pub fn navigate_to(&mut self, screen: Screen) {
        self.current_screen = screen;
        self.confirm_quit = false;
    }

    /// Traduit un chemin relatif (interface Navigator) en écran
    ///
    /// Le flux signup ne demande que "/features" ; tout chemin inconnu est
    /// ignoré.
    pub fn navigate_to_path(&mut self, path: &str) {
        match path {
            crate::signup::FEATURES_PATH => self.navigate_to(Screen::Features),
            "/" => self.navigate_to(Screen::Signup),
            other => {
                tracing::warn!(path = %other, "Unknown navigation path, staying put");
            }
        }
    }

    pub fn is_on_signup(&self) -> bool {
        self.current_screen == Screen::Signup
    }

    // ========================================================================
    // Édition du formulaire
    // ========================================================================

    /// Passe le focus au champ suivant
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Passe le focus au champ précédent
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Saisit un caractère dans le champ texte focalisé
    ///
    /// Toute saisie efface les messages : une erreur affichée redevient un
    /// état Idle éditable dès la frappe suivante.
    pub fn type_char(&mut self, c: char) {
        self.clear_messages();
        match self.focus {
            FormField::Email => self.form.email.push(c),
            FormField::Password => self.form.push_password_char(c),
            FormField::Terms | FormField::Newsletter => {}
        }
    }

    /// Supprime le dernier caractère du champ texte focalisé
    pub fn backspace(&mut self) {
        self.clear_messages();
        match self.focus {
            FormField::Email => {
                self.form.email.pop();
            }
            FormField::Password => self.form.pop_password_char(),
            FormField::Terms | FormField::Newsletter => {}
        }
    }

    /// Inverse la case à cocher focalisée (Espace)
    pub fn toggle_focused(&mut self) {
        self.clear_messages();
        match self.focus {
            FormField::Terms => self.form.toggle_terms(),
            FormField::Newsletter => self.form.toggle_newsletter(),
            FormField::Email | FormField::Password => {}
        }
    }

    /// Inverse l'affichage en clair du mot de passe
    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Efface les messages d'erreur et de succès
    pub fn clear_messages(&mut self) {
        self.error = None;
        self.success = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
        self.success = None;
    }

    pub fn set_success(&mut self, message: String) {
        self.success = Some(message);
        self.error = None;
    }

    // ========================================================================
    // Chargement (soumission en cours)
    // ========================================================================

    /// Démarre l'état de chargement avec un message optionnel
    pub fn start_loading(&mut self, message: Option<String>) {
        self.is_loading = true;
        self.loading_message = message;
    }

    /// Termine l'état de chargement
    pub fn stop_loading(&mut self) {
        self.is_loading = false;
        self.loading_message = None;
    }

    pub fn is_loading_data(&self) -> bool {
        self.is_loading
    }

    /// Frame courante du spinner de chargement
    pub fn spinner_frame(&self) -> char {
        SPINNER_FRAMES[(self.tick_count as usize) % SPINNER_FRAMES.len()]
    }

    // ========================================================================
    // Tick : rafraîchissement des données de démo
    // ========================================================================

    /// Appelé à chaque itération de la boucle (cadence 250 ms)
    ///
    /// Seules les données de l'écran affiché sont rafraîchies : les timers
    /// décoratifs sont indépendants et s'arrêtent avec la vue qui les porte.
    pub fn tick(&mut self) {
        self.tick_count += 1;
        let mut rng = rand::rng();

        match self.current_screen {
            Screen::Signup => {}
            Screen::Features => {
                if self.tick_count % LIVE_CHART_TICKS == 0 {
                    self.live_series.advance(&mut rng);
                }
                if self.tick_count % STATS_TICKS == 0 {
                    self.stats.drift(&mut rng);
                }
            }
            Screen::Dashboard => {
                if self.tick_count % LIVE_CHART_TICKS == 0 {
                    self.price_series.resample(&mut rng);
                    self.volume_series.resample(&mut rng);
                }
                if self.tick_count % PORTFOLIO_TICKS == 0 {
                    self.portfolio.drift(&mut rng);
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_starts_on_signup() {
        let app = App::new();
        assert!(app.is_running());
        assert_eq!(app.current_screen, Screen::Signup);
        assert_eq!(app.focus, FormField::Email);
        assert!(app.form.email.is_empty());
        assert!(!app.is_loading_data());
    }

    #[test]
    fn test_focus_cycles_through_fields() {
        let mut app = App::new();
        app.focus_next();
        assert_eq!(app.focus, FormField::Password);
        app.focus_next();
        assert_eq!(app.focus, FormField::Terms);
        app.focus_next();
        assert_eq!(app.focus, FormField::Newsletter);
        app.focus_next();
        assert_eq!(app.focus, FormField::Email);

        app.focus_previous();
        assert_eq!(app.focus, FormField::Newsletter);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut app = App::new();
        app.type_char('a');
        app.type_char('@');
        assert_eq!(app.form.email, "a@");

        app.focus_next(); // Password
        app.type_char('x');
        assert_eq!(app.form.password(), "x");
        assert_eq!(app.form.email, "a@");

        app.backspace();
        assert_eq!(app.form.password(), "");
    }

    #[test]
    fn test_typing_clears_error() {
        // Erreur affichée -> retour à Idle dès la frappe suivante
        let mut app = App::new();
        app.set_error("Please enter a valid email".to_string());
        assert!(app.error.is_some());

        app.type_char('a');
        assert!(app.error.is_none());
    }

    #[test]
    fn test_space_toggles_focused_checkbox_only() {
        let mut app = App::new();
        app.toggle_focused(); // focus = Email : no-op
        assert!(!app.form.agree_to_terms);

        app.focus = FormField::Terms;
        app.toggle_focused();
        assert!(app.form.agree_to_terms);

        app.focus = FormField::Newsletter;
        app.toggle_focused();
        assert!(app.form.newsletter);
    }

    #[test]
    fn test_two_step_quit() {
        let mut app = App::new();
        app.request_quit();
        assert!(app.is_awaiting_quit_confirmation());
        assert!(app.is_running());

        app.cancel_quit();
        assert!(!app.is_awaiting_quit_confirmation());

        app.request_quit();
        app.quit();
        assert!(!app.is_running());
    }

    #[test]
    fn test_navigate_to_path() {
        let mut app = App::new();
        app.navigate_to_path("/features");
        assert_eq!(app.current_screen, Screen::Features);

        // Chemin inconnu : on reste en place
        app.navigate_to_path("/nope");
        assert_eq!(app.current_screen, Screen::Features);

        app.navigate_to_path("/");
        assert_eq!(app.current_screen, Screen::Signup);
    }

    #[test]
    fn test_tick_only_refreshes_active_screen() {
        let mut app = App::new();

        // Sur Signup : les stats ne bougent pas
        let volume_before = app.stats.volume_usd;
        for _ in 0..STATS_TICKS {
            app.tick();
        }
        assert_eq!(app.stats.volume_usd, volume_before);

        // Sur Features : elles dérivent sur leur cadence
        app.navigate_to(Screen::Features);
        for _ in 0..STATS_TICKS {
            app.tick();
        }
        assert!(app.stats.volume_usd >= volume_before);
    }
}
