// ============================================================================
// CryptoView - Démo front-end d'une plateforme de trading crypto
// ============================================================================
// Programme TUI à trois écrans : inscription, vitrine des features,
// maquette de dashboard. Toutes les données de marché sont générées
// localement ; la seule vraie logique est le flux d'inscription.
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : boucle infinie qui gère événements et rendering
// 3. Async dans sync : tokio::runtime::Runtime dans le worker thread
// 4. Capabilities injectées : store, gateway et navigator derrière des traits
// ============================================================================

use std::io;
use std::sync::{mpsc, Arc, Mutex};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info};

use cryptoview::app::{App, Screen};
use cryptoview::signup::{
    Navigator, SignupController, SignupForm, SimulatedGateway, SUCCESS_MESSAGE,
};
use cryptoview::storage::JsonFileStore;
use cryptoview::ui::{events::EventHandler, render};

// ============================================================================
// AppCommand / AppResult : Communication avec le worker thread
// ============================================================================
// CONCEPT RUST : Command pattern avec channels
// - L'event loop envoie des commandes au worker thread
// - Le worker exécute les tâches async (soumission simulée)
// - Communication via mpsc channels (multi-producer, single-consumer)
// ============================================================================

/// Commandes envoyées au worker thread
#[derive(Debug, Clone)]
enum AppCommand {
    /// Soumettre le formulaire d'inscription (snapshot de l'état saisi)
    SubmitSignup { form: SignupForm },
}

/// Résultats renvoyés par le worker thread
#[derive(Debug)]
enum AppResult {
    /// Validation rejetée : message d'erreur fixe à afficher
    SignupRejected { message: String },

    /// Compte créé (simulé) : l'email a été persisté
    SignupSucceeded { email: String },

    /// Le flux demande une navigation (chemin relatif fixe)
    Navigate { path: String },
}

// ============================================================================
// Navigator branché sur le channel de résultats
// ============================================================================

/// Implémentation TUI du Navigator : la demande de navigation devient un
/// AppResult que l'event loop traduit en changement d'écran
struct ChannelNavigator {
    // mpsc::Sender n'est pas Sync : le Mutex rend le navigator partageable
    tx: Mutex<mpsc::Sender<AppResult>>,
}

impl ChannelNavigator {
    fn new(tx: mpsc::Sender<AppResult>) -> Self {
        Self { tx: Mutex::new(tx) }
    }
}

impl Navigator for ChannelNavigator {
    fn go_to(&self, path: &str) {
        let _ = self.tx.lock().unwrap().send(AppResult::Navigate {
            path: path.to_string(),
        });
    }
}

// ============================================================================
// Initialisation du logging
// ============================================================================
// CONCEPT : Logging dans une app TUI
// - Les println! ne fonctionnent pas une fois le TUI lancé
// - On log vers un fichier à la place, avec rotation quotidienne
// ============================================================================

/// Initialise le système de logging vers fichier
///
/// Les logs sont écrits dans :
/// - Linux/WSL : ~/.local/share/cryptoview/logs/cryptoview.log
/// - macOS : ~/Library/Application Support/cryptoview/logs/cryptoview.log
/// - Windows : C:\Users\<user>\AppData\Local\cryptoview\logs\cryptoview.log
///
/// # Utilisation
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=cryptoview=trace cargo run
/// ```
fn init_logging() -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("cryptoview")
        .join("logs");

    std::fs::create_dir_all(&log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir.clone(), "cryptoview.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .with(
            // RUST_LOG=debug : tous les logs debug+
            // Par défaut : debug pour cryptoview, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cryptoview=debug,info".into()),
        )
        .init();

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    // Logging d'abord : si l'init échoue, on continue quand même
    init_logging().unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {}", e);
        eprintln!("   Continuing without logging...");
    });

    info!("CryptoView starting up");

    // Setup du terminal en mode TUI
    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    // État partagé entre l'event loop et le worker
    // CONCEPT RUST : Arc<Mutex<>> pour partage entre threads
    let app = Arc::new(Mutex::new(App::new()));

    // Channels de communication avec le worker
    let (command_tx, command_rx) = mpsc::channel::<AppCommand>();
    let (result_tx, result_rx) = mpsc::channel::<AppResult>();

    // Lance le worker thread en arrière-plan
    info!("Spawning background worker thread");
    spawn_background_worker(command_rx, result_tx);

    // Crée le gestionnaire d'événements
    let events = EventHandler::new();

    // Exécute l'event loop
    info!("Starting event loop");
    let result = run(&mut terminal, app, &events, command_tx, result_rx);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Background Worker Thread
// ============================================================================
// CONCEPT RUST : Background async worker avec channels
// - Thread séparé qui traite les soumissions (délais simulés)
// - block_on() bloque le worker, jamais l'UI
// ============================================================================

/// Worker thread qui exécute le flux de soumission en arrière-plan
///
/// Le worker possède le contrôleur et ses capabilities de production :
/// store JSON sur disque, gateway simulée (vrais timers tokio), navigator
/// branché sur le channel de résultats.
fn spawn_background_worker(
    command_rx: mpsc::Receiver<AppCommand>,
    result_tx: mpsc::Sender<AppResult>,
) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                error!(error = ?e, "Failed to create tokio runtime, worker exiting");
                return;
            }
        };

        let mut controller = SignupController::new(
            JsonFileStore::open(JsonFileStore::default_path()),
            SimulatedGateway,
            ChannelNavigator::new(result_tx.clone()),
        );

        loop {
            match command_rx.recv() {
                Ok(AppCommand::SubmitSignup { form }) => {
                    info!(email = %form.email, "Worker received signup submission");

                    match runtime.block_on(controller.submit(&form)) {
                        Err(err) => {
                            let _ = result_tx.send(AppResult::SignupRejected {
                                message: err.to_string(),
                            });
                        }
                        Ok(()) => {
                            let _ = result_tx.send(AppResult::SignupSucceeded {
                                email: form.email.clone(),
                            });

                            // Pause de succès puis demande de navigation
                            // (le navigator envoie AppResult::Navigate)
                            runtime.block_on(controller.finish_navigation());
                        }
                    }
                }
                Err(_) => {
                    // Channel fermé, on quitte
                    info!("Worker thread exiting (channel closed)");
                    break;
                }
            }
        }
    });
}

// ============================================================================
// Event Loop Principal
// ============================================================================
// CONCEPT : Event Loop Pattern
// - À chaque itération : résultats -> render -> input -> update
// ============================================================================

/// Exécute la boucle principale de l'application
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: Arc<Mutex<App>>,
    events: &EventHandler,
    command_tx: mpsc::Sender<AppCommand>,
    result_rx: mpsc::Receiver<AppResult>,
) -> Result<()> {
    loop {
        // Vérifie si l'app est toujours en cours d'exécution
        // CONCEPT : Lock scope minimisé
        {
            let app_lock = app.lock().unwrap();
            if !app_lock.is_running() {
                break;
            }
        }

        // ========================================
        // 0. RÉSULTATS : Traite les résultats du worker
        // ========================================
        // CONCEPT : Non-blocking receive avec try_recv
        match result_rx.try_recv() {
            Ok(result) => {
                let mut app_lock = app.lock().unwrap();
                match result {
                    AppResult::SignupRejected { message } => {
                        info!(message = %message, "Signup rejected");
                        app_lock.stop_loading();
                        app_lock.set_error(message);
                    }
                    AppResult::SignupSucceeded { email } => {
                        info!(email = %email, "Signup succeeded");
                        app_lock.stop_loading();
                        app_lock.set_success(SUCCESS_MESSAGE.to_string());
                    }
                    AppResult::Navigate { path } => {
                        info!(path = %path, "Navigation requested");
                        app_lock.navigate_to_path(&path);
                    }
                }
            }
            Err(mpsc::TryRecvError::Empty) => {
                // Pas de résultat, c'est normal
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                error!("Worker thread disconnected!");
            }
        }

        // ========================================
        // 1. RENDER : Dessine l'interface
        // ========================================
        {
            let app_clone = app.clone();
            terminal.draw(|frame| {
                let app_lock = app_clone.lock().unwrap();
                render(frame, &app_lock);
            })?;
        }

        // ========================================
        // 2. INPUT : Traite les événements
        // ========================================
        if let Ok(event) = events.next() {
            let mut app_lock = app.lock().unwrap();
            handle_event(&mut app_lock, event, &command_tx);
        }

        // ========================================
        // 3. UPDATE : Met à jour l'état
        // ========================================
        {
            let mut app_lock = app.lock().unwrap();
            app_lock.tick();
        }
    }

    Ok(())
}

// ============================================================================
// Gestion des événements
// ============================================================================

/// Traite un événement et met à jour l'état de l'application
///
/// CONCEPT RUST : Pattern matching avec guards
/// - Navigation contextuelle selon l'écran actuel
/// - Sur Signup, les lettres sont de la saisie de texte : le quit en deux
///   temps y passe par Échap, pas par 'q'
fn handle_event(app: &mut App, event: cryptoview::ui::events::Event, command_tx: &mpsc::Sender<AppCommand>) {
    use cryptoview::ui::events::{
        get_char_from_event, is_backspace_event, is_dashboard_event, is_enter_event,
        is_escape_event, is_features_event, is_next_field_event, is_previous_field_event,
        is_quit_event, is_space_event, is_text_char_event, is_toggle_password_event, Event,
    };

    match event {
        // ========================================
        // Écran Signup : saisie du formulaire
        // ========================================

        // Échap : quit en deux temps
        Event::Key(_) if is_escape_event(&event) && app.is_on_signup() => {
            if app.is_awaiting_quit_confirmation() {
                info!("User confirmed quit");
                app.quit();
            } else {
                info!("User requested quit (awaiting confirmation)");
                app.request_quit();
            }
        }

        // Soumission en cours : aucune autre saisie n'est prise en compte
        // (pas d'annulation d'une soumission en vol)
        Event::Key(_) if app.is_on_signup() && app.is_loading_data() => {}

        // Ctrl+P : afficher/masquer le mot de passe
        // (testé avant la saisie de texte : 'p' seul reste un caractère)
        Event::Key(_) if is_toggle_password_event(&event) && app.is_on_signup() => {
            app.cancel_quit();
            app.toggle_show_password();
        }

        // Tab / flèches : navigation entre champs
        Event::Key(_) if is_next_field_event(&event) && app.is_on_signup() => {
            app.cancel_quit();
            app.focus_next();
        }
        Event::Key(_) if is_previous_field_event(&event) && app.is_on_signup() => {
            app.cancel_quit();
            app.focus_previous();
        }

        // Enter : soumet le formulaire
        Event::Key(_) if is_enter_event(&event) && app.is_on_signup() => {
            app.cancel_quit();
            info!("User submitted signup form");

            // Efface les messages précédents et passe en chargement
            app.clear_messages();
            app.start_loading(Some("Creating account...".to_string()));

            let _ = command_tx.send(AppCommand::SubmitSignup {
                form: app.form.clone(),
            });
        }

        // Espace sur une case à cocher : toggle
        // (sur un champ texte, l'espace est un caractère comme un autre)
        Event::Key(_) if is_space_event(&event) && app.is_on_signup() && !app.focus.is_text() => {
            app.cancel_quit();
            app.toggle_focused();
        }

        // Backspace : efface le dernier caractère du champ focalisé
        Event::Key(_) if is_backspace_event(&event) && app.is_on_signup() => {
            app.cancel_quit();
            app.backspace();
        }

        // Caractère imprimable : saisie dans le champ focalisé
        Event::Key(_) if is_text_char_event(&event) && app.is_on_signup() => {
            app.cancel_quit();
            if let Some(c) = get_char_from_event(&event) {
                app.type_char(c);
            }
        }

        // ========================================
        // Écrans Features / Dashboard
        // ========================================

        // 'q' : quit en deux temps (pas de saisie de texte sur ces écrans)
        Event::Key(_) if is_quit_event(&event) && !app.is_on_signup() => {
            if app.is_awaiting_quit_confirmation() {
                info!("User confirmed quit");
                app.quit();
            } else {
                info!("User requested quit (awaiting confirmation)");
                app.request_quit();
            }
        }

        // 'd' : dashboard, 'f' : features
        Event::Key(_) if is_dashboard_event(&event) && !app.is_on_signup() => {
            debug!("User navigated to dashboard");
            app.navigate_to(Screen::Dashboard);
        }
        Event::Key(_) if is_features_event(&event) && !app.is_on_signup() => {
            debug!("User navigated to features");
            app.navigate_to(Screen::Features);
        }

        Event::Tick => {
            // Tick régulier : l'update est géré par app.tick()
        }

        Event::Key(_) => {
            // Toute autre touche : annule la confirmation de quit si active
            app.cancel_quit();
        }
    }
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================
// IMPORTANT : Toujours restaurer le terminal avant de quitter !
// ============================================================================

/// Configure le terminal en mode TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| e.into())
}

/// Restaure le terminal à son état normal
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    terminal.show_cursor()?;

    Ok(())
}
