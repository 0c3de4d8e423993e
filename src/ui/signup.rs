// ============================================================================
// Signup - Rendu de la page d'inscription
// ============================================================================
// Le formulaire de la maquette : email, mot de passe (masquable), jauge de
// robustesse à cinq segments, deux cases à cocher, messages d'erreur et de
// succès, spinner pendant la soumission simulée
//
// CONCEPTS RATATUI :
// 1. Layout : header / formulaire / footer
// 2. Line + Span : composition de texte multi-styles
// 3. Style conditionnel : focus, erreurs, segments de la jauge
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, FormField};
use crate::signup::{strength_label, MAX_SCORE};

/// Dessine la page d'inscription complète
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header : marque + slogan
            Constraint::Min(0),    // Formulaire
            Constraint::Length(3), // Footer : raccourcis
        ])
        .split(frame.size())
        .to_vec();

    render_header(frame, chunks[0]);
    render_form(frame, app, chunks[1]);
    render_footer(frame, app, chunks[2]);
}

// ============================================================================
// Header : marque et slogan
// ============================================================================

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" CryptoView ")
        .title_alignment(Alignment::Center);

    let text = vec![
        Line::from(vec![
            Span::styled(
                "Chart. ",
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Analyse. ",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Trade.",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Create your account",
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Formulaire
// ============================================================================

/// Dessine le formulaire d'inscription
fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Sign up ");

    let mut lines: Vec<Line> = vec![Line::from("")];

    // --- Email ---
    lines.push(text_field_line(
        "Email",
        &app.form.email,
        app.focus == FormField::Email,
        // Coche verte dès que l'email est non vide (comme la maquette)
        if app.form.email.is_empty() { "" } else { " ✓" },
    ));
    lines.push(Line::from(""));

    // --- Mot de passe (masqué par défaut) ---
    let password_display = if app.show_password {
        app.form.password().to_string()
    } else {
        "●".repeat(app.form.password().chars().count())
    };
    lines.push(text_field_line(
        "Password",
        &password_display,
        app.focus == FormField::Password,
        "",
    ));

    // --- Jauge de robustesse (seulement si un mot de passe est saisi) ---
    if !app.form.password().is_empty() {
        lines.push(strength_meter_line(app.form.strength_score()));
        lines.push(Line::from(Span::styled(
            format!(
                "  Password strength: {}",
                strength_label(app.form.strength_score())
            ),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));

    // --- Cases à cocher ---
    lines.push(checkbox_line(
        "I agree to the terms and conditions",
        app.form.agree_to_terms,
        app.focus == FormField::Terms,
    ));
    lines.push(checkbox_line(
        "Subscribe to newsletter for trading tips and updates",
        app.form.newsletter,
        app.focus == FormField::Newsletter,
    ));
    lines.push(Line::from(""));

    // --- Messages : chargement, erreur, succès ---
    if app.is_loading_data() {
        let message = app
            .loading_message
            .as_deref()
            .unwrap_or("Creating account...");
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", app.spinner_frame()),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(message, Style::default().fg(Color::Yellow)),
        ]));
    } else if let Some(error) = &app.error {
        lines.push(Line::from(Span::styled(
            format!("  ✗ {}", error),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else if let Some(success) = &app.success {
        lines.push(Line::from(Span::styled(
            format!("  ✓ {}", success),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Ligne d'un champ texte, avec marqueur de focus et curseur
fn text_field_line<'a>(
    label: &'a str,
    value: &str,
    focused: bool,
    suffix: &'a str,
) -> Line<'a> {
    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{:<10}", label), label_style),
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
    ];

    if focused {
        // Curseur clignotant en fin de champ
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    spans.push(Span::styled(suffix, Style::default().fg(Color::Green)));
    Line::from(spans)
}

/// Jauge de robustesse : cinq segments, verts jusqu'au score
fn strength_meter_line(score: u8) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];

    for segment in 1..=MAX_SCORE {
        let style = if segment <= score {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled("▄▄▄▄", style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

/// Ligne d'une case à cocher
fn checkbox_line(label: &str, checked: bool, focused: bool) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let box_str = if checked { "[x]" } else { "[ ]" };
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(format!("{} ", box_str), style),
        Span::styled(label.to_string(), style),
    ])
}

// ============================================================================
// Footer : raccourcis ou confirmation de quit
// ============================================================================

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let shortcuts = if app.is_awaiting_quit_confirmation() {
        // Deux temps : Échap à nouveau pour quitter
        Line::from(vec![
            Span::styled(
                "⚠  Press ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "[Esc]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(
                " again to quit, any other key to cancel ⚠",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ])
    } else if app.is_loading_data() {
        // Pas d'annulation d'une soumission en vol
        Line::from(Span::styled(
            "Submitting... please wait",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(vec![
            Span::styled("[Tab/↑↓]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(" Field  "),
            Span::styled("[Space]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(" Toggle  "),
            Span::styled("[Enter]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" Sign up  "),
            Span::styled("[Ctrl+P]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(" Show password  "),
            Span::styled("[Esc]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(" Quit"),
        ])
    };

    let paragraph = Paragraph::new(vec![shortcuts])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
