// ============================================================================
// Password Strength - Score de robustesse du mot de passe
// ============================================================================
// Calcule un score de 0 à 5 : un point par règle satisfaite, règles évaluées
// indépendamment (pas de cumul ordonné)
//
// CONCEPTS RUST :
// 1. Fonctions pures : même entrée -> même sortie, aucun effet de bord
// 2. Iterator any() : test d'existence sans allocation
// 3. Const arrays : table de labels connue à la compilation
// ============================================================================

/// Labels de robustesse, indexés par `score - 1`
///
/// ATTENTION : l'indexation par `score - 1` fait que les scores 0 et 1
/// retombent tous les deux sur "Very Weak" (échec de lookup -> premier
/// label). C'est le comportement historique de la page web, reproduit tel
/// quel.
pub const STRENGTH_LABELS: [&str; 5] = ["Very Weak", "Weak", "Medium", "Strong", "Very Strong"];

/// Score minimal (aucune règle satisfaite)
pub const MIN_SCORE: u8 = 0;

/// Score maximal (les cinq règles satisfaites)
pub const MAX_SCORE: u8 = 5;

/// Calcule le score de robustesse d'un mot de passe
///
/// Une règle = un point, évaluées indépendamment :
/// 1. longueur >= 8 caractères
/// 2. contient une majuscule ASCII
/// 3. contient une minuscule ASCII
/// 4. contient un chiffre
/// 5. contient un caractère hors [A-Za-z0-9] (ponctuation, symbole...)
///
/// CONCEPT RUST : Fonction pure
/// - Aucun état, aucun effet de bord
/// - Déterministe : testable exhaustivement
pub fn strength_score(password: &str) -> u8 {
    let mut score = 0;

    if password.chars().count() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    // Équivalent du pattern [^A-Za-z0-9] de la page d'origine
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    score
}

/// Retourne le label correspondant à un score
///
/// Reproduit l'indexation `labels[score - 1] || "Very Weak"` de l'UI
/// d'origine : score 0 et score 1 donnent le même label.
pub fn strength_label(score: u8) -> &'static str {
    score
        .checked_sub(1)
        .and_then(|i| STRENGTH_LABELS.get(i as usize))
        .copied()
        .unwrap_or(STRENGTH_LABELS[0])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_scores_zero() {
        assert_eq!(strength_score(""), 0);
    }

    #[test]
    fn test_length_and_lowercase() {
        // 8 minuscules : longueur + minuscules = 2 points
        assert_eq!(strength_score("abcdefgh"), 2);
    }

    #[test]
    fn test_all_rules_satisfied() {
        assert_eq!(strength_score("Abcdefg1!"), 5);
        assert_eq!(strength_score("Abcdef12!"), 5);
    }

    #[test]
    fn test_individual_rules() {
        // Une seule règle à la fois
        assert_eq!(strength_score("a"), 1); // minuscule
        assert_eq!(strength_score("A"), 1); // majuscule
        assert_eq!(strength_score("7"), 1); // chiffre
        assert_eq!(strength_score("!"), 1); // symbole
        assert_eq!(strength_score("aaaaaaaa"), 2); // longueur + minuscule
    }

    #[test]
    fn test_score_bounds() {
        for p in ["", "a", "Ab1!", "Abcdefg1!", "密碼密碼密碼密碼"] {
            let score = strength_score(p);
            assert!((MIN_SCORE..=MAX_SCORE).contains(&score));
        }
    }

    #[test]
    fn test_monotonic_when_adding_rules() {
        // Ajouter une règle satisfaite sans en retirer ne baisse jamais le score
        let steps = ["", "a", "aB", "aB1", "aB1!", "aB1!aB1!"];
        let mut previous = 0;
        for p in steps {
            let score = strength_score(p);
            assert!(
                score >= previous,
                "score({p:?}) = {score} < previous {previous}"
            );
            previous = score;
        }
    }

    #[test]
    fn test_labels_for_each_score() {
        assert_eq!(strength_label(2), "Weak");
        assert_eq!(strength_label(3), "Medium");
        assert_eq!(strength_label(4), "Strong");
        assert_eq!(strength_label(5), "Very Strong");
    }

    #[test]
    fn test_label_fallback_scores_zero_and_one_collapse() {
        // Comportement historique : lookup labels[score - 1], échec -> index 0
        assert_eq!(strength_label(0), "Very Weak");
        assert_eq!(strength_label(1), "Very Weak");
    }

    #[test]
    fn test_non_ascii_letter_counts_as_symbol() {
        // 'é' n'est pas dans [A-Za-z0-9] : règle 5 satisfaite
        assert_eq!(strength_score("é"), 1);
    }
}
