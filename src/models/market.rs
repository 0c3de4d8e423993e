// ============================================================================
// Structure : MarketQuote
// ============================================================================
// Cartes de marché du dashboard. Les valeurs sont les constantes de démo de
// la maquette : aucune donnée réelle, aucun rafraîchissement réseau.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::format_thousands;

/// Une carte de marché (paire, prix, variation, volume)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketQuote {
    /// Paire affichée (ex: "BTC/USD")
    pub symbol: String,

    /// Dernier prix (démo)
    pub price: f64,

    /// Variation en pourcentage (peut être négative)
    pub change_percent: f64,

    /// Volume en millions de dollars
    pub volume_musd: u64,
}

impl MarketQuote {
    pub fn new(symbol: &str, price: f64, change_percent: f64, volume_musd: u64) -> Self {
        Self {
            symbol: symbol.to_string(),
            price,
            change_percent,
            volume_musd,
        }
    }

    /// Les trois cartes de la maquette
    pub fn demo_board() -> Vec<Self> {
        vec![
            Self::new("BTC/USD", 45_123.45, 2.5, 1234),
            Self::new("ETH/USD", 3_123.45, -1.2, 567),
            Self::new("SOL/USD", 123.45, 5.6, 890),
        ]
    }

    /// Retourne true si la variation est positive ou nulle
    pub fn is_positive(&self) -> bool {
        self.change_percent >= 0.0
    }

    /// Prix formaté : "$45,123.45"
    pub fn price_label(&self) -> String {
        let whole = self.price.trunc() as u64;
        let cents = (self.price.fract() * 100.0).round() as u64;
        format!("${}.{:02}", format_thousands(whole), cents)
    }

    /// Variation formatée avec flèche : "▲ +2.50%" / "▼ -1.20%"
    pub fn change_label(&self) -> String {
        let arrow = if self.is_positive() { "▲" } else { "▼" };
        format!("{} {:+.2}%", arrow, self.change_percent)
    }

    /// Volume formaté : "Vol: $1,234M"
    pub fn volume_label(&self) -> String {
        format!("Vol: ${}M", format_thousands(self.volume_musd))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_board_constants() {
        let board = MarketQuote::demo_board();
        assert_eq!(board.len(), 3);
        assert_eq!(board[0].symbol, "BTC/USD");
        assert_eq!(board[0].price, 45_123.45);
        assert!(board[0].is_positive());
        assert_eq!(board[1].symbol, "ETH/USD");
        assert!(!board[1].is_positive());
        assert_eq!(board[2].volume_musd, 890);
    }

    #[test]
    fn test_labels() {
        let quote = MarketQuote::new("BTC/USD", 45_123.45, 2.5, 1234);
        assert_eq!(quote.price_label(), "$45,123.45");
        assert_eq!(quote.change_label(), "▲ +2.50%");
        assert_eq!(quote.volume_label(), "Vol: $1,234M");

        let down = MarketQuote::new("ETH/USD", 3_123.45, -1.2, 567);
        assert_eq!(down.change_label(), "▼ -1.20%");
    }
}
