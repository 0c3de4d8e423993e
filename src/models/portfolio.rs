// ============================================================================
// Structure : PortfolioOverview
// ============================================================================
// Vue d'ensemble du portefeuille de démo : part de 125 000 $ / +12.5% et
// dérive aléatoirement à chaque rafraîchissement, comme la maquette web
// ============================================================================

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::format_thousands;

/// Portefeuille fictif du dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioOverview {
    /// Valeur totale en dollars
    pub total_value: f64,

    /// P&L 24h en pourcentage
    pub profit_loss_percent: f64,
}

impl PortfolioOverview {
    /// Valeurs de départ de la maquette
    pub fn new() -> Self {
        Self {
            total_value: 125_000.0,
            profit_loss_percent: 12.5,
        }
    }

    /// Dérive aléatoire : ±500 $ sur la valeur, ±0.05 pt sur le P&L
    ///
    /// Formules de la maquette : (random - 0.5) * 1000 et (random - 0.5) * 0.1
    pub fn drift<R: Rng>(&mut self, rng: &mut R) {
        self.total_value += (rng.random::<f64>() - 0.5) * 1000.0;
        self.profit_loss_percent += (rng.random::<f64>() - 0.5) * 0.1;
    }

    pub fn is_positive(&self) -> bool {
        self.profit_loss_percent >= 0.0
    }

    /// "$125,000"
    pub fn value_label(&self) -> String {
        format!("${}", format_thousands(self.total_value.round() as u64))
    }

    /// "+12.50%"
    pub fn profit_loss_label(&self) -> String {
        format!("{:+.2}%", self.profit_loss_percent)
    }
}

impl Default for PortfolioOverview {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_starting_values() {
        let portfolio = PortfolioOverview::new();
        assert_eq!(portfolio.total_value, 125_000.0);
        assert_eq!(portfolio.profit_loss_percent, 12.5);
        assert!(portfolio.is_positive());
        assert_eq!(portfolio.value_label(), "$125,000");
        assert_eq!(portfolio.profit_loss_label(), "+12.50%");
    }

    #[test]
    fn test_drift_stays_bounded_per_step() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut portfolio = PortfolioOverview::new();

        for _ in 0..100 {
            let before_value = portfolio.total_value;
            let before_pl = portfolio.profit_loss_percent;
            portfolio.drift(&mut rng);

            assert!((portfolio.total_value - before_value).abs() <= 500.0);
            assert!((portfolio.profit_loss_percent - before_pl).abs() <= 0.05);
        }
    }
}
