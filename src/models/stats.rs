// ============================================================================
// Structure : TradingStats
// ============================================================================
// Les trois compteurs de la page features (volume 24h, trades, utilisateurs
// actifs), qui gonflent aléatoirement à chaque rafraîchissement
// ============================================================================

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::format_thousands;

/// Statistiques de trading fictives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingStats {
    /// Volume 24h en dollars
    pub volume_usd: f64,

    /// Nombre total de trades
    pub trades: f64,

    /// Utilisateurs actifs
    pub users: f64,
}

impl TradingStats {
    /// Valeurs de départ de la maquette
    pub fn new() -> Self {
        Self {
            volume_usd: 1_234_567.0,
            trades: 50_000.0,
            users: 25_000.0,
        }
    }

    /// Croissance aléatoire : random*1000 / random*10 / random*5
    ///
    /// Les compteurs ne décroissent jamais (random est dans [0, 1))
    pub fn drift<R: Rng>(&mut self, rng: &mut R) {
        self.volume_usd += rng.random::<f64>() * 1000.0;
        self.trades += rng.random::<f64>() * 10.0;
        self.users += rng.random::<f64>() * 5.0;
    }

    /// "$1,234,567"
    pub fn volume_label(&self) -> String {
        format!("${}", format_thousands(self.volume_usd.floor() as u64))
    }

    /// "50,000"
    pub fn trades_label(&self) -> String {
        format_thousands(self.trades.floor() as u64)
    }

    /// "25,000"
    pub fn users_label(&self) -> String {
        format_thousands(self.users.floor() as u64)
    }
}

impl Default for TradingStats {
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
        let stats = TradingStats::new();
        assert_eq!(stats.volume_label(), "$1,234,567");
        assert_eq!(stats.trades_label(), "50,000");
        assert_eq!(stats.users_label(), "25,000");
    }

    #[test]
    fn test_drift_never_decreases() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut stats = TradingStats::new();

        for _ in 0..50 {
            let (v, t, u) = (stats.volume_usd, stats.trades, stats.users);
            stats.drift(&mut rng);
            assert!(stats.volume_usd >= v);
            assert!(stats.trades >= t);
            assert!(stats.users >= u);
        }
    }
}
