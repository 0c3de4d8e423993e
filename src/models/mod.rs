// ============================================================================
// Module : models
// ============================================================================
// Données de démonstration des écrans (tout est généré localement : aucune
// ingestion de marché réelle n'existe dans ce produit)
// ============================================================================

pub mod feature;   // Cartes de la grille "features" et alertes d'exemple
pub mod format;    // Helpers de formatage (séparateurs de milliers)
pub mod market;    // Cartes de marché du dashboard (BTC, ETH, SOL)
pub mod portfolio; // Vue d'ensemble du portefeuille (valeur + P&L)
pub mod series;    // Série glissante aléatoire pour les graphiques
pub mod stats;     // Statistiques de trading de la page features

// Re-export des structures principales pour simplifier les imports
pub use feature::{FeatureCard, MarketAlert};
pub use format::format_thousands;
pub use market::MarketQuote;
pub use portfolio::PortfolioOverview;
pub use series::{RandomSeries, SERIES_LEN};
pub use stats::TradingStats;
