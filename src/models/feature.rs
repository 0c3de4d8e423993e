// ============================================================================
// Structures : FeatureCard et MarketAlert
// ============================================================================
// Contenu statique de la page features : la grille de six cartes et les
// deux alertes d'exemple du menu notifications
// ============================================================================

/// Une carte de la grille "features"
#[derive(Debug, Clone)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

impl FeatureCard {
    /// Les six cartes de la maquette
    pub fn catalog() -> Vec<Self> {
        vec![
            Self {
                title: "Advanced Charts",
                description: "Professional-grade charting with technical indicators",
            },
            Self {
                title: "Bank-Grade Security",
                description: "Multi-layer security with biometric authentication",
            },
            Self {
                title: "Instant Trades",
                description: "Lightning-fast execution with smart order routing",
            },
            Self {
                title: "Rewards Program",
                description: "Earn while you trade with our loyalty program",
            },
            Self {
                title: "24/7 Support",
                description: "Round-the-clock customer support",
            },
            Self {
                title: "Multi-Asset Wallet",
                description: "Secure storage for all your digital assets",
            },
        ]
    }
}

/// Une alerte de marché d'exemple (badge notifications)
#[derive(Debug, Clone)]
pub struct MarketAlert {
    pub title: &'static str,
    pub message: &'static str,
}

impl MarketAlert {
    /// Les deux alertes d'exemple de la maquette
    pub fn samples() -> Vec<Self> {
        vec![
            Self {
                title: "BTC Alert",
                message: "Bitcoin breaks $45,000",
            },
            Self {
                title: "ETH Alert",
                message: "Ethereum up 5% in last hour",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_cards() {
        let cards = FeatureCard::catalog();
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].title, "Advanced Charts");
        assert_eq!(cards[5].title, "Multi-Asset Wallet");
    }

    #[test]
    fn test_sample_alerts() {
        let alerts = MarketAlert::samples();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].message, "Bitcoin breaks $45,000");
    }
}
