// ============================================================================
// Structure : RandomSeries
// ============================================================================
// Fenêtre glissante de 20 échantillons aléatoires dans [0, 100), qui
// alimente le graphique "live" de la page features et les mini-graphes du
// dashboard. Même principe que la maquette : à chaque tick, le point le
// plus ancien sort et un nouveau point aléatoire entre.
//
// CONCEPT RUST : VecDeque
// - push_back / pop_front en O(1) : idéal pour une fenêtre glissante
// ============================================================================

use std::collections::VecDeque;

use rand::Rng;

/// Nombre de points de la fenêtre (20 dans la maquette)
pub const SERIES_LEN: usize = 20;

/// Série glissante de valeurs aléatoires
#[derive(Debug, Clone)]
pub struct RandomSeries {
    points: VecDeque<f64>,
    /// Abscisse du prochain point (croît indéfiniment)
    next_x: u64,
}

impl RandomSeries {
    /// Crée une série pleine de SERIES_LEN points aléatoires
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let points = (0..SERIES_LEN).map(|_| rng.random::<f64>() * 100.0).collect();
        Self {
            points,
            next_x: SERIES_LEN as u64,
        }
    }

    /// Fait glisser la fenêtre d'un point
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        self.points.pop_front();
        self.points.push_back(rng.random::<f64>() * 100.0);
        self.next_x += 1;
    }

    /// Régénère tous les points (les graphes du dashboard re-tirent la
    /// série complète à chaque rafraîchissement, comme la maquette)
    pub fn resample<R: Rng>(&mut self, rng: &mut R) {
        for point in self.points.iter_mut() {
            *point = rng.random::<f64>() * 100.0;
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points (x, y) pour le widget Chart de ratatui
    pub fn chart_points(&self) -> Vec<(f64, f64)> {
        let first_x = self.next_x - self.points.len() as u64;
        self.points
            .iter()
            .enumerate()
            .map(|(i, &y)| ((first_x + i as u64) as f64, y))
            .collect()
    }

    /// Bornes de l'axe X (première et dernière abscisse)
    pub fn x_bounds(&self) -> [f64; 2] {
        let first_x = self.next_x - self.points.len() as u64;
        [first_x as f64, (self.next_x.saturating_sub(1)) as f64]
    }

    /// Valeurs entières pour le widget Sparkline de ratatui
    pub fn sparkline_data(&self) -> Vec<u64> {
        self.points.iter().map(|&y| y.round() as u64).collect()
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
    fn test_new_series_is_full() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = RandomSeries::new(&mut rng);
        assert_eq!(series.len(), SERIES_LEN);
        assert!(series.chart_points().iter().all(|&(_, y)| (0.0..100.0).contains(&y)));
    }

    #[test]
    fn test_advance_keeps_window_size_and_shifts_x() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut series = RandomSeries::new(&mut rng);

        let before = series.x_bounds();
        series.advance(&mut rng);

        assert_eq!(series.len(), SERIES_LEN);
        let after = series.x_bounds();
        assert_eq!(after[0], before[0] + 1.0);
        assert_eq!(after[1], before[1] + 1.0);
    }

    #[test]
    fn test_sparkline_data_matches_window() {
        let mut rng = StdRng::seed_from_u64(3);
        let series = RandomSeries::new(&mut rng);
        let data = series.sparkline_data();
        assert_eq!(data.len(), SERIES_LEN);
        assert!(data.iter().all(|&v| v <= 100));
    }
}
