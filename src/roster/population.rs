//! Population initialization and the roster container

use crate::types::{Player, PlayerId};

/// Build `size` players with ids `0..size` and skill `skill_base + skill_step * id`
pub fn init_players(
    size: usize,
    skill_base: i64,
    skill_step: i64,
    initial_rating: f64,
) -> Vec<Player> {
    (0..size)
        .map(|id| Player::new(id, skill_base + skill_step * id as i64, initial_rating))
        .collect()
}

/// The fixed population, held in id order for the whole run
///
/// Ranking never reorders the canonical storage: [`Roster::rank_order`]
/// returns a sorted index view instead, so `players()[i].id() == i` always.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Mutable access to two distinct players at once
    ///
    /// Returns `None` if the ids are equal or either is out of range.
    pub fn pair_mut(&mut self, a: PlayerId, b: PlayerId) -> Option<(&mut Player, &mut Player)> {
        if a == b || a >= self.players.len() || b >= self.players.len() {
            return None;
        }

        if a < b {
            let (left, right) = self.players.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.players.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }

    /// Player indices sorted ascending by rating; position is the rank
    pub fn rank_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.players.len()).collect();
        order.sort_unstable_by(|&a, &b| {
            self.players[a]
                .rating
                .total_cmp(&self.players[b].rating)
        });
        order
    }

    /// Sum of all ratings, constant under zero-sum updates
    pub fn total_rating(&self) -> f64 {
        self.players.iter().map(|p| p.rating).sum()
    }

    /// Highest-rated player
    pub fn leader(&self) -> Option<&Player> {
        self.players
            .iter()
            .max_by(|a, b| a.rating.total_cmp(&b.rating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_population_skill_spread() {
        let players = init_players(201, 800, 2, 1000.0);

        assert_eq!(players.len(), 201);
        for (i, player) in players.iter().enumerate() {
            assert_eq!(player.id(), i);
            assert_eq!(player.skill(), 800 + 2 * i as i64);
            assert_eq!(player.rating, 1000.0);
        }
        assert_eq!(players.first().unwrap().skill(), 800);
        assert_eq!(players.last().unwrap().skill(), 1200);
    }

    #[test]
    fn test_pair_mut_both_orders() {
        let mut roster = Roster::new(init_players(5, 800, 2, 1000.0));

        {
            let (a, b) = roster.pair_mut(1, 3).unwrap();
            assert_eq!((a.id(), b.id()), (1, 3));
            a.rating += 5.0;
            b.rating -= 5.0;
        }
        {
            let (a, b) = roster.pair_mut(4, 0).unwrap();
            assert_eq!((a.id(), b.id()), (4, 0));
        }

        assert_eq!(roster.get(1).unwrap().rating, 1005.0);
        assert_eq!(roster.get(3).unwrap().rating, 995.0);
        assert!(roster.pair_mut(2, 2).is_none());
        assert!(roster.pair_mut(0, 5).is_none());
    }

    #[test]
    fn test_rank_order_does_not_reorder_roster() {
        let mut players = init_players(4, 800, 2, 1000.0);
        players[0].rating = 1030.0;
        players[1].rating = 970.0;
        players[2].rating = 1010.0;
        players[3].rating = 990.0;
        let roster = Roster::new(players);

        assert_eq!(roster.rank_order(), vec![1, 3, 2, 0]);
        let ids: Vec<PlayerId> = roster.players().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(roster.leader().unwrap().id(), 0);
    }
}
