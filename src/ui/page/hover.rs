// SPDX-License-Identifier: MPL-2.0
//! Hover lift of service and work cards.

use crate::ui::animation::Tween;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Duration of the lift and of the drop back.
const LIFT_TRANSITION: Duration = Duration::from_millis(300);

/// A card that lifts while hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    Service(usize),
    Work(usize),
}

/// Lift progress per card: 0.0 resting, 1.0 fully lifted.
#[derive(Debug, Clone, Default)]
pub struct CardLift {
    cards: HashMap<Card, Tween>,
}

impl CardLift {
    pub fn set_hovered(&mut self, card: Card, hovered: bool, now: Instant) {
        let target = if hovered { 1.0 } else { 0.0 };
        let tween = self
            .cards
            .get(&card)
            .map_or_else(|| Tween::settled(0.0, now), |tween| *tween)
            .retarget(target, now, LIFT_TRANSITION);
        self.cards.insert(card, tween);
    }

    #[must_use]
    pub fn lift(&self, card: Card, now: Instant) -> f32 {
        self.cards.get(&card).map_or(0.0, |tween| tween.value_at(now))
    }

    #[must_use]
    pub fn is_hovered(&self, card: Card) -> bool {
        self.cards.get(&card).is_some_and(|tween| tween.target() > 0.0)
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.cards.values().any(|tween| !tween.is_finished(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hovered_card_lifts_and_drops_back() {
        let mut lift = CardLift::default();
        let now = Instant::now();

        lift.set_hovered(Card::Service(1), true, now);
        assert!(lift.is_hovered(Card::Service(1)));
        assert_eq!(lift.lift(Card::Service(1), now + LIFT_TRANSITION), 1.0);

        let later = now + LIFT_TRANSITION * 2;
        lift.set_hovered(Card::Service(1), false, later);
        assert!(!lift.is_hovered(Card::Service(1)));
        assert_eq!(lift.lift(Card::Service(1), later + LIFT_TRANSITION), 0.0);
    }

    #[test]
    fn other_cards_stay_put() {
        let mut lift = CardLift::default();
        let now = Instant::now();

        lift.set_hovered(Card::Work(0), true, now);

        assert_eq!(lift.lift(Card::Work(1), now + LIFT_TRANSITION), 0.0);
        assert!(lift.is_animating(now));
        assert!(!lift.is_animating(now + LIFT_TRANSITION));
    }
}
