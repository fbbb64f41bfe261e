use crate::{
    ledger::ExpenseLedger,
    model::{ParticipantId, ParticipantShare, SettlementReport},
    registry::ParticipantRegistry,
};
use fxhash::FxHashSet;

/// Settlement calculation service.
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Derive the settlement report for one round.
    ///
    /// Pure function over the ledger and the attendance/drinker sets.
    /// Food and bath are shared equally among attendees, alcohol equally
    /// among drinkers. Empty sets produce zero shares, never a division
    /// error.
    pub fn calculate(
        registry: &ParticipantRegistry,
        ledger: &ExpenseLedger,
        attendance: &FxHashSet<ParticipantId>,
        drinkers: &FxHashSet<ParticipantId>,
    ) -> SettlementReport {
        let attendees: Vec<ParticipantId> = registry
            .list()
            .map(|p| p.id)
            .filter(|id| attendance.contains(id))
            .collect();

        let total_food: f64 = attendees.iter().map(|&id| ledger.entry(id).food).sum();
        let total_alcohol: f64 = attendees
            .iter()
            .filter(|id| drinkers.contains(id))
            .map(|&id| ledger.entry(id).alcohol)
            .sum();
        let bath_cost = ledger.bath_cost();

        let per_person_bath = Self::split(bath_cost, attendees.len());
        let per_person_food = Self::split(total_food, attendees.len());
        let per_person_alcohol = Self::split(total_alcohol, drinkers.len());

        let shares = attendees
            .iter()
            .map(|&id| {
                let paid = ledger.total_paid_by(id);
                let alcohol_share = if drinkers.contains(&id) {
                    per_person_alcohol
                } else {
                    0.0
                };
                ParticipantShare {
                    id,
                    paid,
                    owed: per_person_bath + per_person_food - paid + alcohol_share,
                }
            })
            .collect();

        SettlementReport {
            total_spent: total_food + total_alcohol + bath_cost,
            total_food,
            total_alcohol,
            bath_cost,
            per_person_bath,
            per_person_food,
            per_person_alcohol,
            shares,
        }
    }

    fn split(total: f64, count: usize) -> f64 {
        if count == 0 { 0.0 } else { total / count as f64 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, PaidCategory};
    use rstest::{fixture, rstest};

    struct Round {
        registry: ParticipantRegistry,
        ledger: ExpenseLedger,
        attendance: FxHashSet<ParticipantId>,
        drinkers: FxHashSet<ParticipantId>,
    }

    impl Round {
        fn report(&self) -> SettlementReport {
            SettlementCalculator::calculate(
                &self.registry,
                &self.ledger,
                &self.attendance,
                &self.drinkers,
            )
        }
    }

    fn amount(value: f64) -> Amount {
        Amount::new(value).unwrap()
    }

    #[fixture]
    fn alice_and_bob() -> Round {
        let mut registry = ParticipantRegistry::new();
        let alice = registry.register("Alice").unwrap().id;
        let bob = registry.register("Bob").unwrap().id;

        let mut ledger = ExpenseLedger::new();
        ledger.set_bath_cost(amount(200.0));
        ledger.add_expense(alice, PaidCategory::Food, amount(100.0));
        ledger.add_expense(bob, PaidCategory::Alcohol, amount(50.0));

        Round {
            registry,
            ledger,
            attendance: FxHashSet::from_iter([alice, bob]),
            drinkers: FxHashSet::from_iter([alice, bob]),
        }
    }

    #[rstest]
    fn worked_example_matches_hand_calculation(alice_and_bob: Round) {
        let report = alice_and_bob.report();

        assert_eq!(report.total_spent, 350.0);
        assert_eq!(report.total_food, 100.0);
        assert_eq!(report.total_alcohol, 50.0);
        assert_eq!(report.bath_cost, 200.0);
        assert_eq!(report.per_person_bath, 100.0);
        assert_eq!(report.per_person_food, 50.0);
        assert_eq!(report.per_person_alcohol, 25.0);

        // Alice: 100 + 50 - 100 + 25; Bob: 100 + 50 - 50 + 25.
        let [alice, bob] = report.shares[..] else {
            panic!("expected two shares");
        };
        assert_eq!((alice.paid, alice.owed), (100.0, 75.0));
        assert_eq!((bob.paid, bob.owed), (50.0, 125.0));
    }

    #[rstest]
    fn non_drinker_skips_the_alcohol_pool(mut alice_and_bob: Round) {
        let alice = alice_and_bob.registry.list().next().unwrap().id;
        alice_and_bob.drinkers.remove(&alice);

        let report = alice_and_bob.report();

        // Bob is the only drinker and carries the whole pool.
        assert_eq!(report.per_person_alcohol, 50.0);
        let [alice_share, bob_share] = report.shares[..] else {
            panic!("expected two shares");
        };
        assert_eq!(alice_share.owed, 100.0 + 50.0 - 100.0);
        assert_eq!(bob_share.owed, 100.0 + 50.0 - 50.0 + 50.0);
    }

    #[test]
    fn empty_attendance_guards_division() {
        let mut registry = ParticipantRegistry::new();
        registry.register("Alice").unwrap();
        let mut ledger = ExpenseLedger::new();
        ledger.set_bath_cost(amount(200.0));

        let report = SettlementCalculator::calculate(
            &registry,
            &ledger,
            &FxHashSet::default(),
            &FxHashSet::default(),
        );

        assert_eq!(report.per_person_bath, 0.0);
        assert_eq!(report.per_person_food, 0.0);
        assert_eq!(report.per_person_alcohol, 0.0);
        assert!(report.shares.is_empty());
    }

    #[rstest]
    fn empty_drinker_set_zeroes_only_the_alcohol_share(mut alice_and_bob: Round) {
        alice_and_bob.drinkers.clear();

        let report = alice_and_bob.report();

        assert_eq!(report.per_person_alcohol, 0.0);
        assert_eq!(report.per_person_bath, 100.0);
        // Alcohol recorded by a non-drinker attendee is outside the shared
        // pools, so the round is not closed and owed sums need not cancel.
        assert_eq!(report.total_alcohol, 0.0);
    }

    #[rstest]
    fn closed_round_is_zero_sum(alice_and_bob: Round) {
        let report = alice_and_bob.report();

        let paid: f64 = report.shares.iter().map(|s| s.paid).sum();
        assert_eq!(paid, report.total_food + report.total_alcohol);

        let owed: f64 = report.shares.iter().map(|s| s.owed).sum();
        // Everyone's owed amounts cancel against the bath cost pool.
        assert!((owed - report.bath_cost).abs() < 1e-9);
    }

    #[test]
    fn shares_follow_registration_order() {
        let mut registry = ParticipantRegistry::new();
        let carol = registry.register("Carol").unwrap().id;
        let alice = registry.register("Alice").unwrap().id;
        let bob = registry.register("Bob").unwrap().id;

        let ledger = ExpenseLedger::new();
        let attendance = FxHashSet::from_iter([alice, bob, carol]);

        let report =
            SettlementCalculator::calculate(&registry, &ledger, &attendance, &FxHashSet::default());

        let order: Vec<ParticipantId> = report.shares.iter().map(|s| s.id).collect();
        assert_eq!(order, [carol, alice, bob]);
    }

    #[test]
    fn non_attendee_expenses_are_excluded() {
        let mut registry = ParticipantRegistry::new();
        let alice = registry.register("Alice").unwrap().id;
        let bob = registry.register("Bob").unwrap().id;

        let mut ledger = ExpenseLedger::new();
        ledger.add_expense(alice, PaidCategory::Food, amount(100.0));
        ledger.add_expense(bob, PaidCategory::Food, amount(40.0));

        let attendance = FxHashSet::from_iter([alice]);
        let report =
            SettlementCalculator::calculate(&registry, &ledger, &attendance, &FxHashSet::default());

        assert_eq!(report.total_food, 100.0);
        assert_eq!(report.shares.len(), 1);
    }
}
