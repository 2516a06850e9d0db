//! Unit tests for bt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BusId, PassengerId, StopId};

    #[test]
    fn index_roundtrip() {
        let id = StopId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StopId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(BusId(0) < BusId(1));
        assert!(PassengerId(100) > PassengerId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(BusId::INVALID.0, u32::MAX);
        assert_eq!(StopId::INVALID.0, u32::MAX);
        assert_eq!(PassengerId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(BusId(7).to_string(), "BusId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::SimTime;

    #[test]
    fn arithmetic() {
        let t = SimTime::from_secs(10.0);
        assert_eq!((t + 5.0).seconds(), 15.0);
        assert_eq!(SimTime::from_secs(15.0).since(t), 5.0);
    }

    #[test]
    fn time_of_day_wraps_at_midnight() {
        let morning = SimTime::from_secs(7.0 * 3600.0);
        assert_eq!(morning.time_of_day(), 7.0 * 3600.0);
        let next_day = SimTime::from_secs(86_400.0 + 7.0 * 3600.0);
        assert_eq!(next_day.time_of_day(), 7.0 * 3600.0);
    }

    #[test]
    fn total_cmp_orders_instants() {
        let a = SimTime::from_secs(1.0);
        let b = SimTime::from_secs(2.0);
        assert_eq!(a.total_cmp(&b), std::cmp::Ordering::Less);
        assert_eq!(b.total_cmp(&a), std::cmp::Ordering::Greater);
        assert_eq!(a.total_cmp(&a), std::cmp::Ordering::Equal);
    }

    #[test]
    fn display() {
        assert_eq!(SimTime::from_secs(12.25).to_string(), "12.2s");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.uniform(0.0, 1.0), b.uniform(0.0, 1.0));
            assert_eq!(a.exp(0.013), b.exp(0.013));
            assert_eq!(a.chance(0.1), b.chance(0.1));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let draws_a: Vec<f64> = (0..10).map(|_| a.uniform(0.0, 1.0)).collect();
        let draws_b: Vec<f64> = (0..10).map(|_| b.uniform(0.0, 1.0)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn uniform_respects_bounds() {
        let mut rng = SimRng::new(7);
        for _ in 0..1_000 {
            let x = rng.uniform(0.8, 1.2);
            assert!((0.8..1.2).contains(&x), "got {x}");
        }
    }

    #[test]
    fn exp_is_nonnegative_with_plausible_mean() {
        let mut rng = SimRng::new(7);
        let n = 10_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let x = rng.exp(1.0 / 60.0);
            assert!(x >= 0.0);
            sum += x;
        }
        let mean = sum / n as f64;
        // Mean should be near 60 s; generous tolerance keeps this stable.
        assert!((mean - 60.0).abs() < 5.0, "mean {mean}");
    }

    #[test]
    fn choose_on_empty_slice_is_none() {
        let mut rng = SimRng::new(7);
        let empty: [u32; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5u32]), Some(&5));
    }
}
