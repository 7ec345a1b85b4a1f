//! Unit tests for ts-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn orders_by_number() {
        assert!(AgentId(2) < AgentId(10));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "7");
    }
}

#[cfg(test)]
mod time {
    use crate::{ClockTime, DAY_END, SimTime, TsError};

    #[test]
    fn after_minutes_converts_to_hours() {
        let t = SimTime(8.0).after_minutes(90.0);
        assert_eq!(t, SimTime(9.5));
    }

    #[test]
    fn total_order() {
        assert!(SimTime(8.0) < SimTime(8.5));
        assert!(SimTime(23.99) < DAY_END);
        assert_eq!(SimTime(0.0).max(SimTime(3.0)), SimTime(3.0));
    }

    #[test]
    fn clock_truncates_hour_and_minute() {
        // 8.2583h = 8h 15.5min → 08:15
        let clock = SimTime(8.0 + 15.5 / 60.0).to_clock().unwrap();
        assert_eq!(clock, ClockTime { hour: 8, minute: 15 });
        assert_eq!(clock.to_string(), "08:15");
    }

    #[test]
    fn clock_zero_pads() {
        assert_eq!(SimTime(0.0).to_clock().unwrap().to_string(), "00:00");
        assert_eq!(SimTime(23.999).to_clock().unwrap().to_string(), "23:59");
    }

    #[test]
    fn clock_rejects_day_end_and_negative() {
        assert!(matches!(DAY_END.to_clock(), Err(TsError::TimeOutOfRange(_))));
        assert!(matches!(SimTime(24.05).to_clock(), Err(TsError::TimeOutOfRange(_))));
        assert!(matches!(SimTime(-0.5).to_clock(), Err(TsError::TimeOutOfRange(_))));
        assert!(SimTime(f64::NAN).to_clock().is_err());
    }
}

#[cfg(test)]
mod event {
    use crate::{AgentId, Event, EventKind, EventSource, SimTime};

    struct Countdown {
        agent: AgentId,
        left:  u32,
        hour:  f64,
    }

    impl EventSource for Countdown {
        fn agent(&self) -> AgentId {
            self.agent
        }

        fn next_event(&mut self) -> Option<Event> {
            if self.left == 0 {
                return None;
            }
            self.left -= 1;
            self.hour += 1.0;
            Some(Event::new(self.agent, EventKind::PickUp, SimTime(self.hour)))
        }
    }

    #[test]
    fn labels() {
        assert_eq!(EventKind::StartShift.label(), "start shift");
        assert_eq!(EventKind::DropOff.to_string(), "drop off");
        assert_eq!(EventKind::EndShift.as_str(), "end_shift");
    }

    #[test]
    fn boxed_source_delegates() {
        let mut src: Box<dyn EventSource> = Box::new(Countdown { agent: AgentId(3), left: 2, hour: 0.0 });
        assert_eq!(src.agent(), AgentId(3));
        assert!(src.next_event().is_some());
        assert!(src.next_event().is_some());
        assert!(src.next_event().is_none());
    }
}

#[cfg(test)]
mod shift {
    use crate::shift::DEFAULT_SHIFT_CATEGORIES;
    use crate::SimTime;

    #[test]
    fn category_materialises_shift() {
        let day = DEFAULT_SHIFT_CATEGORIES[1];
        let shift = day.shift(7.5);
        assert_eq!(shift.start, SimTime(8.0));
        assert_eq!(shift.end, SimTime(15.5));
        assert_eq!(shift.expected_trip_rate, 30.0);
        assert_eq!(shift.length_hours(), 7.5);
    }

    #[test]
    fn default_weights_sum_to_one() {
        let total: f64 = DEFAULT_SHIFT_CATEGORIES.iter().map(|c| c.weight).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod config {
    use crate::{FleetConfig, ShiftCategory, TsError};

    #[test]
    fn default_is_valid() {
        let cfg = FleetConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.day_end().hours(), 24.0);
    }

    #[test]
    fn zero_taxis_rejected() {
        let cfg = FleetConfig { taxi_count: 0, ..FleetConfig::default() };
        assert!(matches!(cfg.validate(), Err(TsError::Config(_))));
    }

    #[test]
    fn degenerate_trip_rate_rejected() {
        let cfg = FleetConfig {
            shift_categories: vec![ShiftCategory::new(8.0, 1.0, 1.0)],
            ..FleetConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_weights_rejected() {
        let cfg = FleetConfig {
            shift_categories: vec![ShiftCategory::new(8.0, 0.0, 30.0)],
            ..FleetConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_positive_day_end_rejected() {
        let cfg = FleetConfig { day_end_hours: 0.0, ..FleetConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn day_end_past_midnight_rejected() {
        for day_end in [24.01, 30.0, f64::INFINITY] {
            let cfg = FleetConfig { day_end_hours: day_end, ..FleetConfig::default() };
            assert!(matches!(cfg.validate(), Err(TsError::Config(_))), "day end {day_end}");
        }
        let cfg = FleetConfig { day_end_hours: 24.0, ..FleetConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn category_start_outside_the_clock_rejected() {
        for start in [-3.0, 24.0, 31.5, f64::NAN] {
            let cfg = FleetConfig {
                shift_categories: vec![ShiftCategory::new(start, 1.0, 15.0)],
                ..FleetConfig::default()
            };
            assert!(matches!(cfg.validate(), Err(TsError::Config(_))), "start {start}");
        }
        let cfg = FleetConfig {
            shift_categories: vec![ShiftCategory::new(23.5, 1.0, 15.0)],
            ..FleetConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn fleet_size_fits_agent_ids() {
        assert_eq!(FleetConfig::default().fleet_size().unwrap(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let cfg: FleetConfig = serde_json::from_str(r#"{ "taxi_count": 12, "seed": 7 }"#).unwrap();
        assert_eq!(cfg.taxi_count, 12);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.shift_categories.len(), 3);
        assert!(cfg.validate().is_ok());
    }
}

#[cfg(test)]
mod rng {
    use rand::distributions::Uniform;

    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn agent_rng_is_deterministic_per_agent() {
        let dist = Uniform::new(0u64, 1_000_000);
        let mut a = AgentRng::new(42, AgentId(5));
        let mut b = AgentRng::new(42, AgentId(5));
        let xs: Vec<u64> = (0..8).map(|_| a.sample(&dist)).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.sample(&dist)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn agent_rngs_differ_between_agents() {
        let dist = Uniform::new(0u64, u64::MAX);
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(1));
        assert_ne!(a.sample(&dist), b.sample(&dist));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(9);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn children_are_reproducible() {
        let dist = Uniform::new(0u64, u64::MAX);
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(1);
        assert_eq!(r1.child(3).sample(&dist), r2.child(3).sample(&dist));
    }
}
