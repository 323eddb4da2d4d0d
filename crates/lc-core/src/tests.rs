//! Unit tests for lc-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(4);
        assert_eq!(id.index(), 4);
        assert_eq!(AgentId::try_from(4usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(2).to_string(), "AgentId(2)");
    }
}

#[cfg(test)]
mod levels {
    use crate::{Level, SimConfig, base_speed};

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(Level::clamped(-7), Level::MIN);
        assert_eq!(Level::clamped(0), Level::MIN);
        assert_eq!(Level::clamped(3).get(), 3);
        assert_eq!(Level::clamped(6), Level::MAX);
        assert_eq!(Level::clamped(i64::MAX), Level::MAX);
    }

    #[test]
    fn raw_input_truncates_and_defaults() {
        assert_eq!(Level::from_input(2.9).get(), 2);
        assert_eq!(Level::from_input(f64::NAN), Level::MIN);
        assert_eq!(Level::from_input(f64::INFINITY), Level::MAX);
        assert_eq!(Level::from_input(f64::NEG_INFINITY), Level::MIN);
        assert_eq!(Level::from_input(0.4), Level::MIN);
    }

    #[test]
    fn speed_curve_matches_table() {
        let speeds: Vec<f64> = (1..=5).map(|k| base_speed(Level::clamped(k))).collect();
        assert_eq!(speeds, vec![3.0, 5.0, 8.0, 12.0, 17.0]);
    }

    #[test]
    fn speed_curve_strictly_increasing() {
        for k in 1..5 {
            assert!(
                base_speed(Level::clamped(k + 1)) > base_speed(Level::clamped(k)),
                "level {} not faster than {}",
                k + 1,
                k
            );
        }
    }

    #[test]
    fn config_defaults_to_middle() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.agent_count.get(), 3);
        assert_eq!(cfg.speed_level.get(), 3);
        assert_eq!(cfg.size_level.get(), 3);
        assert_eq!(cfg.base_speed(), 8.0);
    }

    #[test]
    fn marker_diameter() {
        assert_eq!(SimConfig::new(1, 1, 1).marker_diameter_px(), 9);
        assert_eq!(SimConfig::new(1, 1, 9).marker_diameter_px(), 33);
    }
}

#[cfg(test)]
mod geo {
    use crate::geo::wrap_coord;
    use crate::{CoreError, Field, Point};

    #[test]
    fn rejects_degenerate_fields() {
        assert!(matches!(Field::new(0.0, 10.0), Err(CoreError::InvalidField { .. })));
        assert!(Field::new(10.0, -1.0).is_err());
        assert!(Field::new(f64::NAN, 10.0).is_err());
        assert!(Field::new(10.0, f64::INFINITY).is_err());
        assert!(matches!(
            Field::from_viewport(0.0, 0.0),
            Err(CoreError::InvalidViewport { .. })
        ));
    }

    #[test]
    fn viewport_scales_by_one_point_two() {
        let field = Field::from_viewport(1000.0, 500.0).unwrap();
        assert!((field.width() - 1200.0).abs() < 1e-9);
        assert!((field.height() - 600.0).abs() < 1e-9);
    }

    #[test]
    fn wrap_handles_multiple_overshoots() {
        let field = Field::new(100.0, 50.0).unwrap();
        let p = field.wrap(Point::new(-350.0, 1_234.5));
        assert!(field.contains(p), "{p}");
        assert!((p.x - 50.0).abs() < 1e-9);
        assert!((p.y - 34.5).abs() < 1e-9);
    }

    #[test]
    fn wrap_of_tiny_negative_stays_below_extent() {
        let v = wrap_coord(-1e-20, 100.0);
        assert!((0.0..100.0).contains(&v), "got {v}");
    }

    #[test]
    fn wrap_is_identity_inside() {
        let field = Field::new(100.0, 100.0).unwrap();
        let p = Point::new(12.5, 99.0);
        assert_eq!(field.wrap(p), p);
    }

    #[test]
    fn edge_detection() {
        let field = Field::new(500.0, 500.0).unwrap();
        assert!(field.near_edge(Point::new(10.0, 250.0), 50.0));
        assert!(field.near_edge(Point::new(250.0, 480.0), 50.0));
        assert!(!field.near_edge(Point::new(250.0, 250.0), 50.0));
    }

    #[test]
    fn bearing_and_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-12);
        let up = Point::new(0.0, 1.0);
        assert!((a.bearing_to(up) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}

#[cfg(test)]
mod time {
    use crate::FrameClock;

    #[test]
    fn first_frame_has_zero_delta() {
        let mut clock = FrameClock::new();
        let f = clock.advance(1_000.0);
        assert_eq!(f.frame, 0);
        assert_eq!(f.delta_millis, 0.0);
        assert!((f.secs() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn irregular_deltas() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        assert_eq!(clock.advance(16.0).delta_millis, 16.0);
        assert_eq!(clock.advance(50.0).delta_millis, 34.0);
        assert_eq!(clock.frames(), 3);
        assert_eq!(clock.elapsed_millis(), 50.0);
    }

    #[test]
    fn backwards_clock_clamps_delta() {
        let mut clock = FrameClock::new();
        clock.advance(100.0);
        let f = clock.advance(90.0);
        assert_eq!(f.delta_millis, 0.0);
        assert_eq!(clock.last_millis(), Some(90.0));
    }

    #[test]
    fn mean_fps() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.mean_fps(), None);
        for i in 0..=60 {
            clock.advance(i as f64 * 1000.0 / 60.0);
        }
        let fps = clock.mean_fps().unwrap();
        assert!((fps - 60.0).abs() < 1e-6, "got {fps}");
    }
}

#[cfg(test)]
mod rng {
    use crate::{Field, RandomSource, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.unit(), r2.unit());
        }
    }

    #[test]
    fn unit_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.unit();
            assert!((0.0..1.0).contains(&v));
            let s = rng.symmetric(0.2);
            assert!((-0.2..0.2).contains(&s));
        }
    }

    #[test]
    fn random_points_inside_field() {
        let mut rng = SimRng::new(7);
        let field = Field::new(320.0, 240.0).unwrap();
        for _ in 0..1000 {
            assert!(field.contains(field.random_point(&mut rng)));
        }
    }

    #[test]
    fn borrowed_source_forwards() {
        let mut a = SimRng::new(3);
        let mut b = SimRng::new(3);
        fn draw<R: RandomSource>(mut r: R) -> f64 {
            r.unit()
        }
        assert_eq!(a.unit(), draw(&mut b));
    }
}
