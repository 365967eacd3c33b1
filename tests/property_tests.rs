//! Property-based tests for rust_leveled_logger using proptest

use proptest::prelude::*;
use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{format_parts, LogRecord};
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Severe),
        Just(LogLevel::Warning),
        Just(LogLevel::Info),
        Just(LogLevel::Fine),
        Just(LogLevel::Finer),
        Just(LogLevel::Finest),
    ]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Rank and name conversions roundtrip
    #[test]
    fn test_log_level_roundtrip(level in any_level()) {
        prop_assert_eq!(LogLevel::from_rank(level.rank()), Some(level));
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(parsed, level);
        let parsed: LogLevel = level.method_name().parse().unwrap();
        prop_assert_eq!(parsed, level);
    }

    /// Ordering follows rank: lower rank sorts first
    #[test]
    fn test_log_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, a.rank() <= b.rank());
        prop_assert_eq!(a < b, a.rank() < b.rank());
    }

    /// A level set built from arbitrary levels contains exactly those levels
    #[test]
    fn test_level_set_membership(levels in prop::collection::vec(any_level(), 0..6)) {
        let set: LevelSet = levels.iter().copied().collect();
        for level in LogLevel::ALL {
            prop_assert_eq!(set.contains(level), levels.contains(&level));
        }
    }
}

// ============================================================================
// Threshold Tests
// ============================================================================

proptest! {
    /// With threshold = L2, calls at L1 <= L2 are accepted and the rest rejected
    #[test]
    fn test_threshold_acceptance(threshold in any_level(), call in any_level()) {
        let logger = Logger::builder()
            .level(threshold)
            .streams(StreamTable::new())
            .build()
            .unwrap();
        prop_assert_eq!(logger.is_enabled(call), call.rank() <= threshold.rank());
    }

    /// Non-integer values never replace the threshold
    #[test]
    fn test_fractional_threshold_rejected(
        start in 0i64..10,
        whole in -100i64..100,
        frac in 0.01f64..0.99,
    ) {
        let logger = Logger::builder()
            .level(start)
            .streams(StreamTable::new())
            .build()
            .unwrap();
        let value = whole as f64 + frac;
        prop_assert!(logger.set_level(value).is_err());
        prop_assert!(logger.set_level(value.to_string()).is_err());
        prop_assert_eq!(logger.level(), start);
    }

    /// Integer values of any kind are stored as-is
    #[test]
    fn test_integer_threshold_accepted(value in -1000i64..1000) {
        let logger = Logger::builder().streams(StreamTable::new()).build().unwrap();
        logger.set_level(value).unwrap();
        prop_assert_eq!(logger.level(), value);
        logger.set_level(value as f64).unwrap();
        prop_assert_eq!(logger.level(), value);
        logger.set_level(value.to_string()).unwrap();
        prop_assert_eq!(logger.level(), value);
    }
}

// ============================================================================
// Formatting Tests
// ============================================================================

proptest! {
    /// Parts without directives are joined with single spaces
    #[test]
    fn test_join_without_directives(words in prop::collection::vec("[a-z0-9 ]{0,8}", 1..6)) {
        let parts: Vec<Arg> = words.iter().map(|w| Arg::from(w.as_str())).collect();
        prop_assert_eq!(format_parts(&parts), words.join(" "));
    }

    /// `%d` renders any integer in plain decimal
    #[test]
    fn test_percent_d_integers(n in any::<i64>()) {
        let out = format_parts(&[Arg::from("n=%d"), Arg::from(n)]);
        prop_assert_eq!(out, format!("n={}", n));
    }

    /// One line per newline-separated segment, first marked `***`
    #[test]
    fn test_line_count_and_markers(segments in prop::collection::vec("[a-z ]{0,10}", 1..8)) {
        let message = segments.join("\n");
        let record = LogRecord::new(LogLevel::Info, 3, vec![Arg::from(message)]);
        let lines = LineLayout::new(TimestampZone::Utc, false).render(&record, Some("p"));

        prop_assert_eq!(lines.len(), segments.len());
        for (idx, (line, segment)) in lines.iter().zip(&segments).enumerate() {
            let marker = if idx == 0 { "***" } else { "   " };
            let expected = format!("[p][INFO] {} {}", marker, segment);
            prop_assert_eq!(&line[21..], expected.as_str());
        }
    }
}

// ============================================================================
// Dispatch Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Each stream receives exactly the lines whose level it accepts
    #[test]
    fn test_routing_matches_level_sets(
        accepted_a in prop::collection::vec(any_level(), 0..6),
        accepted_b in prop::collection::vec(any_level(), 0..6),
        calls in prop::collection::vec(any_level(), 0..20),
    ) {
        let dispatcher = Arc::new(Dispatcher::new().unwrap());
        let a = MemoryStream::named("a");
        let b = MemoryStream::named("b");
        let set_a: LevelSet = accepted_a.into_iter().collect();
        let set_b: LevelSet = accepted_b.into_iter().collect();
        let logger = Logger::builder()
            .level(LogLevel::Finest)
            .stream(a.clone(), set_a)
            .stream(b.clone(), set_b)
            .dispatcher(dispatcher)
            .build()
            .unwrap();

        for level in &calls {
            logger.log(*level, ["x\ny"]);
        }
        logger.flush().unwrap();

        let expected_a = calls.iter().filter(|l| set_a.contains(**l)).count() * 2;
        let expected_b = calls.iter().filter(|l| set_b.contains(**l)).count() * 2;
        prop_assert_eq!(a.len(), expected_a);
        prop_assert_eq!(b.len(), expected_b);
    }
}
