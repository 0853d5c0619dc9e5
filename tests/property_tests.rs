//! Property-based tests for tracelog using proptest

use proptest::prelude::*;
use tracelog::prelude::*;
use tracelog::sinks::MemorySink;

fn severity_strategy() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Debug),
        Just(Severity::Info),
        Just(Severity::Warn),
        Just(Severity::Error),
    ]
}

proptest! {
    /// Severity string conversions roundtrip through FromStr
    #[test]
    fn test_severity_str_roundtrip(severity in severity_strategy()) {
        let as_str = severity.to_str();
        let parsed: Severity = as_str.parse().unwrap();
        prop_assert_eq!(severity, parsed);
    }

    /// Severity ordering is consistent with numeric rank
    #[test]
    fn test_severity_ordering(
        severity1 in severity_strategy(),
        severity2 in severity_strategy(),
    ) {
        let rank1 = severity1.rank();
        let rank2 = severity2.rank();

        prop_assert_eq!(severity1 <= severity2, rank1 <= rank2);
        prop_assert_eq!(severity1 < severity2, rank1 < rank2);
        prop_assert_eq!(severity1 >= severity2, rank1 >= rank2);
        prop_assert_eq!(severity1 > severity2, rank1 > rank2);
    }

    /// A call is captured exactly when its rank reaches the threshold
    #[test]
    fn test_filtering_law(
        threshold in severity_strategy(),
        severity in severity_strategy(),
        payload in "[a-zA-Z0-9 ]{1,40}",
    ) {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .threshold(threshold)
            .sink(Box::new(sink.clone()))
            .build();

        tracelog::log!(logger, severity, "{}", payload);

        if severity.rank() >= threshold.rank() {
            prop_assert_eq!(sink.len(), 1);
            let message = sink.read_last().unwrap();
            prop_assert!(message.contains(&payload));
            prop_assert!(message.contains(severity.prefix()));
        } else {
            prop_assert!(sink.is_empty());
        }
    }

    /// Every captured line keeps the contract shape around the payload
    #[test]
    fn test_line_shape(
        severity in severity_strategy(),
        payload in "[a-zA-Z0-9 ]{1,40}",
    ) {
        let sink = MemorySink::new();
        let logger = Logger::builder().sink(Box::new(sink.clone())).build();

        tracelog::log!(logger, severity, "{}", payload);

        let message = sink.read_last().unwrap();
        let expected_tail = format!("{}  {}", severity.prefix(), payload);
        prop_assert!(message.ends_with(&expected_tail));
        prop_assert!(message.contains("property_tests."));
        prop_assert!(message.contains(" - "));
    }

    /// Parsing is case-insensitive for every severity name
    #[test]
    fn test_parse_case_insensitive(severity in severity_strategy()) {
        let lower = severity.to_str().to_lowercase();
        let upper = severity.to_str().to_uppercase();
        prop_assert_eq!(lower.parse::<Severity>().unwrap(), severity);
        prop_assert_eq!(upper.parse::<Severity>().unwrap(), severity);
    }
}
