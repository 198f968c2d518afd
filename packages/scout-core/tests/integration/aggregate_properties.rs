//! Property-based tests for scan aggregation
//!
//! Invariants that hold for any file set:
//! - stats sum to the issue count
//! - score is within 0..=100 and matches the half-up formula
//! - one progress update per file, non-decreasing, ending at 100
//! - issues are ordered by file path
//! - re-running yields an identical result

use proptest::prelude::*;
use scout_core::config::ScanConfig;
use scout_core::{ScanAggregator, SourceFile, StatusLevel};

use crate::common::sample_catalog;

const SNIPPETS: &[(&str, &str)] = &[
    ("js", "structuredClone(a);\n"),
    ("ts", "const r: ResizeObserver = new ResizeObserver(f);\n"),
    ("jsx", "export default () => <p>{fetch('/x')}</p>;\n"),
    ("css", ".a { container-type: size; text-wrap: balance; }\n"),
    ("css", "a { gap: 1px }\n"),
    ("html", "<search popover><dialog></dialog></search>\n"),
    ("md", "structuredClone\n"),
    ("txt", ""),
];

fn file_strategy() -> impl Strategy<Value = SourceFile> {
    (0..SNIPPETS.len(), "[a-z]{1,6}").prop_map(|(i, stem)| {
        let (ext, body) = SNIPPETS[i];
        SourceFile::new(format!("{}.{}", stem, ext), body)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn aggregate_invariants(files in prop::collection::vec(file_strategy(), 0..12)) {
        let aggregator = ScanAggregator::new(&sample_catalog(), &ScanConfig::default());
        let mut progress = Vec::new();
        let result = aggregator.run_scan(&files, |p| progress.push(p));

        let stats = result.stats();
        prop_assert_eq!(stats.total(), result.issues().len());
        for status in StatusLevel::ALL {
            let counted = result.issues().iter().filter(|i| i.status == status).count();
            prop_assert_eq!(stats.get(status), counted);
        }

        prop_assert!(result.score() <= 100);
        let total = stats.total();
        let expected = if total == 0 {
            100
        } else {
            (200 * stats.acceptable() + total) / (2 * total)
        };
        prop_assert_eq!(result.score() as usize, expected);

        if files.is_empty() {
            prop_assert_eq!(progress, vec![100u8]);
        } else {
            prop_assert_eq!(progress.len(), files.len());
            prop_assert!(progress.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(progress.last().copied(), Some(100u8));
        }

        prop_assert!(result.issues().windows(2).all(|w| w[0].file <= w[1].file));

        let again = aggregator.run_scan(&files, |_| {});
        prop_assert_eq!(again, result);
    }
}
