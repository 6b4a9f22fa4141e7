use super::*;

#[test]
fn test_builtin_lookup_is_case_insensitive() {
    let map = RegionMap::builtin();
    assert_eq!(map.lookup("Japan"), Some(RiskRegion::Low));
    assert_eq!(map.lookup("  SRI LANKA "), Some(RiskRegion::Moderate));
    assert_eq!(map.lookup("United Arab Emirates"), Some(RiskRegion::High));
    assert_eq!(map.lookup("east timor"), Some(RiskRegion::VeryHigh));
    assert_eq!(map.lookup("atlantis"), None);
    assert_eq!(map.resolve("atlantis"), DEFAULT_REGION);
}

#[test]
fn test_builtin_lists_are_disjoint() {
    let defs = builtin_regions();
    for (i, a) in defs.iter().enumerate() {
        for b in &defs[i + 1..] {
            for country in a.countries {
                assert!(!b.countries.contains(country), "{country} listed twice");
            }
        }
    }
}

#[test]
fn test_from_entries_orders_and_normalizes() {
    let map = RegionMap::from_entries([
        (RiskRegion::VeryHigh, vec!["Freedonia".to_string()]),
        (RiskRegion::Low, vec![" Sylvania ".to_string()]),
    ]);
    assert_eq!(map.countries(RiskRegion::Low), ["sylvania".to_string()]);
    assert_eq!(map.lookup("FREEDONIA"), Some(RiskRegion::VeryHigh));
    assert!(map.countries(RiskRegion::High).is_empty());
    assert_eq!(map.resolve("japan"), RiskRegion::High);
}
