use guidex_lookup::InterfaceRegistry;
use proptest::prelude::*;

fn registry() -> InterfaceRegistry {
    InterfaceRegistry::from_entries([
        ("{GUID-1}", "Ethernet"),
        ("00000000-0000-0000-C000-000000000046", "IUnknown"),
    ])
}

#[test]
fn documented_example() {
    let registry = InterfaceRegistry::from_entries([("{GUID-1}", "Ethernet")]);
    assert_eq!(registry.interface_name("{guid-1}"), "Ethernet");
    assert_eq!(registry.interface_name("{unknown}"), "{unknown}");
}

proptest! {
    #[test]
    fn absent_identifiers_are_returned_unchanged(guid in "[0-9a-fA-F{}-]{0,40}") {
        let registry = registry();
        prop_assume!(registry.name_of(&guid).is_none());
        prop_assert_eq!(registry.interface_name(&guid), guid);
    }

    #[test]
    fn present_identifiers_match_in_any_case(mask in proptest::collection::vec(any::<bool>(), 36)) {
        let guid: String = "00000000-0000-0000-C000-000000000046"
            .chars()
            .zip(mask)
            .map(|(c, lower)| if lower { c.to_ascii_lowercase() } else { c })
            .collect();

        prop_assert_eq!(registry().interface_name(&guid), "IUnknown");
    }
}
