use guidex_domain::constants::{ALL_INTERFACES, GUID_DASHES, GUID_LEN, INTERFACE_SECTION};

#[test]
fn database_format_constants() {
    assert_eq!(INTERFACE_SECTION, "All Interfaces");
    assert_eq!(ALL_INTERFACES, INTERFACE_SECTION);
    assert_eq!(GUID_LEN, "00000000-0000-0000-C000-000000000046".len());
    assert_eq!(GUID_DASHES, [8, 13, 18, 23]);
}
