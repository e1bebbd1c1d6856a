//! Auto-generated by `gdx scan --format rust`.
//! Do not edit by hand.
//!
//! All Interfaces - Windows GUID Database
//! 13 interfaces automatically extracted from the Windows 11 (Build 22000) SDK header files

/// `(GUID, interface name)` pairs, sorted by interface name.
pub(crate) static INTERFACES: &[(&str, &str)] = &[
    ("DE27A01F-B561-4531-A278-FD012679EF1E", "ABI.Windows.Internal.Holographic.UI.IHolographicViewPropertiesFactory"),
    ("343BAA78-E34F-466C-9FFA-81AF5CE4CD34", "ABI.Windows.Internal.Security.SmartScreen.IAppReputationServiceFactory"),
    ("3EAD2336-B073-456F-BCAF-82587EB63487", "ABI.Windows.UI.Xaml.Hosting.IXamlIslandFactory"),
    ("00000035-0000-0000-C000-000000000046", "IActivationFactory"),
    ("94EA2B94-E9CC-49E0-C0FF-EE64CA8F5B90", "IAgileObject"),
    ("00000001-0000-0000-C000-000000000046", "IClassFactory"),
    ("00020400-0000-0000-C000-000000000046", "IDispatch"),
    ("AF86E2E0-B12D-4C6A-9C5A-D7AA65101E90", "IInspectable"),
    ("00000003-0000-0000-C000-000000000046", "IMarshal"),
    ("0000000C-0000-0000-C000-000000000046", "IStream"),
    ("00000000-0000-0000-C000-000000000046", "IUnknown"),
    ("00000037-0000-0000-C000-000000000046", "IWeakReference"),
    ("00000038-0000-0000-C000-000000000046", "IWeakReferenceSource"),
];
