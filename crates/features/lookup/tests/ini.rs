use guidex_lookup::ini::{IniCatalog, interface_name};
use guidex_lookup::LookupError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const DATABASE: &str = "\
; All Interfaces - Windows GUID Database
; 3 interfaces automatically extracted from the Windows 11 (Build 22000) SDK header files

[All Interfaces]
00000035-0000-0000-C000-000000000046 = IActivationFactory
AF86E2E0-B12D-4C6A-9C5A-D7AA65101E90 = IInspectable

; The following GUID is ambiguous for CLSID_Proxy and IKsProxy
17CCA71B-ECD7-11D0-B908-00A0C9223196 = CLSID_Proxy
0d82bd8d-fe62-5d67-a7b9-7886dd75bc4e = ABI.Windows.Foundation.Collections.IVector<ABI.Windows.Foundation.Uri*>
";

fn database(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("interfaces.ini");
    fs::write(&path, contents).expect("write ini");
    (dir, path)
}

#[test]
fn known_guid_resolves_in_any_case() {
    let (_dir, path) = database(DATABASE);

    assert_eq!(interface_name("00000035-0000-0000-C000-000000000046", &path), "IActivationFactory");
    assert_eq!(interface_name("af86e2e0-b12d-4c6a-9c5a-d7aa65101e90", &path), "IInspectable");
    assert_eq!(
        interface_name("0D82BD8D-FE62-5D67-A7B9-7886DD75BC4E", &path),
        "ABI.Windows.Foundation.Collections.IVector<ABI.Windows.Foundation.Uri*>"
    );
}

#[test]
fn unknown_guid_is_returned_unchanged() {
    let (_dir, path) = database(DATABASE);

    assert_eq!(interface_name("{unknown}", &path), "{unknown}");
    assert_eq!(
        interface_name("00000000-0000-0000-C000-000000000046", &path),
        "00000000-0000-0000-C000-000000000046"
    );
}

#[test]
fn missing_file_is_identity() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.ini");

    assert_eq!(interface_name("00000035-0000-0000-C000-000000000046", &path), "00000035-0000-0000-C000-000000000046");
    assert!(matches!(IniCatalog::load(&path), Err(LookupError::Ini { context: Some(_), .. })));
}

#[test]
fn missing_section_is_identity() {
    let (_dir, path) = database("[WinRT Classes]\nClass_1 = Windows.Foundation.Uri\n");

    assert_eq!(interface_name("Class_1", &path), "Class_1");
    assert!(matches!(IniCatalog::load(&path), Err(LookupError::MissingSection { .. })));
}

#[test]
fn catalog_reads_once_and_serves_many() {
    let (_dir, path) = database(DATABASE);
    let catalog = IniCatalog::load(&path).expect("load catalog");

    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.path(), path.as_path());
    assert_eq!(catalog.name_of("17cca71b-ecd7-11d0-b908-00a0c9223196"), Some("CLSID_Proxy"));

    fs::remove_file(&path).expect("remove ini");
    assert_eq!(catalog.interface_name("00000035-0000-0000-c000-000000000046"), "IActivationFactory");
}

#[test]
fn first_entry_of_a_repeated_guid_wins() {
    let (_dir, path) = database(
        "[All Interfaces]\n\n; The following GUID is ambiguous for IBar and IFoo\nC1D432BA-C824-4452-A7FD-512BC3BBE9A1 = IBar\nc1d432ba-c824-4452-a7fd-512bc3bbe9a1 = IFoo\n",
    );

    assert_eq!(interface_name("C1D432BA-C824-4452-A7FD-512BC3BBE9A1", &path), "IBar");
    assert_eq!(IniCatalog::load(&path).map(|catalog| catalog.len()).ok(), Some(1));
}

#[test]
fn section_name_ignores_case() {
    let (_dir, path) = database("[all interfaces]\n00000035-0000-0000-C000-000000000046 = IActivationFactory\n");

    assert_eq!(interface_name("00000035-0000-0000-c000-000000000046", &path), "IActivationFactory");
}
