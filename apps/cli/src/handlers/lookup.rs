use guidex::domain::guid::strip_decoration;
use std::path::Path;

/// Prints the resolved name. Never fails: unknown GUIDs are echoed.
pub fn lookup(guid: &str, ini: Option<&Path>) {
    println!("{}", resolve(guid, ini));
}

/// Tries the GUID as typed, then without braces or quotes.
fn resolve(guid: &str, ini: Option<&Path>) -> String {
    let name = guidex::interface_name(guid, ini);
    let bare = strip_decoration(guid);
    if name != guid || bare == guid {
        return name;
    }

    let name = guidex::interface_name(bare, ini);
    if name == bare { guid.to_owned() } else { name }
}
