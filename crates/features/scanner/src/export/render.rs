use super::error::ExportError;
use crate::activation::ActivatableClasses;
use crate::catalog::{Entry, InterfaceCatalog};
use guidex_domain::config::ExportFormat;
use guidex_domain::constants::INTERFACE_SECTION;
use std::fmt::Write as FmtWrite;

// --- Templates ---

const INI_TEMPLATE: &str = include_str!("../../templates/interfaces.ini");
const XML_TEMPLATE: &str = include_str!("../../templates/interfaces.xml");
const HTML_TEMPLATE: &str = include_str!("../../templates/interfaces.htm");
const RUST_TEMPLATE: &str = include_str!("../../templates/interfaces.rs");

const CLASSES_INI_TEMPLATE: &str = include_str!("../../templates/classes.ini");
const CLASSES_XML_TEMPLATE: &str = include_str!("../../templates/classes.xml");
const CLASSES_HTML_TEMPLATE: &str = include_str!("../../templates/classes.htm");

pub(super) struct Header {
    pub(super) title: String,
    pub(super) comment: String,
}

pub(super) fn render(header: &Header, catalog: &InterfaceCatalog, format: ExportFormat) -> Result<String, ExportError> {
    let (template, body, escape): (_, _, fn(&str) -> String) = match format {
        ExportFormat::Ini => (INI_TEMPLATE, render_ini(catalog)?, str::to_owned),
        ExportFormat::Xml => (XML_TEMPLATE, render_xml(catalog)?, escape_markup),
        ExportFormat::Html => (HTML_TEMPLATE, render_html(catalog)?, escape_markup),
        ExportFormat::Rust => (RUST_TEMPLATE, render_rust(catalog)?, str::to_owned),
    };

    Ok(fill(template, header, escape, &body))
}

pub(super) fn render_classes(
    header: &Header,
    classes: &ActivatableClasses,
    format: ExportFormat,
) -> Result<String, ExportError> {
    let (template, body, escape): (_, _, fn(&str) -> String) = match format {
        ExportFormat::Ini => (CLASSES_INI_TEMPLATE, classes_ini(classes)?, str::to_owned),
        ExportFormat::Xml => (CLASSES_XML_TEMPLATE, classes_xml(classes)?, escape_markup),
        ExportFormat::Html => (CLASSES_HTML_TEMPLATE, classes_html(classes)?, escape_markup),
        ExportFormat::Rust => return Err(ExportError::from("Activatable classes have no Rust table")),
    };

    Ok(fill(template, header, escape, &body))
}

fn fill(template: &str, header: &Header, escape: fn(&str) -> String, body: &str) -> String {
    // Body last, so placeholders inside names are left alone.
    template
        .replace("{title}", &escape(&header.title))
        .replace("{comment}", &escape(&header.comment))
        .replace("{section}", INTERFACE_SECTION)
        .replace("{body}", body.trim_end_matches('\n'))
}

// --- Bodies ---

fn render_ini(catalog: &InterfaceCatalog) -> Result<String, ExportError> {
    let mut w = String::new();
    for entry in catalog.entries() {
        if let Some(note) = ambiguity_note(&entry) {
            writeln!(w)?;
            writeln!(w, "; {note}")?;
        }
        writeln!(w, "{} = {}", entry.guid, entry.name)?;
    }
    Ok(w)
}

fn render_xml(catalog: &InterfaceCatalog) -> Result<String, ExportError> {
    let mut w = String::new();
    for entry in catalog.entries() {
        write!(w, "  <Interface GUID=\"{}\" Name=\"{}\"", entry.guid, escape_markup(entry.name))?;
        if let Some(note) = ambiguity_note(&entry) {
            write!(w, " Warning=\"{}\"", escape_markup(&note))?;
        }
        writeln!(w, " />")?;
    }
    Ok(w)
}

fn render_html(catalog: &InterfaceCatalog) -> Result<String, ExportError> {
    let mut w = String::new();
    for entry in catalog.entries() {
        if let Some(note) = ambiguity_note(&entry) {
            writeln!(w, "<tr class=\"Warning\"><td colspan=\"2\">{}</td></tr>", escape_markup(&note))?;
        }
        writeln!(w, "<tr><td class=\"Guid\">{}</td><td>{}</td></tr>", entry.guid, escape_markup(entry.name))?;
    }
    Ok(w)
}

fn render_rust(catalog: &InterfaceCatalog) -> Result<String, ExportError> {
    let mut w = String::new();
    for entry in catalog.entries() {
        if let Some(note) = ambiguity_note(&entry) {
            writeln!(w, "    // {note}")?;
        }
        writeln!(w, "    ({:?}, {:?}),", entry.guid, entry.name)?;
    }
    Ok(w)
}

fn classes_ini(classes: &ActivatableClasses) -> Result<String, ExportError> {
    let mut w = String::new();
    for (dll, names) in classes.dlls() {
        writeln!(w)?;
        writeln!(w, "[{dll}]")?;
        for (index, class) in names.iter().enumerate() {
            writeln!(w, "Class_{} = {class}", index + 1)?;
        }
    }
    Ok(w)
}

fn classes_xml(classes: &ActivatableClasses) -> Result<String, ExportError> {
    let mut w = String::new();
    for (dll, names) in classes.dlls() {
        writeln!(w, "  <DLL Path=\"{}\">", escape_markup(dll))?;
        for class in names {
            writeln!(w, "    <Class Name=\"{}\" />", escape_markup(class))?;
        }
        writeln!(w, "  </DLL>")?;
    }
    Ok(w)
}

fn classes_html(classes: &ActivatableClasses) -> Result<String, ExportError> {
    let mut w = String::new();
    for (dll, names) in classes.dlls() {
        writeln!(w, "<h4>{}</h4>", escape_markup(dll))?;
        writeln!(w, "<table>")?;
        for (index, class) in names.iter().enumerate() {
            writeln!(w, "<tr><td class=\"Index\">{}</td><td>{}</td></tr>", index + 1, escape_markup(class))?;
        }
        writeln!(w, "</table>")?;
    }
    Ok(w)
}

// --- Helpers ---

fn ambiguity_note(entry: &Entry<'_>) -> Option<String> {
    entry.ambiguity.map(|names| format!("The following GUID is ambiguous for {}", names.join(" and ")))
}

fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}
