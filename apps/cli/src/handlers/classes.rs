use anyhow::{Context, Result};
use guidex::domain::config::{ExportFormat, Settings};
use guidex::scanner::ClassExporter;
use guidex::scanner::activation::{read_activatable_classes, windows_build};
use std::path::PathBuf;

/// Applies command-line overrides on top of the loaded export settings.
pub fn apply(settings: &mut Settings, out: Option<PathBuf>, formats: Vec<ExportFormat>) {
    if let Some(out) = out {
        settings.export.output_dir = out;
    }
    if !formats.is_empty() {
        settings.export.formats = formats;
    }
}

/// Reads the activatable classes from the registry and writes them in every
/// configured format.
pub fn classes(settings: &Settings, build: Option<u32>) -> Result<()> {
    let classes = read_activatable_classes().context("Failed to read activatable classes")?;
    let build = match build {
        Some(build) => build,
        None => windows_build().context("Failed to read the Windows build number")?,
    };

    let written = ClassExporter::new(&settings.export.output_dir, build)
        .write(&classes, &settings.export.formats)
        .context("Failed to export activatable classes")?;

    for path in &written {
        println!("{}", path.display());
    }
    println!("{} activatable classes in {} DLLs", classes.len(), classes.dll_count());

    Ok(())
}
