use crate::args::ScanArgs;
use anyhow::{Context, Result};
use guidex::domain::config::{ScanSettings, Settings};
use guidex::scanner::{Exporter, SdkScanner};

/// Applies command-line overrides on top of the loaded settings.
pub fn apply(settings: &mut Settings, args: ScanArgs) {
    if let Some(build) = args.build {
        settings.scan.sdk_build = build;
        if args.sdk.is_none() {
            settings.scan.sdk_path = ScanSettings::default_sdk_path(build);
        }
    }
    if let Some(sdk) = args.sdk {
        settings.scan.sdk_path = sdk;
    }
    if args.winrt_only {
        settings.scan.only_winrt = true;
    }
    if let Some(out) = args.out {
        settings.export.output_dir = out;
    }
    if !args.formats.is_empty() {
        settings.export.formats = args.formats;
    }
}

/// Scans the SDK and writes the database in every configured format.
pub fn scan(settings: &Settings) -> Result<()> {
    let report = SdkScanner::new(settings.scan.clone())
        .scan()
        .with_context(|| format!("Failed to scan {}", settings.scan.sdk_path.display()))?;

    let written = Exporter::from_settings(settings)
        .write(&report.catalog, &settings.export.formats)
        .context("Failed to export the interface database")?;

    for path in &written {
        println!("{}", path.display());
    }
    println!(
        "{} interfaces, {} GUIDs from {} header files ({} diagnostics)",
        report.catalog.len(),
        report.catalog.guid_count(),
        report.files,
        report.diagnostics.len()
    );

    Ok(())
}
