//! Pack command implementation
//!
//! Collects every input model's dependencies and writes them into one zip
//! archive or bundle folder. Nothing is written unless every model, material
//! and texture was found, and a dry run fails the same way.

use console::{Style, user_attended_stderr};

use crate::bundle::BundleOutput;
use crate::cli::PackArgs;
use crate::collector::{collect_all, verify_sources};
use crate::commands::helpers::{discover_models, model_label, print_manifests, total_files};
use crate::error::Result;
use crate::progress::ProgressDisplay;

/// Run pack command
pub fn run(args: PackArgs) -> Result<()> {
    let models = discover_models(&args.models)?;
    let mut output = BundleOutput::new(args.format, &args.output, &args.name)?;

    let model_count = models.len() as u64;
    let mut progress = if args.dry_run || !user_attended_stderr() {
        ProgressDisplay::hidden(model_count)
    } else {
        ProgressDisplay::new(model_count)
    };

    let bundles = collect_all(&models, usize::from(args.jobs), |path| {
        progress.inc_model(&model_label(path));
    })
    .inspect_err(|_| progress.abandon())?;

    let file_count = total_files(&bundles);
    if args.dry_run {
        verify_sources(&bundles)?;
        print_manifests(&bundles);
        println!(
            "Dry run: {} files from {} model(s) would be bundled into {}",
            file_count,
            models.len(),
            output.target().display()
        );
        return Ok(());
    }

    progress.init_file_progress(file_count as u64);
    let report = output
        .write(&bundles, |file| progress.update_file(file))
        .inspect_err(|_| progress.abandon())?;
    progress.finish();

    println!(
        "{} {} model(s) into {}",
        Style::new().bold().green().apply_to("Bundled"),
        models.len(),
        output.target().display()
    );
    println!(
        "  {} written, {} unchanged, {} duplicate(s) skipped ({} files in bundle)",
        report.written,
        report.unchanged,
        report.duplicates,
        output.total_files()
    );

    Ok(())
}
