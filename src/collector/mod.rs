//! Dependency collection
//!
//! Turns model paths into the list of files a relocated model needs:
//! the model itself, one `.vmt` per material, and one `.vtf` per texture
//! reference. Per-model results are plain values; deduplication happens once,
//! after every model has been decoded.

mod manifest;

pub use manifest::{ModelDependencies, ResolvedBundle, merge};

use std::fs::File;
use std::path::Path;

use log::{debug, info, trace};
use rayon::prelude::*;

use crate::error::fs::{missing_dependency, open_failed};
use crate::error::{MdlpackError, Result};
use crate::format::mdl::MATERIALS_DIR;
use crate::format::{MaterialAsset, ModelAsset};
use crate::path_utils::{asset_source_path, join_asset_path, split_model_path, to_forward_slashes};

/// Extension appended to material references.
pub const MATERIAL_EXTENSION: &str = ".vmt";

/// Extension appended to texture references.
pub const TEXTURE_EXTENSION: &str = ".vtf";

/// Collect every file one model depends on, in discovery order, without deduplication.
///
/// Fails if the model or any of its materials cannot be read.
pub fn collect_model(model_path: &Path) -> Result<ModelDependencies> {
    info!("Loading {}", model_path.display());
    let model = ModelAsset::from_file(model_path)?;
    let (root_dir, model_file) = split_model_path(&to_forward_slashes(model_path))?;
    debug!(
        "{}: v{}, texture dir '{}'",
        model.source_path.display(),
        model.version,
        model.texture_dirs.join(", ")
    );

    let mut material_files = Vec::with_capacity(model.materials.len());
    let mut texture_files = Vec::new();
    for material in &model.materials {
        let material_file = format!("{material}{MATERIAL_EXTENSION}");
        let decoded = MaterialAsset::from_file(&asset_source_path(&root_dir, &material_file))?;
        trace!(
            "{}: {} texture references",
            decoded.source_path.display(),
            decoded.textures.len()
        );
        texture_files.extend(decoded.textures.iter().map(|texture| {
            format!(
                "{}{TEXTURE_EXTENSION}",
                join_asset_path(&[MATERIALS_DIR, texture])
            )
        }));
        material_files.push(material_file);
    }

    debug!(
        "{}: {} materials, {} textures",
        model_file,
        material_files.len(),
        texture_files.len()
    );

    Ok(ModelDependencies {
        root_dir,
        model_file,
        material_files,
        texture_files,
    })
}

/// Collect the deduplicated bundle for a single model.
pub fn collect(model_path: &Path) -> Result<ResolvedBundle> {
    let dependencies = collect_model(model_path)?;
    let mut bundles = merge(vec![dependencies]);
    bundles.pop().ok_or(MdlpackError::NoModelsFound)
}

/// Check that every file of every manifest exists and can be opened.
///
/// Textures are never opened while collecting, so this is what catches a
/// missing `.vtf` before anything is printed or written.
pub fn verify_sources(bundles: &[ResolvedBundle]) -> Result<()> {
    for bundle in bundles {
        for file in &bundle.files {
            let source = asset_source_path(&bundle.root_dir, file);
            if !source.is_file() {
                return Err(missing_dependency(
                    source.display().to_string(),
                    "file not found",
                ));
            }
            File::open(&source).map_err(|e| open_failed(&source, &e))?;
        }
    }
    Ok(())
}

/// Collect bundles for several models, one per distinct game folder.
///
/// With `jobs > 1` models are decoded on a dedicated thread pool. Any failure
/// aborts the whole run before results are merged.
pub fn collect_all<P: AsRef<Path> + Sync>(
    model_paths: &[P],
    jobs: usize,
    on_model_done: impl Fn(&Path) + Sync,
) -> Result<Vec<ResolvedBundle>> {
    if model_paths.is_empty() {
        return Err(MdlpackError::NoModelsFound);
    }
    if let [single] = model_paths {
        let bundle = collect(single.as_ref())?;
        on_model_done(single.as_ref());
        return Ok(vec![bundle]);
    }

    let collect_one = |path: &P| -> Result<ModelDependencies> {
        let dependencies = collect_model(path.as_ref())?;
        on_model_done(path.as_ref());
        Ok(dependencies)
    };

    let per_model: Vec<ModelDependencies> = if jobs > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| MdlpackError::IoError {
                message: format!("Failed to create thread pool: {e}"),
            })?;
        pool.install(|| {
            model_paths
                .par_iter()
                .map(collect_one)
                .collect::<Result<Vec<_>>>()
        })?
    } else {
        model_paths
            .iter()
            .map(collect_one)
            .collect::<Result<Vec<_>>>()?
    };

    Ok(merge(per_model))
}
