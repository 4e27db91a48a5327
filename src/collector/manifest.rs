//! Per-model results and the merged, deduplicated manifests built from them.

use std::collections::HashSet;

use serde::Serialize;

/// Every file one model needs, in discovery order. Not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDependencies {
    /// Game folder the model was found in.
    pub root_dir: String,
    /// The model itself, relative to `root_dir`.
    pub model_file: String,
    pub material_files: Vec<String>,
    pub texture_files: Vec<String>,
}

impl ModelDependencies {
    /// All files in bundle order: model, materials, then textures.
    pub fn files(&self) -> impl Iterator<Item = &String> {
        std::iter::once(&self.model_file)
            .chain(&self.material_files)
            .chain(&self.texture_files)
    }
}

/// A game folder and the ordered, deduplicated files to copy out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBundle {
    pub root_dir: String,
    pub files: Vec<String>,
}

/// Merge per-model results into one manifest per game folder.
///
/// Manifests appear in the order their game folder was first seen. Within a
/// manifest each relative path is kept at its first occurrence only.
pub fn merge(per_model: Vec<ModelDependencies>) -> Vec<ResolvedBundle> {
    let mut bundles: Vec<ResolvedBundle> = Vec::new();
    let mut seen: Vec<HashSet<String>> = Vec::new();

    for dependencies in per_model {
        let index = match bundles
            .iter()
            .position(|b| b.root_dir == dependencies.root_dir)
        {
            Some(index) => index,
            None => {
                bundles.push(ResolvedBundle {
                    root_dir: dependencies.root_dir.clone(),
                    files: Vec::new(),
                });
                seen.push(HashSet::new());
                bundles.len() - 1
            }
        };

        for file in dependencies.files() {
            if seen[index].insert(file.clone()) {
                bundles[index].files.push(file.clone());
            }
        }
    }

    bundles
}
