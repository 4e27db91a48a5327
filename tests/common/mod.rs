//! Common test utilities for mdlpack integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

const HEADER_TEXTURE_OFFSET: usize = 0xCC;
const TEXTURE_RECORD_SIZE: usize = 64;

/// Get a command for the real mdlpack binary, isolated from the caller's env
#[allow(dead_code)]
pub fn mdlpack_cmd() -> Command {
    // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("mdlpack").expect("Failed to find mdlpack binary");
    cmd.env_remove("MDLPACK_OUTPUT")
        .env_remove("MDLPACK_NAME")
        .env_remove("MDLPACK_JOBS")
        .env_remove("MDLPACK_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

/// Serialize a version 48 model with one texture directory and the given textures
#[allow(dead_code)]
pub fn model_bytes(texture_dir: &str, textures: &[&str]) -> Vec<u8> {
    model_bytes_with(b"IDST", 48, &[texture_dir], textures)
}

/// Serialize a model with full control over header and tables
///
/// Layout: header, directory offset table, texture table, then all strings.
#[allow(dead_code)]
pub fn model_bytes_with(magic: &[u8; 4], version: u32, dirs: &[&str], textures: &[&str]) -> Vec<u8> {
    let dir_table = HEADER_TEXTURE_OFFSET + 16;
    let texture_table = dir_table + 4 * dirs.len();
    let strings = texture_table + TEXTURE_RECORD_SIZE * textures.len();

    let mut data = vec![0u8; strings];
    data[0..4].copy_from_slice(magic);
    put_u32(&mut data, 4, version as usize);
    put_u32(&mut data, HEADER_TEXTURE_OFFSET, textures.len());
    put_u32(&mut data, HEADER_TEXTURE_OFFSET + 4, texture_table);
    put_u32(&mut data, HEADER_TEXTURE_OFFSET + 8, dirs.len());
    put_u32(&mut data, HEADER_TEXTURE_OFFSET + 12, dir_table);

    for (i, dir) in dirs.iter().enumerate() {
        let pos = data.len();
        data.extend_from_slice(dir.as_bytes());
        data.push(0);
        put_u32(&mut data, dir_table + 4 * i, pos);
    }
    for (i, name) in textures.iter().enumerate() {
        let record = texture_table + TEXTURE_RECORD_SIZE * i;
        let pos = data.len();
        data.extend_from_slice(name.as_bytes());
        data.push(0);
        put_u32(&mut data, record, pos - record);
    }
    data
}

fn put_u32(data: &mut [u8], at: usize, value: usize) {
    let value = u32::try_from(value).expect("synthetic model too large");
    data[at..at + 4].copy_from_slice(&value.to_le_bytes());
}

/// Material text with one `$basetexture` and optional extra parameters
#[allow(dead_code)]
pub fn material_text(base_texture: &str, extra: &[(&str, &str)]) -> String {
    let mut text = format!("\"VertexLitGeneric\"\n{{\n\t\"$basetexture\" \"{base_texture}\"\n");
    for (key, value) in extra {
        text.push_str(&format!("\t\"{key}\" \"{value}\"\n"));
    }
    text.push_str("}\n");
    text
}

/// A temp directory holding a fake game folder and an output folder
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Game folder models and materials are created under
    pub fn game_dir(&self) -> PathBuf {
        self.path.join("game")
    }

    /// Folder bundles are written to
    pub fn output_dir(&self) -> PathBuf {
        self.path.join("out")
    }

    /// Write a file in the game folder
    pub fn write_game_file(&self, path: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let file_path = self.game_dir().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write a model at `models/<name>.mdl` using materials in `texture_dir`
    pub fn write_model(&self, name: &str, texture_dir: &str, textures: &[&str]) -> PathBuf {
        self.write_game_file(
            &format!("models/{name}.mdl"),
            model_bytes(texture_dir, textures),
        )
    }

    /// Write a `chair` model with two materials, a shared metal texture and all files present
    pub fn write_chair(&self) -> PathBuf {
        let model = self.write_model("props/chair", "models/props", &["chair", "metal"]);
        self.write_game_file(
            "materials/models/props/chair.vmt",
            material_text("models/props/chair", &[("$bumpmap", "models/props/chair_normal")]),
        );
        self.write_game_file(
            "materials/models/props/metal.vmt",
            material_text("common/metal", &[]),
        );
        self.write_game_file("materials/models/props/chair.vtf", "chair-vtf");
        self.write_game_file("materials/models/props/chair_normal.vtf", "normal-vtf");
        self.write_game_file("materials/common/metal.vtf", "metal-vtf");
        model
    }

    /// Write a `table` model sharing the metal texture with the chair
    pub fn write_table(&self) -> PathBuf {
        let model = self.write_model("props/table", "models/props", &["table"]);
        self.write_game_file(
            "materials/models/props/table.vmt",
            material_text("models/props/table", &[("$detail", "common/metal")]),
        );
        self.write_game_file("materials/models/props/table.vtf", "table-vtf");
        self.write_game_file("materials/common/metal.vtf", "metal-vtf");
        model
    }

    /// Path of a file inside the written bundle
    pub fn bundled(&self, bundle_name: &str, path: &str) -> PathBuf {
        self.output_dir().join(bundle_name).join(path)
    }

    /// Read a file from the written bundle
    pub fn read_bundled(&self, bundle_name: &str, path: &str) -> String {
        std::fs::read_to_string(self.bundled(bundle_name, path)).expect("Failed to read file")
    }

    /// Path of a written bundle archive
    pub fn archive(&self, bundle_name: &str) -> PathBuf {
        self.output_dir().join(format!("{bundle_name}.zip"))
    }

    /// Entry names of a written bundle archive, in archive order
    pub fn archive_entries(&self, bundle_name: &str) -> Vec<String> {
        let file = std::fs::File::open(self.archive(bundle_name)).expect("Failed to open archive");
        let archive = zip::ZipArchive::new(file).expect("Failed to read archive");
        archive.file_names().map(ToString::to_string).collect()
    }

    /// Read one entry of a written bundle archive
    pub fn read_archived(&self, bundle_name: &str, entry: &str) -> String {
        use std::io::Read;

        let file = std::fs::File::open(self.archive(bundle_name)).expect("Failed to open archive");
        let mut archive = zip::ZipArchive::new(file).expect("Failed to read archive");
        let mut contents = String::new();
        archive
            .by_name(entry)
            .expect("Entry not in archive")
            .read_to_string(&mut contents)
            .expect("Failed to read entry");
        contents
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
    }

    #[test]
    fn test_write_chair_layout() {
        let workspace = TestWorkspace::new();
        let model = workspace.write_chair();
        assert!(model.ends_with("game/models/props/chair.mdl"));
        assert!(workspace.game_dir().join("materials/common/metal.vtf").is_file());
    }

    #[test]
    fn test_model_bytes_header() {
        let bytes = model_bytes("x", &["brick"]);
        assert_eq!(&bytes[0..4], b"IDST");
        assert!(bytes.ends_with(b"x\0brick\0"));
    }
}
