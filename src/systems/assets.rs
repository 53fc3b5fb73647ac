use std::path::{Path, PathBuf};

use bevy::prelude::*;

use crate::resources::*;

// same lookup order the asset server uses for its base path
pub fn asset_root() -> PathBuf {
    if let Ok(dir) = std::env::var("BEVY_ASSET_ROOT") {
        return PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("CARGO_MANIFEST_DIR") {
        return PathBuf::from(dir);
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
}

/// Loads every image present in `asset_dir` through `load`; missing ones are logged and left
/// out so they get drawn as placeholders.
pub fn collect_images(
    asset_dir: &Path,
    mut load: impl FnMut(&'static str) -> Handle<Image>,
) -> ImageAssets {
    let mut images = ImageAssets::default();

    for image in GameImage::ALL {
        let file_name = image.file_name();

        if asset_dir.join(file_name).is_file() {
            images.insert(image, load(file_name));
        } else {
            warn!(
                "could not load image {file_name} from {}; using a placeholder",
                asset_dir.display()
            );
        }
    }

    images
}

pub fn load_images_system(mut commands: Commands, asset_server: Res<AssetServer>) {
    let asset_dir = asset_root().join("assets");
    let images = collect_images(&asset_dir, |file_name| asset_server.load(file_name));

    commands.insert_resource(images);
}
