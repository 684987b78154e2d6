use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDateTime};
use color_eyre::{Result, eyre::WrapErr as _};
use image::ImageFormat;
use log::{info, warn};

use crate::generation::GeneratedImage;

pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

pub fn image_file_name(timestamp: NaiveDateTime) -> String {
    format!("image_{}.png", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Saves `image` as a PNG in `dir`, named after the current local time.
pub fn save_image(image: &GeneratedImage, dir: &Path) -> Result<PathBuf> {
    save_image_at(image, dir, Local::now().naive_local())
}

/// Like [`save_image`] with an explicit timestamp.
///
/// Names only have second granularity. A second save within the same second
/// fails with [`std::io::ErrorKind::AlreadyExists`], existing files are never
/// replaced.
pub fn save_image_at(
    image: &GeneratedImage,
    dir: &Path,
    timestamp: NaiveDateTime,
) -> Result<PathBuf> {
    fs::create_dir_all(dir).wrap_err_with(|| format!("Couldn't create {dir:?}"))?;
    let path = dir.join(image_file_name(timestamp));

    write_new_file(&path, |writer| {
        Ok(image.image.write_to(writer, ImageFormat::Png)?)
    })?;

    info!("Saved image to {path:?}");
    Ok(path)
}

/// Creates `path` and fills it through `write`. If writing fails the file is
/// removed again, so a failed save leaves nothing behind.
fn write_new_file(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> Result<()>,
) -> Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .wrap_err_with(|| format!("Couldn't create {path:?}"))?;
    let mut writer = BufWriter::new(file);

    let res = write(&mut writer).and_then(|()| Ok(writer.flush()?));
    if res.is_err() {
        drop(writer);
        if let Err(e) = fs::remove_file(path) {
            warn!("Couldn't remove partial file {path:?}: {e}");
        }
    }
    res.wrap_err_with(|| format!("Couldn't write {path:?}"))
}
