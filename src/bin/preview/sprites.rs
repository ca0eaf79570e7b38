// sprites.rs - Decode sprite PNGs into raster images

use std::error::Error;
use std::path::Path;

use skywater_engine::SpriteImage;

pub fn load(path: &Path) -> Result<SpriteImage, Box<dyn Error>> {
    let img = image::open(path)?.to_rgba8();
    let (w, h) = img.dimensions();
    SpriteImage::new(w, h, img.into_raw()).ok_or_else(|| "empty sprite".into())
}
