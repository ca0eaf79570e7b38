// preview - Render backdrop frames to PNG without a browser
//
// Pipeline:
//   1. Build viewport-sized rain and sky rasters, load fish sprites
//   2. Drive the rain and sky loops from a hand-pumped frame host
//   3. After each tick, lay rain over sky and write frame_NNNN.png
//
// Usage: cargo run --bin preview -- --frames 30 --mode light --out frames/

#[cfg(not(target_arch = "wasm32"))]
mod sprites;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::cell::RefCell;
    use std::error::Error;
    use std::path::PathBuf;
    use std::rc::Rc;

    use clap::Parser;
    use skywater_engine::sim::{CLOUDS, FISH, RAIN_DROPS};
    use skywater_engine::surface::Sprite;
    use skywater_engine::{
        ManualFrames, RainField, Raster, Size, SkyScene, Surface, SurfaceManager, ThemeMode, seeded,
        start_loop,
    };

    use crate::sprites;

    // 60 fps tick spacing
    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Mode {
        #[value(name = "dark")]
        Dark,
        #[value(name = "light")]
        Light,
    }

    impl From<Mode> for ThemeMode {
        fn from(mode: Mode) -> Self {
            match mode {
                Mode::Dark => ThemeMode::Dark,
                Mode::Light => ThemeMode::Light,
            }
        }
    }

    #[derive(Parser, Debug, Clone)]
    #[command(name = "preview", about = "Render backdrop frames to PNG")]
    pub struct Args {
        #[arg(long, default_value_t = 640, help = "Viewport width in pixels")]
        pub width: u32,

        #[arg(long, default_value_t = 360, help = "Viewport height in pixels")]
        pub height: u32,

        #[arg(long, default_value_t = 1, help = "Number of frames to write")]
        pub frames: u32,

        #[arg(long, value_enum, default_value_t = Mode::Light, help = "Theme to render")]
        pub mode: Mode,

        #[arg(long, default_value_t = 1, help = "Random seed")]
        pub seed: u64,

        #[arg(long = "fish-right", help = "PNG for the right-facing fish")]
        pub fish_right: Option<PathBuf>,

        #[arg(long = "fish-left", help = "PNG for the left-facing fish")]
        pub fish_left: Option<PathBuf>,

        #[arg(long, default_value = ".", help = "Output directory")]
        pub out: PathBuf,
    }

    pub fn run() -> Result<(), Box<dyn Error>> {
        let args = Args::parse();
        let size = Size::new(args.width, args.height);
        let mode = ThemeMode::from(args.mode);

        println!(
            "Rendering {} frame(s) at {}x{} ({}, seed {})...",
            args.frames,
            size.w,
            size.h,
            mode.as_str(),
            args.seed
        );

        // Refuse sizes whose pixel buffer cannot be addressed
        let mut sky = Raster::try_new(size)?;
        let sprite_paths = [
            (Sprite::FishRight, &args.fish_right),
            (Sprite::FishLeft, &args.fish_left),
        ];
        for (sprite, path) in sprite_paths {
            let Some(path) = path else { continue };
            match sprites::load(path) {
                Ok(image) => sky.load_sprite(sprite, image),
                Err(err) => eprintln!("  Skipping {}: {err}", path.display()),
            }
        }

        let surfaces = SurfaceManager::new(Raster::try_new(size)?, sky);
        surfaces.resize(size);
        let dice = Rc::new(RefCell::new(seeded(args.seed)));
        let host = ManualFrames::new();

        let rain_loop = {
            let surface = surfaces.rain();
            let dice = Rc::clone(&dice);
            let mut rain = RainField::new(RAIN_DROPS, size, &mut *dice.borrow_mut());
            start_loop(Rc::clone(&host), move |_: f64| {
                rain.step(&mut *surface.borrow_mut(), &mut *dice.borrow_mut());
            })
        };
        let sky_loop = {
            let surface = surfaces.sky();
            let dice = Rc::clone(&dice);
            let mut scene = SkyScene::with_counts(size, CLOUDS, FISH, &mut *dice.borrow_mut());
            start_loop(Rc::clone(&host), move |_: f64| {
                scene.frame(&mut *surface.borrow_mut(), mode, &mut *dice.borrow_mut());
            })
        };

        std::fs::create_dir_all(&args.out)?;
        for frame in 0..args.frames {
            host.pump(FRAME_MS);

            let mut composite = Raster::new(surfaces.sky().borrow().size());
            composite.composite_over(&surfaces.sky().borrow());
            composite.composite_over(&surfaces.rain().borrow());

            let path = args.out.join(format!("frame_{frame:04}.png"));
            let image = image::RgbaImage::from_raw(size.w, size.h, composite.into_pixels())
                .ok_or("frame buffer does not match viewport")?;
            image.save(&path)?;
            println!("  Wrote {}", path.display());
        }

        rain_loop.stop();
        sky_loop.stop();
        println!("Done: {} rain ticks, {} sky ticks", rain_loop.frames(), sky_loop.frames());
        Ok(())
    }
}
