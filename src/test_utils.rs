use image::{ImageFormat, Rgba, RgbaImage};
use std::io::{Cursor, Write};
use std::sync::Once;
use zip::write::SimpleFileOptions;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Build an in-memory ZIP with the given entries, in order.
///
/// Names ending in `/` become directory entries.
pub fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (name, content) in entries {
        if name.ends_with('/') {
            writer.add_directory(name.to_string(), options).unwrap();
            continue;
        }
        writer.start_file(name.to_string(), options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Encode a small, valid PNG.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([200, 30, 30, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

pub fn mcmeta(pack_format: i64) -> Vec<u8> {
    format!(r#"{{"pack":{{"pack_format":{pack_format},"description":"test"}}}}"#).into_bytes()
}
