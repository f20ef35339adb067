#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::sync::Once;
use zip::write::SimpleFileOptions;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// In-memory pack archive from `(path, bytes)` pairs.
pub fn pack_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (name, data) in entries {
        writer.start_file(*name, options).expect("start zip entry");
        writer.write_all(data).expect("write zip entry");
    }

    writer.finish().expect("finish zip").into_inner()
}

/// Encoded PNG with the given dimensions.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::new(width, height);
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

pub fn pack_mcmeta(format: i64) -> Vec<u8> {
    format!(r#"{{"pack":{{"pack_format":{format},"description":"test"}}}}"#).into_bytes()
}
