use criterion::{Criterion, criterion_group, criterion_main};
use image_timestamp::time::get_day_timestamp;
use image_timestamp::ImageMetadata;
use serde_json::json;
use std::hint::black_box;

fn bench(c: &mut Criterion) {
    let exif_info = json!({
        "Other": { "FileType": "JPEG", "MIMEType": "image/jpeg" },
        "Time": {
            "DateTimeOriginal": "2013:05:20 14:43:10",
            "SubSecTimeOriginal": "523",
            "FileModifyDate": "2013:05:20 14:43:10+02:00"
        }
    });

    c.bench_function("ImageMetadata::from_exif", |b| {
        b.iter(|| ImageMetadata::from_exif(black_box(&exif_info)));
    });

    let metadata = ImageMetadata::from_exif(&exif_info);
    c.bench_function("get_day_timestamp", |b| {
        b.iter(|| get_day_timestamp(black_box(&metadata), true).unwrap());
    });

    let file_date_only = ImageMetadata {
        file_modify_date: Some("20-May-2013 14:43:10".to_string()),
        ..ImageMetadata::default()
    };
    c.bench_function("get_day_timestamp file date", |b| {
        b.iter(|| get_day_timestamp(black_box(&file_date_only), true).unwrap());
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
