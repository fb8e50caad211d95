#![allow(dead_code)]

use std::path::{Path, PathBuf};

fn varint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value as u8) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

fn sint64_field(buf: &mut Vec<u8>, field: u32, value: i64) {
    varint(buf, u64::from(field) << 3);
    varint(buf, ((value << 1) ^ (value >> 63)) as u64);
}

fn varint_field(buf: &mut Vec<u8>, field: u32, value: u64) {
    varint(buf, u64::from(field) << 3);
    varint(buf, value);
}

fn bytes_field(buf: &mut Vec<u8>, field: u32, data: &[u8]) {
    varint(buf, (u64::from(field) << 3) | 2);
    varint(buf, data.len() as u64);
    buf.extend_from_slice(data);
}

fn degrees_to_nano(value: f64) -> i64 {
    (value * 1e9).round() as i64
}

/// Encode a PBF file holding only an uncompressed header block, with an
/// optional `(min_lon, min_lat, max_lon, max_lat)` bbox in degrees.
pub fn pbf_with_header(bbox: Option<(f64, f64, f64, f64)>) -> Vec<u8> {
    let mut header = Vec::new();
    if let Some((min_lon, min_lat, max_lon, max_lat)) = bbox {
        let mut b = Vec::new();
        sint64_field(&mut b, 1, degrees_to_nano(min_lon));
        sint64_field(&mut b, 2, degrees_to_nano(max_lon));
        sint64_field(&mut b, 3, degrees_to_nano(max_lat));
        sint64_field(&mut b, 4, degrees_to_nano(min_lat));
        bytes_field(&mut header, 1, &b);
    }
    bytes_field(&mut header, 4, b"OsmSchema-V0.6");
    bytes_field(&mut header, 4, b"DenseNodes");
    bytes_field(&mut header, 16, b"fixture-writer");

    let mut blob = Vec::new();
    bytes_field(&mut blob, 1, &header);

    let mut blob_header = Vec::new();
    bytes_field(&mut blob_header, 1, b"OSMHeader");
    varint_field(&mut blob_header, 3, blob.len() as u64);

    let mut out = (blob_header.len() as u32).to_be_bytes().to_vec();
    out.extend_from_slice(&blob_header);
    out.extend_from_slice(&blob);
    out
}

pub fn write_extract(dir: &Path, name: &str, bbox: Option<(f64, f64, f64, f64)>) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, pbf_with_header(bbox)).unwrap();
    path
}

/// The bounds JSON with its `generated` field removed.
pub fn without_timestamp(json: &str) -> serde_json::Value {
    let mut value: serde_json::Value = serde_json::from_str(json).unwrap();
    value.as_object_mut().unwrap().remove("generated");
    value
}
