//! Formatting helpers for command output

use crate::plane::PlaneDescriptor;

/// Byte count with a binary unit, e.g. `2.0 MiB`
pub fn human_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// One-line summary such as `4096x4096 uint16, 3 channels interleaved, little-endian`
pub fn describe_plane(plane: &PlaneDescriptor) -> String {
    let channels = match plane.rgb_channel_count {
        1 => "1 channel".to_string(),
        c if plane.interleaved => format!("{} channels interleaved", c),
        c => format!("{} channels planar", c),
    };
    let endian = if plane.little_endian { "little-endian" } else { "big-endian" };
    format!(
        "{}x{} {}, {}, {}",
        plane.width, plane.height, plane.pixel_type, channels, endian
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::PixelType;

    #[test]
    fn test_human_bytes() {
        assert_eq!(human_bytes(0), "0 B");
        assert_eq!(human_bytes(1023), "1023 B");
        assert_eq!(human_bytes(1536), "1.5 KiB");
        assert_eq!(human_bytes(2 * 1024 * 1024), "2.0 MiB");
        assert_eq!(human_bytes(i32::MAX as u64), "2.0 GiB");
    }

    #[test]
    fn test_describe_plane() {
        let plane = PlaneDescriptor::new(64, 32, PixelType::Uint16)
            .with_channels(3, true)
            .with_little_endian(false);
        assert_eq!(describe_plane(&plane), "64x32 uint16, 3 channels interleaved, big-endian");
    }
}
