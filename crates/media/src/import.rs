pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mov", "avi", "mkv", "webm", "m4v", "mxf", "ts", "mts", "m2ts", "flv", "wmv", "mpg",
    "mpeg", "vob", "3gp", "3g2", "ogv", "f4v",
];

pub fn is_video_extension(ext: &str) -> bool {
    let lower = ext.to_lowercase();
    VIDEO_EXTENSIONS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_common_containers_case_insensitively() {
        assert!(is_video_extension("mp4"));
        assert!(is_video_extension("MOV"));
        assert!(is_video_extension("WebM"));
        assert!(!is_video_extension("txt"));
        assert!(!is_video_extension("wav"));
        assert!(!is_video_extension(""));
    }
}
