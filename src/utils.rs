use std::path::Path;

/// Render a path with `/` separators regardless of host platform.
pub fn normalize_separators<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn backslashes_become_forward_slashes() {
        assert_eq!(
            normalize_separators(r"extensions\Lily\Cast.js"),
            "extensions/Lily/Cast.js"
        );
    }

    #[test]
    fn forward_slashes_are_untouched() {
        let once = normalize_separators("extensions/Scratch/index.js");
        assert_eq!(once, "extensions/Scratch/index.js");
        assert_eq!(normalize_separators(&once), once);
    }

    #[test]
    fn joined_paths_keep_the_root_prefix() {
        let joined = Path::new("extensions").join("adacraft").join("adacraft_gif");
        assert_eq!(
            normalize_separators(joined),
            "extensions/adacraft/adacraft_gif"
        );
    }
}
