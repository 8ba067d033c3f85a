//! Output path resolution
//!
//! Maps a module's absolute source path to the relative path of its
//! rendered Markdown file. Paths arrive in whatever separator style the
//! analyzer's host OS used, so resolution works on normalized components
//! rather than on `std::path` values.

/// Resolves absolute source paths to output-relative Markdown paths
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: Vec<String>,
}

impl PathResolver {
    /// Create a resolver anchored at the given working root
    pub fn new(working_root: &str) -> Self {
        Self {
            root: components(working_root),
        }
    }

    /// Compute the output path for a module source file
    ///
    /// The result is relative to the working root, uses forward slashes
    /// regardless of the separators in the input, and carries a `.md`
    /// extension in place of the source extension. Sources outside the
    /// root resolve through `..` segments.
    pub fn resolve(&self, source_path: &str) -> String {
        let source = components(source_path);
        let common = self
            .root
            .iter()
            .zip(&source)
            .take_while(|(a, b)| a == b)
            .count();

        let mut parts: Vec<&str> = Vec::with_capacity(self.root.len() - common + source.len() - common);
        for _ in common..self.root.len() {
            parts.push("..");
        }
        for part in &source[common..] {
            parts.push(part.as_str());
        }

        replace_extension(&parts.join("/"))
    }
}

/// Split a path into normalized components, accepting both separator styles
fn components(path: &str) -> Vec<String> {
    path.split(['/', '\\'])
        .filter(|part| !part.is_empty() && *part != ".")
        .map(str::to_string)
        .collect()
}

/// Swap the final extension for `.md`, appending when there is none
fn replace_extension(path: &str) -> String {
    let component_start = path.rfind('/').map_or(0, |slash| slash + 1);
    let stem_end = match path.rfind('.') {
        // A leading dot names a hidden file, not an extension
        Some(dot) if dot > component_start => dot,
        _ => path.len(),
    };
    format!("{}.md", &path[..stem_end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_under_root() {
        let resolver = PathResolver::new("/home/dev/project");
        assert_eq!(
            resolver.resolve("/home/dev/project/src/maths.ts"),
            "src/maths.md"
        );
    }

    #[test]
    fn test_separator_styles_resolve_identically() {
        let unix = PathResolver::new("/home/dev/project");
        let mixed = PathResolver::new("\\home\\dev\\project");
        let forward = unix.resolve("/home/dev/project/src/util/paths.ts");
        let backward = mixed.resolve("\\home\\dev\\project\\src\\util\\paths.ts");
        assert_eq!(forward, backward);
        assert_eq!(forward, "src/util/paths.md");
    }

    #[test]
    fn test_resolve_outside_root_uses_parent_segments() {
        let resolver = PathResolver::new("/home/dev/project/src");
        assert_eq!(
            resolver.resolve("/home/dev/shared/types.ts"),
            "../../shared/types.md"
        );
    }

    #[test]
    fn test_compound_extension_replaces_last_segment_only() {
        let resolver = PathResolver::new("/root");
        assert_eq!(resolver.resolve("/root/a/widget.spec.ts"), "a/widget.spec.md");
    }

    #[test]
    fn test_no_extension_appends_md() {
        let resolver = PathResolver::new("/root");
        assert_eq!(resolver.resolve("/root/Makefile"), "Makefile.md");
    }

    #[test]
    fn test_hidden_file_keeps_leading_dot() {
        let resolver = PathResolver::new("/root");
        assert_eq!(resolver.resolve("/root/.config"), ".config.md");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let resolver = PathResolver::new("/home/dev/project");
        let first = resolver.resolve("/home/dev/project/src/maths.ts");
        let second = resolver.resolve("/home/dev/project/src/maths.ts");
        assert_eq!(first, second);
    }
}
