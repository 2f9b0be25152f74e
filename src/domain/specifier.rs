use std::fmt;
use std::path::{Path, PathBuf};

/// Suffix identifying a remote repository address.
pub const REMOTE_SUFFIX: &str = ".git";
/// Specifier meaning "bootstrap into the invocation directory".
pub const CURRENT_DIR_MARKER: &str = ".";

/// Where the project should live, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSpecifier {
    CurrentDir,
    Local(String),
    Remote(String),
}

impl ProjectSpecifier {
    /// Trailing path separators are ignored when recognizing a remote, so
    /// `repo.git/` is the same remote as `repo.git`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let bare = raw.trim_end_matches(['/', '\\']);
        if raw.is_empty() || raw == CURRENT_DIR_MARKER {
            ProjectSpecifier::CurrentDir
        } else if bare.ends_with(REMOTE_SUFFIX) {
            ProjectSpecifier::Remote(bare.to_string())
        } else {
            ProjectSpecifier::Local(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ProjectSpecifier::CurrentDir => CURRENT_DIR_MARKER,
            ProjectSpecifier::Local(path) => path,
            ProjectSpecifier::Remote(url) => url,
        }
    }

    pub fn remote(&self) -> Option<&str> {
        match self {
            ProjectSpecifier::Remote(url) => Some(url),
            _ => None,
        }
    }

    /// Directory the project ends up in, relative to the invocation directory.
    ///
    /// Remote specifiers resolve to the repository base name without the
    /// `.git` suffix, which is also where `git clone` puts the checkout.
    pub fn directory_name(&self) -> TargetDirectory {
        match self {
            ProjectSpecifier::CurrentDir => TargetDirectory::current(),
            ProjectSpecifier::Local(path) => TargetDirectory::new(path),
            ProjectSpecifier::Remote(url) => TargetDirectory::new(repository_base_name(url)),
        }
    }
}

impl Default for ProjectSpecifier {
    fn default() -> Self {
        ProjectSpecifier::CurrentDir
    }
}

impl fmt::Display for ProjectSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn repository_base_name(url: &str) -> String {
    let trimmed = url.trim_end_matches(['/', '\\']);
    let base = trimmed.rsplit(['/', '\\', ':']).next().unwrap_or(trimmed);
    base.strip_suffix(REMOTE_SUFFIX).unwrap_or(base).to_string()
}

/// Resolved project directory, relative to the invocation directory.
///
/// The empty path stands for the invocation directory itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetDirectory(PathBuf);

impl TargetDirectory {
    pub fn current() -> Self {
        Self(PathBuf::new())
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn is_current(&self) -> bool {
        self.0.as_os_str().is_empty()
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Absolute location of the target for a given invocation directory.
    pub fn resolve_from(&self, invocation_dir: &Path) -> PathBuf {
        if self.is_current() { invocation_dir.to_path_buf() } else { invocation_dir.join(&self.0) }
    }
}

impl fmt::Display for TargetDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_current() {
            f.write_str(CURRENT_DIR_MARKER)
        } else {
            write!(f, "{}", self.0.display())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_the_three_specifier_shapes() {
        assert_eq!(ProjectSpecifier::parse("."), ProjectSpecifier::CurrentDir);
        assert_eq!(ProjectSpecifier::parse(""), ProjectSpecifier::CurrentDir);
        assert_eq!(ProjectSpecifier::parse("apps/web"), ProjectSpecifier::Local("apps/web".into()));
        assert_eq!(
            ProjectSpecifier::parse("git@github.com:org/site.git"),
            ProjectSpecifier::Remote("git@github.com:org/site.git".into())
        );
    }

    #[test]
    fn remote_directory_name_strips_suffix_and_host() {
        let cases = [
            ("git@github.com:org/site.git", "site"),
            ("git@host:site.git", "site"),
            ("https://example.com/team/app.git", "app"),
            ("/srv/repos/app.git/", "app"),
        ];
        for (url, expected) in cases {
            let specifier = ProjectSpecifier::parse(url);
            assert_eq!(specifier.directory_name(), TargetDirectory::new(expected), "{url}");
        }
    }

    #[test]
    fn trailing_separator_after_remote_suffix_is_ignored() {
        for raw in ["/srv/repos/app.git/", "C:\\repos\\app.git\\"] {
            let specifier = ProjectSpecifier::parse(raw);
            assert_eq!(specifier.remote(), Some(raw.trim_end_matches(['/', '\\'])), "{raw}");
        }
        assert_eq!(
            ProjectSpecifier::parse("apps/web/"),
            ProjectSpecifier::Local("apps/web/".into())
        );
    }

    #[test]
    fn current_target_resolves_to_invocation_dir() {
        let target = ProjectSpecifier::CurrentDir.directory_name();
        assert!(target.is_current());
        assert_eq!(target.to_string(), ".");
        assert_eq!(target.resolve_from(Path::new("/work")), PathBuf::from("/work"));
        assert_eq!(
            TargetDirectory::new("my-app").resolve_from(Path::new("/work")),
            PathBuf::from("/work/my-app")
        );
    }
}
