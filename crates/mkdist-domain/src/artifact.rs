use std::path::Path;

/// Distribution artifact flavor, classified from a filename.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistKind {
    Sdist,
    Wheel,
}

impl DistKind {
    #[must_use]
    pub fn classify(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".whl") {
            return Some(DistKind::Wheel);
        }
        if name.ends_with(".tar.gz") {
            return Some(DistKind::Sdist);
        }
        None
    }
}

/// Fields of a standard five-part wheel filename
/// (`distribution-version-python-abi-platform.whl`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WheelName {
    pub distribution: String,
    pub version: String,
    pub python_tag: String,
    pub abi_tag: String,
    pub platform_tag: String,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum WheelNameError {
    #[error("wheel filename must end in .whl: {0}")]
    MissingExtension(String),
    #[error("wheel filename needs five dash-separated fields: {0}")]
    MalformedStem(String),
}

/// Parses a wheel filename into its dash-separated fields.
///
/// Tags are anchored from the tail, so distribution names carrying extra
/// dashes still land in the leading field.
pub fn parse_wheel_filename(filename: &str) -> Result<WheelName, WheelNameError> {
    let filename = filename.trim();
    if !filename.to_ascii_lowercase().ends_with(".whl") {
        return Err(WheelNameError::MissingExtension(filename.to_string()));
    }
    let stem = &filename[..filename.len() - 4];
    let parts: Vec<&str> = stem.split('-').collect();
    if parts.len() < 5 {
        return Err(WheelNameError::MalformedStem(filename.to_string()));
    }
    Ok(WheelName {
        distribution: parts[..parts.len() - 4].join("-"),
        version: parts[parts.len() - 4].to_string(),
        python_tag: parts[parts.len() - 3].to_string(),
        abi_tag: parts[parts.len() - 2].to_string(),
        platform_tag: parts[parts.len() - 1].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn classifies_known_artifact_extensions() {
        assert_eq!(
            DistKind::classify(&PathBuf::from("demo-0.1.0-py3-none-any.whl")),
            Some(DistKind::Wheel)
        );
        assert_eq!(
            DistKind::classify(&PathBuf::from("demo-0.1.0.tar.gz")),
            Some(DistKind::Sdist)
        );
        assert_eq!(
            DistKind::classify(&PathBuf::from("dist/Demo-0.1.0.TAR.GZ")),
            Some(DistKind::Sdist)
        );
        assert_eq!(DistKind::classify(&PathBuf::from("notes.txt")), None);
    }

    #[test]
    fn parses_a_standard_wheel_filename() {
        let name = parse_wheel_filename("demo_dist-0.1.0-py3-none-any.whl").expect("parse");
        assert_eq!(name.distribution, "demo_dist");
        assert_eq!(name.version, "0.1.0");
        assert_eq!(name.python_tag, "py3");
        assert_eq!(name.abi_tag, "none");
        assert_eq!(name.platform_tag, "any");
    }

    #[test]
    fn keeps_extra_dashes_in_the_distribution_field() {
        let name = parse_wheel_filename("some-odd-name-1.2-cp311-cp311-linux_x86_64.whl")
            .expect("parse");
        assert_eq!(name.distribution, "some-odd-name");
        assert_eq!(name.version, "1.2");
    }

    #[test]
    fn rejects_non_wheel_and_short_names() {
        assert_eq!(
            parse_wheel_filename("demo-0.1.0.tar.gz"),
            Err(WheelNameError::MissingExtension("demo-0.1.0.tar.gz".to_string()))
        );
        assert_eq!(
            parse_wheel_filename("demo-0.1.0.whl"),
            Err(WheelNameError::MalformedStem("demo-0.1.0.whl".to_string()))
        );
    }
}
