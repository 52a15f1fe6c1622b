use std::{cell::RefCell, collections::BTreeSet, fs, path::Path};

use toml::{Table, Value};

use super::{ParamError, ParamSource, ParamSpec};

/// A [`ParamSource`] backed by a flat TOML table.
///
/// Each parameter is a top-level key:
///
/// ```toml
/// Z_RESCALE_POWER = 2
/// T_RESCALE_POWER = -1
/// ```
///
/// Keys that are never read are reported by [`ParamFile::unused_keys`],
/// which catches misspelled parameter names that would otherwise be
/// silently replaced by their defaults.
#[derive(Debug, Clone, Default)]
pub struct ParamFile {
    table: Table,
    read: RefCell<BTreeSet<String>>,
}

impl ParamFile {
    /// Creates an empty parameter file; every read yields its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses parameters from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::Parse`] if the text is not a valid TOML table.
    pub fn from_toml_str(text: &str) -> Result<Self, ParamError> {
        let table = text.parse::<Table>().map_err(|err| ParamError::Parse {
            message: err.to_string(),
        })?;

        Ok(Self {
            table,
            read: RefCell::default(),
        })
    }

    /// Reads and parses a TOML parameter file.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::Io`] if the file cannot be read, or
    /// [`ParamError::Parse`] if its contents are not a valid TOML table.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParamError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| ParamError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        Self::from_toml_str(&text)
    }

    /// Sets an integer parameter, replacing any existing value.
    #[must_use]
    pub fn with_int(mut self, name: &str, value: i64) -> Self {
        self.table.insert(name.to_owned(), Value::Integer(value));
        self
    }

    /// Returns the keys present in the file that have not been read.
    #[must_use]
    pub fn unused_keys(&self) -> Vec<&str> {
        let read = self.read.borrow();
        self.table
            .keys()
            .filter(|key| !read.contains(key.as_str()))
            .map(String::as_str)
            .collect()
    }
}

impl ParamSource for ParamFile {
    fn get_int(&self, spec: &ParamSpec) -> Result<i64, ParamError> {
        self.read.borrow_mut().insert(spec.name.to_owned());

        match self.table.get(spec.name) {
            None => Ok(spec.default),
            Some(Value::Integer(value)) => Ok(*value),
            Some(other) => Err(ParamError::WrongType {
                name: spec.name.to_owned(),
                found: other.type_str().to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NODES: ParamSpec = ParamSpec {
        name: "NODES",
        description: "Number of nodes.",
        units: "nondim",
        default: 5,
        valid_range: None,
    };

    #[test]
    fn missing_key_uses_default() {
        let params = ParamFile::new();
        assert_eq!(params.get_int(&NODES), Ok(5));
    }

    #[test]
    fn reads_integers() {
        let params = ParamFile::from_toml_str("NODES = -7\n").unwrap();
        assert_eq!(params.get_int(&NODES), Ok(-7));

        let params = ParamFile::new().with_int("NODES", 40);
        assert_eq!(params.get_int(&NODES), Ok(40));
    }

    #[test]
    fn rejects_non_integers() {
        let params = ParamFile::from_toml_str("NODES = 2.5").unwrap();
        assert_eq!(
            params.get_int(&NODES),
            Err(ParamError::WrongType {
                name: "NODES".into(),
                found: "float".into(),
            })
        );

        let params = ParamFile::from_toml_str("NODES = \"two\"").unwrap();
        assert!(matches!(
            params.get_int(&NODES),
            Err(ParamError::WrongType { .. })
        ));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        assert!(matches!(
            ParamFile::from_toml_str("NODES = = 3"),
            Err(ParamError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ParamFile::from_path("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ParamError::Io { ref path, .. } if path.ends_with("exist.toml")));
    }

    #[test]
    fn tracks_unused_keys() {
        let params = ParamFile::from_toml_str("NODES = 3\nNODSE = 4").unwrap();
        assert_eq!(params.unused_keys(), vec!["NODES", "NODSE"]);

        params.get_int(&NODES).unwrap();
        assert_eq!(params.unused_keys(), vec!["NODSE"]);
    }
}
