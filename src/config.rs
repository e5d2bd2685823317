//! Run configuration.
use std::path::PathBuf;

/// How keys are compared with respect to letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// ASCII letters are lowercased before insertion, so `Apple` and `apple` are one key.
    #[default]
    Insensitive,

    /// Lines are inserted exactly as read.
    Sensitive,
}
impl CaseMode {
    /// Applies this policy to `line` in place.
    ///
    /// Only ASCII letters are folded; other bytes are left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstsort::CaseMode;
    ///
    /// let mut line = b"Hello, WORLD".to_vec();
    /// CaseMode::Sensitive.fold(&mut line);
    /// assert_eq!(line, b"Hello, WORLD");
    ///
    /// CaseMode::Insensitive.fold(&mut line);
    /// assert_eq!(line, b"hello, world");
    /// ```
    pub fn fold(self, line: &mut [u8]) {
        if self == CaseMode::Insensitive {
            line.make_ascii_lowercase();
        }
    }
}

/// Everything a single run needs, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File to read lines from.
    pub input: PathBuf,

    /// File to write counts to; standard output when `None`.
    pub output: Option<PathBuf>,

    /// How lines are compared.
    pub case: CaseMode,
}
impl Config {
    /// Makes a configuration which reads `input` case-insensitively and writes to standard output.
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Config {
            input: input.into(),
            output: None,
            case: CaseMode::default(),
        }
    }

    /// Sets the file to write counts to.
    pub fn output<P: Into<PathBuf>>(mut self, output: P) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Sets how lines are compared.
    pub fn case(mut self, case: CaseMode) -> Self {
        self.case = case;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_only_touches_ascii() {
        let mut line = "ÀPPLE Straße".as_bytes().to_vec();
        CaseMode::Insensitive.fold(&mut line);
        assert_eq!(line, "Àpple straße".as_bytes());
    }

    #[test]
    fn config_builder_works() {
        let config = Config::new("in.txt");
        assert_eq!(config.input, PathBuf::from("in.txt"));
        assert_eq!(config.output, None);
        assert_eq!(config.case, CaseMode::Insensitive);

        let config = config.output("out.txt").case(CaseMode::Sensitive);
        assert_eq!(config.output, Some(PathBuf::from("out.txt")));
        assert_eq!(config.case, CaseMode::Sensitive);
    }
}
