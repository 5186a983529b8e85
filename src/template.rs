use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bstr::ByteSlice;

use crate::params::Combination;
use crate::Result;

/// A literal marker in the template text that is replaced by one bus width.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Placeholder {
    AddrWidth,
    DataWidth,
    LenWidth,
    IdWidth,
}

impl Placeholder {
    /// All placeholders, in the order they are substituted.
    pub const ALL: [Placeholder; 4] = [
        Placeholder::AddrWidth,
        Placeholder::DataWidth,
        Placeholder::LenWidth,
        Placeholder::IdWidth,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::AddrWidth => "<ADDR_WIDTH>",
            Placeholder::DataWidth => "<DATA_WIDTH>",
            Placeholder::LenWidth => "<LEN_WIDTH>",
            Placeholder::IdWidth => "<ID_WIDTH>",
        }
    }

    pub fn value(&self, combination: &Combination) -> u32 {
        match self {
            Placeholder::AddrWidth => combination.addr_width,
            Placeholder::DataWidth => combination.data_width,
            Placeholder::LenWidth => combination.len_width,
            Placeholder::IdWidth => combination.id_width,
        }
    }
}

/// Replaces every occurrence of each placeholder with its decimal value.
///
/// Works on raw bytes, so templates need not be valid UTF-8. Always starts
/// from `template`, so results never depend on a previous combination.
pub fn substitute(template: &[u8], combination: &Combination) -> Vec<u8> {
    Placeholder::ALL.iter().fold(template.to_vec(), |text, placeholder| {
        text.replace(placeholder.token(), placeholder.value(combination).to_string())
    })
}

/// Template text, read once and never modified.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Template {
    path: Option<PathBuf>,
    contents: Vec<u8>,
}

impl Template {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            fs::read(path).with_context(|| format!("failed to read template {path:?}"))?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            contents,
        })
    }

    pub fn from_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: None,
            contents: contents.into(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[inline]
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// Number of times `placeholder` appears in the template.
    pub fn occurrences(&self, placeholder: Placeholder) -> usize {
        self.contents.find_iter(placeholder.token()).count()
    }

    /// Placeholders that never appear in the template.
    pub fn missing_placeholders(&self) -> Vec<Placeholder> {
        Placeholder::ALL
            .into_iter()
            .filter(|&placeholder| self.occurrences(placeholder) == 0)
            .collect()
    }

    #[inline]
    pub fn render(&self, combination: &Combination) -> Vec<u8> {
        substitute(&self.contents, combination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PKG: &[u8] = b"package params_pkg;
  parameter ADDR_WIDTH = <ADDR_WIDTH>;
  parameter DATA_WIDTH = <DATA_WIDTH>;
  parameter LEN_WIDTH  = <LEN_WIDTH>;
  parameter ID_WIDTH   = <ID_WIDTH>;
  parameter STRB_WIDTH = <DATA_WIDTH>/8;
endpackage
";

    #[test]
    fn test_substitute_all_placeholders() {
        let text = substitute(PKG, &Combination::new(64, 256, 8, 5));
        assert_eq!(
            text.as_bstr(),
            b"package params_pkg;
  parameter ADDR_WIDTH = 64;
  parameter DATA_WIDTH = 256;
  parameter LEN_WIDTH  = 8;
  parameter ID_WIDTH   = 5;
  parameter STRB_WIDTH = 256/8;
endpackage
"
            .as_bstr()
        );
    }

    #[test]
    fn test_substitute_replaces_every_occurrence() {
        let text = substitute(
            b"<ID_WIDTH> <ID_WIDTH><ID_WIDTH>",
            &Combination::new(32, 8, 4, 5),
        );
        assert_eq!(text, b"5 55");
    }

    #[test]
    fn test_missing_placeholder_is_ignored() {
        let template = b"no markers here, only <ADDR_WIDTH>";
        let text = substitute(template, &Combination::new(32, 1024, 4, 4));
        assert_eq!(text, b"no markers here, only 32");

        assert!(substitute(b"", &Combination::new(32, 8, 4, 4)).is_empty());
    }

    #[test]
    fn test_substitute_keeps_non_utf8_bytes() {
        let text = substitute(
            b"// caf\xe9\nparameter A = <ADDR_WIDTH>;\n",
            &Combination::new(64, 8, 4, 4),
        );
        assert_eq!(text, b"// caf\xe9\nparameter A = 64;\n");
    }

    #[test]
    fn test_render_does_not_accumulate() {
        let template = Template::from_contents("W<ADDR_WIDTH>_<DATA_WIDTH>");
        assert_eq!(template.render(&Combination::new(32, 8, 4, 4)), b"W32_8");
        assert_eq!(template.render(&Combination::new(64, 16, 4, 4)), b"W64_16");
        assert_eq!(template.contents(), b"W<ADDR_WIDTH>_<DATA_WIDTH>");
    }

    #[test]
    fn test_occurrences() {
        let template = Template::from_contents(PKG);
        assert_eq!(template.occurrences(Placeholder::DataWidth), 2);
        assert_eq!(template.occurrences(Placeholder::IdWidth), 1);
        assert!(template.missing_placeholders().is_empty());

        let template = Template::from_contents("<LEN_WIDTH>");
        assert_eq!(
            template.missing_placeholders(),
            vec![
                Placeholder::AddrWidth,
                Placeholder::DataWidth,
                Placeholder::IdWidth
            ]
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Template::load(dir.path().join("missing.sv_TMPL")).unwrap_err();
        assert!(err.to_string().contains("failed to read template"));
    }
}
