use std::path::{Path, PathBuf};

use crate::params::Combination;

pub const PARAMS_PKG_PREFIX: &str = "params_pkg";
pub const PARAMS_PKG_EXT: &str = "sv";

pub fn params_pkg_name(combination: &Combination) -> String {
    format!(
        "{PARAMS_PKG_PREFIX}_id-{}_addr-{}_data-{}_len-{}.{PARAMS_PKG_EXT}",
        combination.id_width,
        combination.addr_width,
        combination.data_width,
        combination.len_width
    )
}

pub fn out_params_pkg(work_dir: impl AsRef<Path>, combination: &Combination) -> PathBuf {
    PathBuf::from(work_dir.as_ref()).join(params_pkg_name(combination))
}

/// Recovers the combination encoded in a file name produced by [`params_pkg_name`].
///
/// Returns `None` for anything that is not a generated package name.
pub fn parse_params_pkg_name(name: &str) -> Option<Combination> {
    let stem = name
        .strip_prefix(PARAMS_PKG_PREFIX)?
        .strip_prefix('_')?
        .strip_suffix(PARAMS_PKG_EXT)?
        .strip_suffix('.')?;

    let mut fields = stem.split('_');
    let id_width = tagged_field(fields.next()?, "id")?;
    let addr_width = tagged_field(fields.next()?, "addr")?;
    let data_width = tagged_field(fields.next()?, "data")?;
    let len_width = tagged_field(fields.next()?, "len")?;
    if fields.next().is_some() {
        return None;
    }

    Some(Combination::new(addr_width, data_width, len_width, id_width))
}

fn tagged_field(field: &str, tag: &str) -> Option<u32> {
    let digits = field.strip_prefix(tag)?.strip_prefix('-')?;
    let value: u32 = digits.parse().ok()?;
    // Names never carry padding or signs.
    if value.to_string() != digits {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::WidthDomains;

    #[test]
    fn test_params_pkg_name() {
        assert_eq!(
            params_pkg_name(&Combination::new(32, 1024, 8, 5)),
            "params_pkg_id-5_addr-32_data-1024_len-8.sv"
        );
        assert_eq!(
            out_params_pkg("/tmp/out", &Combination::new(64, 8, 4, 4)),
            PathBuf::from("/tmp/out/params_pkg_id-4_addr-64_data-8_len-4.sv")
        );
    }

    #[test]
    fn test_names_decode_to_their_combination() {
        for combination in WidthDomains::default().combinations() {
            let name = params_pkg_name(&combination);
            assert_eq!(parse_params_pkg_name(&name), Some(combination));
        }
    }

    #[test]
    fn test_parse_rejects_foreign_names() {
        for name in [
            "params_pkg.sv",
            "params_pkg_id-4_addr-32_data-8.sv",
            "params_pkg_id-4_addr-32_data-8_len-4.v",
            "params_pkg_id-4_addr-32_data-8_len-4_x-1.sv",
            "params_pkg_addr-32_id-4_data-8_len-4.sv",
            "params_pkg_id-04_addr-32_data-8_len-4.sv",
            "params_pkg_id-+4_addr-32_data-8_len-4.sv",
            "other_id-4_addr-32_data-8_len-4.sv",
        ] {
            assert_eq!(parse_params_pkg_name(name), None, "{name}");
        }
    }
}
