use std::path::{Path, PathBuf};

use crate::params::WidthDomains;
use crate::plan::{execute_plan, generate_plan, ExecutePlanParams, GenerateConfigBuilder};
use crate::Result;


pub(crate) const PARAMS_PKG_TMPL: &str = "package params_pkg;
  parameter int ADDR_WIDTH = <ADDR_WIDTH>;
  parameter int DATA_WIDTH = <DATA_WIDTH>;
  parameter int LEN_WIDTH  = <LEN_WIDTH>;
  parameter int ID_WIDTH   = <ID_WIDTH>;
endpackage : params_pkg
";

pub(crate) fn write_template(dir: &Path, contents: &str) -> Result<PathBuf> {
    write_template_bytes(dir, contents.as_bytes())
}

pub(crate) fn write_template_bytes(dir: &Path, contents: &[u8]) -> Result<PathBuf> {
    let path = dir.join("params_pkg.sv_TMPL");
    std::fs::write(&path, contents)?;
    Ok(path)
}

pub(crate) fn generate_test(
    template: &Path,
    output_dir: &Path,
    domains: WidthDomains,
) -> Result<Vec<PathBuf>> {
    let config = GenerateConfigBuilder::default()
        .template(template)
        .output_dir(output_dir)
        .domains(domains)
        .build()?;
    let plan = generate_plan(&config)?;
    execute_plan(ExecutePlanParams {
        plan: &plan,
        ctx: None,
    })
}
