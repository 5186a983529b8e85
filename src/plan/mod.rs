use std::fs::canonicalize;
use std::path::{Path, PathBuf};

use anyhow::Context;
use derive_builder::Builder;
use log::info;

use crate::checks::{check_template, prepare_output_dir};
use crate::cli::progress::StepContext;
use crate::error::PreconditionError;
use crate::params::WidthDomains;
use crate::paths::out_params_pkg;
use crate::template::Template;
use crate::Result;

/// Inputs to a generation run, before any validation.
#[derive(Debug, Clone, Builder)]
pub struct GenerateConfig {
    #[builder(setter(into, strip_option), default)]
    pub template: Option<PathBuf>,
    #[builder(setter(into), default = "PathBuf::from(\".\")")]
    pub output_dir: PathBuf,
    #[builder(default)]
    pub domains: WidthDomains,
}

/// A validated run: the template is loaded and the output directory is writable.
pub struct GeneratePlan {
    pub template: Template,
    pub work_dir: PathBuf,
    pub domains: WidthDomains,
    pub created_work_dir: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TaskKey {
    GeneratePlan,
    GeneratePackages,
}

pub struct ExecutePlanParams<'a> {
    pub plan: &'a GeneratePlan,
    pub ctx: Option<&'a mut StepContext>,
}

pub fn generate_plan(config: &GenerateConfig) -> Result<GeneratePlan> {
    let template_path = config
        .template
        .as_deref()
        .ok_or(PreconditionError::MissingTemplate)?;
    check_template(template_path)?;
    // Read before the output directory is created.
    let template = Template::load(template_path)?;
    let created_work_dir = prepare_output_dir(&config.output_dir)?;

    let work_dir = canonicalize(&config.output_dir)
        .with_context(|| format!("failed to resolve {:?}", &config.output_dir))?;

    Ok(GeneratePlan {
        template,
        work_dir,
        domains: config.domains.clone(),
        created_work_dir,
    })
}

macro_rules! try_finish_task {
    ( $ctx:expr, $task:expr ) => {
        if let Some(ctx) = $ctx.as_mut() {
            ctx.finish($task);
        }
    };
}

/// Writes one package per combination, in enumeration order.
///
/// Stops at the first failed write; packages already written are left in place.
pub fn execute_plan(params: ExecutePlanParams) -> Result<Vec<PathBuf>> {
    let ExecutePlanParams { plan, mut ctx } = params;

    let total = plan.domains.len();
    let mut written = Vec::with_capacity(total);

    for (i, combination) in plan.domains.combinations().enumerate() {
        let path = out_params_pkg(&plan.work_dir, &combination);
        write_package(&path, &plan.template.render(&combination))?;
        info!("wrote {path:?} ({combination})");

        if let Some(ctx) = ctx.as_mut() {
            ctx.progress(i + 1, total);
        }
        written.push(path);
    }

    info!(
        "generated {} parameter packages in {:?}",
        written.len(),
        &plan.work_dir
    );
    try_finish_task!(ctx, TaskKey::GeneratePackages);

    Ok(written)
}

fn write_package(path: &Path, contents: &[u8]) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("failed to write {path:?}"))?;
    Ok(())
}
