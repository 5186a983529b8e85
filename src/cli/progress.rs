use std::fmt::Display;
use std::time::Duration;

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::plan::TaskKey;
use crate::Result;

#[derive(PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Pending,
    InProgress,
    Skipped,
    Failed,
}

pub struct StepContext {
    step_num: usize,
    steps: Vec<Step>,
    quiet: bool,
}

pub struct Step {
    desc: String,
    key: TaskKey,
    progress_bar: ProgressBar,
}

impl StepContext {
    pub fn new(quiet: bool) -> Self {
        if !quiet {
            println!("Tasks:");
        }

        let mut steps = vec![
            Step {
                desc: "Validate inputs".to_string(),
                key: TaskKey::GeneratePlan,
                progress_bar: ProgressBar::new_spinner(),
            },
            Step {
                desc: "Generate packages".to_string(),
                key: TaskKey::GeneratePackages,
                progress_bar: ProgressBar::new_spinner(),
            },
        ];
        let mp = if quiet {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        } else {
            MultiProgress::new()
        };
        let num_steps = steps.len();
        let width = format!("{num_steps}").len();
        for (i, step) in steps.iter_mut().enumerate() {
            step.progress_bar = mp.add(step.progress_bar.clone());
            let msg = format!("[{:width$}/{:width$}] {}", i + 1, num_steps, step.desc);
            step.desc = msg.clone();
            step.set_status(StepStatus::Pending, Some(msg));
        }
        if let Some(first) = steps.first_mut() {
            first.set_status(StepStatus::InProgress, None);
        }
        StepContext {
            step_num: 0,
            steps,
            quiet,
        }
    }

    pub fn advance(&mut self) {
        self.step_num += 1;
    }

    #[inline]
    pub fn current_step(&mut self) -> Option<&mut Step> {
        self.steps.get_mut(self.step_num)
    }

    pub fn check<T>(&mut self, res: Result<T>) -> Result<T> {
        if res.is_err() {
            if let Some(current_step) = self.current_step() {
                current_step.set_status(StepStatus::Failed, None);
                self.advance();
                while let Some(current_step) = self.current_step() {
                    current_step.set_status(StepStatus::Skipped, None);
                    self.advance();
                }
            }
            if !self.quiet {
                println!("\n");
            }
        }

        res
    }

    /// Reports that `done` of `total` packages have been written.
    pub fn progress(&mut self, done: usize, total: usize) {
        if let Some(current_step) = self.current_step() {
            let msg = format!("{} ({done}/{total})", current_step.desc);
            current_step.progress_bar.set_message(msg);
        }
    }

    pub fn finish(&mut self, key: TaskKey) {
        if let Some(current_step) = self.current_step() {
            if current_step.key != key {
                panic!("A step was completed out of order");
            }

            current_step.set_status(StepStatus::Done, None);

            self.advance();

            if let Some(current_step) = self.current_step() {
                current_step.set_status(StepStatus::InProgress, None);
            } else {
                self.done();
            }
        } else {
            panic!("A step was completed after all steps were marked completed");
        }
    }

    pub fn done(&mut self) {
        if !self.quiet {
            println!("\n\nCompleted all tasks");
        }
    }
}

fn format_template(spinner: bool, status: impl Display) -> String {
    if spinner {
        format!("{{spinner:.green}} {status:16} {{msg}}")
    } else {
        format!("  {status:16} {{msg}}")
    }
}

impl Step {
    fn set_status(&mut self, status: StepStatus, msg: Option<String>) {
        let status_template = match status {
            StepStatus::Done => format_template(false, "Done".green().bold()),
            StepStatus::Failed => format_template(false, "Failed".bright_white().on_red().bold()),
            StepStatus::InProgress => format_template(true, "In Progress".bright_white().bold()),
            StepStatus::Pending => format_template(true, "Pending".blue().bold()),
            StepStatus::Skipped => format_template(false, "Skipped".yellow().bold()),
        };
        // Templates are built from fixed strings above.
        if let Ok(style) = ProgressStyle::with_template(&status_template) {
            self.progress_bar.set_style(style);
        }

        if let Some(msg) = msg {
            self.progress_bar.set_message(msg);
        }

        if status == StepStatus::InProgress {
            self.progress_bar.enable_steady_tick(Duration::from_millis(200));
        } else if status != StepStatus::Pending {
            self.progress_bar.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn test_steps_complete_in_order() {
        let mut ctx = StepContext::new(true);
        ctx.finish(TaskKey::GeneratePlan);
        ctx.progress(1, 2);
        ctx.finish(TaskKey::GeneratePackages);
        assert!(ctx.current_step().is_none());
    }

    #[test]
    #[should_panic(expected = "out of order")]
    fn test_out_of_order_step_panics() {
        let mut ctx = StepContext::new(true);
        ctx.finish(TaskKey::GeneratePackages);
    }

    #[test]
    fn test_failure_skips_remaining_steps() {
        let mut ctx = StepContext::new(true);
        let res: Result<()> = ctx.check(Err(anyhow!("boom")));
        assert!(res.is_err());
        assert!(ctx.current_step().is_none());
    }
}
