use crate::core::config::SyncLayout;
use crate::core::error::SyncResult;
use crate::core::plan::SyncPlan;
use crate::ui::output;
use std::path::Path;

/// Propagate `version` into every artifact under `root`
///
/// Nothing is written unless all three artifacts load and update cleanly.
/// One confirmation line is printed after each file is written.
pub fn run_sync(root: &Path, version: &str) -> SyncResult<SyncPlan> {
  let layout = SyncLayout::new(root);
  let plan = SyncPlan::stage(&layout, version)?;

  if plan.spec_labels() == 0 {
    output::warn_no_version_label(&layout.spec_doc_path());
  }

  plan.commit(|edit| output::print_updated(edit.artifact, plan.version()))?;

  Ok(plan)
}
