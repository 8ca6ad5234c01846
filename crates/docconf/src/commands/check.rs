//! `docconf check` command implementation.

use clap::Args;
use docconf_nav::NavNode;

use crate::decl::site_decl;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending node and the violated rule if
    /// the navigation declaration is structurally invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let decl = site_decl();
        docconf_nav::validate(&decl.nav)?;

        if self.verbose {
            for section in &decl.nav {
                tracing::debug!(
                    section = %section.title,
                    entries = count_nodes(&section.children),
                    "section validated"
                );
            }
        }

        output.success(&format!(
            "Navigation declaration valid: {} sections, {} entries",
            decl.nav.len(),
            count_nodes(&decl.nav)
        ));
        Ok(())
    }
}

/// Count all nodes in the tree.
fn count_nodes(nodes: &[NavNode]) -> usize {
    nodes
        .iter()
        .map(|n| 1 + count_nodes(&n.children))
        .sum()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_count_nodes_counts_every_depth() {
        let nav = vec![
            NavNode::section(
                "A",
                vec![NavNode::directory("B", "/b").with_children(vec![NavNode::page("C", "/c")])],
            ),
            NavNode::page("D", "/d"),
        ];
        assert_eq!(count_nodes(&nav), 4);
    }
}
