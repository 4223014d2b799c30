use serde::{Deserialize, Serialize};

/// A git lifecycle point at which the hook runner may invoke a hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Commit,
    MergeCommit,
    Push,
    PrepareCommitMsg,
    CommitMsg,
    PostCheckout,
    PostCommit,
    PostMerge,
    PostRewrite,
    Manual,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(stage: Stage) -> String {
        serde_yaml::to_string(&stage).unwrap().trim().to_string()
    }

    #[test]
    fn serializes_as_hook_runner_identifiers() {
        assert_eq!(yaml(Stage::Commit), "commit");
        assert_eq!(yaml(Stage::MergeCommit), "merge-commit");
        assert_eq!(yaml(Stage::Push), "push");
        assert_eq!(yaml(Stage::PrepareCommitMsg), "prepare-commit-msg");
        assert_eq!(yaml(Stage::CommitMsg), "commit-msg");
        assert_eq!(yaml(Stage::PostCheckout), "post-checkout");
        assert_eq!(yaml(Stage::PostCommit), "post-commit");
        assert_eq!(yaml(Stage::PostMerge), "post-merge");
        assert_eq!(yaml(Stage::PostRewrite), "post-rewrite");
        assert_eq!(yaml(Stage::Manual), "manual");
    }

    #[test]
    fn deserializes_list_of_stages() {
        let stages: Vec<Stage> = serde_yaml::from_str("[commit, push, manual]").unwrap();
        assert_eq!(stages, vec![Stage::Commit, Stage::Push, Stage::Manual]);
    }

    #[test]
    fn rejects_unknown_stage() {
        assert!(serde_yaml::from_str::<Stage>("pre-rebase").is_err());
    }
}
