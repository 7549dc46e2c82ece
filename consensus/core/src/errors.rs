use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsensusError {
    #[error("Invalid difficulty target")]
    InvalidDifficultyTarget,

    #[error("Invalid proof of work")]
    InvalidProofOfWork,

    #[error("Ancestor at height {0} missing from the active chain")]
    MissingAncestor(u64),
}
