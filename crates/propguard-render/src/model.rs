#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdictStatus {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableVerdict {
    pub filename: String,
    /// Change label (`c-update`), when the proposal could be classified.
    pub label: Option<String>,
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableExemption {
    pub filename: String,
    pub path: String,
    pub exemption: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub status: RenderableVerdictStatus,
    pub profile: String,
    pub verdicts: Vec<RenderableVerdict>,
    pub exemptions: Vec<RenderableExemption>,
    pub runtime_error: Option<String>,
}
