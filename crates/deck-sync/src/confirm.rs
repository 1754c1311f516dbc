/// Blocking yes/no gate consulted before destructive requests.
pub trait Confirm {
    /// Return `true` to proceed.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Confirms everything. For non-interactive callers that already asked.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
