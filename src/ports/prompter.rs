use crate::VehicleError;

/// Source of user choices for the console session.
pub trait Prompter {
    /// Asks the user to pick one or more of `choices`.
    ///
    /// Implementations must not return an empty selection; every returned
    /// entry is one of `choices`, in the order the user gave them.
    fn multi_select(
        &mut self,
        title: &str,
        choices: &[String],
        page_size: usize,
    ) -> Result<Vec<String>, VehicleError>;
}
