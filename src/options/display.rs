use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Initial values of the `show*` toggles declared at the top of the scene
/// file. Each entity section is wrapped in `#if (showX)`, so these can also
/// be flipped by hand in the emitted file.
pub struct DisplayOptions {
    /// Initial value of `showAtoms`.
    #[schemars(title = "Show Atoms")]
    pub show_atoms: bool,
    /// Initial value of `showBonds`.
    #[schemars(title = "Show Bonds")]
    pub show_bonds: bool,
    /// Initial value of `showPolymers`.
    #[schemars(title = "Show Polymers")]
    pub show_polymers: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_atoms: true,
            show_bonds: true,
            show_polymers: true,
        }
    }
}
