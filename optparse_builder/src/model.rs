/// Whether an option takes an argument.
///
/// `Optional` only applies to the long form of an option (`--name` vs. `--name=value`).
/// The short form always reads its argument from the next token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgRequirement {
    /// A flag: the option never takes an argument.
    None,
    /// The option must be given an argument.
    Required,
    /// The long form may omit the argument.
    Optional,
}

impl ArgRequirement {
    /// Whether the option accepts an argument at all.
    pub fn takes_argument(&self) -> bool {
        !matches!(self, ArgRequirement::None)
    }
}

impl std::fmt::Display for ArgRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ArgRequirement::None, false)]
    #[case(ArgRequirement::Required, true)]
    #[case(ArgRequirement::Optional, true)]
    fn takes_argument(#[case] requirement: ArgRequirement, #[case] expected: bool) {
        assert_eq!(requirement.takes_argument(), expected);
    }
}
