use crate::api::{OptionHandle, OptionSpec};
use crate::parser::ConfigError;

/// The registered options, in registration order.
///
/// Registration order defines both the help display order and the match-search order.
#[derive(Debug, Default)]
pub(crate) struct OptionRegistry<'a> {
    options: Vec<OptionSpec<'a>>,
}

impl<'a> OptionRegistry<'a> {
    pub(crate) fn register(
        &mut self,
        spec: OptionSpec<'a>,
    ) -> Result<OptionHandle<'_, 'a>, ConfigError> {
        self.validate(&spec)?;
        self.options.push(spec);
        let spec = self
            .options
            .last_mut()
            .expect("internal error - must be able to access the registered option");
        Ok(OptionHandle::new(spec))
    }

    fn validate(&self, spec: &OptionSpec<'a>) -> Result<(), ConfigError> {
        if spec.short().is_none() && spec.long().is_none() {
            return Err(ConfigError(
                "option must have a short or a long form.".to_string(),
            ));
        }

        if let Some(short) = spec.short() {
            if short == '-' || short.is_whitespace() {
                return Err(ConfigError(format!("invalid short option '-{short}'.")));
            }

            if self.find_by_short(short).is_some() {
                return Err(ConfigError(format!(
                    "Cannot duplicate the option '-{short}'."
                )));
            }
        }

        if let Some(long) = spec.long() {
            if long.is_empty() || long.starts_with('-') || long.contains('=') {
                return Err(ConfigError(format!("invalid long option '--{long}'.")));
            }

            if self.options.iter().any(|o| o.long() == Some(long)) {
                return Err(ConfigError(format!(
                    "Cannot duplicate the option '--{long}'."
                )));
            }
        }

        if let Some(base) = spec.kind().base() {
            if base == 1 || base > 36 {
                return Err(ConfigError(format!(
                    "invalid numeric base {base} for option {spec:?}."
                )));
            }
        }

        Ok(())
    }

    pub(crate) fn find_by_short(&self, c: char) -> Option<&OptionSpec<'a>> {
        self.options.iter().find(|spec| spec.short() == Some(c))
    }

    /// Find the option whose long form is `text`, or prefixes `text` up to an `=`.
    /// Returns the option and the remainder of `text` (empty, or starting with `=`).
    pub(crate) fn find_by_long_prefix<'t>(
        &self,
        text: &'t str,
    ) -> Option<(&OptionSpec<'a>, &'t str)> {
        self.options.iter().find_map(|spec| {
            let remainder = text.strip_prefix(spec.long()?)?;

            if remainder.is_empty() || remainder.starts_with('=') {
                Some((spec, remainder))
            } else {
                None
            }
        })
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &OptionSpec<'a>> {
        self.options.iter()
    }
}
