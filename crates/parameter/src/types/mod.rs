/// Builder methods shared by every parameter type.
macro_rules! metadata_builders {
    ($ty:ty) => {
        impl $ty {
            /// Mark the parameter as required.
            #[must_use]
            pub fn required(mut self) -> Self {
                self.metadata.required = true;
                self
            }

            #[must_use]
            pub fn with_description(mut self, description: impl Into<String>) -> Self {
                self.metadata.description = Some(description.into());
                self
            }

            #[must_use]
            pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
                self.metadata.placeholder = Some(placeholder.into());
                self
            }

            #[must_use]
            pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
                self.metadata.hint = Some(hint.into());
                self
            }

            /// Add a rule set that must match for the parameter to be shown.
            #[must_use]
            pub fn show_when(mut self, rule: $crate::display::DisplayRuleSet) -> Self {
                self.display
                    .get_or_insert_with(Default::default)
                    .show_when
                    .push(rule);
                self
            }

            /// Add a rule set that hides the parameter when it matches.
            #[must_use]
            pub fn hide_when(mut self, rule: $crate::display::DisplayRuleSet) -> Self {
                self.display
                    .get_or_insert_with(Default::default)
                    .hide_when
                    .push(rule);
                self
            }
        }
    };
}

pub(crate) use metadata_builders;

mod checkbox;
mod datetime;
mod number;
mod secret;
mod select;
mod text;
mod textarea;

pub use checkbox::{CheckboxOptions, CheckboxParameter};
pub use datetime::{DateTimeOptions, DateTimeParameter};
pub use number::{NumberOptions, NumberParameter};
pub use secret::SecretParameter;
pub use select::{SelectOptions, SelectParameter};
pub use text::{TextOptions, TextParameter};
pub use textarea::{TextareaOptions, TextareaParameter};
